//! Carpark Core - slot allocation and query engine
//!
//! This crate provides the domain and application layers for the carpark
//! tool. The CLI crate parses commands and renders replies; everything with
//! an invariant lives here.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           carpark-cli (CLI)             │
//! │   (REPL, command parsing, rendering)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Service             │
//! │              (LotService)               │
//! │  Owns the optional lot + type policy    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ParkingLot, Slot, Vehicle, Parity)    │
//! │         No I/O, no globals              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::num::NonZeroUsize;
//!
//! use carpark_core::prelude::*;
//!
//! let mut lot = LotService::new(VehicleTypes::default());
//! lot.create(NonZeroUsize::new(2).unwrap());
//!
//! let slot = lot.park("KA-01-AB-2211", "White", "Mobil").unwrap();
//! assert_eq!(slot.get(), 1);
//! assert_eq!(lot.slot_for_registration("ka-01-ab-2211").unwrap(), slot);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{Created, LotService};
    pub use crate::domain::{
        LotError, Parity, ParkingLot, Slot, SlotNumber, SlotStatus, Vehicle, VehicleTypes,
    };
    pub use crate::error::{CarparkError, CarparkResult, ErrorCategory};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
