//! Core domain layer for carpark.
//!
//! This module contains pure business logic with no I/O and no global state.
//! The application layer decides whether a lot exists at all; everything
//! here operates on a created [`ParkingLot`].
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: Rendering and input belong to the CLI
//! - **Immutable vehicles**: A [`Vehicle`] is replaced, never edited
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{ParkingLot, Slot, SlotStatus, Vehicle};

pub use error::{ErrorCategory, LotError};

pub use value_objects::{Parity, SlotNumber, VehicleTypes, eq_folded};
