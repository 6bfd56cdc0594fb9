//! Application layer for carpark.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (LotService)
//!
//! The application layer decides whether a lot exists and which vehicle
//! types it admits. Slot rules live in `crate::domain`.

pub mod services;

// Re-export main services
pub use services::{Created, LotService};
