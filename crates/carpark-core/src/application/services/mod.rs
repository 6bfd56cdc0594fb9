//! Application services.

mod lot_service;

pub use lot_service::{Created, LotService};
