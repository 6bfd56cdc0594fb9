pub mod lot;
pub mod vehicle;

pub use lot::{ParkingLot, Slot, SlotStatus};
pub use vehicle::Vehicle;
