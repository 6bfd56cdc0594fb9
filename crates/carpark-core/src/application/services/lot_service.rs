//! Lot Service - the entry point the command dispatcher talks to.
//!
//! Owns the lot (absent until [`LotService::create`] runs) and the vehicle
//! type policy. Every operation on a lot that does not exist yet fails with
//! [`LotError::NotCreated`], queries included.

use std::num::NonZeroUsize;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    domain::{LotError, Parity, ParkingLot, SlotNumber, SlotStatus, Vehicle, VehicleTypes},
    error::{CarparkError, CarparkResult},
};

/// Outcome of [`LotService::create`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Created {
    pub capacity: usize,
    /// Vehicles dropped because a previous lot was replaced.
    pub discarded: usize,
}

/// Main parking lot service.
#[derive(Debug, Clone)]
pub struct LotService {
    lot: Option<ParkingLot>,
    types: VehicleTypes,
}

impl LotService {
    /// Create a service with no lot yet.
    pub fn new(types: VehicleTypes) -> Self {
        Self { lot: None, types }
    }

    /// Create a service from configured type names.
    ///
    /// Fails if no usable name is given.
    pub fn from_type_names<I, S>(names: I) -> CarparkResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let types = VehicleTypes::new(names).ok_or_else(|| CarparkError::Configuration {
            message: "at least one vehicle type must be configured".into(),
        })?;
        Ok(Self::new(types))
    }

    pub fn vehicle_types(&self) -> &VehicleTypes {
        &self.types
    }

    pub fn is_created(&self) -> bool {
        self.lot.is_some()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.lot.as_ref().map(ParkingLot::capacity)
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> CarparkResult<usize> {
        Ok(self.lot()?.occupied())
    }

    /// Allocate a fresh lot of `capacity` empty slots.
    ///
    /// Replaces any existing lot; its vehicles are discarded and counted in
    /// the returned [`Created`].
    #[instrument(skip(self), fields(capacity = capacity.get()))]
    pub fn create(&mut self, capacity: NonZeroUsize) -> Created {
        let discarded = self.lot.as_ref().map_or(0, ParkingLot::occupied);
        if self.lot.is_some() {
            warn!(discarded, "Replacing existing parking lot");
        }

        self.lot = Some(ParkingLot::new(capacity));
        info!("Parking lot created");

        Created {
            capacity: capacity.get(),
            discarded,
        }
    }

    /// Park a vehicle in the lowest-numbered free slot.
    #[instrument(skip(self))]
    pub fn park(
        &mut self,
        registration: &str,
        colour: &str,
        kind: &str,
    ) -> CarparkResult<SlotNumber> {
        let types = &self.types;
        let lot = self.lot.as_mut().ok_or(LotError::NotCreated)?;
        types.check(kind)?;

        let slot = lot.park(Vehicle::new(registration, colour, kind))?;
        info!(slot = slot.get(), "Vehicle parked");
        Ok(slot)
    }

    /// Free the slot numbered `slot` (1-based).
    #[instrument(skip(self))]
    pub fn leave(&mut self, slot: i64) -> CarparkResult<SlotNumber> {
        let lot = self.lot.as_mut().ok_or(LotError::NotCreated)?;
        let (freed, vehicle) = lot.leave(slot)?;
        info!(registration = vehicle.registration(), "Vehicle left");
        Ok(freed)
    }

    /// Occupied slots in ascending order. Empty means the lot is empty.
    pub fn status(&self) -> CarparkResult<Vec<SlotStatus>> {
        Ok(self.lot()?.status())
    }

    pub fn count_by_type(&self, kind: &str) -> CarparkResult<usize> {
        Ok(self.lot()?.count_by_type(kind))
    }

    pub fn plates_with_parity(&self, parity: Parity) -> CarparkResult<Vec<String>> {
        Ok(self.lot()?.plates_with_parity(parity))
    }

    pub fn registrations_by_colour(&self, colour: &str) -> CarparkResult<Vec<String>> {
        Ok(self.lot()?.registrations_by_colour(colour))
    }

    pub fn slots_by_colour(&self, colour: &str) -> CarparkResult<Vec<SlotNumber>> {
        Ok(self.lot()?.slots_by_colour(colour))
    }

    pub fn slot_for_registration(&self, registration: &str) -> CarparkResult<SlotNumber> {
        let lot = self.lot()?;
        let slot = lot.slot_for_registration(registration)?;
        debug!(registration, slot = slot.get(), "Registration located");
        Ok(slot)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn lot(&self) -> Result<&ParkingLot, LotError> {
        self.lot.as_ref().ok_or(LotError::NotCreated)
    }
}

impl Default for LotService {
    fn default() -> Self {
        Self::new(VehicleTypes::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn created(capacity: usize) -> LotService {
        let mut service = LotService::default();
        service.create(NonZeroUsize::new(capacity).unwrap());
        service
    }

    #[test]
    fn queries_before_create_report_not_created() {
        let service = LotService::default();
        let not_created = CarparkError::Lot(LotError::NotCreated);

        assert_eq!(service.status(), Err(not_created.clone()));
        assert_eq!(service.count_by_type("Mobil"), Err(not_created.clone()));
        assert_eq!(
            service.plates_with_parity(Parity::Odd),
            Err(not_created.clone())
        );
        assert_eq!(
            service.registrations_by_colour("Red"),
            Err(not_created.clone())
        );
        assert_eq!(service.slots_by_colour("Red"), Err(not_created.clone()));
        assert_eq!(service.slot_for_registration("A-1"), Err(not_created));
        assert!(!service.is_created());
        assert_eq!(service.capacity(), None);
    }

    #[test]
    fn writes_before_create_report_not_created() {
        let mut service = LotService::default();
        assert_eq!(
            service.park("A-1", "Red", "Mobil"),
            Err(LotError::NotCreated.into())
        );
        assert_eq!(service.leave(1), Err(LotError::NotCreated.into()));
    }

    #[test]
    fn not_created_wins_over_invalid_type() {
        let mut service = LotService::default();
        assert_eq!(
            service.park("A-1", "Red", "Truk"),
            Err(LotError::NotCreated.into())
        );
    }

    #[test]
    fn invalid_type_leaves_lot_untouched() {
        let mut service = created(2);
        let err = service.park("A-1", "Red", "Sepeda").unwrap_err();
        assert!(matches!(err, CarparkError::Lot(LotError::InvalidType { .. })));
        assert_eq!(service.occupied().unwrap(), 0);
    }

    #[test]
    fn recreate_discards_vehicles() {
        let mut service = created(2);
        service.park("A-1", "Red", "Mobil").unwrap();
        service.park("A-2", "Red", "Motor").unwrap();

        let outcome = service.create(NonZeroUsize::new(5).unwrap());
        assert_eq!(
            outcome,
            Created {
                capacity: 5,
                discarded: 2
            }
        );
        assert_eq!(service.capacity(), Some(5));
        assert!(service.status().unwrap().is_empty());
    }

    #[test]
    fn leave_reports_freed_slot() {
        let mut service = created(3);
        service.park("A-1", "Red", "Mobil").unwrap();
        service.park("A-2", "Red", "Mobil").unwrap();
        assert_eq!(service.leave(2).unwrap().get(), 2);
        assert_eq!(
            service.leave(2),
            Err(LotError::AlreadyEmpty { slot: 2 }.into())
        );
    }

    #[test]
    fn configured_types_replace_defaults() {
        let mut service = LotService::from_type_names(["Bus", "Truk"]).unwrap();
        service.create(NonZeroUsize::new(2).unwrap());
        assert!(service.park("A-1", "Red", "bus").is_ok());
        assert!(service.park("A-2", "Red", "Mobil").is_err());
    }

    #[test]
    fn empty_type_list_is_configuration_error() {
        let err = LotService::from_type_names(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, CarparkError::Configuration { .. }));
    }
}
