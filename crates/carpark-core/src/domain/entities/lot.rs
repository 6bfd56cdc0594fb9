//! The parking lot: a fixed run of slots with first-fit allocation.

use std::num::NonZeroUsize;

use serde::Serialize;

use crate::domain::{
    entities::vehicle::Vehicle,
    error::LotError,
    value_objects::{Parity, SlotNumber, eq_folded},
};

/// One position in the lot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(Vehicle),
}

impl Slot {
    pub fn vehicle(&self) -> Option<&Vehicle> {
        match self {
            Self::Empty => None,
            Self::Occupied(v) => Some(v),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// One row of the status report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotStatus {
    pub slot: SlotNumber,
    #[serde(rename = "type")]
    pub kind: String,
    pub registration: String,
    pub colour: String,
}

/// A created lot.
///
/// Capacity is fixed at construction and never zero. Each slot holds at most
/// one vehicle; registration numbers are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingLot {
    slots: Vec<Slot>,
}

impl ParkingLot {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            slots: vec![Slot::Empty; capacity.get()],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    pub fn slot(&self, slot: SlotNumber) -> Option<&Slot> {
        self.slots.get(slot.index())
    }

    /// Put `vehicle` in the lowest-numbered empty slot.
    pub fn park(&mut self, vehicle: Vehicle) -> Result<SlotNumber, LotError> {
        let index = self
            .slots
            .iter()
            .position(Slot::is_empty)
            .ok_or(LotError::Full)?;
        self.slots[index] = Slot::Occupied(vehicle);
        Ok(SlotNumber::from_index(index))
    }

    /// Empty the slot numbered `slot` (1-based), returning the slot and the
    /// vehicle that left.
    ///
    /// Any number outside `1..=capacity`, negatives included, is
    /// [`LotError::OutOfRange`].
    pub fn leave(&mut self, slot: i64) -> Result<(SlotNumber, Vehicle), LotError> {
        let capacity = self.capacity();
        let number = usize::try_from(slot)
            .ok()
            .filter(|n| (1..=capacity).contains(n))
            .ok_or(LotError::OutOfRange { slot, capacity })?;
        let index = number - 1;
        match std::mem::take(&mut self.slots[index]) {
            Slot::Occupied(vehicle) => Ok((SlotNumber::from_index(index), vehicle)),
            Slot::Empty => Err(LotError::AlreadyEmpty { slot: number }),
        }
    }

    /// Occupied slots in ascending order.
    pub fn occupants(&self) -> impl Iterator<Item = (SlotNumber, &Vehicle)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.vehicle().map(|v| (SlotNumber::from_index(i), v)))
    }

    pub fn status(&self) -> Vec<SlotStatus> {
        self.occupants()
            .map(|(slot, v)| SlotStatus {
                slot,
                kind: v.kind().to_owned(),
                registration: v.registration().to_owned(),
                colour: v.colour().to_owned(),
            })
            .collect()
    }

    pub fn count_by_type(&self, kind: &str) -> usize {
        self.occupants()
            .filter(|(_, v)| eq_folded(v.kind(), kind))
            .count()
    }

    pub fn plates_with_parity(&self, parity: Parity) -> Vec<String> {
        self.occupants()
            .filter(|(_, v)| Parity::of_plate(v.registration()) == parity)
            .map(|(_, v)| v.registration().to_owned())
            .collect()
    }

    pub fn registrations_by_colour(&self, colour: &str) -> Vec<String> {
        self.occupants()
            .filter(|(_, v)| eq_folded(v.colour(), colour))
            .map(|(_, v)| v.registration().to_owned())
            .collect()
    }

    pub fn slots_by_colour(&self, colour: &str) -> Vec<SlotNumber> {
        self.occupants()
            .filter(|(_, v)| eq_folded(v.colour(), colour))
            .map(|(slot, _)| slot)
            .collect()
    }

    /// First slot (lowest number) holding `registration`, compared
    /// case-insensitively.
    pub fn slot_for_registration(&self, registration: &str) -> Result<SlotNumber, LotError> {
        self.occupants()
            .find(|(_, v)| eq_folded(v.registration(), registration))
            .map(|(slot, _)| slot)
            .ok_or_else(|| LotError::NotFound {
                registration: registration.to_owned(),
            })
    }
}
