//! Domain value objects: SlotNumber, Parity, VehicleTypes.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. String
//! comparisons go through [`eq_folded`] so that colour, type and registration
//! matching share one case-folding rule.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::LotError;

/// Case-insensitive equality using Unicode lowercase folding, char by char.
///
/// Locale independent: `"I"` and `"i"` always compare equal.
pub fn eq_folded(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

// ── SlotNumber ───────────────────────────────────────────────────────────────

/// A 1-based slot number, as shown to users.
///
/// Internally slots are indexed from 0; convert with [`SlotNumber::from_index`]
/// and [`SlotNumber::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotNumber(usize);

impl SlotNumber {
    pub const fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// The 1-based number.
    pub const fn get(self) -> usize {
        self.0
    }

    /// The 0-based index into the slot vector.
    pub const fn index(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for SlotNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ── Parity ───────────────────────────────────────────────────────────────────

/// Odd/even classification of a registration plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    /// Classify a registration number by its last ASCII decimal digit.
    ///
    /// A plate with no digits at all is classified as [`Parity::Even`].
    pub fn of_plate(registration: &str) -> Self {
        match last_digit(registration) {
            Some(d) if d % 2 == 1 => Self::Odd,
            _ => Self::Even,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Odd => "odd",
            Self::Even => "even",
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn last_digit(registration: &str) -> Option<u32> {
    registration.chars().filter_map(|c| c.to_digit(10)).last()
}

// ── VehicleTypes ─────────────────────────────────────────────────────────────

/// The set of vehicle categories the lot admits.
///
/// Never empty. Names keep their configured spelling for display; matching is
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleTypes(Vec<String>);

impl VehicleTypes {
    /// Build a type set from configured names.
    ///
    /// Blank names are dropped and case-insensitive duplicates collapse onto
    /// the first spelling. Returns `None` if nothing usable remains.
    pub fn new<I, S>(names: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut types: Vec<String> = Vec::new();
        for name in names {
            let name = name.into().trim().to_owned();
            if name.is_empty() || types.iter().any(|t| eq_folded(t, &name)) {
                continue;
            }
            types.push(name);
        }
        (!types.is_empty()).then_some(Self(types))
    }

    /// `Ok` if `kind` names one of the allowed types.
    pub fn check(&self, kind: &str) -> Result<(), LotError> {
        if self.contains(kind) {
            Ok(())
        } else {
            Err(LotError::InvalidType {
                kind: kind.to_owned(),
                allowed: self.0.clone(),
            })
        }
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.0.iter().any(|t| eq_folded(t, kind))
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl Default for VehicleTypes {
    fn default() -> Self {
        Self(vec!["Mobil".into(), "Motor".into()])
    }
}

impl fmt::Display for VehicleTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folding_ignores_case() {
        assert!(eq_folded("White", "wHITE"));
        assert!(eq_folded("ÉTÉ", "été"));
        assert!(!eq_folded("White", "Whit"));
    }

    #[test]
    fn slot_number_round_trips_index() {
        let slot = SlotNumber::from_index(0);
        assert_eq!(slot.get(), 1);
        assert_eq!(slot.index(), 0);
        assert_eq!(slot.to_string(), "1");
        assert_eq!(format!("{slot:<4}|"), "1   |");
    }

    #[test]
    fn parity_uses_last_digit() {
        assert_eq!(Parity::of_plate("B-1234-XYZ"), Parity::Even);
        assert_eq!(Parity::of_plate("B-1235-XYZ"), Parity::Odd);
        assert_eq!(Parity::of_plate("9-ABC-2"), Parity::Even);
        assert_eq!(Parity::of_plate("2-ABC-9"), Parity::Odd);
    }

    #[test]
    fn plate_without_digits_is_even() {
        assert_eq!(Parity::of_plate("NO-DIGITS"), Parity::Even);
        assert_eq!(Parity::of_plate(""), Parity::Even);
    }

    #[test]
    fn default_types_are_mobil_and_motor() {
        let types = VehicleTypes::default();
        assert!(types.contains("mobil"));
        assert!(types.contains("MOTOR"));
        assert!(!types.contains("Truk"));
    }

    #[test]
    fn types_drop_blanks_and_duplicates() {
        let types = VehicleTypes::new(["Bus", " ", "bus", "Truk"]).unwrap();
        assert_eq!(types.names(), ["Bus", "Truk"]);
        assert!(VehicleTypes::new(["", "  "]).is_none());
    }

    #[test]
    fn check_reports_allowed_types() {
        let err = VehicleTypes::default().check("Sepeda").unwrap_err();
        assert!(matches!(err, LotError::InvalidType { ref allowed, .. } if allowed.len() == 2));
    }
}
