//! Successful results of lot commands, and how they read as text.

use serde::Serialize;

use carpark_core::prelude::{Created, Parity, SlotNumber, SlotStatus};

/// Header of the status table.
pub const STATUS_HEADER: &str = "Slot No.    Type           Registration No    Colour";

/// What a lot command produced.
///
/// Serialised with a `reply` tag for `--output-format json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reply", rename_all = "snake_case")]
pub enum Reply {
    Created {
        capacity: usize,
        discarded: usize,
    },
    Parked {
        slot: SlotNumber,
    },
    Left {
        slot: SlotNumber,
    },
    Status {
        slots: Vec<SlotStatus>,
    },
    Count {
        #[serde(rename = "type")]
        kind: String,
        count: usize,
    },
    Plates {
        parity: Parity,
        registrations: Vec<String>,
    },
    Registrations {
        colour: String,
        registrations: Vec<String>,
    },
    Slots {
        colour: String,
        slots: Vec<SlotNumber>,
    },
    Slot {
        registration: String,
        slot: SlotNumber,
    },
}

impl From<Created> for Reply {
    fn from(created: Created) -> Self {
        Self::Created {
            capacity: created.capacity,
            discarded: created.discarded,
        }
    }
}

/// One status table row, padded like the header.
pub fn status_row(row: &SlotStatus) -> String {
    format!(
        "{:<12}{:<15}{:<19}{}",
        row.slot, row.kind, row.registration, row.colour
    )
}

/// Comma-separated list, empty string for no items.
pub fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_row_aligns_with_header() {
        let row = SlotStatus {
            slot: SlotNumber::from_index(0),
            kind: "Mobil".into(),
            registration: "B-1234-XYZ".into(),
            colour: "Putih".into(),
        };
        let line = status_row(&row);
        assert_eq!(line, "1           Mobil          B-1234-XYZ         Putih");
        assert_eq!(line.find("Mobil"), STATUS_HEADER.find("Type"));
        assert_eq!(
            line.find("B-1234-XYZ"),
            STATUS_HEADER.find("Registration No")
        );
        assert_eq!(line.find("Putih"), STATUS_HEADER.find("Colour"));
    }

    #[test]
    fn join_uses_comma_space() {
        assert_eq!(join(&["A-1", "A-2"]), "A-1, A-2");
        assert_eq!(join::<String>(&[]), "");
        assert_eq!(
            join(&[SlotNumber::from_index(0), SlotNumber::from_index(3)]),
            "1, 4"
        );
    }

    #[test]
    fn replies_serialise_with_tag() {
        let json = serde_json::to_value(Reply::Parked {
            slot: SlotNumber::from_index(2),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"reply": "parked", "slot": 3}));

        let json = serde_json::to_value(Reply::Plates {
            parity: Parity::Odd,
            registrations: vec!["B-1-A".into()],
        })
        .unwrap();
        assert_eq!(json["parity"], "odd");
        assert_eq!(json["registrations"][0], "B-1-A");
    }
}
