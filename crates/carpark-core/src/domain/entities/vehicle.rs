use serde::Serialize;

/// A parked vehicle.
///
/// Created on park, dropped on leave, never mutated in between. `kind` keeps
/// the caller's spelling (`"MOTOR"` stays `"MOTOR"`); comparisons elsewhere
/// fold case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    registration: String,
    colour: String,
    #[serde(rename = "type")]
    kind: String,
}

impl Vehicle {
    pub fn new(
        registration: impl Into<String>,
        colour: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            registration: registration.into(),
            colour: colour.into(),
            kind: kind.into(),
        }
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }

    pub fn colour(&self) -> &str {
        &self.colour
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }
}
