//! Movement categories known to both client and backend.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A pose category partitioning references, scores and history.
///
/// Wire names are the human-readable labels the backend stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Movement {
    /// Ready stance
    #[default]
    #[serde(rename = "Sikap Siap")]
    SikapSiap,
    /// Basic punch
    #[serde(rename = "Pukulan Dasar")]
    PukulanDasar,
}

impl Movement {
    /// Every movement, in display order.
    pub const ALL: [Movement; 2] = [Movement::SikapSiap, Movement::PukulanDasar];

    /// Wire and display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Movement::SikapSiap => "Sikap Siap",
            Movement::PukulanDasar => "Pukulan Dasar",
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name does not match any known movement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMovement(pub String);

impl fmt::Display for UnknownMovement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown movement: {:?}", self.0)
    }
}

impl std::error::Error for UnknownMovement {}

impl FromStr for Movement {
    type Err = UnknownMovement;

    /// Accepts the wire name case-insensitively, plus the single-word
    /// shorthands `sikap` and `pukulan`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "sikap siap" | "sikap" => Ok(Movement::SikapSiap),
            "pukulan dasar" | "pukulan" => Ok(Movement::PukulanDasar),
            _ => Err(UnknownMovement(s.to_string())),
        }
    }
}
