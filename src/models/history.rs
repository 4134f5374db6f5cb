//! Verification history records.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Movement, RecordId};

/// Outcome stored with each verification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn from_match(matched: bool) -> Self {
        if matched {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Correct => "Correct",
            Verdict::Incorrect => "Incorrect",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One past verification attempt, as listed by `GET /history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: RecordId,
    #[serde(default)]
    pub timestamp: String,
    /// Movement name as stored by the backend
    #[serde(rename = "movement_type")]
    pub movement: String,
    pub result: Verdict,
    #[serde(default)]
    pub image_path: String,
    #[serde(default)]
    pub ref_path: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

impl HistoryItem {
    /// Reference path, treating the backend's empty string as absent.
    pub fn reference_path(&self) -> Option<&str> {
        self.ref_path.as_deref().filter(|p| !p.is_empty())
    }

    /// Typed movement, if the stored name is a known one.
    pub fn known_movement(&self) -> Option<Movement> {
        self.movement.parse().ok()
    }
}
