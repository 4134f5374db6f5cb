//! Live detection status polled from `GET /status`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Movement;

/// Point-in-time live detection result.
///
/// Score and count maps are keyed by the backend's movement names so an
/// unrecognised category never makes the whole snapshot unreadable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Hold progress towards verification, 0-100
    #[serde(default)]
    pub progress: f64,
    #[serde(default)]
    pub status: String,
    /// Detected movement name, or a placeholder such as "None"
    #[serde(default)]
    pub detected: String,
    #[serde(default)]
    pub scores: BTreeMap<String, f64>,
    #[serde(default)]
    pub ref_counts: BTreeMap<String, u64>,
    #[serde(default)]
    pub verified: bool,
    /// Movement the backend is currently verifying against
    #[serde(default)]
    pub movement: Option<String>,
}

impl StatusSnapshot {
    /// Progress clamped to the displayable 0-100 range.
    pub fn progress_percent(&self) -> f64 {
        if self.progress.is_nan() {
            0.0
        } else {
            self.progress.clamp(0.0, 100.0)
        }
    }

    /// Detected movement, `None` when nothing known is detected.
    pub fn detected_movement(&self) -> Option<Movement> {
        self.detected.parse().ok()
    }

    pub fn score_for(&self, movement: Movement) -> Option<f64> {
        self.scores.get(movement.as_str()).copied()
    }

    pub fn ref_count_for(&self, movement: Movement) -> u64 {
        self.ref_counts
            .get(movement.as_str())
            .copied()
            .unwrap_or(0)
    }
}
