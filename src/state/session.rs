//! Session-level state: the current movement and active mode.
//!
//! `SessionState` is a small `Copy` snapshot. Transitions return a new value
//! instead of mutating in place, so every component reads the one instance
//! the controller owns.

use std::fmt;
use std::str::FromStr;

use crate::models::Movement;

/// Which view region is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Live camera view; enables status polling
    #[default]
    Live,
    /// Uploaded-image view; status polling is gated off
    Static,
}

impl Mode {
    pub fn is_live(&self) -> bool {
        matches!(self, Mode::Live)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Live => "live",
            Mode::Static => "static",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "live" | "webcam" => Ok(Mode::Live),
            "static" | "image" => Ok(Mode::Static),
            other => Err(format!("unknown mode: {}", other)),
        }
    }
}

/// Current movement and mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    pub movement: Movement,
    pub mode: Mode,
}

impl SessionState {
    pub fn new(movement: Movement, mode: Mode) -> Self {
        Self { movement, mode }
    }

    /// Snapshot with `movement` selected.
    pub fn with_movement(self, movement: Movement) -> Self {
        Self { movement, ..self }
    }

    /// Snapshot with `mode` active.
    pub fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }
}
