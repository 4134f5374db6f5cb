//! Failure classification shared by every controller path.
//!
//! Gateway and flow errors are folded into three kinds so callers can decide
//! what to show without matching on transport details.

use std::fmt;

/// High-level categorization of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Network or parse error at the gateway boundary.
    Transport,

    /// Well-formed response reporting failure, or missing expected fields.
    Application,

    /// The user declined a confirmation; no call was made.
    UserAborted,
}

impl FailureKind {
    /// Returns a short label for the kind suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Transport => "transport",
            FailureKind::Application => "application",
            FailureKind::UserAborted => "user_aborted",
        }
    }

    /// True when the backend was reached and answered.
    pub fn reached_backend(&self) -> bool {
        matches!(self, FailureKind::Application)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_as_str() {
        assert_eq!(FailureKind::Transport.as_str(), "transport");
        assert_eq!(FailureKind::Application.as_str(), "application");
        assert_eq!(FailureKind::UserAborted.as_str(), "user_aborted");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", FailureKind::Transport), "transport");
    }

    #[test]
    fn test_reached_backend() {
        assert!(FailureKind::Application.reached_backend());
        assert!(!FailureKind::Transport.reached_backend());
        assert!(!FailureKind::UserAborted.reached_backend());
    }
}
