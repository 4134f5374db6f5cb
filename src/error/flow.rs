//! Errors raised by controller operations before any network call.

use thiserror::Error;

use super::FailureKind;

/// A user action the controller refused to carry out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// Confirmation was declined.
    #[error("cancelled by user")]
    UserAborted,

    /// The action does not apply to the current upload stage.
    #[error("cannot {action} while {from}")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },

    /// A verification is already in flight.
    #[error("a verification is already in progress")]
    Busy,

    #[error("unknown movement: {0}")]
    UnknownMovement(String),

    /// No record with this id is currently displayed.
    #[error("no such record: {0}")]
    UnknownRecord(String),
}

impl FlowError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FlowError::UserAborted => FailureKind::UserAborted,
            _ => FailureKind::Application,
        }
    }
}

impl From<crate::models::UnknownMovement> for FlowError {
    fn from(err: crate::models::UnknownMovement) -> Self {
        FlowError::UnknownMovement(err.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_message() {
        let err = FlowError::InvalidTransition {
            from: "empty",
            action: "verify",
        };
        assert_eq!(err.to_string(), "cannot verify while empty");
    }

    #[test]
    fn test_user_aborted_kind() {
        assert_eq!(FlowError::UserAborted.kind(), FailureKind::UserAborted);
        assert_eq!(FlowError::Busy.kind(), FailureKind::Application);
    }

    #[test]
    fn test_from_unknown_movement() {
        let err: FlowError = "Tendangan".parse::<crate::models::Movement>().unwrap_err().into();
        assert_eq!(err, FlowError::UnknownMovement("Tendangan".to_string()));
    }
}
