//! Error types for the pose verification client.
//!
//! - **`GatewayError`**: a single backend call failed (transport, decode or
//!   application-level rejection)
//! - **`FlowError`**: a user action was refused locally, before any call
//! - **`FailureKind`**: the three-way classification every failure maps to
//!
//! | Kind | Source | Shown as |
//! |------|--------|----------|
//! | Transport | network or parse error | alert / "Upload failed." |
//! | Application | `success: false`, missing fields | alert / "Error: ..." |
//! | UserAborted | confirmation declined | nothing |

mod category;
mod flow;
mod gateway;

pub use category::FailureKind;
pub use flow::FlowError;
pub use gateway::GatewayError;

/// Result alias for gateway calls.
pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::traits::HttpError;

    #[test]
    fn test_every_error_classifies() {
        let kinds = [
            GatewayError::from(HttpError::Cancelled).kind(),
            GatewayError::application("/verify_image", "bad").kind(),
            FlowError::UserAborted.kind(),
        ];
        assert_eq!(
            kinds,
            [
                FailureKind::Transport,
                FailureKind::Application,
                FailureKind::UserAborted
            ]
        );
    }
}
