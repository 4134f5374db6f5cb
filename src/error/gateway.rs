//! Errors surfaced by the backend gateway.

use thiserror::Error;

use super::FailureKind;
use crate::traits::HttpError;

/// Failure of a single backend call.
///
/// `Transport` and `Decode` are both transport failures in the user-facing
/// taxonomy; `Application` means the backend answered and said no.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Transport(HttpError),

    #[error("unreadable response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    #[error("{endpoint} rejected the request: {message}")]
    Application { endpoint: String, message: String },
}

impl GatewayError {
    pub fn kind(&self) -> FailureKind {
        match self {
            GatewayError::Transport(_) | GatewayError::Decode { .. } => FailureKind::Transport,
            GatewayError::Application { .. } => FailureKind::Application,
        }
    }

    /// Backend-supplied message for application failures.
    pub fn application_message(&self) -> Option<&str> {
        match self {
            GatewayError::Application { message, .. } => Some(message),
            _ => None,
        }
    }

    pub(crate) fn decode(endpoint: &str, message: impl ToString) -> Self {
        GatewayError::Decode {
            endpoint: endpoint.to_string(),
            message: message.to_string(),
        }
    }

    pub(crate) fn application(endpoint: &str, message: impl Into<String>) -> Self {
        GatewayError::Application {
            endpoint: endpoint.to_string(),
            message: message.into(),
        }
    }
}

impl From<HttpError> for GatewayError {
    fn from(err: HttpError) -> Self {
        GatewayError::Transport(err)
    }
}
