//! Client configuration types.

use std::time::Duration;

use crate::gateway::DEFAULT_BASE_URL;
use crate::models::Movement;
use crate::state::Mode;

/// Interval between live status polls, in milliseconds. Fixed.
pub const POLL_INTERVAL_MS: u64 = 500;

/// Root under which relative image paths are served.
pub const UPLOADS_ROOT: &str = "/static/uploads";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a client session.
///
/// Use the builder pattern to customize it.
///
/// # Example
///
/// ```ignore
/// use poseverify::startup::ClientConfig;
/// use poseverify::models::Movement;
///
/// let config = ClientConfig::default()
///     .with_base_url("http://192.168.1.20:5000")
///     .with_initial_movement(Movement::PukulanDasar);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend address without trailing slash (default: http://localhost:5000)
    pub base_url: String,
    /// Root prefixed to relative image paths (default: /static/uploads)
    pub uploads_root: String,
    /// Timeout applied to every backend request (default: 30s)
    pub request_timeout: Duration,
    /// Movement selected at start
    pub initial_movement: Movement,
    /// Mode active at start (default: live, camera first)
    pub initial_mode: Mode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            uploads_root: UPLOADS_ROOT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            initial_movement: Movement::default(),
            initial_mode: Mode::Live,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend address.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_initial_movement(mut self, movement: Movement) -> Self {
        self.initial_movement = movement;
        self
    }

    pub fn with_initial_mode(mut self, mode: Mode) -> Self {
        self.initial_mode = mode;
        self
    }

    /// Poll interval as a duration.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(POLL_INTERVAL_MS)
    }

    /// Create config from the environment.
    /// `POSEVERIFY_URL` overrides the backend address.
    pub fn from_env() -> Self {
        match std::env::var("POSEVERIFY_URL") {
            Ok(url) if !url.trim().is_empty() => Self::default().with_base_url(url.trim()),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.uploads_root, "/static/uploads");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.initial_movement, Movement::SikapSiap);
        assert_eq!(config.initial_mode, Mode::Live);
        assert_eq!(config.poll_interval(), Duration::from_millis(500));
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_base_url("http://10.0.0.5:5000/")
            .with_request_timeout(Duration::from_secs(5))
            .with_initial_movement(Movement::PukulanDasar)
            .with_initial_mode(Mode::Static);

        assert_eq!(config.base_url, "http://10.0.0.5:5000");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.initial_movement, Movement::PukulanDasar);
        assert_eq!(config.initial_mode, Mode::Static);
    }
}
