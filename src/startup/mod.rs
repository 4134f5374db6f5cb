//! Startup wiring: configuration, logging and the production gateway.
//!
//! # Usage
//!
//! ```ignore
//! use poseverify::startup::{self, ClientConfig};
//!
//! startup::init_tracing();
//! let config = ClientConfig::from_env();
//! let gateway = startup::build_gateway(&config)?;
//! ```

pub mod config;

pub use config::{ClientConfig, DEFAULT_REQUEST_TIMEOUT, POLL_INTERVAL_MS, UPLOADS_ROOT};

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::adapters::ReqwestHttpClient;
use crate::gateway::BackendGateway;
use crate::traits::HttpError;

/// Install the global tracing subscriber.
///
/// Filter comes from `RUST_LOG` (default `info`). Output goes to stderr so it
/// never interleaves with the console view on stdout.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build a gateway backed by reqwest with the configured timeout.
pub fn build_gateway(config: &ClientConfig) -> Result<BackendGateway, HttpError> {
    let http = ReqwestHttpClient::with_timeout(config.request_timeout)?;
    Ok(BackendGateway::new(config.base_url.clone(), Arc::new(http)))
}
