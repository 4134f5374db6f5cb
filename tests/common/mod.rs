//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let http = MockBackend::new().build();
//! let mut app = test_app(&http, ScriptedConfirmer::accepting());
//! app.load_initial();
//! app.settle().await;
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use poseverify::app::App;
use poseverify::gateway::BackendGateway;
use poseverify::models::StagedFile;
use poseverify::startup::ClientConfig;

/// App wired to the given mock backend. The poller is not started; tests
/// drive ticks with `poll_once`.
pub fn test_app(http: &MockHttpClient, confirmer: ScriptedConfirmer) -> App {
    let config = ClientConfig::new().with_base_url(BASE);
    let gateway = BackendGateway::new(BASE, Arc::new(http.clone()));
    App::new(config, gateway, Arc::new(confirmer))
}

/// A small JPEG-named image.
pub fn test_image(name: &str) -> StagedFile {
    StagedFile::new(name, vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10])
}
