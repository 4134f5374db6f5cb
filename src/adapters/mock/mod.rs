//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`ScriptedConfirmer`] - Confirmation gate with scripted answers

pub mod confirm;
pub mod http;

pub use confirm::ScriptedConfirmer;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
