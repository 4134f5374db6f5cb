//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`ConsoleConfirmer`] - confirmation answered by the console
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses, recorded requests
//! - [`mock::ScriptedConfirmer`] - Scripted confirmation answers

pub mod console_confirm;
pub mod mock;
pub mod reqwest_http;

pub use console_confirm::ConsoleConfirmer;
pub use mock::{MockHttpClient, MockResponse, ScriptedConfirmer};
pub use reqwest_http::ReqwestHttpClient;
