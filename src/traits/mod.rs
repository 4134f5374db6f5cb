//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, JSON POST, multipart POST)
//! - [`Confirmer`] - Synchronous confirmation gate for destructive actions

pub mod confirm;
pub mod http;

pub use confirm::{ConfirmPrompt, Confirmer};
pub use http::{FormPart, Headers, HttpClient, HttpError, MultipartForm, Response};
