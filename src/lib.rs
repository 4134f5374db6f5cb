//! Pose Verify client: drives a pose-verification backend and derives what
//! a surface should display.
//!
//! This library exposes modules for use in integration tests and by the
//! console binary.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod cli_output;
pub mod error;
pub mod gateway;
pub mod models;
pub mod startup;
pub mod state;
pub mod traits;
pub mod view_state;
