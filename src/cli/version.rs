//! Version display.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// "poseverify 0.1.0"
pub fn version_line() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), VERSION)
}
