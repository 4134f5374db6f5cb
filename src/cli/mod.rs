//! Console front end.
//!
//! - Argument parsing
//! - Version display
//! - Console command parsing
//!
//! # Usage
//!
//! ```ignore
//! use poseverify::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     CliCommand::Version => println!("{}", poseverify::cli::version_line()),
//!     CliCommand::Help => println!("{}", poseverify::cli::HELP),
//!     CliCommand::Run { base_url } => { /* start the console */ }
//! }
//! ```

pub mod args;
pub mod command;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use command::{ConsoleCommand, HELP};
pub use version::{version_line, VERSION};
