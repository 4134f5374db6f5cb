//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the console client (default); optional backend URL override
    Run { base_url: Option<String> },
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use poseverify::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["poseverify".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut base_url = None;
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--url" => base_url = args.next(),
            other => {
                if let Some(url) = other.strip_prefix("--url=") {
                    base_url = Some(url.to_string());
                }
            }
        }
    }
    CliCommand::Run { base_url }
}
