//! Command-line argument parsing for the swatch CLI.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Print the catalog and exit
    List {
        /// Emit the catalog as JSON instead of plain text
        json: bool,
    },
    /// Run the TUI application (default)
    RunTui {
        /// Optional route path to open on startup, e.g. `/layouts/tobias-cv`
        path: Option<String>,
    },
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Returns
///
/// The `CliCommand` to execute based on the arguments.
///
/// # Examples
///
/// ```
/// use swatch::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["swatch".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut list = false;
    let mut json = false;
    let mut path: Option<String> = None;

    for arg in args.skip(1) {
        // Skip the program name
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--list" => list = true,
            "--json" => json = true,
            other if other.starts_with('/') && path.is_none() => {
                path = Some(other.to_string());
            }
            _ => {}
        }
    }

    if list {
        CliCommand::List { json }
    } else {
        CliCommand::RunTui { path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_flag() {
        let args = vec!["swatch".to_string(), "--version".to_string()];
        assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
    }

    #[test]
    fn test_parse_version_short_flag() {
        let args = vec!["swatch".to_string(), "-V".to_string()];
        assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
    }

    #[test]
    fn test_parse_list_flag() {
        let args = vec!["swatch".to_string(), "--list".to_string()];
        assert_eq!(parse_args(args.into_iter()), CliCommand::List { json: false });
    }

    #[test]
    fn test_parse_list_json_flags() {
        let args = vec![
            "swatch".to_string(),
            "--list".to_string(),
            "--json".to_string(),
        ];
        assert_eq!(parse_args(args.into_iter()), CliCommand::List { json: true });
    }

    #[test]
    fn test_parse_startup_path() {
        let args = vec!["swatch".to_string(), "/layouts/tobias-cv".to_string()];
        assert_eq!(
            parse_args(args.into_iter()),
            CliCommand::RunTui {
                path: Some("/layouts/tobias-cv".to_string())
            }
        );
    }

    #[test]
    fn test_parse_no_args() {
        let args = vec!["swatch".to_string()];
        assert_eq!(parse_args(args.into_iter()), CliCommand::RunTui { path: None });
    }

    #[test]
    fn test_parse_unknown_flag() {
        let args = vec!["swatch".to_string(), "--unknown".to_string()];
        assert_eq!(parse_args(args.into_iter()), CliCommand::RunTui { path: None });
    }
}
