//! Error handling for the lss command

use std::fmt;

/// Errors the CLI raises on its own, outside the core engine
#[derive(Debug)]
pub enum CliError {
    /// No file or directory matched the given arguments
    FileNotFound(String),
    /// A user-supplied frame pattern failed to compile
    InvalidPattern(String),
    /// Rejected configuration, e.g. an ambiguous range separator
    ConfigError(String),
    /// A format template could not be parsed or rendered
    FormatError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::FormatError(msg) => write!(f, "Format error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_offending_input() {
        assert_eq!(
            CliError::FileNotFound("renders/*.exr".to_string()).to_string(),
            "File not found: renders/*.exr"
        );
        assert_eq!(
            CliError::InvalidPattern("[0-9".to_string()).to_string(),
            "Invalid file pattern: [0-9"
        );
        assert_eq!(
            CliError::ConfigError("invalid range separator: '1-2'".to_string()).to_string(),
            "Configuration error: invalid range separator: '1-2'"
        );
        assert_eq!(
            CliError::FormatError("bad directive: %q".to_string()).to_string(),
            "Format error: bad directive: %q"
        );
    }

    #[test]
    fn converts_into_anyhow() {
        let err: anyhow::Error = CliError::FileNotFound("x.txt".to_string()).into();
        assert!(err.to_string().contains("File not found"));

        let result: CliResult<()> = Err(err);
        assert!(result.is_err());
    }
}
