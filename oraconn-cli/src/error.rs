//! CLI error types and result alias.

use miette::Diagnostic;
use oraconn_format::FormatError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    #[diagnostic(code(oraconn::io))]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    #[diagnostic(code(oraconn::config))]
    Config(String),

    /// Formatting or inventory error
    #[error("{0}")]
    #[diagnostic(code(oraconn::format))]
    Format(#[from] FormatError),

    /// Diagnostics were recorded in strict mode
    #[error("{0} diagnostic(s) recorded")]
    #[diagnostic(
        code(oraconn::diagnostics),
        help("fill in the reported attributes or drop --strict")
    )]
    Diagnostics(usize),
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::Config(format!("Failed to parse TOML: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Config(format!("Failed to serialize JSON: {}", err))
    }
}
