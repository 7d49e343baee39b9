//! Error types for formatting and inventory operations.
//!
//! Missing attributes are never errors: they are recorded as diagnostics and
//! formatting continues. [`FormatError`] is reserved for hard failures, i.e.
//! a collaborator (store, connector) that cannot answer, an unknown format
//! name, or an inventory file that cannot be loaded.
//!
//! # Error Codes
//!
//! Error codes follow a pattern: O{category}{number}
//! - 1xxx: Descriptor errors (duplicate ids, malformed entries)
//! - 2xxx: Format selection errors
//! - 3xxx: Collaborator errors (store lookup, remote connection)
//! - 7xxx: Inventory and environment errors
//!
//! ```rust
//! use oraconn_format::{ErrorCode, FormatError};
//!
//! let err = FormatError::unknown_format("odbc");
//! assert_eq!(err.code, ErrorCode::UnknownFormat);
//! assert_eq!(err.code.code(), "O2001");
//! assert!(err.to_string().contains("odbc"));
//! ```

use std::fmt;
use thiserror::Error;

/// Result type for formatting operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Descriptor errors (1xxx)
    /// Two descriptors share the same id (O1001).
    DuplicateDescriptor = 1001,
    /// A descriptor entry is malformed (O1002).
    InvalidDescriptor = 1002,

    // Format errors (2xxx)
    /// No formatter is registered under the requested name (O2001).
    UnknownFormat = 2001,

    // Collaborator errors (3xxx)
    /// The descriptor store could not answer a lookup (O3001).
    StoreUnavailable = 3001,
    /// The remote connection value could not be produced (O3002).
    ConnectionFailed = 3002,

    // Inventory errors (7xxx)
    /// The inventory file could not be parsed (O7001).
    InvalidInventory = 7001,
    /// A referenced environment variable is not set (O7002).
    EnvNotFound = 7002,
    /// Reading an inventory file failed (O7003).
    Io = 7003,
}

impl ErrorCode {
    /// Get the error code string (e.g., "O1001").
    pub fn code(&self) -> String {
        format!("O{}", *self as u16)
    }

    /// Get a short description of the error code.
    pub fn description(&self) -> &'static str {
        match self {
            Self::DuplicateDescriptor => "Duplicate descriptor id",
            Self::InvalidDescriptor => "Invalid descriptor",
            Self::UnknownFormat => "Unknown format",
            Self::StoreUnavailable => "Descriptor store unavailable",
            Self::ConnectionFailed => "Remote connection failed",
            Self::InvalidInventory => "Invalid inventory",
            Self::EnvNotFound => "Environment variable not found",
            Self::Io => "I/O error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Additional context for an error.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The descriptor being formatted or loaded.
    pub descriptor: Option<String>,
    /// The attribute involved.
    pub attribute: Option<String>,
    /// Help text.
    pub help: Option<String>,
}

/// A hard failure raised while formatting or loading descriptors.
#[derive(Error, Debug)]
pub struct FormatError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// Additional context.
    pub context: ErrorContext,
    /// The source error (if any).
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl FormatError {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Set the descriptor id.
    pub fn with_descriptor(mut self, id: impl Into<String>) -> Self {
        self.context.descriptor = Some(id.into());
        self
    }

    /// Set the attribute name.
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.context.attribute = Some(attribute.into());
        self
    }

    /// Add help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }

    /// Set the source error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // ============== Constructor Functions ==============

    /// Create a duplicate descriptor error.
    pub fn duplicate_descriptor(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(
            ErrorCode::DuplicateDescriptor,
            format!("Descriptor '{}' is defined more than once", id),
        )
        .with_descriptor(&id)
        .with_help("Descriptor ids must be unique within an inventory")
    }

    /// Create an invalid descriptor error.
    pub fn invalid_descriptor(id: impl Into<String>, message: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(
            ErrorCode::InvalidDescriptor,
            format!("Invalid descriptor '{}': {}", id, message.into()),
        )
        .with_descriptor(id)
    }

    /// Create an unknown format error.
    pub fn unknown_format(name: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::UnknownFormat,
            format!("Unknown format: {}", name.into()),
        )
        .with_help("Supported formats are jdbc, sqlplus, tns, pqdb and ski")
    }

    /// Create a store lookup error.
    pub fn store_unavailable(id: impl Into<String>, message: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(
            ErrorCode::StoreUnavailable,
            format!("Lookup of '{}' failed: {}", id, message.into()),
        )
        .with_descriptor(id)
    }

    /// Create a remote connection error.
    pub fn connection_failed(id: impl Into<String>, message: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(
            ErrorCode::ConnectionFailed,
            format!("Connection to '{}' failed: {}", id, message.into()),
        )
        .with_descriptor(id)
    }

    /// Create an inventory parse error.
    pub fn invalid_inventory(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidInventory,
            format!("Invalid inventory: {}", message.into()),
        )
    }

    /// Create an environment variable error.
    pub fn env_not_found(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(
            ErrorCode::EnvNotFound,
            format!("Environment variable not found: {}", name),
        )
        .with_help(format!("Export {} or provide a default with ${{{}:-value}}", name, name))
    }

    /// Create an I/O error.
    pub fn io(path: impl fmt::Display, source: std::io::Error) -> Self {
        Self::new(ErrorCode::Io, format!("Failed to read {}: {}", path, source)).with_source(source)
    }

    /// Check if this error was raised by a collaborator.
    pub fn is_collaborator_error(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::StoreUnavailable | ErrorCode::ConnectionFailed
        )
    }

    /// Display the full error with all context.
    pub fn display_full(&self) -> String {
        let mut output = format!("Error [{}]: {}\n", self.code.code(), self.message);

        if let Some(ref id) = self.context.descriptor {
            output.push_str(&format!("  → Descriptor: {}\n", id));
        }
        if let Some(ref attribute) = self.context.attribute {
            output.push_str(&format!("  → Attribute: {}\n", attribute));
        }
        if let Some(ref help) = self.context.help {
            output.push_str(&format!("\nHelp: {}\n", help));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_format() {
        assert_eq!(ErrorCode::DuplicateDescriptor.code(), "O1001");
        assert_eq!(ErrorCode::UnknownFormat.code(), "O2001");
        assert_eq!(ErrorCode::ConnectionFailed.code(), "O3002");
        assert_eq!(ErrorCode::EnvNotFound.to_string(), "O7002");
    }

    #[test]
    fn test_duplicate_descriptor() {
        let err = FormatError::duplicate_descriptor("app-db");
        assert_eq!(err.code, ErrorCode::DuplicateDescriptor);
        assert_eq!(err.context.descriptor.as_deref(), Some("app-db"));
        assert!(err.context.help.is_some());
    }

    #[test]
    fn test_collaborator_errors() {
        assert!(FormatError::store_unavailable("srv", "timeout").is_collaborator_error());
        assert!(FormatError::connection_failed("srv", "refused").is_collaborator_error());
        assert!(!FormatError::unknown_format("odbc").is_collaborator_error());
    }

    #[test]
    fn test_display() {
        let err = FormatError::connection_failed("srv", "refused");
        assert_eq!(err.to_string(), "[O3002] Connection to 'srv' failed: refused");
    }

    #[test]
    fn test_display_full() {
        let err = FormatError::invalid_descriptor("app", "value is not a scalar")
            .with_attribute("port");
        let full = err.display_full();
        assert!(full.contains("O1002"));
        assert!(full.contains("Descriptor: app"));
        assert!(full.contains("Attribute: port"));
    }

    #[test]
    fn test_io_keeps_source() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = FormatError::io("inventory.toml", source);
        assert_eq!(err.code, ErrorCode::Io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
