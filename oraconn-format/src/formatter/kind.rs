//! The closed set of output formats.

use crate::descriptor::attr;
use crate::error::{FormatError, FormatResult};
use std::fmt;
use std::str::FromStr;

/// Output format selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// `jdbc:oracle:thin` URL.
    Jdbc,
    /// SqlPlus login string.
    Sqlplus,
    /// TNS descriptor literal.
    Tns,
    /// Proxy address, also registered as `ski`.
    Pqdb,
}

impl FormatKind {
    /// All formats.
    pub const ALL: [FormatKind; 4] = [Self::Jdbc, Self::Sqlplus, Self::Tns, Self::Pqdb];

    /// Get the primary name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Jdbc => "jdbc",
            Self::Sqlplus => "sqlplus",
            Self::Tns => "tns",
            Self::Pqdb => "pqdb",
        }
    }

    /// Parse a format from its name or alias.
    pub fn from_name(name: &str) -> FormatResult<Self> {
        match name.to_lowercase().as_str() {
            "jdbc" => Ok(Self::Jdbc),
            "sqlplus" => Ok(Self::Sqlplus),
            "tns" => Ok(Self::Tns),
            "pqdb" | "ski" => Ok(Self::Pqdb),
            _ => Err(FormatError::unknown_format(name)),
        }
    }

    /// Attributes validated before composing this format.
    pub fn required_attributes(&self) -> &'static [&'static str] {
        match self {
            Self::Jdbc | Self::Tns => &[attr::HOST, attr::PORT, attr::SID],
            Self::Sqlplus => &[attr::USER],
            Self::Pqdb => &[attr::PQDB],
        }
    }
}

impl FromStr for FormatKind {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
