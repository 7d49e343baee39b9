//! Environment variable expansion for inventory values.

use crate::error::{FormatError, FormatResult};
use std::collections::HashMap;
use std::iter::Peekable;
use std::str::Chars;

/// Source for environment variables.
pub trait EnvSource: Send + Sync {
    /// Get an environment variable value.
    fn get(&self, name: &str) -> Option<String>;
}

/// Default environment source using std::env.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Environment source backed by a HashMap.
#[derive(Debug, Clone, Default)]
pub struct MapEnvSource {
    vars: HashMap<String, String>,
}

impl MapEnvSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Expands environment variables in attribute values.
///
/// Supported syntax:
/// - `${VAR}` - required variable
/// - `${VAR:-default}` - variable with a default for unset or empty values
/// - `$VAR` - simple reference (letters, digits, `_`)
/// - `$$` - a literal `$`
#[derive(Debug, Clone, Default)]
pub struct EnvExpander<S: EnvSource = StdEnvSource> {
    source: S,
}

impl EnvExpander<StdEnvSource> {
    /// Create an expander over the process environment.
    pub fn new() -> Self {
        Self {
            source: StdEnvSource,
        }
    }
}

impl<S: EnvSource> EnvExpander<S> {
    /// Create an expander with a custom environment source.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Expand every variable reference in `input`.
    pub fn expand(&self, input: &str) -> FormatResult<String> {
        if !input.contains('$') {
            return Ok(input.to_string());
        }

        let mut result = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '$' {
                result.push(c);
                continue;
            }
            match chars.peek() {
                Some('$') => {
                    chars.next();
                    result.push('$');
                }
                Some('{') => {
                    chars.next();
                    result.push_str(&self.expand_braced(&mut chars)?);
                }
                Some(next) if next.is_alphabetic() || *next == '_' => {
                    result.push_str(&self.expand_simple(&mut chars)?);
                }
                _ => result.push(c),
            }
        }

        Ok(result)
    }

    fn expand_braced(&self, chars: &mut Peekable<Chars<'_>>) -> FormatResult<String> {
        let mut name = String::new();
        let mut default = None;
        let mut closed = false;

        while let Some(c) = chars.next() {
            match c {
                '}' => {
                    closed = true;
                    break;
                }
                ':' if default.is_none() && chars.peek() == Some(&'-') => {
                    chars.next();
                    default = Some(String::new());
                }
                _ => match default.as_mut() {
                    Some(value) => value.push(c),
                    None => name.push(c),
                },
            }
        }

        if !closed {
            return Err(FormatError::invalid_inventory(format!(
                "unterminated variable reference '${{{}'",
                name
            )));
        }
        if name.is_empty() {
            return Err(FormatError::invalid_inventory("empty variable name"));
        }

        match (self.source.get(&name), default) {
            (Some(value), _) if !value.is_empty() => Ok(value),
            (_, Some(default)) => Ok(default),
            (Some(value), None) => Ok(value),
            (None, None) => Err(FormatError::env_not_found(name)),
        }
    }

    fn expand_simple(&self, chars: &mut Peekable<Chars<'_>>) -> FormatResult<String> {
        let mut name = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_alphanumeric() || c == '_' {
                name.push(c);
                chars.next();
            } else {
                break;
            }
        }

        self.source
            .get(&name)
            .ok_or_else(|| FormatError::env_not_found(name))
    }
}
