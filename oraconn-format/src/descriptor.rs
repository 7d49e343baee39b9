//! Connection descriptors.
//!
//! A [`Descriptor`] is an identified bag of string attributes describing one
//! connection target. Attribute access always goes through [`Descriptor::attr`],
//! which reports both missing and empty values as absent.
//!
//! ```rust
//! use oraconn_format::{Descriptor, DescriptorKind};
//!
//! let db = Descriptor::new("app-db")
//!     .with_kind(DescriptorKind::Database)
//!     .with_attr("host", "db1")
//!     .with_attr("password", "");
//!
//! assert_eq!(db.attr("host"), Some("db1"));
//! assert_eq!(db.attr("password"), None);
//! assert_eq!(db.segment("password"), "");
//! assert_eq!(db.kind(), DescriptorKind::Database);
//! ```

use indexmap::IndexMap;
use std::fmt;

/// Well-known attribute names.
pub mod attr {
    /// Host name of the database listener.
    pub const HOST: &str = "host";
    /// Listener port.
    pub const PORT: &str = "port";
    /// Oracle system identifier.
    pub const SID: &str = "sid";
    /// Login user.
    pub const USER: &str = "user";
    /// Login password.
    pub const PASSWORD: &str = "password";
    /// `server@path` proxy reference.
    pub const PQDB: &str = "pqdb";
    /// Host name used by ssh-style targets.
    pub const URL: &str = "url";
    /// Kind tag.
    pub const TYPE: &str = "type";
}

/// Tag of a synthesized placeholder descriptor.
pub const UNKNOWN: &str = "UNKNOWN";

/// The kind of target a descriptor describes, parsed from its `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DescriptorKind {
    /// A host reachable over ssh.
    Server,
    /// A database instance.
    Database,
    /// A web endpoint.
    Web,
    /// A tool installation.
    Tool,
    /// Unrecognised or placeholder target.
    #[default]
    Unknown,
}

impl DescriptorKind {
    /// Get the tag written to the `type` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Database => "db",
            Self::Web => "web",
            Self::Tool => "tool",
            Self::Unknown => UNKNOWN,
        }
    }

    /// Parse a kind from a `type` tag. Unrecognised tags are [`DescriptorKind::Unknown`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "server" => Self::Server,
            "db" | "database" => Self::Database,
            "web" => Self::Web,
            "tool" => Self::Tool,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An identified mapping from attribute name to value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    id: String,
    attributes: IndexMap<String, String>,
}

impl Descriptor {
    /// Create a descriptor without attributes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Set an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set the `type` tag.
    pub fn with_kind(self, kind: DescriptorKind) -> Self {
        self.with_attr(attr::TYPE, kind.name())
    }

    /// Get the descriptor id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get an attribute value. Empty values are reported as absent.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Check if an attribute is present.
    pub fn has(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Get an attribute as an output segment: absent values become `""`.
    pub fn segment(&self, name: &str) -> &str {
        self.attr(name).unwrap_or_default()
    }

    /// Names from `required` that are absent, in the given order.
    pub fn missing<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|name| !self.has(name))
            .collect()
    }

    /// Get the kind parsed from the `type` tag.
    pub fn kind(&self) -> DescriptorKind {
        self.attr(attr::TYPE)
            .map(DescriptorKind::from_tag)
            .unwrap_or_default()
    }

    /// Check if this is a synthesized placeholder, tagged `type = UNKNOWN`.
    ///
    /// Untyped descriptors and unrecognised tags are not placeholders even
    /// though their [`kind`](Descriptor::kind) is [`DescriptorKind::Unknown`].
    pub fn is_placeholder(&self) -> bool {
        self.attr(attr::TYPE) == Some(UNKNOWN)
    }

    /// Iterate over raw attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Get the number of raw attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Check if the descriptor has no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_requires_unknown_tag() {
        assert!(Descriptor::new("a").with_kind(DescriptorKind::Unknown).is_placeholder());

        let untyped = Descriptor::new("b");
        assert_eq!(untyped.kind(), DescriptorKind::Unknown);
        assert!(!untyped.is_placeholder());

        let odd = Descriptor::new("c").with_attr("type", "jumphost");
        assert_eq!(odd.kind(), DescriptorKind::Unknown);
        assert!(!odd.is_placeholder());
        assert!(!Descriptor::new("d").with_kind(DescriptorKind::Server).is_placeholder());
    }

    #[test]
    fn test_attr_absent_and_empty() {
        let d = Descriptor::new("x").with_attr("host", "").with_attr("port", "1521");
        assert_eq!(d.attr("host"), None);
        assert_eq!(d.attr("sid"), None);
        assert_eq!(d.attr("port"), Some("1521"));
        assert!(!d.has("host"));
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn test_segment_substitutes_empty() {
        let d = Descriptor::new("x").with_attr("user", "scott");
        assert_eq!(d.segment("user"), "scott");
        assert_eq!(d.segment("password"), "");
    }

    #[test]
    fn test_missing_preserves_order() {
        let d = Descriptor::new("x").with_attr("port", "1521");
        assert_eq!(d.missing(&["host", "port", "sid"]), vec!["host", "sid"]);
        assert!(d.missing(&["port"]).is_empty());
    }

    #[test]
    fn test_kind_from_tag() {
        assert_eq!(DescriptorKind::from_tag("server"), DescriptorKind::Server);
        assert_eq!(DescriptorKind::from_tag("DB"), DescriptorKind::Database);
        assert_eq!(DescriptorKind::from_tag("database"), DescriptorKind::Database);
        assert_eq!(DescriptorKind::from_tag("UNKNOWN"), DescriptorKind::Unknown);
        assert_eq!(DescriptorKind::from_tag("mainframe"), DescriptorKind::Unknown);
    }

    #[test]
    fn test_kind_defaults_to_unknown() {
        assert_eq!(Descriptor::new("x").kind(), DescriptorKind::Unknown);
        let d = Descriptor::new("x").with_kind(DescriptorKind::Unknown);
        assert_eq!(d.attr(attr::TYPE), Some(UNKNOWN));
    }

    #[test]
    fn test_attributes_insertion_order() {
        let d = Descriptor::new("x").with_attr("b", "2").with_attr("a", "1");
        let names: Vec<_> = d.attributes().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
