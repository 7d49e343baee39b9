//! Descriptor inventories loaded from TOML or JSON.

use super::MemoryStore;
use super::env::{EnvExpander, EnvSource};
use crate::descriptor::Descriptor;
use crate::error::{FormatError, FormatResult};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// On-disk inventory format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryFormat {
    /// TOML with a `[[descriptor]]` array of tables.
    Toml,
    /// JSON with a top-level `descriptor` array.
    Json,
}

impl InventoryFormat {
    /// Pick the format from a file extension. Anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }

    /// Get the format name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for InventoryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Deserialize)]
struct InventoryFile {
    #[serde(default, rename = "descriptor")]
    descriptors: Vec<RawDescriptor>,
}

#[derive(Debug, Deserialize)]
struct RawDescriptor {
    id: String,
    #[serde(flatten)]
    attributes: IndexMap<String, AttributeValue>,
}

/// Scalar attribute values; everything is stored as a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AttributeValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl AttributeValue {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Boolean(value) => value.to_string(),
        }
    }
}

/// A validated list of descriptors.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    descriptors: Vec<Descriptor>,
}

impl Inventory {
    /// Parse an inventory, expanding variables from the process environment.
    pub fn parse(content: &str, format: InventoryFormat) -> FormatResult<Self> {
        Self::parse_with(content, format, &EnvExpander::new())
    }

    /// Parse an inventory with a custom variable expander.
    pub fn parse_with<S: EnvSource>(
        content: &str,
        format: InventoryFormat,
        expander: &EnvExpander<S>,
    ) -> FormatResult<Self> {
        debug!(format = %format, len = content.len(), "Inventory::parse()");
        let file: InventoryFile = match format {
            InventoryFormat::Toml => toml::from_str(content)
                .map_err(|e| FormatError::invalid_inventory(e.to_string()).with_source(e))?,
            InventoryFormat::Json => serde_json::from_str(content)
                .map_err(|e| FormatError::invalid_inventory(e.to_string()).with_source(e))?,
        };

        let mut seen = HashSet::new();
        let mut descriptors = Vec::with_capacity(file.descriptors.len());

        for raw in file.descriptors {
            if raw.id.is_empty() {
                return Err(FormatError::invalid_descriptor("", "id must not be empty"));
            }
            if !seen.insert(raw.id.clone()) {
                return Err(FormatError::duplicate_descriptor(raw.id));
            }

            let mut descriptor = Descriptor::new(raw.id.as_str());
            for (name, value) in raw.attributes {
                let value = expander.expand(&value.into_text()).map_err(|e| {
                    e.with_descriptor(raw.id.as_str()).with_attribute(name.as_str())
                })?;
                descriptor = descriptor.with_attr(name, value);
            }
            descriptors.push(descriptor);
        }

        info!(format = %format, count = descriptors.len(), "Inventory loaded");
        Ok(Self { descriptors })
    }

    /// Read and parse an inventory file. The format follows the extension.
    pub fn load(path: impl AsRef<Path>) -> FormatResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| FormatError::io(path.display(), e))?;
        Self::parse(&content, InventoryFormat::from_path(path))
    }

    /// Get the descriptors in file order.
    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    /// Get the number of descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Move the descriptors into a [`MemoryStore`].
    pub fn into_store(self) -> MemoryStore {
        self.descriptors.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::store::{DescriptorStore, MapEnvSource};
    use pretty_assertions::assert_eq;

    const TOML: &str = r#"
        [[descriptor]]
        id = "app-db"
        type = "db"
        host = "db1"
        port = 1521
        sid = "ORCL"

        [[descriptor]]
        id = "srvA"
        type = "server"
        user = "deploy"
        url = "srv-a.example.com"
        active = true
    "#;

    #[test]
    fn test_parse_toml() {
        let inventory = Inventory::parse(TOML, InventoryFormat::Toml).unwrap();
        assert_eq!(inventory.len(), 2);

        let db = &inventory.descriptors()[0];
        assert_eq!(db.id(), "app-db");
        assert_eq!(db.attr("port"), Some("1521"));
        assert_eq!(db.attr("sid"), Some("ORCL"));

        let srv = &inventory.descriptors()[1];
        assert_eq!(srv.attr("active"), Some("true"));
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"descriptor": [{"id": "app-db", "host": "db1", "port": 1521}]}"#;
        let inventory = Inventory::parse(json, InventoryFormat::Json).unwrap();
        assert_eq!(inventory.descriptors()[0].attr("port"), Some("1521"));
    }

    #[test]
    fn test_empty_inventory() {
        let inventory = Inventory::parse("", InventoryFormat::Toml).unwrap();
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_duplicate_ids() {
        let toml = "[[descriptor]]\nid = \"a\"\n[[descriptor]]\nid = \"a\"\n";
        let err = Inventory::parse(toml, InventoryFormat::Toml).unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateDescriptor);
    }

    #[test]
    fn test_empty_id() {
        let err = Inventory::parse("[[descriptor]]\nid = \"\"\n", InventoryFormat::Toml).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDescriptor);
    }

    #[test]
    fn test_non_scalar_value_rejected() {
        let toml = "[[descriptor]]\nid = \"a\"\nhosts = [\"x\", \"y\"]\n";
        let err = Inventory::parse(toml, InventoryFormat::Toml).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInventory);
    }

    #[test]
    fn test_env_expansion() {
        let expander = EnvExpander::with_source(MapEnvSource::new().set("APP_PASS", "tiger"));
        let toml = "[[descriptor]]\nid = \"a\"\npassword = \"${APP_PASS}\"\n";
        let inventory = Inventory::parse_with(toml, InventoryFormat::Toml, &expander).unwrap();
        assert_eq!(inventory.descriptors()[0].attr("password"), Some("tiger"));
    }

    #[test]
    fn test_env_expansion_failure_has_context() {
        let expander = EnvExpander::with_source(MapEnvSource::new());
        let toml = "[[descriptor]]\nid = \"a\"\npassword = \"${APP_PASS}\"\n";
        let err = Inventory::parse_with(toml, InventoryFormat::Toml, &expander).unwrap_err();
        assert_eq!(err.code, ErrorCode::EnvNotFound);
        assert_eq!(err.context.descriptor.as_deref(), Some("a"));
        assert_eq!(err.context.attribute.as_deref(), Some("password"));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(InventoryFormat::from_path(Path::new("a.json")), InventoryFormat::Json);
        assert_eq!(InventoryFormat::from_path(Path::new("a.JSON")), InventoryFormat::Json);
        assert_eq!(InventoryFormat::from_path(Path::new("a.toml")), InventoryFormat::Toml);
        assert_eq!(InventoryFormat::from_path(Path::new("inventory")), InventoryFormat::Toml);
    }

    #[test]
    fn test_into_store() {
        let store = Inventory::parse(TOML, InventoryFormat::Toml).unwrap().into_store();
        assert_eq!(store.ids(), vec!["app-db", "srvA"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Inventory::load("/nonexistent/oraconn/inventory.toml").unwrap_err();
        assert_eq!(err.code, ErrorCode::Io);
    }
}
