//! Descriptor lookup.
//!
//! The formatter reads descriptors through the [`DescriptorStore`] trait.
//! [`MemoryStore`] is the in-process implementation, usually filled from an
//! [`Inventory`] file:
//!
//! ```toml
//! [[descriptor]]
//! id = "app-db"
//! type = "db"
//! host = "db1"
//! port = 1521
//! sid = "ORCL"
//! user = "scott"
//! password = "${APP_DB_PASSWORD}"
//! ```
//!
//! ```rust
//! use oraconn_format::store::{DescriptorStore, Inventory, InventoryFormat};
//!
//! let inventory = Inventory::parse(
//!     "[[descriptor]]\nid = \"app-db\"\nhost = \"db1\"\nport = 1521\n",
//!     InventoryFormat::Toml,
//! ).unwrap();
//! let store = inventory.into_store();
//!
//! let db = store.find("app-db").unwrap().unwrap();
//! assert_eq!(db.attr("port"), Some("1521"));
//! assert!(store.find("missing").unwrap().is_none());
//! ```

mod env;
mod inventory;

pub use env::{EnvExpander, EnvSource, MapEnvSource, StdEnvSource};
pub use inventory::{Inventory, InventoryFormat};

use crate::descriptor::{Descriptor, DescriptorKind};
use crate::error::FormatResult;
use indexmap::IndexMap;
use parking_lot::RwLock;

/// Source of descriptors keyed by id.
pub trait DescriptorStore: Send + Sync {
    /// Look up a descriptor. `Ok(None)` means the id is unknown; `Err` means
    /// the store itself failed.
    fn find(&self, id: &str) -> FormatResult<Option<Descriptor>>;

    /// Build a placeholder descriptor carrying only an id and a kind.
    fn synthesize(&self, id: &str, kind: DescriptorKind) -> Descriptor {
        Descriptor::new(id).with_kind(kind)
    }

    /// Ids of all known descriptors.
    fn ids(&self) -> Vec<String>;
}

/// In-memory descriptor store preserving insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    descriptors: RwLock<IndexMap<String, Descriptor>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor, returning the one it replaced.
    pub fn insert(&self, descriptor: Descriptor) -> Option<Descriptor> {
        self.descriptors
            .write()
            .insert(descriptor.id().to_string(), descriptor)
    }

    /// Insert several descriptors.
    pub fn extend(&self, descriptors: impl IntoIterator<Item = Descriptor>) {
        let mut map = self.descriptors.write();
        for descriptor in descriptors {
            map.insert(descriptor.id().to_string(), descriptor);
        }
    }

    /// Check if a descriptor is stored.
    pub fn contains(&self, id: &str) -> bool {
        self.descriptors.read().contains_key(id)
    }

    /// Get the number of stored descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.read().len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<Descriptor> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = Descriptor>>(iter: I) -> Self {
        let store = Self::new();
        store.extend(iter);
        store
    }
}

impl DescriptorStore for MemoryStore {
    fn find(&self, id: &str) -> FormatResult<Option<Descriptor>> {
        Ok(self.descriptors.read().get(id).cloned())
    }

    fn ids(&self) -> Vec<String> {
        self.descriptors.read().keys().cloned().collect()
    }
}
