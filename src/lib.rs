//! # oraconn
//!
//! Render connection descriptors into the strings Oracle client tools
//! understand.
//!
//! oraconn provides:
//! - JDBC thin URLs, SqlPlus logins and TNS descriptor literals
//! - proxy addresses resolved through a referenced server (`pqdb` / `ski`)
//! - diagnostics for missing attributes that never abort formatting
//! - descriptor inventories loaded from TOML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use oraconn::prelude::*;
//!
//! let inventory = Inventory::parse(
//!     r#"
//!     [[descriptor]]
//!     id = "app-db"
//!     host = "db1"
//!     port = 1521
//!     sid = "ORCL"
//!     user = "scott"
//!     password = "tiger"
//!     "#,
//!     oraconn::store::InventoryFormat::Toml,
//! ).unwrap();
//!
//! let store = Arc::new(inventory.into_store());
//! let sink = Arc::new(MemorySink::new());
//! let formatter = DatabaseFormatter::new(store.clone(), sink);
//!
//! let db = store.find("app-db").unwrap().unwrap();
//! assert_eq!(
//!     formatter.render(FormatKind::Jdbc, &db).unwrap(),
//!     "jdbc:oracle:thin:scott/tiger@db1:1521:ORCL"
//! );
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Descriptor lookup and inventory loading.
pub mod store {
    pub use oraconn_format::store::*;
}

/// Diagnostics recorded while formatting.
pub mod diagnostics {
    pub use oraconn_format::diagnostics::*;
}

/// Logging setup.
pub mod logging {
    pub use oraconn_format::logging::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use oraconn_format::prelude::*;
}

// Re-export key types at the crate root
pub use oraconn_format::{
    DatabaseFormatter, Descriptor, DescriptorKind, ErrorCode, FormatError, FormatKind,
    FormatResult, ProxyRef, RemoteConnector, SshConnector, UNKNOWN,
};
