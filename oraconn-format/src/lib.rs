//! # oraconn-format
//!
//! Renders connection descriptors into the strings Oracle client tools
//! expect:
//! - JDBC thin URLs (`jdbc:oracle:thin:user/password@host:port:sid`)
//! - SqlPlus logins wrapping a TNS descriptor
//! - TNS descriptor literals
//! - proxy addresses resolved through a referenced server (`pqdb`, alias `ski`)
//!
//! The formatter reads descriptors from a [`DescriptorStore`], records
//! missing attributes in a [`DiagnosticsSink`] and asks a [`RemoteConnector`]
//! for the connection value of referenced servers. In-memory implementations
//! of all three are provided.
//!
//! ## Rendering
//!
//! ```rust
//! use std::sync::Arc;
//! use oraconn_format::{DatabaseFormatter, Descriptor, DiagnosticsSink, FormatKind, MemorySink, MemoryStore};
//!
//! let store = Arc::new(MemoryStore::new());
//! let sink = Arc::new(MemorySink::new());
//! let formatter = DatabaseFormatter::new(store, sink.clone());
//!
//! let db = Descriptor::new("app-db")
//!     .with_attr("host", "db1")
//!     .with_attr("port", "1521")
//!     .with_attr("sid", "ORCL");
//!
//! assert_eq!(
//!     formatter.render(FormatKind::Tns, &db).unwrap(),
//!     "(DESCRIPTION=(ADDRESS_LIST=(ADDRESS=(PROTOCOL=TCP)(HOST=db1)(PORT=1521)))(CONNECT_DATA=(SID=ORCL)))"
//! );
//!
//! // Missing attributes are recorded, not raised.
//! let _ = formatter.jdbc(&Descriptor::new("broken"));
//! assert_eq!(sink.errors_for("broken"), vec!["missing host", "missing port", "missing sid"]);
//! ```

pub mod connector;
pub mod descriptor;
pub mod diagnostics;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod store;

pub use connector::{RemoteConnector, SshConnector};
pub use descriptor::{Descriptor, DescriptorKind, UNKNOWN};
pub use diagnostics::{Diagnostic, DiagnosticsSink, MemorySink, Severity};
pub use error::{ErrorCode, FormatError, FormatResult};
pub use formatter::{DatabaseFormatter, FormatKind, ProxyRef};
pub use store::{DescriptorStore, Inventory, InventoryFormat, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::connector::{RemoteConnector, SshConnector};
    pub use crate::descriptor::{Descriptor, DescriptorKind, attr};
    pub use crate::diagnostics::{DiagnosticsSink, MemorySink};
    pub use crate::error::{FormatError, FormatResult};
    pub use crate::formatter::{DatabaseFormatter, FormatKind};
    pub use crate::store::{DescriptorStore, Inventory, MemoryStore};
}
