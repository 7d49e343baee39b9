//! Database connection formats.
//!
//! [`DatabaseFormatter`] renders a [`Descriptor`] into one of four strings
//! understood by Oracle client tools:
//!
//! | format    | required               | example                                           |
//! |-----------|------------------------|---------------------------------------------------|
//! | `jdbc`    | host, port, sid        | `jdbc:oracle:thin:scott/tiger@db1:1521:ORCL`      |
//! | `sqlplus` | user                   | `scott/tiger@"@(DESCRIPTION=...)"`                |
//! | `tns`     | host, port, sid        | `(DESCRIPTION=(ADDRESS_LIST=...)(CONNECT_DATA=...))` |
//! | `pqdb`    | pqdb                   | `path/to/db:deploy@srv-a`                         |
//!
//! Missing required attributes never abort formatting. Each one is recorded
//! in the [`DiagnosticsSink`] and rendered as an empty segment.
//!
//! ```rust
//! use std::sync::Arc;
//! use oraconn_format::{DatabaseFormatter, Descriptor, MemorySink, MemoryStore};
//!
//! let sink = Arc::new(MemorySink::new());
//! let formatter = DatabaseFormatter::new(Arc::new(MemoryStore::new()), sink.clone());
//!
//! let db = Descriptor::new("app-db")
//!     .with_attr("host", "db1")
//!     .with_attr("port", "1521")
//!     .with_attr("sid", "ORCL");
//!
//! assert_eq!(formatter.jdbc(&db), "jdbc:oracle:thin:@db1:1521:ORCL");
//! assert!(sink.is_empty());
//! ```

mod kind;
mod reference;

pub use kind::FormatKind;
pub use reference::ProxyRef;

use crate::connector::{RemoteConnector, SshConnector};
use crate::descriptor::{Descriptor, DescriptorKind, attr};
use crate::diagnostics::DiagnosticsSink;
use crate::error::FormatResult;
use crate::store::DescriptorStore;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

const JDBC_PREFIX: &str = "jdbc:oracle:thin";

/// Renders descriptors into Oracle connection strings.
#[derive(Clone)]
pub struct DatabaseFormatter {
    store: Arc<dyn DescriptorStore>,
    sink: Arc<dyn DiagnosticsSink>,
    connector: Arc<dyn RemoteConnector>,
}

impl fmt::Debug for DatabaseFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseFormatter").finish_non_exhaustive()
    }
}

impl DatabaseFormatter {
    /// Create a formatter reading from `store` and recording into `sink`.
    ///
    /// Connection values for the proxy format come from [`SshConnector`].
    pub fn new<S, D>(store: Arc<S>, sink: Arc<D>) -> Self
    where
        S: DescriptorStore + 'static,
        D: DiagnosticsSink + 'static,
    {
        Self {
            store,
            sink,
            connector: Arc::new(SshConnector::new()),
        }
    }

    /// Replace the remote connector.
    pub fn with_connector<C: RemoteConnector + 'static>(mut self, connector: Arc<C>) -> Self {
        self.connector = connector;
        self
    }

    /// Render `descriptor` in the given format.
    pub fn render(&self, kind: FormatKind, descriptor: &Descriptor) -> FormatResult<String> {
        debug!(format = %kind, id = descriptor.id(), "DatabaseFormatter::render()");
        match kind {
            FormatKind::Jdbc => Ok(self.jdbc(descriptor)),
            FormatKind::Sqlplus => Ok(self.sqlplus(descriptor)),
            FormatKind::Tns => Ok(self.tns(descriptor)),
            FormatKind::Pqdb => self.pqdb(descriptor),
        }
    }

    /// Connection formatted for the JDBC thin driver.
    pub fn jdbc(&self, descriptor: &Descriptor) -> String {
        self.log_if_missing(descriptor, FormatKind::Jdbc);

        let suffix = format!(
            "{}:{}:{}",
            descriptor.segment(attr::HOST),
            descriptor.segment(attr::PORT),
            descriptor.segment(attr::SID)
        );

        // `password = ""` takes the passwordless branch, not `user/@`.
        match descriptor.attr(attr::PASSWORD) {
            Some(password) => format!(
                "{}:{}/{}@{}",
                JDBC_PREFIX,
                descriptor.segment(attr::USER),
                password,
                suffix
            ),
            None => format!("{}:@{}", JDBC_PREFIX, suffix),
        }
    }

    /// Connection formatted for SqlPlus.
    pub fn sqlplus(&self, descriptor: &Descriptor) -> String {
        self.log_if_missing(descriptor, FormatKind::Sqlplus);

        let tns = self.tns(descriptor);
        let user = descriptor.segment(attr::USER);

        // Same presence rule as `jdbc`: an empty password is no password.
        match descriptor.attr(attr::PASSWORD) {
            Some(password) => format!("{}/{}@\"@{}\"", user, password, tns),
            None => format!("{}@\"@{}\"", user, tns),
        }
    }

    /// Connection formatted for the TNS listener.
    pub fn tns(&self, descriptor: &Descriptor) -> String {
        self.log_if_missing(descriptor, FormatKind::Tns);

        format!(
            "(DESCRIPTION=(ADDRESS_LIST=(ADDRESS=(PROTOCOL=TCP)(HOST={})(PORT={})))(CONNECT_DATA=(SID={})))",
            descriptor.segment(attr::HOST),
            descriptor.segment(attr::PORT),
            descriptor.segment(attr::SID)
        )
    }

    /// Connection formatted as a proxy address: `<path>:<connection value>`.
    ///
    /// Errors recorded for the referenced server are copied to `descriptor`.
    /// Store and connector failures are returned unchanged.
    pub fn pqdb(&self, descriptor: &Descriptor) -> FormatResult<String> {
        self.log_if_missing(descriptor, FormatKind::Pqdb);

        let reference = ProxyRef::parse(descriptor.attr(attr::PQDB));
        let server = self.find_server(descriptor, &reference)?;
        let value = self
            .connector
            .connection_value(&server, self.sink.as_ref())?;

        let errors = self.sink.errors_for(server.id());
        if !errors.is_empty() {
            self.sink.forward(descriptor.id(), errors);
        }

        Ok(format!("{}:{}", reference.path, value))
    }

    /// Same as [`DatabaseFormatter::pqdb`], under the name used by ski.
    pub fn ski(&self, descriptor: &Descriptor) -> FormatResult<String> {
        self.pqdb(descriptor)
    }

    fn log_if_missing(&self, descriptor: &Descriptor, kind: FormatKind) {
        for name in descriptor.missing(kind.required_attributes()) {
            self.sink.warn_missing(descriptor.id(), name);
        }
    }

    /// The server referenced by `pqdb`, or an unknown placeholder.
    fn find_server(&self, descriptor: &Descriptor, reference: &ProxyRef<'_>) -> FormatResult<Descriptor> {
        if let Some(server) = reference.server {
            if let Some(found) = self.store.find(server)? {
                return Ok(found);
            }
            warn!(
                id = descriptor.id(),
                server = server,
                "referenced server not found, using placeholder"
            );
        }

        Ok(self
            .store
            .synthesize(descriptor.id(), DescriptorKind::Unknown))
    }
}
