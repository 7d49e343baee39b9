//! Remote connection values for referenced servers.
//!
//! The proxy format needs a connection value for the server a descriptor
//! points at. Producing it is the job of a [`RemoteConnector`]; the formatter
//! only forwards whatever the connector returns or fails with.

use crate::descriptor::{Descriptor, attr};
use crate::diagnostics::DiagnosticsSink;
use crate::error::FormatResult;
use tracing::debug;

/// Produces the remote-connection value of a server descriptor.
pub trait RemoteConnector: Send + Sync {
    /// Return the connection value for `server`.
    ///
    /// Problems with the server's own attributes are recorded in `sink` under
    /// the server's id. `Err` is reserved for failures of the connector itself.
    fn connection_value(&self, server: &Descriptor, sink: &dyn DiagnosticsSink)
    -> FormatResult<String>;
}

/// Ssh-style `user@host` connection values.
///
/// Pure composition: no network traffic is involved. The host is read from
/// `url` and falls back to `host`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SshConnector;

impl SshConnector {
    /// Create a new connector.
    pub fn new() -> Self {
        Self
    }
}

impl RemoteConnector for SshConnector {
    fn connection_value(
        &self,
        server: &Descriptor,
        sink: &dyn DiagnosticsSink,
    ) -> FormatResult<String> {
        if server.is_placeholder() {
            sink.error(server.id(), &format!("unknown target {}", server.id()));
            return Ok(String::new());
        }

        let host = server.attr(attr::URL).or_else(|| server.attr(attr::HOST));
        if !server.has(attr::USER) {
            sink.warn_missing(server.id(), attr::USER);
        }
        if host.is_none() {
            sink.warn_missing(server.id(), attr::URL);
        }

        let value = format!("{}@{}", server.segment(attr::USER), host.unwrap_or_default());
        debug!(id = server.id(), value = %value, "ssh connection value");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::DescriptorKind;
    use crate::diagnostics::MemorySink;

    fn server() -> Descriptor {
        Descriptor::new("srvA")
            .with_kind(DescriptorKind::Server)
            .with_attr("user", "deploy")
            .with_attr("url", "srv-a.example.com")
    }

    #[test]
    fn test_user_at_url() {
        let sink = MemorySink::new();
        let value = SshConnector::new().connection_value(&server(), &sink).unwrap();
        assert_eq!(value, "deploy@srv-a.example.com");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_host_fallback() {
        let sink = MemorySink::new();
        let srv = Descriptor::new("s")
            .with_kind(DescriptorKind::Server)
            .with_attr("user", "u")
            .with_attr("host", "h");
        assert_eq!(SshConnector.connection_value(&srv, &sink).unwrap(), "u@h");
    }

    #[test]
    fn test_missing_attributes_recorded_under_server() {
        let sink = MemorySink::new();
        let srv = Descriptor::new("s").with_kind(DescriptorKind::Server);
        let value = SshConnector.connection_value(&srv, &sink).unwrap();

        assert_eq!(value, "@");
        assert_eq!(
            sink.errors_for("s"),
            vec!["missing user".to_string(), "missing url".to_string()]
        );
    }

    #[test]
    fn test_untyped_server_is_not_a_placeholder() {
        let sink = MemorySink::new();
        let srv = Descriptor::new("srvA")
            .with_attr("user", "deploy")
            .with_attr("url", "srv-a");

        assert_eq!(SshConnector.connection_value(&srv, &sink).unwrap(), "deploy@srv-a");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_unknown_target() {
        let sink = MemorySink::new();
        let placeholder = Descriptor::new("app").with_kind(DescriptorKind::Unknown);
        let value = SshConnector.connection_value(&placeholder, &sink).unwrap();

        assert_eq!(value, "");
        assert_eq!(sink.errors_for("app"), vec!["unknown target app".to_string()]);
    }
}
