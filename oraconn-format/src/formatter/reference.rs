//! Parsing of `server@path` proxy references.

/// A parsed `pqdb` value.
///
/// The value is split on its last `@`. Without an `@` there is no server
/// reference and the whole value is the path.
///
/// ```rust
/// use oraconn_format::formatter::ProxyRef;
///
/// let r = ProxyRef::parse(Some("srvA@path/to/db"));
/// assert_eq!(r.server, Some("srvA"));
/// assert_eq!(r.path, "path/to/db");
///
/// let r = ProxyRef::parse(Some("justpath"));
/// assert_eq!(r.server, None);
/// assert_eq!(r.path, "justpath");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyRef<'a> {
    /// Id of the referenced server, if any.
    pub server: Option<&'a str>,
    /// Path segment rendered in the output.
    pub path: &'a str,
}

impl<'a> ProxyRef<'a> {
    /// Parse a `pqdb` attribute. An absent value has no server and an empty path.
    pub fn parse(value: Option<&'a str>) -> Self {
        match value.and_then(|v| v.rsplit_once('@')) {
            Some((server, path)) => Self {
                server: Some(server).filter(|s| !s.is_empty()),
                path,
            },
            None => Self {
                server: None,
                path: value.unwrap_or_default(),
            },
        }
    }
}
