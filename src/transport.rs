// src/transport.rs
//
// Boundary to whatever actually talks to the router. The extraction core
// performs no I/O of its own; an HTTP/session client lives with the host
// integration and only has to satisfy this one-method contract.

use std::collections::HashMap;

use crate::error::TransportError;

/// Fetch a page body by relative admin-UI path.
///
/// Implementations may block, time out, or fail; the core treats a failure
/// as "no data" everywhere except the poll loop, which surfaces it.
pub trait Transport {
    fn fetch(&self, path: &str) -> Result<String, TransportError>;
}

/// Admin pages live under the LuCI CGI prefix.
pub fn luci(path: &str) -> String {
    if path.starts_with('/') {
        format!("/cgi-bin/luci{path}")
    } else {
        format!("/cgi-bin/luci/{path}")
    }
}

/// Map-backed transport for tests and the offline CLI: path → body.
/// Unknown paths fail like an unreachable page would.
#[derive(Debug, Default)]
pub struct FixtureTransport {
    pages: HashMap<String, String>,
}

impl FixtureTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a body under the full fetch path (including the LuCI prefix).
    pub fn insert(&mut self, path: impl Into<String>, body: impl Into<String>) {
        self.pages.insert(path.into(), body.into());
    }
}

impl Transport for FixtureTransport {
    fn fetch(&self, path: &str) -> Result<String, TransportError> {
        self.pages
            .get(path)
            .cloned()
            .ok_or_else(|| TransportError::new(format!("no fixture for {path}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luci_prefixes_and_normalizes() {
        assert_eq!(luci("/admin/system/status"), "/cgi-bin/luci/admin/system/status");
        assert_eq!(luci("admin/system/status"), "/cgi-bin/luci/admin/system/status");
    }

    #[test]
    fn fixture_transport_misses_are_errors() {
        let t = FixtureTransport::new();
        assert!(t.fetch("/nope").is_err());
    }
}
