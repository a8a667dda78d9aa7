// src/detect.rs

use tracing::debug;

use crate::keys;
use crate::registry::{GENERIC_MODEL, Registry, SYSTEM_STATUS_PAGE};
use crate::specs::system::parse_system_info;
use crate::transport::{Transport, luci};

/// Identify the router model from its system status page.
///
/// Total by design: a fetch failure, an empty body, a missing "Model"
/// field or a model the registry has never heard of all yield the
/// generic id. A device that cannot be identified must still get a
/// usable profile.
pub fn detect_model(transport: &dyn Transport, registry: &Registry) -> String {
    let html = match transport.fetch(&luci(SYSTEM_STATUS_PAGE)) {
        Ok(body) => body,
        Err(err) => {
            debug!(%err, "model detection fetch failed, using generic profile");
            return GENERIC_MODEL.to_string();
        }
    };
    if html.is_empty() {
        return GENERIC_MODEL.to_string();
    }

    let data = parse_system_info(&html);
    match data
        .get_str(keys::SYSTEM_MODEL)
        .and_then(|raw| registry.canonical(raw))
    {
        Some(id) => id.to_string(),
        None => {
            debug!("model field absent or unregistered, using generic profile");
            GENERIC_MODEL.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::FixtureTransport;

    fn transport_with_status(body: &str) -> FixtureTransport {
        let mut t = FixtureTransport::new();
        t.insert(luci(SYSTEM_STATUS_PAGE), body);
        t
    }

    #[test]
    fn known_model_is_detected() {
        let t = transport_with_status("<td>Model</td><td>WR6500</td>");
        assert_eq!(detect_model(&t, &Registry::builtin()), "WR6500");
    }

    #[test]
    fn model_string_is_canonicalized() {
        let t = transport_with_status("<td>Model</td><td>  r700 </td>");
        assert_eq!(detect_model(&t, &Registry::builtin()), "R700");
    }

    #[test]
    fn unregistered_model_degrades_to_generic() {
        let t = transport_with_status("<td>Model</td><td>XR123</td>");
        assert_eq!(detect_model(&t, &Registry::builtin()), GENERIC_MODEL);
    }

    #[test]
    fn fetch_failure_degrades_to_generic() {
        let t = FixtureTransport::new(); // no pages: every fetch fails
        assert_eq!(detect_model(&t, &Registry::builtin()), GENERIC_MODEL);
    }

    #[test]
    fn empty_body_degrades_to_generic() {
        let t = transport_with_status("");
        assert_eq!(detect_model(&t, &Registry::builtin()), GENERIC_MODEL);
    }
}
