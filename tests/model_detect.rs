// tests/model_detect.rs

use luci_scrape::detect::detect_model;
use luci_scrape::registry::{GENERIC_MODEL, Registry, SYSTEM_STATUS_PAGE};
use luci_scrape::transport::{FixtureTransport, Transport, luci};

fn status_page(model_cell: &str) -> String {
    format!(
        "<html><body><table><tbody>\
         <tr><td>Model</td><td>{model_cell}</td></tr>\
         <tr><td>Firmware Version</td><td>2.3.15-20250805-113843</td></tr>\
         <tr><td>System Uptime</td><td>08:09:48</td></tr>\
         </tbody></table></body></html>"
    )
}

fn transport_with(model_cell: &str) -> FixtureTransport {
    let mut t = FixtureTransport::new();
    t.insert(luci(SYSTEM_STATUS_PAGE), status_page(model_cell));
    t
}

#[test]
fn each_builtin_model_detects() {
    let registry = Registry::builtin();
    for model in ["WR6500", "R700", "P5"] {
        let t = transport_with(model);
        assert_eq!(detect_model(&t, &registry), model);
    }
}

#[test]
fn unregistered_model_string_returns_generic_without_raising() {
    let registry = Registry::builtin();
    let t = transport_with("TotallyNewRouter 9000");
    assert_eq!(detect_model(&t, &registry), GENERIC_MODEL);
}

#[test]
fn unreachable_router_returns_generic() {
    let registry = Registry::builtin();
    let t = FixtureTransport::new();
    assert_eq!(detect_model(&t, &registry), GENERIC_MODEL);
}

#[test]
fn junk_body_returns_generic() {
    let registry = Registry::builtin();
    let mut t = FixtureTransport::new();
    t.insert(luci(SYSTEM_STATUS_PAGE), "<html><body>Please log in</body></html>");
    assert_eq!(detect_model(&t, &registry), GENERIC_MODEL);
}

#[test]
fn detection_is_total_even_for_a_flaky_transport() {
    // a transport that errors on every second call must still always
    // yield a usable id
    struct Flaky(std::cell::Cell<bool>);
    impl Transport for Flaky {
        fn fetch(&self, path: &str) -> Result<String, luci_scrape::error::TransportError> {
            let fail = self.0.get();
            self.0.set(!fail);
            if fail {
                Err(luci_scrape::error::TransportError::new("connection reset"))
            } else if path.ends_with("status?detail=1") {
                Ok(status_page("R700"))
            } else {
                Ok(String::new())
            }
        }
    }

    let registry = Registry::builtin();
    let flaky = Flaky(std::cell::Cell::new(true));
    assert_eq!(detect_model(&flaky, &registry), GENERIC_MODEL);
    assert_eq!(detect_model(&flaky, &registry), "R700");
}
