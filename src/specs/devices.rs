// src/specs/devices.rs
//
// Device-count pages. Two firmware generations exist: a detailed one with
// per-connection counts, and a simple one with an online/blocked summary
// whose total renders inline ("Devices 12 | Online 9 | ...").

use std::sync::LazyLock;

use regex::Regex;

use crate::core::html::strip_tags_sep;
use crate::core::text::{normalize_entities, normalize_ws};
use crate::extract::{coerce_int, kv_table, to_int};
use crate::keys;
use crate::record::{ModuleRecord, Value};

static DEVICE_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Devices\s*([^\s|]+)").unwrap());

/// Detailed device-count page: totals per connection type.
pub fn parse_devices(html: &str) -> ModuleRecord {
    let mut data = kv_table(
        html,
        &[
            (keys::DEVICE_COUNT, "Devices"),
            (keys::DEVICE_WIFI24_COUNT, "2.4G WiFi"),
            (keys::DEVICE_WIFI5_COUNT, "5G WiFi"),
            (keys::DEVICE_WIRED_COUNT, "Wired"),
            (keys::DEVICE_MESH_COUNT, "Mesh"),
        ],
    );
    for key in [
        keys::DEVICE_COUNT,
        keys::DEVICE_WIFI24_COUNT,
        keys::DEVICE_WIFI5_COUNT,
        keys::DEVICE_WIRED_COUNT,
        keys::DEVICE_MESH_COUNT,
    ] {
        coerce_int(&mut data, key);
    }
    data
}

/// Simple device-count page: total / online / blocked.
pub fn parse_simple_devices(html: &str) -> ModuleRecord {
    let mut data = kv_table(
        html,
        &[
            (keys::DEVICE_COUNT, "Devices"),
            (keys::DEVICE_ONLINE, "Online"),
            (keys::DEVICE_BLOCKED, "Blocked"),
        ],
    );

    // The total often renders inline rather than as a label/value pair.
    if !html.is_empty() {
        let flat = normalize_ws(&strip_tags_sep(&normalize_entities(html), ' '));
        if let Some(cap) = DEVICE_COUNT_RE.captures(&flat) {
            match to_int(&cap[1]) {
                Some(n) => data.set(keys::DEVICE_COUNT, Value::Int(n)),
                None => data.set(keys::DEVICE_COUNT, Value::Na),
            }
        }
    }

    coerce_int(&mut data, keys::DEVICE_ONLINE);
    coerce_int(&mut data, keys::DEVICE_BLOCKED);
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detailed_counts_per_connection() {
        let html = "<td>Devices</td><td>12</td>\
                    <td>2.4G WiFi</td><td>4</td>\
                    <td>5G WiFi</td><td>5</td>\
                    <td>Wired</td><td>2</td>\
                    <td>Mesh</td><td>1</td>";
        let data = parse_devices(html);
        assert_eq!(data.get(keys::DEVICE_COUNT), Some(&Value::Int(12)));
        assert_eq!(data.get(keys::DEVICE_WIFI24_COUNT), Some(&Value::Int(4)));
        assert_eq!(data.get(keys::DEVICE_WIFI5_COUNT), Some(&Value::Int(5)));
        assert_eq!(data.get(keys::DEVICE_WIRED_COUNT), Some(&Value::Int(2)));
        assert_eq!(data.get(keys::DEVICE_MESH_COUNT), Some(&Value::Int(1)));
    }

    #[test]
    fn simple_page_reads_inline_total() {
        let html = "<div>Devices</div><div>9</div>\
                    <div>Online</div><div>7</div><div>Blocked</div><div>0</div>";
        let data = parse_simple_devices(html);
        assert_eq!(data.get(keys::DEVICE_COUNT), Some(&Value::Int(9)));
        assert_eq!(data.get(keys::DEVICE_ONLINE), Some(&Value::Int(7)));
        assert_eq!(data.get(keys::DEVICE_BLOCKED), Some(&Value::Int(0)));
    }

    #[test]
    fn junk_page_degrades_to_sentinels() {
        let data = parse_simple_devices("<html><body>login required</body></html>");
        assert!(data.iter().all(|(_, v)| v.is_na()));
    }
}
