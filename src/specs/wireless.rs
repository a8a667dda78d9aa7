// src/specs/wireless.rs

use crate::extract::{coerce_int, kv_table};
use crate::keys;
use crate::record::ModuleRecord;

fn parse_radio(html: &str, mapping: &[(&'static str, &str)], channel_key: &'static str) -> ModuleRecord {
    let mut data = kv_table(html, mapping);
    coerce_int(&mut data, channel_key);
    data
}

/// 2.4 GHz radio status page.
pub fn parse_wireless_24g_info(html: &str) -> ModuleRecord {
    parse_radio(
        html,
        &[
            (keys::WIFI24_SSID, "SSID"),
            (keys::WIFI24_BSSID, "BSSID"),
            (keys::WIFI24_ENCRYPTION, "Encryption"),
            (keys::WIFI24_CHANNEL, "Channel"),
        ],
        keys::WIFI24_CHANNEL,
    )
}

/// 5 GHz radio status page.
pub fn parse_wireless_5g_info(html: &str) -> ModuleRecord {
    parse_radio(
        html,
        &[
            (keys::WIFI5_SSID, "SSID"),
            (keys::WIFI5_BSSID, "BSSID"),
            (keys::WIFI5_ENCRYPTION, "Encryption"),
            (keys::WIFI5_CHANNEL, "Channel"),
        ],
        keys::WIFI5_CHANNEL,
    )
}

/// Mesh overview page: network name and unit count.
pub fn parse_mesh_info(html: &str) -> ModuleRecord {
    let mut data = kv_table(
        html,
        &[
            (keys::MESH_NETWORK, "Device Name"),
            (keys::MESH_UNITS, "Mesh Units"),
        ],
    );
    coerce_int(&mut data, keys::MESH_UNITS);
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Value;

    #[test]
    fn channel_coerces_to_int() {
        let html = "<td>SSID</td><td>HomeNet5</td>\
                    <td>Channel</td><td>36 (80MHz)</td>\
                    <td>Encryption</td><td>WPA2-PSK</td>";
        let data = parse_wireless_5g_info(html);
        assert_eq!(data.get_str(keys::WIFI5_SSID), Some("HomeNet5"));
        assert_eq!(data.get(keys::WIFI5_CHANNEL), Some(&Value::Int(36)));
    }

    #[test]
    fn radio_page_without_channel_stays_na() {
        let data = parse_wireless_24g_info("<td>SSID</td><td>HomeNet</td>");
        assert_eq!(data.get(keys::WIFI24_CHANNEL), Some(&Value::Na));
    }

    #[test]
    fn mesh_units_count() {
        let html = "<td>Device Name</td><td>Mesh_5456</td><td>Mesh Units</td><td>2</td>";
        let data = parse_mesh_info(html);
        assert_eq!(data.get_str(keys::MESH_NETWORK), Some("Mesh_5456"));
        assert_eq!(data.get(keys::MESH_UNITS), Some(&Value::Int(2)));
    }
}
