// src/specs/network.rs

use crate::extract::kv_table;
use crate::keys;
use crate::record::ModuleRecord;

/// LAN status page.
pub fn parse_lan_info(html: &str) -> ModuleRecord {
    kv_table(
        html,
        &[
            (keys::LAN_IP, "IP Address"),
            (keys::LAN_SUBNET, "Subnet Mask"),
            (keys::LAN_MAC, "MAC-Address"),
        ],
    )
}

/// WAN status page.
pub fn parse_wan_info(html: &str) -> ModuleRecord {
    kv_table(
        html,
        &[
            (keys::WAN_TYPE, "Protocol"),
            (keys::WAN_IP, "IP Address"),
            (keys::WAN_UPTIME, "Connected Time"),
            (keys::WAN_PUBLIC_IP, "Public IP"),
            (keys::WAN_DNS, "DNS"),
        ],
    )
}

/// DHCP server status page.
pub fn parse_dhcp_info(html: &str) -> ModuleRecord {
    kv_table(
        html,
        &[
            (keys::DHCP_IP_START, "IP Start"),
            (keys::DHCP_IP_END, "IP End"),
            (keys::DHCP_DNS_PRIMARY, "Preferred DNS"),
            (keys::DHCP_DNS_SECONDARY, "Alternate DNS"),
            (keys::DHCP_GATEWAY, "Default Gateway"),
            (keys::DHCP_LEASE_TIME, "Leasetime"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lan_ip_from_status_table() {
        let html = "<tr><td>IP Address</td><td>192.168.178.1</td></tr>\
                    <tr><td>Subnet Mask</td><td>255.255.255.0</td></tr>";
        let data = parse_lan_info(html);
        assert_eq!(data.get_str(keys::LAN_IP), Some("192.168.178.1"));
        assert_eq!(data.get_str(keys::LAN_SUBNET), Some("255.255.255.0"));
    }

    #[test]
    fn wan_fields_extract_verbatim() {
        let html = "\
            <td>Protocol</td><td>DHCP client</td>\
            <td>IP Address</td><td>192.168.10.150</td>\
            <td>Connected Time</td><td>08:26:31</td>\
            <td>Public IP</td><td>83.238.165.41 *</td>\
            <td>DNS</td><td>8.8.8.8/62.233.233.233</td>";
        let data = parse_wan_info(html);
        assert_eq!(data.get_str(keys::WAN_TYPE), Some("DHCP client"));
        assert_eq!(data.get_str(keys::WAN_IP), Some("192.168.10.150"));
        assert_eq!(data.get_str(keys::WAN_UPTIME), Some("08:26:31"));
        assert_eq!(data.get_str(keys::WAN_PUBLIC_IP), Some("83.238.165.41 *"));
        assert_eq!(data.get_str(keys::WAN_DNS), Some("8.8.8.8/62.233.233.233"));
    }

    #[test]
    fn dhcp_pool_bounds() {
        let html = "<td>IP Start</td><td>192.168.178.100</td>\
                    <td>IP End</td><td>192.168.178.250</td>\
                    <td>Leasetime</td><td>12h</td>";
        let data = parse_dhcp_info(html);
        assert_eq!(data.get_str(keys::DHCP_IP_START), Some("192.168.178.100"));
        assert_eq!(data.get_str(keys::DHCP_IP_END), Some("192.168.178.250"));
        assert_eq!(data.get_str(keys::DHCP_LEASE_TIME), Some("12h"));
    }
}
