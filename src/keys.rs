// src/keys.rs
//
// Flat sensor keys. The prefix of each key routes it back to its owning
// module via `ModelSpec::module_map`, so keep prefixes in sync with
// `registry::MODULE_MAP`.

pub const INFO_INTERFACE: &str = "info_interface";
pub const INFO_WORK_MODE: &str = "info_work_mode";

pub const SYSTEM_FIRMWARE_VERSION: &str = "system_firmware_version";
pub const SYSTEM_MODEL: &str = "system_model";
pub const SYSTEM_HARDWARE: &str = "system_hardware";
pub const SYSTEM_UPTIME: &str = "system_uptime";
pub const SYSTEM_LOCALTIME: &str = "system_localtime";

pub const MESH_NETWORK: &str = "mesh_network";
pub const MESH_UNITS: &str = "mesh_units";

pub const LAN_IP: &str = "lan_ip";
pub const LAN_SUBNET: &str = "lan_subnet";
pub const LAN_MAC: &str = "lan_mac";

pub const WAN_TYPE: &str = "wan_type";
pub const WAN_IP: &str = "wan_ip";
pub const WAN_UPTIME: &str = "wan_uptime";
pub const WAN_PUBLIC_IP: &str = "wan_public_ip";
pub const WAN_DNS: &str = "wan_dns";

pub const WIFI24_SSID: &str = "24g_ssid";
pub const WIFI24_BSSID: &str = "24g_bssid";
pub const WIFI24_ENCRYPTION: &str = "24g_encryption";
pub const WIFI24_CHANNEL: &str = "24g_channel";

pub const WIFI5_SSID: &str = "5g_ssid";
pub const WIFI5_BSSID: &str = "5g_bssid";
pub const WIFI5_ENCRYPTION: &str = "5g_encryption";
pub const WIFI5_CHANNEL: &str = "5g_channel";

pub const DHCP_IP_START: &str = "dhcp_ip_start";
pub const DHCP_IP_END: &str = "dhcp_ip_end";
pub const DHCP_DNS_PRIMARY: &str = "dhcp_dns_primary";
pub const DHCP_DNS_SECONDARY: &str = "dhcp_dns_secondary";
pub const DHCP_GATEWAY: &str = "dhcp_gateway";
pub const DHCP_LEASE_TIME: &str = "dhcp_lease_time";

pub const GSM_NETWORK_TYPE: &str = "gsm_network_type";
pub const GSM_UPLOAD: &str = "gsm_upload";
pub const GSM_DOWNLOAD: &str = "gsm_download";
pub const GSM_PUBLIC_IP: &str = "gsm_public_ip";
pub const GSM_IP: &str = "gsm_ip";
pub const GSM_CONNECTED_TIME: &str = "gsm_connected_time";

pub const SMS_INBOX: &str = "sms_inbox";
pub const SMS_OUTBOX: &str = "sms_outbox";

pub const DEVICE_COUNT: &str = "device_count";
pub const DEVICE_ONLINE: &str = "device_online";
pub const DEVICE_BLOCKED: &str = "device_blocked";
pub const DEVICE_WIFI24_COUNT: &str = "device_wifi24_count";
pub const DEVICE_WIFI5_COUNT: &str = "device_wifi5_count";
pub const DEVICE_WIRED_COUNT: &str = "device_wired_count";
pub const DEVICE_MESH_COUNT: &str = "device_mesh_count";
