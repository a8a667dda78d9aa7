// src/registry.rs
//
// Which pages exist on which router model, and which spec parses each.
// The registry is a plain value built once at startup and passed by
// reference to whatever needs lookups; there is no ambient global table.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::error::Error;
use crate::keys;
use crate::record::{DeviceRecord, ModuleRecord};
use crate::specs::{devices, devlist, gcom, network, system, wireless};

/// Fallback profile id. Always registered by `Registry::builtin`.
pub const GENERIC_MODEL: &str = "Generic";

/// Telemetry category: one admin page, one parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Module {
    Info,
    System,
    Mesh,
    Lan,
    Wan,
    Wireless24g,
    Wireless5g,
    Dhcp,
    Gsm,
    Sms,
    Devices,
}

impl Module {
    pub fn as_str(&self) -> &'static str {
        match self {
            Module::Info => "info",
            Module::System => "system",
            Module::Mesh => "mesh",
            Module::Lan => "lan",
            Module::Wan => "wan",
            Module::Wireless24g => "24g",
            Module::Wireless5g => "5g",
            Module::Dhcp => "dhcp",
            Module::Gsm => "gsm",
            Module::Sms => "sms",
            Module::Devices => "devices",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Module {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(self.as_str())
    }
}

/// Host surfaces a model exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Sensor,
    Button,
    DeviceTracker,
}

pub type PageParser = fn(&str) -> ModuleRecord;
pub type DeviceListParser = fn(&str) -> Vec<DeviceRecord>;

/// One page of a profile: where it lives and how to read it.
#[derive(Debug, Clone, Copy)]
pub struct PageBinding {
    pub module: Module,
    pub path: &'static str,
    pub parser: PageParser,
}

#[derive(Debug, Clone, Copy)]
pub struct DeviceListBinding {
    pub path: &'static str,
    pub parser: DeviceListParser,
}

/// Display hints for one sensor key.
#[derive(Debug, Clone, Copy)]
pub struct SensorDesc {
    pub key: &'static str,
    pub icon: &'static str,
    pub diagnostic: bool,
    pub measurement: bool,
}

const fn diag(key: &'static str, icon: &'static str) -> SensorDesc {
    SensorDesc { key, icon, diagnostic: true, measurement: false }
}

const fn meas(key: &'static str, icon: &'static str) -> SensorDesc {
    SensorDesc { key, icon, diagnostic: false, measurement: true }
}

/// Declarative profile for one router model.
#[derive(Debug, Clone, Copy)]
pub struct ModelSpec {
    pub model: &'static str,
    pub pages: &'static [PageBinding],
    pub device_list: Option<DeviceListBinding>,
    pub platforms: &'static [Platform],
    pub supports_reboot: bool,
    pub module_map: &'static [(&'static str, Module)],
    pub sensors: &'static [SensorDesc],
}

impl ModelSpec {
    /// Route a flat sensor key back to its owning module by prefix.
    pub fn module_for_key(&self, key: &str) -> Option<Module> {
        self.module_map
            .iter()
            .find(|(prefix, _)| key.starts_with(prefix))
            .map(|(_, module)| *module)
    }
}

/// Key-prefix routing shared by every profile. Ordered; first match wins.
pub static MODULE_MAP: &[(&str, Module)] = &[
    ("info_", Module::Info),
    ("system_", Module::System),
    ("mesh_", Module::Mesh),
    ("lan_", Module::Lan),
    ("wan_", Module::Wan),
    ("24g_", Module::Wireless24g),
    ("5g_", Module::Wireless5g),
    ("dhcp_", Module::Dhcp),
    ("gsm_", Module::Gsm),
    ("sms_", Module::Sms),
    ("device_", Module::Devices),
];

/* ---------- shared page paths ---------- */

pub const SYSTEM_STATUS_PAGE: &str = "/admin/system/status?detail=1";
const LAN_STATUS_PAGE: &str = "/admin/network/lan/status?detail=1";
const WAN_STATUS_PAGE: &str = "/admin/network/wan/status?detail=1";
const MESH_STATUS_PAGE: &str = "/admin/network/mesh/status?detail=1";
const DHCP_STATUS_PAGE: &str = "/admin/services/dhcp/status?detail=1";
const DEVICES_STATUS_PAGE: &str = "/admin/network/devices/status?detail=1";
const DEVICE_LIST_PAGE: &str = "/admin/network/devices/devlist?detail=1";
const WIRELESS_24G_PAGE: &str = "/admin/network/wireless/status?detail=1&iface=wlan00";
const WIRELESS_5G_PAGE: &str = "/admin/network/wireless/status?detail=1&iface=wlan10";
const WIZARD_PAGE: &str = "/admin/system/wizard";
const GSM_STATUS_PAGE: &str = "/admin/network/gcom/status";
const SMS_STATUS_PAGE: &str = "/admin/network/gcom/sms/status";

/* ---------- built-in profiles ---------- */

static GENERIC_PAGES: &[PageBinding] = &[
    PageBinding { module: Module::System, path: SYSTEM_STATUS_PAGE, parser: system::parse_system_info },
    PageBinding { module: Module::Lan, path: LAN_STATUS_PAGE, parser: network::parse_lan_info },
    PageBinding { module: Module::Devices, path: DEVICES_STATUS_PAGE, parser: devices::parse_simple_devices },
];

static GENERIC_SENSORS: &[SensorDesc] = &[
    diag(keys::SYSTEM_FIRMWARE_VERSION, "mdi:chip"),
    diag(keys::SYSTEM_HARDWARE, "mdi:router-wireless"),
    diag(keys::SYSTEM_UPTIME, "mdi:timer-outline"),
    diag(keys::SYSTEM_LOCALTIME, "mdi:clock-outline"),
    diag(keys::LAN_IP, "mdi:ip-network"),
    diag(keys::LAN_SUBNET, "mdi:ip-network-outline"),
    diag(keys::LAN_MAC, "mdi:network-pos"),
    meas(keys::DEVICE_COUNT, "mdi:devices"),
];

pub static GENERIC_SPEC: ModelSpec = ModelSpec {
    model: GENERIC_MODEL,
    pages: GENERIC_PAGES,
    device_list: Some(DeviceListBinding { path: DEVICE_LIST_PAGE, parser: devlist::parse_device_list }),
    platforms: &[Platform::Sensor, Platform::DeviceTracker],
    supports_reboot: false,
    module_map: MODULE_MAP,
    sensors: GENERIC_SENSORS,
};

static WR6500_PAGES: &[PageBinding] = &[
    PageBinding { module: Module::System, path: SYSTEM_STATUS_PAGE, parser: system::parse_system_info },
    PageBinding { module: Module::Mesh, path: MESH_STATUS_PAGE, parser: wireless::parse_mesh_info },
    PageBinding { module: Module::Lan, path: LAN_STATUS_PAGE, parser: network::parse_lan_info },
    PageBinding { module: Module::Wan, path: WAN_STATUS_PAGE, parser: network::parse_wan_info },
    PageBinding { module: Module::Wireless24g, path: WIRELESS_24G_PAGE, parser: wireless::parse_wireless_24g_info },
    PageBinding { module: Module::Wireless5g, path: WIRELESS_5G_PAGE, parser: wireless::parse_wireless_5g_info },
    PageBinding { module: Module::Dhcp, path: DHCP_STATUS_PAGE, parser: network::parse_dhcp_info },
    PageBinding { module: Module::Devices, path: DEVICES_STATUS_PAGE, parser: devices::parse_devices },
];

static WR6500_SENSORS: &[SensorDesc] = &[
    diag(keys::SYSTEM_FIRMWARE_VERSION, "mdi:chip"),
    diag(keys::SYSTEM_HARDWARE, "mdi:router-wireless"),
    diag(keys::SYSTEM_UPTIME, "mdi:timer-outline"),
    diag(keys::SYSTEM_LOCALTIME, "mdi:clock-outline"),
    diag(keys::MESH_NETWORK, "mdi:lan"),
    meas(keys::MESH_UNITS, "mdi:access-point"),
    diag(keys::LAN_IP, "mdi:ip-network"),
    diag(keys::LAN_SUBNET, "mdi:ip-network-outline"),
    diag(keys::LAN_MAC, "mdi:network-pos"),
    diag(keys::WAN_TYPE, "mdi:wan"),
    diag(keys::WAN_IP, "mdi:ip"),
    diag(keys::WAN_PUBLIC_IP, "mdi:ip-outline"),
    diag(keys::WAN_DNS, "mdi:dns"),
    diag(keys::WAN_UPTIME, "mdi:timer-sand"),
    diag(keys::WIFI24_SSID, "mdi:wifi"),
    meas(keys::WIFI24_CHANNEL, "mdi:radio-tower"),
    diag(keys::WIFI5_SSID, "mdi:wifi"),
    meas(keys::WIFI5_CHANNEL, "mdi:radio-tower"),
    diag(keys::DHCP_IP_START, "mdi:counter"),
    diag(keys::DHCP_IP_END, "mdi:counter"),
    diag(keys::DHCP_GATEWAY, "mdi:router-network"),
    diag(keys::DHCP_LEASE_TIME, "mdi:timer-sand"),
    meas(keys::DEVICE_COUNT, "mdi:devices"),
    meas(keys::DEVICE_WIFI24_COUNT, "mdi:wifi"),
    meas(keys::DEVICE_WIFI5_COUNT, "mdi:wifi"),
    meas(keys::DEVICE_WIRED_COUNT, "mdi:ethernet"),
    meas(keys::DEVICE_MESH_COUNT, "mdi:access-point"),
];

pub static WR6500_SPEC: ModelSpec = ModelSpec {
    model: "WR6500",
    pages: WR6500_PAGES,
    device_list: Some(DeviceListBinding { path: DEVICE_LIST_PAGE, parser: devlist::parse_device_list }),
    platforms: &[Platform::Sensor, Platform::Button, Platform::DeviceTracker],
    supports_reboot: true,
    module_map: MODULE_MAP,
    sensors: WR6500_SENSORS,
};

static R700_PAGES: &[PageBinding] = &[
    PageBinding { module: Module::System, path: SYSTEM_STATUS_PAGE, parser: system::parse_system_info },
    PageBinding { module: Module::Lan, path: LAN_STATUS_PAGE, parser: network::parse_lan_info },
    PageBinding { module: Module::Wan, path: WAN_STATUS_PAGE, parser: network::parse_wan_info },
    PageBinding { module: Module::Dhcp, path: DHCP_STATUS_PAGE, parser: network::parse_dhcp_info },
    PageBinding { module: Module::Devices, path: DEVICES_STATUS_PAGE, parser: devices::parse_simple_devices },
];

static R700_SENSORS: &[SensorDesc] = &[
    diag(keys::SYSTEM_FIRMWARE_VERSION, "mdi:chip"),
    diag(keys::SYSTEM_HARDWARE, "mdi:router-wireless"),
    diag(keys::SYSTEM_UPTIME, "mdi:timer-outline"),
    diag(keys::LAN_IP, "mdi:ip-network"),
    diag(keys::WAN_TYPE, "mdi:wan"),
    diag(keys::WAN_IP, "mdi:ip"),
    diag(keys::WAN_PUBLIC_IP, "mdi:ip-outline"),
    diag(keys::WAN_DNS, "mdi:dns"),
    diag(keys::WAN_UPTIME, "mdi:timer-sand"),
    diag(keys::DHCP_IP_START, "mdi:counter"),
    diag(keys::DHCP_IP_END, "mdi:counter"),
    meas(keys::DEVICE_COUNT, "mdi:devices"),
    meas(keys::DEVICE_ONLINE, "mdi:check-network"),
    meas(keys::DEVICE_BLOCKED, "mdi:network-off"),
];

pub static R700_SPEC: ModelSpec = ModelSpec {
    model: "R700",
    pages: R700_PAGES,
    device_list: Some(DeviceListBinding { path: DEVICE_LIST_PAGE, parser: devlist::parse_device_list }),
    platforms: &[Platform::Sensor, Platform::Button, Platform::DeviceTracker],
    supports_reboot: true,
    module_map: MODULE_MAP,
    sensors: R700_SENSORS,
};

static P5_PAGES: &[PageBinding] = &[
    PageBinding { module: Module::Info, path: WIZARD_PAGE, parser: system::parse_basic_info },
    PageBinding { module: Module::System, path: SYSTEM_STATUS_PAGE, parser: system::parse_system_info },
    PageBinding { module: Module::Mesh, path: MESH_STATUS_PAGE, parser: wireless::parse_mesh_info },
    PageBinding { module: Module::Lan, path: LAN_STATUS_PAGE, parser: network::parse_lan_info },
    PageBinding { module: Module::Wireless24g, path: WIRELESS_24G_PAGE, parser: wireless::parse_wireless_24g_info },
    PageBinding { module: Module::Wireless5g, path: WIRELESS_5G_PAGE, parser: wireless::parse_wireless_5g_info },
    PageBinding { module: Module::Dhcp, path: DHCP_STATUS_PAGE, parser: network::parse_dhcp_info },
    PageBinding { module: Module::Gsm, path: GSM_STATUS_PAGE, parser: gcom::parse_gsm_info },
    PageBinding { module: Module::Sms, path: SMS_STATUS_PAGE, parser: gcom::parse_sms_info },
    PageBinding { module: Module::Devices, path: DEVICES_STATUS_PAGE, parser: devices::parse_devices },
];

static P5_SENSORS: &[SensorDesc] = &[
    diag(keys::INFO_WORK_MODE, "mdi:cog"),
    diag(keys::INFO_INTERFACE, "mdi:ethernet-cable"),
    diag(keys::SYSTEM_FIRMWARE_VERSION, "mdi:chip"),
    diag(keys::SYSTEM_HARDWARE, "mdi:router-wireless"),
    diag(keys::SYSTEM_UPTIME, "mdi:timer-outline"),
    diag(keys::MESH_NETWORK, "mdi:lan"),
    meas(keys::MESH_UNITS, "mdi:access-point"),
    diag(keys::LAN_IP, "mdi:ip-network"),
    diag(keys::WIFI24_SSID, "mdi:wifi"),
    meas(keys::WIFI24_CHANNEL, "mdi:radio-tower"),
    diag(keys::WIFI5_SSID, "mdi:wifi"),
    meas(keys::WIFI5_CHANNEL, "mdi:radio-tower"),
    diag(keys::DHCP_IP_START, "mdi:counter"),
    diag(keys::DHCP_IP_END, "mdi:counter"),
    diag(keys::GSM_NETWORK_TYPE, "mdi:signal-4g"),
    diag(keys::GSM_UPLOAD, "mdi:upload"),
    diag(keys::GSM_DOWNLOAD, "mdi:download"),
    diag(keys::GSM_PUBLIC_IP, "mdi:ip-outline"),
    diag(keys::GSM_CONNECTED_TIME, "mdi:timer-sand"),
    meas(keys::SMS_INBOX, "mdi:email-arrow-left"),
    meas(keys::SMS_OUTBOX, "mdi:email-arrow-right"),
    meas(keys::DEVICE_COUNT, "mdi:devices"),
];

pub static P5_SPEC: ModelSpec = ModelSpec {
    model: "P5",
    pages: P5_PAGES,
    device_list: Some(DeviceListBinding { path: DEVICE_LIST_PAGE, parser: devlist::parse_device_list }),
    platforms: &[Platform::Sensor, Platform::Button, Platform::DeviceTracker],
    supports_reboot: true,
    module_map: MODULE_MAP,
    sensors: P5_SENSORS,
};

/* ---------- registry ---------- */

#[derive(Debug, Default)]
pub struct Registry {
    specs: BTreeMap<&'static str, ModelSpec>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// All built-in profiles. Call once at startup.
    pub fn builtin() -> Self {
        let mut reg = Self::new();
        for spec in [GENERIC_SPEC, WR6500_SPEC, R700_SPEC, P5_SPEC] {
            reg.register(spec);
        }
        reg
    }

    /// Insert a profile. A later registration under the same id replaces
    /// the earlier one; that is only legitimate for deliberate overrides,
    /// so it is logged.
    pub fn register(&mut self, spec: ModelSpec) {
        if self.specs.insert(spec.model, spec).is_some() {
            warn!(model = spec.model, "replacing previously registered model spec");
        }
    }

    /// Exact id match, else the generic fallback, else a configuration
    /// error — a deployment without even the fallback profile is broken
    /// packaging, not a runtime condition.
    pub fn get(&self, model: &str) -> Result<&ModelSpec, Error> {
        if let Some(spec) = self.specs.get(model) {
            return Ok(spec);
        }
        if let Some(spec) = self.specs.get(GENERIC_MODEL) {
            debug!(model, "unknown model, using generic profile");
            return Ok(spec);
        }
        Err(Error::NoSpec { model: model.to_string() })
    }

    /// Canonical registered id for a raw model string (trimmed,
    /// case-insensitive), if any.
    pub fn canonical(&self, raw: &str) -> Option<&'static str> {
        let wanted = raw.trim();
        if let Some(spec) = self.specs.get(wanted) {
            return Some(spec.model);
        }
        self.specs
            .values()
            .find(|spec| spec.model.eq_ignore_ascii_case(wanted))
            .map(|spec| spec.model)
    }

    pub fn models(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.specs.values().map(|spec| spec.model)
    }
}
