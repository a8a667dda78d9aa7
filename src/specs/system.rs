// src/specs/system.rs

use crate::core::text::text_lines;
use crate::extract::{kv_table, lookup};
use crate::keys;
use crate::record::{ModuleRecord, Value};

/// System status page: firmware, model, hardware revision, uptimes.
pub fn parse_system_info(html: &str) -> ModuleRecord {
    let mut data = kv_table(
        html,
        &[
            (keys::SYSTEM_FIRMWARE_VERSION, "Firmware Version"),
            (keys::SYSTEM_MODEL, "Model"),
            (keys::SYSTEM_HARDWARE, "Hardware"),
            (keys::SYSTEM_UPTIME, "System Uptime"),
            (keys::SYSTEM_LOCALTIME, "Local Time"),
        ],
    );

    // Some firmware builds label the rows "Uptime" / "Local time" instead.
    let lines = text_lines(html);
    if let Some(uptime) = lookup(&lines, "Uptime") {
        data.set(keys::SYSTEM_UPTIME, Value::text(uptime));
    }
    if let Some(local) = lookup(&lines, "Local Time") {
        data.set(keys::SYSTEM_LOCALTIME, Value::text(local));
    }

    data
}

/// Setup-wizard summary page (mesh satellites expose it): operating mode.
pub fn parse_basic_info(html: &str) -> ModuleRecord {
    kv_table(
        html,
        &[
            (keys::INFO_INTERFACE, "Interface"),
            (keys::INFO_WORK_MODE, "Work Mode"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYSTEM_HTML: &str = "\
        <table><tbody>\
        <tr><td>Firmware Version</td><td>2.3.15-20250805-113843</td></tr>\
        <tr><td>Model</td><td>WR6500</td></tr>\
        <tr><td>Hardware</td><td>WR6500 V1.0</td></tr>\
        <tr><td>System Uptime</td><td>08:09:48</td></tr>\
        <tr><td>Local Time</td><td>2025-08-05 13:02:11</td></tr>\
        </tbody></table>";

    #[test]
    fn extracts_all_system_fields() {
        let data = parse_system_info(SYSTEM_HTML);
        assert_eq!(data.get_str(keys::SYSTEM_FIRMWARE_VERSION), Some("2.3.15-20250805-113843"));
        assert_eq!(data.get_str(keys::SYSTEM_MODEL), Some("WR6500"));
        assert_eq!(data.get_str(keys::SYSTEM_HARDWARE), Some("WR6500 V1.0"));
        assert_eq!(data.get_str(keys::SYSTEM_UPTIME), Some("08:09:48"));
    }

    #[test]
    fn bare_uptime_label_refines_the_value() {
        let html = "<div>Uptime</div><div>3:14:15</div>";
        let data = parse_system_info(html);
        assert_eq!(data.get_str(keys::SYSTEM_UPTIME), Some("3:14:15"));
        // the primary label was absent, the secondary pass filled it
        assert_eq!(data.get(keys::SYSTEM_MODEL), Some(&Value::Na));
    }

    #[test]
    fn empty_page_is_all_sentinels() {
        let data = parse_system_info("");
        assert!(data.iter().all(|(_, v)| v.is_na()));
    }

    #[test]
    fn wizard_page_work_mode() {
        let html = "<td>Work Mode</td><td>Mesh Router</td><td>Interface</td><td>WAN</td>";
        let data = parse_basic_info(html);
        assert_eq!(data.get_str(keys::INFO_WORK_MODE), Some("Mesh Router"));
        assert_eq!(data.get_str(keys::INFO_INTERFACE), Some("WAN"));
    }
}
