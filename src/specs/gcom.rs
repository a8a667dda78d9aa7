// src/specs/gcom.rs
//
// Cellular (LTE) pages, present on the modem-router models only.

use crate::extract::{coerce_int, kv_table};
use crate::keys;
use crate::record::{ModuleRecord, Value};

/// Modem status page. The UI renders transferred volume as one
/// "upload / download" cell; split it when both halves are present.
pub fn parse_gsm_info(html: &str) -> ModuleRecord {
    let mut data = kv_table(
        html,
        &[
            (keys::GSM_NETWORK_TYPE, "Network Type"),
            (keys::GSM_DOWNLOAD, "Download"),
            (keys::GSM_UPLOAD, "Upload"),
            (keys::GSM_PUBLIC_IP, "Public IP"),
            (keys::GSM_IP, "IP Address"),
            (keys::GSM_CONNECTED_TIME, "Connected Time"),
        ],
    );

    if let Some(raw) = data.get_str(keys::GSM_UPLOAD) {
        if let Some((up, down)) = raw.split_once('/') {
            let (up, down) = (up.trim().to_string(), down.trim().to_string());
            if !up.is_empty() && !down.is_empty() {
                data.set(keys::GSM_UPLOAD, Value::Text(up));
                data.set(keys::GSM_DOWNLOAD, Value::Text(down));
            }
        }
    }

    data
}

/// SMS inbox/outbox counters page.
pub fn parse_sms_info(html: &str) -> ModuleRecord {
    let mut data = kv_table(
        html,
        &[
            (keys::SMS_INBOX, "Inbox"),
            (keys::SMS_OUTBOX, "Outbox"),
        ],
    );
    coerce_int(&mut data, keys::SMS_INBOX);
    coerce_int(&mut data, keys::SMS_OUTBOX);
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_cell_splits_into_both_directions() {
        let html = "<td>Network Type</td><td>LTE</td>\
                    <td>Upload</td><td>1.2 GB / 8.4 GB</td>";
        let data = parse_gsm_info(html);
        assert_eq!(data.get_str(keys::GSM_UPLOAD), Some("1.2 GB"));
        assert_eq!(data.get_str(keys::GSM_DOWNLOAD), Some("8.4 GB"));
        assert_eq!(data.get_str(keys::GSM_NETWORK_TYPE), Some("LTE"));
    }

    #[test]
    fn missing_upload_stays_sentinel_not_garbled() {
        // "n/a" contains a slash; the split must not turn it into "n" and "a"
        let data = parse_gsm_info("<td>Network Type</td><td>LTE</td>");
        assert_eq!(data.get(keys::GSM_UPLOAD), Some(&Value::Na));
        assert_eq!(data.get(keys::GSM_DOWNLOAD), Some(&Value::Na));
    }

    #[test]
    fn sms_counters_are_ints() {
        let html = "<td>Inbox</td><td>14</td><td>Outbox</td><td>0</td>";
        let data = parse_sms_info(html);
        assert_eq!(data.get(keys::SMS_INBOX), Some(&Value::Int(14)));
        assert_eq!(data.get(keys::SMS_OUTBOX), Some(&Value::Int(0)));
    }
}
