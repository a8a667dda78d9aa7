// src/specs/devlist.rs
//
// Connected-device table. Unlike the status pages there are no labels to
// anchor on: column order, cell nesting and headers all drift between
// firmware builds. So rows are discovered by a fallback chain and every
// field is recovered by its own independent classifier over the row's
// cell texts. A row that defeats every classifier yields no record; a
// malformed row never disturbs its neighbors.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::core::html::{inner_after_open_tag, next_tag_block_ci, open_tag_lower, strip_tags_sep};
use crate::core::text::{normalize_entities, normalize_ws};
use crate::record::{ConnectionType, DeviceRecord, NA};

static MAC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{2}([:\-][0-9A-Fa-f]{2}){5}$").unwrap());
static IP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}(\.\d{1,3}){3}$").unwrap());
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,\s/|]+").unwrap());
static SIGNAL_DBM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(-\d{1,3})\s*dBm").unwrap());
static SIGNAL_BARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s(-\d{1,3}|---)\s").unwrap());
static UP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"↑\s*([\d.]+)\s*([A-Za-z/]+)").unwrap());
static DOWN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"↓\s*([\d.]+)\s*([A-Za-z/]+)").unwrap());
static ONLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+d\s*)?\d{1,2}:\d{2}:\d{2}").unwrap());
static SPEED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*([kmg]?bps)").unwrap());

/// Extract one record per classifiable table row. Empty or unrecognizable
/// input yields an empty list, never an error.
pub fn parse_device_list(html: &str) -> Vec<DeviceRecord> {
    if html.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    for row in table_rows(html) {
        if let Some(rec) = parse_row(row) {
            out.push(rec);
        }
    }
    debug!(devices = out.len(), "device table extracted");
    out
}

/// Row discovery fallback chain: rows following the `cbi-table-` id
/// convention → any table-body row → none.
fn table_rows(html: &str) -> Vec<&str> {
    let mut all = Vec::new();
    let mut conventional = Vec::new();

    let mut tpos = 0usize;
    while let Some((ts, te)) = next_tag_block_ci(html, "<table", "</table>", tpos) {
        let table = &html[ts..te];
        tpos = te;

        let body = match next_tag_block_ci(table, "<tbody", "</tbody>", 0) {
            Some((bs, be)) => &table[bs..be],
            None => table,
        };

        let mut rpos = 0usize;
        while let Some((rs, re)) = next_tag_block_ci(body, "<tr", "</tr>", rpos) {
            let row = &body[rs..re];
            rpos = re;
            if open_tag_lower(row).contains("cbi-table-") {
                conventional.push(row);
            }
            all.push(row);
        }
    }

    if !conventional.is_empty() { conventional } else { all }
}

fn parse_row(row: &str) -> Option<DeviceRecord> {
    let raw_cells = cell_blocks(row);
    if raw_cells.is_empty() {
        return None;
    }
    let cells: Vec<String> = raw_cells
        .iter()
        .map(|inner| normalize_ws(&strip_tags_sep(&normalize_entities(inner), ' ')))
        .collect();

    let (mac, ip) = scan_mac_ip(&cells);
    if mac.is_none() && ip.is_none() {
        return None;
    }

    let hostname = match hostname_of(raw_cells[0]) {
        Some(h) if !h.eq_ignore_ascii_case("unknown") => h,
        // placeholder or empty first cell: the IP is the next best name
        _ => ip.clone().unwrap_or_else(|| NA.into()),
    };

    let (upload, download) = speeds_of(&cells);

    Some(DeviceRecord {
        hostname,
        ip: ip.unwrap_or_else(|| NA.into()),
        mac: mac.unwrap_or_else(|| NA.into()),
        upload_speed: upload.unwrap_or_else(|| NA.into()),
        download_speed: download.unwrap_or_else(|| NA.into()),
        signal: signal_of(&cells).unwrap_or_else(|| NA.into()),
        online_time: online_of(&cells).unwrap_or_else(|| NA.into()),
        connection: connection_of(&cells),
        last_seen: None,
    })
}

/// Inner HTML of each `<td>`/`<th>` cell, in document order.
fn cell_blocks(row: &str) -> Vec<&str> {
    let mut cells = Vec::new();
    let mut pos = 0usize;
    loop {
        let td = next_tag_block_ci(row, "<td", "</td>", pos);
        let th = next_tag_block_ci(row, "<th", "</th>", pos);
        let (s, e) = match (td, th) {
            (Some(a), Some(b)) => {
                if a.0 <= b.0 { a } else { b }
            }
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => break,
        };
        cells.push(inner_after_open_tag(&row[s..e]));
        pos = e;
    }
    cells
}

/* ---------- field classifiers, one per concern ---------- */

/// First MAC-shaped and first IP-shaped token across all cells,
/// from one shared token stream.
fn scan_mac_ip(cells: &[String]) -> (Option<String>, Option<String>) {
    let mut mac = None;
    let mut ip = None;
    for text in cells {
        for tok in TOKEN_RE.split(text).filter(|t| !t.is_empty()) {
            if mac.is_none() && MAC_RE.is_match(tok) {
                mac = Some(tok.to_string());
            } else if ip.is_none() && IP_RE.is_match(tok) {
                ip = Some(tok.to_string());
            }
        }
        if mac.is_some() && ip.is_some() {
            break;
        }
    }
    (mac, ip)
}

/// First line of a cell's text, whitespace-normalized.
fn hostname_of(raw_cell: &str) -> Option<String> {
    strip_tags_sep(&normalize_entities(raw_cell), '\n')
        .lines()
        .map(normalize_ws)
        .find(|l| !l.is_empty())
}

/// `-NN dBm` anywhere in a cell; failing that, a space-delimited bare
/// signed integer or the `---` placeholder.
fn signal_of(cells: &[String]) -> Option<String> {
    for text in cells {
        if let Some(cap) = SIGNAL_DBM_RE.captures(text) {
            return Some(cap[1].to_string());
        }
    }
    for text in cells {
        let padded = format!(" {text} ");
        if let Some(cap) = SIGNAL_BARE_RE.captures(&padded) {
            return Some(cap[1].to_string());
        }
    }
    None
}

/// Up/down throughput from the directional arrow markers, resolved
/// independently; each takes its first match across the row.
fn speeds_of(cells: &[String]) -> (Option<String>, Option<String>) {
    let mut up = None;
    let mut down = None;
    for text in cells {
        if up.is_none() {
            if let Some(cap) = UP_RE.captures(text) {
                up = Some(format!("{}{}", &cap[1], &cap[2]));
            }
        }
        if down.is_none() {
            if let Some(cap) = DOWN_RE.captures(text) {
                down = Some(format!("{}{}", &cap[1], &cap[2]));
            }
        }
    }
    (up, down)
}

/// `[<days>d ]H:MM:SS`, first match across the row.
fn online_of(cells: &[String]) -> Option<String> {
    for text in cells {
        if let Some(m) = ONLINE_RE.find(text) {
            return Some(m.as_str().to_string());
        }
    }
    None
}

/// Keyword containment over the joined lowercased row text.
/// Priority: wifi before mesh before wired.
fn connection_of(cells: &[String]) -> ConnectionType {
    let joined = cells.join(" ").to_lowercase();
    if joined.contains("wifi") {
        ConnectionType::Wifi
    } else if joined.contains("mesh") {
        ConnectionType::Mesh
    } else if joined.contains("lan") || joined.contains("ethernet") || joined.contains("wired") {
        ConnectionType::Wired
    } else {
        ConnectionType::Na
    }
}

/// Convert a raw throughput string (`12.5Mbps`, `980 Kbps`, …) to Mbps.
/// Anything unparseable counts as zero for aggregation purposes.
pub fn speed_mbps(raw: &str) -> f64 {
    let Some(cap) = SPEED_RE.captures(raw) else {
        return 0.0;
    };
    let value: f64 = match cap[1].parse() {
        Ok(v) => v,
        Err(_) => return 0.0,
    };
    match cap[2].to_ascii_lowercase().as_str() {
        "gbps" => value * 1024.0,
        "mbps" => value,
        "kbps" => round2(value / 1024.0),
        "bps" => round2(value / 1024.0 / 1024.0),
        _ => 0.0,
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
