// src/presence.rs
//
// Folds one poll's device list into the previous presence snapshot.
// Devices drop out of the router's table while they sleep or roam; for
// watched identifiers the last known record is kept so "last seen" stays
// answerable. The tracker never edits the previous snapshot: each merge
// returns a fresh map, and callers publish it by replacing their single
// reference — concurrent readers either see the old snapshot or the new
// one, never a half-written mix.

use serde::Serialize;

use crate::config::WatchList;
use crate::record::{DeviceRecord, PresenceSnapshot};
use crate::specs::devlist::speed_mbps;

/// Online duration in minutes, for ordering. `H:MM:SS` counts hours and
/// minutes; `M:SS` counts the leading minutes. Anything else (`---`,
/// sentinels, day-prefixed forms) fails to parse and sorts last.
pub fn duration_minutes(raw: &str) -> Option<u64> {
    let s = raw.trim();
    if s.is_empty() || s == "---" || s.eq_ignore_ascii_case("n/a") {
        return None;
    }
    let parts: Vec<&str> = s.split(':').collect();
    match parts.as_slice() {
        [h, m, _secs] => {
            let h: u64 = h.trim().parse().ok()?;
            let m: u64 = m.trim().parse().ok()?;
            Some(h * 60 + m)
        }
        [m, _secs] => m.trim().parse().ok(),
        _ => None,
    }
}

/// The record that won a per-direction throughput maximum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopTalker {
    pub mac: String,
    pub hostname: String,
    pub mbps: f64,
}

/// Aggregates over one poll's device list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeviceStats {
    pub device_count: usize,
    pub top_uploader: Option<TopTalker>,
    pub top_downloader: Option<TopTalker>,
    pub total_upload_mbps: f64,
    pub total_download_mbps: f64,
}

/// Everything the merge produces: the display-ordered device list, the
/// aggregates, and the replacement snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct PresenceReport {
    pub devices: Vec<DeviceRecord>,
    pub stats: DeviceStats,
    pub snapshot: PresenceSnapshot,
}

/// Merge a freshly extracted device list with the previous snapshot.
///
/// `now` is epoch seconds supplied by the caller; the tracker holds no
/// clock of its own.
pub fn track(
    mut devices: Vec<DeviceRecord>,
    watch: &WatchList,
    prev: &PresenceSnapshot,
    now: u64,
) -> PresenceReport {
    // Aggregates go first, over the list in extraction order. The sort
    // below would reshuffle ties and make top-talker selection depend on
    // online durations.
    let stats = stats_of(&devices);

    // Least-recently-connected devices sort last. Stable, so equal
    // durations keep their extraction order.
    devices.sort_by_key(|d| duration_minutes(&d.online_time).unwrap_or(u64::MAX));

    let mut snapshot = PresenceSnapshot::new();
    for device in &devices {
        let Some(id) = watch_id(device, watch) else {
            continue;
        };
        let mut rec = device.clone();
        rec.last_seen = Some(now);
        // An out-of-order poll or a backwards clock must not move
        // "last seen" backwards.
        if let Some(prev_seen) = prev.get(id).and_then(|r| r.last_seen) {
            if prev_seen > now {
                rec.last_seen = Some(prev_seen);
            }
        }
        snapshot.insert(id.to_string(), rec);
    }

    // Watched identifiers absent from this poll keep their previous
    // record untouched, stale stamp included.
    for id in watch.iter() {
        if !snapshot.contains_key(id) {
            if let Some(old) = prev.get(id) {
                snapshot.insert(id.to_string(), old.clone());
            }
        }
    }

    PresenceReport { devices, stats, snapshot }
}

/// MAC if watched, else hostname if watched, else untracked.
fn watch_id<'a>(device: &'a DeviceRecord, watch: &WatchList) -> Option<&'a str> {
    if watch.contains(&device.mac) {
        Some(&device.mac)
    } else if watch.contains(&device.hostname) {
        Some(&device.hostname)
    } else {
        None
    }
}

fn stats_of(devices: &[DeviceRecord]) -> DeviceStats {
    let mut stats = DeviceStats {
        device_count: devices.len(),
        ..DeviceStats::default()
    };

    let mut best_up = f64::NEG_INFINITY;
    let mut best_down = f64::NEG_INFINITY;
    for device in devices {
        let up = speed_mbps(&device.upload_speed);
        let down = speed_mbps(&device.download_speed);
        stats.total_upload_mbps += up;
        stats.total_download_mbps += down;

        // strictly greater: the first record achieving a maximum keeps it
        if up > best_up {
            best_up = up;
            stats.top_uploader = Some(talker(device, up));
        }
        if down > best_down {
            best_down = down;
            stats.top_downloader = Some(talker(device, down));
        }
    }
    stats
}

fn talker(device: &DeviceRecord, mbps: f64) -> TopTalker {
    TopTalker {
        mac: device.mac.clone(),
        hostname: device.hostname.clone(),
        mbps,
    }
}
