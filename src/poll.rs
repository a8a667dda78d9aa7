// src/poll.rs
//
// One poll of one router: fetch every page the profile binds, run its
// parser, then fold the device list into presence state. Junk or empty
// pages degrade to sentinel-filled records; only a transport failure
// aborts the poll, and it is handed to the caller to decide retry policy.
//
// Synchronous and stateless per call. The caller owns exactly one
// current snapshot per target and feeds it back in on the next poll.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::config::WatchList;
use crate::error::Error;
use crate::presence::{self, DeviceStats};
use crate::record::{DeviceRecord, ModuleRecord, PresenceSnapshot};
use crate::registry::{ModelSpec, Module};
use crate::transport::{Transport, luci};

/// Raw per-module extraction output, before any presence folding.
#[derive(Debug, Clone, Serialize)]
pub struct PollData {
    pub modules: BTreeMap<Module, ModuleRecord>,
    pub devices: Vec<DeviceRecord>,
}

/// Fetch and parse every page a profile binds.
pub fn collect(spec: &ModelSpec, transport: &dyn Transport) -> Result<PollData, Error> {
    let mut modules = BTreeMap::new();
    for page in spec.pages {
        let html = transport.fetch(&luci(page.path))?;
        modules.insert(page.module, (page.parser)(&html));
    }

    let mut devices = Vec::new();
    if let Some(binding) = &spec.device_list {
        let html = transport.fetch(&luci(binding.path))?;
        devices = (binding.parser)(&html);
    }

    debug!(model = spec.model, pages = spec.pages.len(), devices = devices.len(), "poll collected");
    Ok(PollData { modules, devices })
}

/// Full poll result, presence included.
#[derive(Debug, Clone, Serialize)]
pub struct PollReport {
    pub modules: BTreeMap<Module, ModuleRecord>,
    /// Device list ordered for display (ascending online duration).
    pub devices: Vec<DeviceRecord>,
    pub stats: DeviceStats,
    /// Replacement snapshot; publish by swapping the caller's reference.
    pub snapshot: PresenceSnapshot,
}

/// `collect` + presence merge. `now` is epoch seconds from the caller's
/// clock; `prev` is the snapshot the previous poll produced.
pub fn poll(
    spec: &ModelSpec,
    transport: &dyn Transport,
    watch: &WatchList,
    prev: &PresenceSnapshot,
    now: u64,
) -> Result<PollReport, Error> {
    let data = collect(spec, transport)?;
    let report = presence::track(data.devices, watch, prev, now);
    Ok(PollReport {
        modules: data.modules,
        devices: report.devices,
        stats: report.stats,
        snapshot: report.snapshot,
    })
}
