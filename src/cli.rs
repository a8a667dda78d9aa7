// src/cli.rs
//
// Offline debug frontend: point it at a directory of saved admin pages
// (system.html, lan.html, devlist.html, ... — one file per module) and it
// runs detection plus a full poll against them, printing the result as
// JSON. Missing files count as empty pages, which is exactly the
// degradation a live router with a missing page would produce.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use std::{env, fs};

use color_eyre::eyre::{Result, eyre};

use crate::config::WatchList;
use crate::record::PresenceSnapshot;
use crate::registry::Registry;
use crate::transport::{FixtureTransport, luci};
use crate::{detect, poll};

const HELP: &str = "\
Usage: cli --dir <pages-dir> [options]

Options:
  --dir <path>     directory of saved page HTML, one file per module
                   (system.html, lan.html, devlist.html, ...)
  --model <id>     skip detection and force a model profile
  --watch <list>   comma-separated watch-list of MACs/hostnames
  --prev <file>    previous snapshot JSON, to exercise the merge
  --now <epoch>    poll timestamp in epoch seconds (default: wall clock)
  -h, --help       this text";

struct Params {
    dir: PathBuf,
    model: Option<String>,
    watch: WatchList,
    prev: Option<PathBuf>,
    now: Option<u64>,
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let params = parse_cli()?;
    let registry = Registry::builtin();
    let transport = dir_transport(&params.dir, &registry)?;

    let model = match &params.model {
        Some(m) => m.clone(),
        None => detect::detect_model(&transport, &registry),
    };
    let spec = registry.get(&model)?;

    let prev: PresenceSnapshot = match &params.prev {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => PresenceSnapshot::new(),
    };
    let now = match params.now {
        Some(n) => n,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs(),
    };

    let report = poll::poll(spec, &transport, &params.watch, &prev, now)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn parse_cli() -> Result<Params> {
    let mut params = Params {
        dir: PathBuf::new(),
        model: None,
        watch: WatchList::default(),
        prev: None,
        now: None,
    };

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--dir" => params.dir = PathBuf::from(args.next().ok_or_else(|| eyre!("Missing value for --dir"))?),
            "--model" => params.model = Some(args.next().ok_or_else(|| eyre!("Missing value for --model"))?),
            "--watch" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --watch"))?;
                params.watch = WatchList::parse(&v);
            }
            "--prev" => params.prev = Some(PathBuf::from(args.next().ok_or_else(|| eyre!("Missing value for --prev"))?)),
            "--now" => params.now = Some(args.next().ok_or_else(|| eyre!("Missing value for --now"))?.parse()?),
            "-h" | "--help" => {
                eprintln!("{HELP}");
                std::process::exit(0);
            }
            other => return Err(eyre!("Unknown arg: {other}")),
        }
    }

    if params.dir.as_os_str().is_empty() {
        return Err(eyre!("--dir is required (see --help)"));
    }
    Ok(params)
}

/// Map every page path any registered profile binds to `<module>.html`
/// in the chosen directory. Absent files become empty pages.
fn dir_transport(dir: &Path, registry: &Registry) -> Result<FixtureTransport> {
    if !dir.is_dir() {
        return Err(eyre!("not a directory: {}", dir.display()));
    }

    let mut transport = FixtureTransport::new();
    let models: Vec<&str> = registry.models().collect();
    for model in models {
        let spec = registry.get(model)?;
        for page in spec.pages {
            let body = read_page(dir, &format!("{}.html", page.module));
            transport.insert(luci(page.path), body);
        }
        if let Some(binding) = &spec.device_list {
            transport.insert(luci(binding.path), read_page(dir, "devlist.html"));
        }
    }
    Ok(transport)
}

fn read_page(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap_or_default()
}
