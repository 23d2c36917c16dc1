//! Signal Dashboard — fetches a JSON snapshot of trading signals and renders it into an
//! HTML table. The snapshot is looked up next to the dashboard page (or under the
//! repository prefix on a hosted-pages host), fetched with a cache-busting `v` query
//! parameter, and rendered into the page's `#signalTable` body with the snapshot
//! timestamp in `#updated`. The page is written to `--out` after every successful load.
//!
//! Usage example (CLI):
//! ```bash
//! signal_dashboard --page-url https://trader.github.io/nse-signals/ --out site/index.html --watch 60
//! ```
//!
//! A failed load is logged and leaves the previously written page untouched.
#![warn(missing_docs)]
mod args;
mod loader;
mod model;
mod renderer;
mod session;

use crate::args::Args;
use crate::loader::SnapshotLoader;
use crate::session::DashboardSession;
use clap::Parser;
use log::{info, warn};
use signal_common::Result;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::thread;
use std::time::Duration;

/// Granularity at which the watch loop checks for shutdown while waiting.
const SHUTDOWN_POLL_MS: u64 = 200;

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let timeout = args.timeout_secs.map(Duration::from_secs);
    let loader = SnapshotLoader::new(args.page_url.trim(), args.data_path.trim(), timeout)?;
    info!("Snapshot source: {}", loader.data_url());
    let session = DashboardSession::new(loader, args.out, &args.title);

    let Some(interval_secs) = args.watch else {
        session.refresh();
        return Ok(());
    };

    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        if let Err(e) = ctrlc::set_handler(move || {
            info!("Ctrl+C received. Stopping dashboard refresh...");
            shutdown.store(true, Ordering::SeqCst);
        }) {
            warn!("Ctrl+C handler not installed: {}", e);
        }
    }

    info!(
        "Refreshing {} every {}s. Press Ctrl+C to exit.",
        session.out().display(),
        interval_secs
    );
    run_watch_loop(&session, Duration::from_secs(interval_secs), &shutdown);
    Ok(())
}

/// Runs load cycles every `interval` until `shutdown` is set.
fn run_watch_loop(session: &DashboardSession, interval: Duration, shutdown: &AtomicBool) {
    while !shutdown.load(Ordering::Relaxed) {
        session.refresh();

        let mut waited = Duration::ZERO;
        let step = Duration::from_millis(SHUTDOWN_POLL_MS);
        while waited < interval && !shutdown.load(Ordering::Relaxed) {
            thread::sleep(step.min(interval - waited));
            waited += step;
        }
    }
    info!("Refresh loop stopping...");
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
