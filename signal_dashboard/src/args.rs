//! Command-line arguments for the signal dashboard.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use crate::model::page::DEFAULT_TITLE;
use clap::Parser;
use signal_common::source::DEFAULT_DATA_PATH;
use std::path::PathBuf;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// URL the dashboard page is served from. The snapshot is resolved relative to it,
    /// or under the repository prefix on a hosted-pages host.
    #[clap(long, default_value = "http://localhost:8000/")]
    pub page_url: String,

    /// Snapshot location relative to the page.
    #[clap(long, default_value = DEFAULT_DATA_PATH)]
    pub data_path: String,

    /// HTML file the rendered page is written to.
    #[clap(long, default_value = "dashboard/index.html")]
    pub out: PathBuf,

    /// Title shown in the page heading and browser tab.
    #[clap(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Reload the snapshot every N seconds (at least 1) until Ctrl+C. Runs a single
    /// cycle when omitted.
    #[clap(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub watch: Option<u64>,

    /// Optional request timeout in seconds. Requests never time out when omitted.
    #[clap(long)]
    pub timeout_secs: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_local_single_run() {
        let args = Args::parse_from(["signal_dashboard"]);
        assert_eq!(args.page_url, "http://localhost:8000/");
        assert_eq!(args.data_path, "data/signal.json");
        assert_eq!(args.out, PathBuf::from("dashboard/index.html"));
        assert_eq!(args.title, "Trading Signals");
        assert!(args.watch.is_none());
        assert!(args.timeout_secs.is_none());
    }

    #[test]
    fn watch_and_page_url_are_parsed() {
        let args = Args::parse_from([
            "signal_dashboard",
            "--page-url",
            "https://trader.github.io/nse-signals/",
            "--watch",
            "30",
        ]);
        assert_eq!(args.page_url, "https://trader.github.io/nse-signals/");
        assert_eq!(args.watch, Some(30));
    }

    #[test]
    fn zero_watch_interval_is_rejected() {
        assert!(Args::try_parse_from(["signal_dashboard", "--watch", "0"]).is_err());
        assert!(Args::try_parse_from(["signal_dashboard", "--watch", "1"]).is_ok());
    }
}
