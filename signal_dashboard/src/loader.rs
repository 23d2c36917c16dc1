//! Fetching signal snapshots.
//!
//! `SnapshotLoader` resolves where the snapshot lives relative to the dashboard page,
//! defeats HTTP caching with a `v=<epoch millis>` query pair and parses the body.
//! `file://` page URLs are read straight from disk.
use chrono::Utc;
use log::debug;
use reqwest::blocking::Client;
use reqwest::Url;
use signal_common::source::{resolve_data_url, with_cache_buster};
use signal_common::{DashboardError, Result, SignalSnapshot};
use std::fs;
use std::time::Duration;

/// Loads snapshots for one dashboard page.
pub struct SnapshotLoader {
    client: Client,
    data_url: Url,
}

impl SnapshotLoader {
    /// Build a loader for a page served at `page_url`.
    ///
    /// Without a `timeout` requests wait for the server indefinitely.
    pub fn new(page_url: &str, data_path: &str, timeout: Option<Duration>) -> Result<Self> {
        let page_url = Url::parse(page_url)
            .map_err(|e| DashboardError::InvalidUrl(format!("{}: {}", page_url, e)))?;
        let data_url = resolve_data_url(&page_url, data_path)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, data_url })
    }

    /// Resolved snapshot URL, without the cache buster.
    pub fn data_url(&self) -> &Url {
        &self.data_url
    }

    /// Fetch and parse the current snapshot.
    pub fn fetch(&self) -> Result<SignalSnapshot> {
        if self.data_url.scheme() == "file" {
            return self.read_local();
        }

        let url = with_cache_buster(&self.data_url, Utc::now().timestamp_millis());
        debug!("GET {}", url);
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Status(status.as_u16()));
        }
        let body = response.bytes()?;
        SignalSnapshot::from_slice(&body)
    }

    fn read_local(&self) -> Result<SignalSnapshot> {
        let path = self
            .data_url
            .to_file_path()
            .map_err(|_| DashboardError::InvalidUrl(self.data_url.to_string()))?;
        debug!("Reading {}", path.display());
        let body = fs::read(&path)?;
        SignalSnapshot::from_slice(&body)
    }
}
