//! One dashboard page and its load cycles.
//!
//! A load cycle fetches a snapshot, renders it into the page and publishes the page
//! to the output file. Cycles are serialized by an in-flight flag: a cycle started
//! while another is running is rejected and leaves the page alone. A failed fetch
//! or a failed publish also leaves the page (and the published file) exactly as it
//! was: the snapshot is rendered into a copy that replaces the page only once it is
//! on disk.
use crate::loader::SnapshotLoader;
use crate::model::page::DashboardPage;
use crate::renderer::render;
use log::{error, info, warn};
use signal_common::{DashboardError, Result};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Clears the in-flight flag when a cycle ends, including on early return.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Owns the page, its loader and where the page is published.
pub struct DashboardSession {
    loader: SnapshotLoader,
    page: Mutex<DashboardPage>,
    out: PathBuf,
    in_flight: AtomicBool,
}

impl DashboardSession {
    /// Create a session with an empty page titled `title`.
    pub fn new(loader: SnapshotLoader, out: PathBuf, title: &str) -> Self {
        Self {
            loader,
            page: Mutex::new(DashboardPage::new(title)),
            out,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Output file of the rendered page.
    pub fn out(&self) -> &Path {
        &self.out
    }

    /// Run one load cycle and return the number of rendered rows.
    pub fn load_and_render(&self) -> Result<usize> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            return Err(DashboardError::LoadInFlight);
        }
        let _guard = InFlight(&self.in_flight);

        let snapshot = self.loader.fetch()?;
        let mut page = self.page.lock()?;
        let mut next = page.clone();
        render(&mut next, &snapshot);
        next.publish(&self.out)?;
        *page = next;
        Ok(page.rows().len())
    }

    /// Run one load cycle, logging the outcome instead of returning it.
    ///
    /// Returns the number of rendered rows, or `None` if the cycle failed or was
    /// skipped.
    pub fn refresh(&self) -> Option<usize> {
        match self.load_and_render() {
            Ok(rows) => {
                info!("Rendered {} signals into {}", rows, self.out.display());
                Some(rows)
            }
            Err(DashboardError::LoadInFlight) => {
                warn!("Skipping refresh: previous load still in flight");
                None
            }
            Err(e) if e.is_load_failure() => {
                error!("Loading failed: {}", e);
                None
            }
            Err(e) => {
                error!("{}", e);
                None
            }
        }
    }
}
