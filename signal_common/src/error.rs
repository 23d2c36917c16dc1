//! Error types shared by the dashboard crates.
//!
//! The `DashboardError` enum unifies the failure cases of a load cycle (network,
//! HTTP status, I/O and JSON parsing) with the few internal ones (re-entrant load,
//! poisoned page lock), so every layer can propagate a single error type.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type for loading and rendering signal snapshots.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// I/O error while reading a local snapshot or writing the page.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport-level failure reported by the HTTP client.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// The snapshot body is not a well-formed signal document.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Writing the rendered page to its output file failed.
    #[error("Publishing page failed: {0}")]
    Publish(#[source] io::Error),

    /// A page URL or data path could not be turned into a fetchable URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Another load cycle is still running for the same page.
    #[error("A load cycle is already in flight")]
    LoadInFlight,

    /// Error indicating a poisoned mutex/lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),
}

impl DashboardError {
    /// Returns `true` for the errors that make up a failed load: fetching,
    /// reading or parsing the snapshot.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            DashboardError::Io(_)
                | DashboardError::Http(_)
                | DashboardError::Status(_)
                | DashboardError::SerdeJson(_)
                | DashboardError::InvalidUrl(_)
        )
    }
}

impl<T> From<PoisonError<T>> for DashboardError {
    fn from(err: PoisonError<T>) -> Self {
        DashboardError::MutexLock(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_failures_are_classified() {
        assert!(DashboardError::Status(500).is_load_failure());
        assert!(DashboardError::InvalidUrl("x".into()).is_load_failure());
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(DashboardError::from(parse).is_load_failure());
        assert!(!DashboardError::LoadInFlight.is_load_failure());
        let publish = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        assert!(!DashboardError::Publish(publish).is_load_failure());
    }

    #[test]
    fn status_message_names_the_code() {
        assert_eq!(DashboardError::Status(404).to_string(), "Unexpected HTTP status: 404");
    }
}
