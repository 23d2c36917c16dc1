//!
//! Common types and helpers shared by the signal dashboard.
//!
//! This crate aggregates:
//! - `error` — unified error type `DashboardError` used across the workspace.
//! - `result` — handy `Result<T, DashboardError>` alias.
//! - `snapshot` — the `SignalSnapshot` payload and its entries.
//! - `column` — fixed table column order and labels.
//! - `source` — data URL resolution and cache busting.
#![warn(missing_docs)]
pub mod column;
pub mod error;
pub mod result;
pub mod snapshot;
pub mod source;

pub use column::Column;
pub use error::DashboardError;
pub use result::Result;
pub use snapshot::{CellValue, SignalEntry, SignalSnapshot};
