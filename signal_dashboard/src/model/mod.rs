//! Data model types owned by the dashboard.
//!
//! - `page` — the in-memory dashboard document and its HTML serialization.
pub mod page;
