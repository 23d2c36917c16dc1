//! Rebuilds the dashboard page from a snapshot.
use crate::model::page::{DashboardPage, TableRow};
use signal_common::column::{COLUMN_COUNT, Column};
use signal_common::snapshot::{SignalEntry, SignalSnapshot};
use strum::IntoEnumIterator;

/// Replace the page contents with `snapshot`.
///
/// The timestamp goes into the `updated` element verbatim, the table body is
/// cleared, and one row per signal is appended in snapshot order. No sorting,
/// filtering or formatting happens here.
pub fn render(page: &mut DashboardPage, snapshot: &SignalSnapshot) {
    page.set_updated(&snapshot.timestamp);
    page.clear_rows();
    for (symbol, entry) in &snapshot.signals {
        page.push_row(build_row(symbol, entry));
    }
}

fn build_row(symbol: &str, entry: &SignalEntry) -> TableRow {
    let mut cells: [String; COLUMN_COUNT] = Default::default();
    for (cell, column) in cells.iter_mut().zip(Column::iter()) {
        *cell = column.text_for(symbol, entry);
    }
    TableRow { cells }
}
