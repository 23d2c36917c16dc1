//! In-memory dashboard page.
//!
//! `DashboardPage` holds what the rendered document shows: the `updated` text and
//! the rows of the `signalTable` body. All text is stored plain and escaped only
//! when the page is serialized, so producer values can never inject markup.
use log::debug;
use signal_common::column::{COLUMN_COUNT, Column};
use signal_common::{DashboardError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use strum::IntoEnumIterator;

/// Element id of the timestamp display.
pub const UPDATED_ID: &str = "updated";
/// Element id of the signal table.
pub const TABLE_ID: &str = "signalTable";

/// Page title used when none is configured.
pub const DEFAULT_TITLE: &str = "Trading Signals";

/// One table body row, cells in `Column` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Plain cell texts.
    pub cells: [String; COLUMN_COUNT],
}

/// The dashboard document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardPage {
    title: String,
    updated: String,
    rows: Vec<TableRow>,
}

impl Default for DashboardPage {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl DashboardPage {
    /// Create an empty page with the given title.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            updated: String::new(),
            rows: Vec::new(),
        }
    }

    /// Text of the `updated` element.
    pub fn updated(&self) -> &str {
        &self.updated
    }

    /// Replace the `updated` text. The value is treated as plain text.
    pub fn set_updated(&mut self, text: &str) {
        self.updated = text.to_string();
    }

    /// Rows currently in the table body.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Empty the table body.
    pub fn clear_rows(&mut self) {
        self.rows.clear();
    }

    /// Append a row to the table body.
    pub fn push_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Serialize the page to a standalone HTML document.
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(1024 + self.rows.len() * 256);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape_html(&self.title)));
        html.push_str("</head>\n<body>\n");
        html.push_str(&format!("<h1>{}</h1>\n", escape_html(&self.title)));
        html.push_str(&format!(
            "<p>Last updated: <span id=\"{}\">{}</span></p>\n",
            UPDATED_ID,
            escape_html(&self.updated)
        ));
        html.push_str(&format!("<table id=\"{}\">\n<thead>\n<tr>", TABLE_ID));
        for column in Column::iter() {
            html.push_str(&format!("<th>{}</th>", escape_html(&column.to_string())));
        }
        html.push_str("</tr>\n</thead>\n<tbody>\n");
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in &row.cells {
                html.push_str(&format!("<td>{}</td>", escape_html(cell)));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
        html
    }

    /// Write the page to `path`.
    ///
    /// The document goes to a sibling temporary file first and is then renamed over
    /// the target, so a reader sees either the previous page or the new one. On
    /// failure the temporary file is removed and the target is left as it was.
    pub fn publish(&self, path: &Path) -> Result<()> {
        self.write_atomically(path).map_err(DashboardError::Publish)?;
        debug!("Page written to {} ({} rows)", path.display(), self.rows.len());
        Ok(())
    }

    fn write_atomically(&self, path: &Path) -> io::Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = Path::new(&tmp_name);

        let written = fs::File::create(tmp_path)
            .and_then(|mut file| {
                file.write_all(self.to_html().as_bytes())?;
                file.sync_all()
            })
            .and_then(|()| fs::rename(tmp_path, path));
        if written.is_err() {
            let _ = fs::remove_file(tmp_path);
        }
        written
    }
}

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
