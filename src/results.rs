//! Search Results
//!
//! The results view built from a list response. Rows keep the order the
//! server returned them in.

use std::io;

use serde_json::Value;
use tabled::{
    builder::Builder,
    settings::{Color, Style, object::Rows},
};

use crate::schema::{SchemaVersion, display_value};

/// Column headers of the results view.
pub const HEADERS: [&str; 4] = ["ID", "Name", "Category", "Available"];

const HTML_WIDTHS: [&str; 4] = ["10%", "40%", "40%", "10%"];

/// One promotion in the results view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultRow {
    /// Server-assigned identifier.
    pub id: String,

    /// Promotion name, from the version's name key.
    pub name: String,

    /// Category.
    pub category: String,

    /// `available` as sent by the server (`true`/`false`).
    pub available: String,
}

impl ResultRow {
    /// Read a row from a promotion record. Missing fields render empty.
    pub fn from_record(record: &Value, version: SchemaVersion) -> Self {
        Self {
            id: display_value(record.get("id")),
            name: display_value(record.get(version.name_key())),
            category: display_value(record.get("category")),
            available: display_value(record.get("available")),
        }
    }

    fn cells(&self) -> [&str; 4] {
        [
            self.id.as_str(),
            self.name.as_str(),
            self.category.as_str(),
            self.available.as_str(),
        ]
    }
}

/// Table of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsTable {
    rows: Vec<ResultRow>,
}

impl ResultsTable {
    /// Build the table from list records.
    pub fn from_records(records: &[Value], version: SchemaVersion) -> Self {
        Self {
            rows: records
                .iter()
                .map(|record| ResultRow::from_record(record, version))
                .collect(),
        }
    }

    /// Rows in server order.
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the search matched nothing.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render as the page's results table. Cell text is HTML-escaped.
    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<table class="table-striped"><tr>"#);

        for (header, width) in HEADERS.iter().zip(HTML_WIDTHS) {
            html.push_str(&format!(r#"<th style="width:{width}">{header}</th>"#));
        }

        html.push_str("</tr>");

        for row in &self.rows {
            html.push_str("<tr>");

            for cell in row.cells() {
                html.push_str("<td>");
                html.push_str(&escape_html(cell));
                html.push_str("</td>");
            }

            html.push_str("</tr>");
        }

        html.push_str("</table>");
        html
    }

    /// Prints the table to a terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> io::Result<()> {
        let mut builder = Builder::default();

        builder.push_record(HEADERS);

        for row in &self.rows {
            builder.push_record(row.cells());
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);

        writeln!(out, "{table}")
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
