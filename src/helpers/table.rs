use clap::ValueEnum;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use serde::Serialize;

use crate::models::row::TableRow;

pub const NO_RESULTS: &str = "No results.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns for the terminal
    #[default]
    Table,
    /// Pretty-printed JSON array, one object per row
    Json,
}

/// Renders at most `max_rows` rows in the requested format.
pub fn render_rows<R: TableRow + Serialize>(
    rows: &[R],
    format: OutputFormat,
    max_rows: usize,
) -> anyhow::Result<String> {
    let shown = &rows[..rows.len().min(max_rows)];
    match format {
        OutputFormat::Table => Ok(render_table(shown)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(shown)?),
    }
}

fn render_table<R: TableRow>(rows: &[R]) -> String {
    if rows.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        R::headers()
            .iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect::<Vec<Cell>>(),
    );
    for row in rows {
        table.add_row(row.cells());
    }

    table.to_string()
}
