//! Output formatting for tables.
//!
//! Supports the diagnostic dump, table, JSON, and CSV output formats.

use std::collections::HashSet;

use comfy_table::{Cell as TableCell, CellAlignment, ContentArrangement, Table as TextTable};
use serde_json::{json, Value as JsonValue};

use tabula_db::{Cell, Table, TabulaResult};

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Schema line followed by one line per row.
    Dump,
    /// Formatted table output.
    Table,
    /// JSON output.
    Json,
    /// CSV output.
    Csv,
}

impl OutputFormat {
    /// Parses a format name as used in configuration files.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dump" => Some(OutputFormat::Dump),
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

/// Formats a table according to the specified format.
pub fn format_table(table: &Table, format: OutputFormat) -> TabulaResult<String> {
    match format {
        OutputFormat::Dump => Ok(table.to_string()),
        OutputFormat::Table => Ok(format_text_table(table)),
        OutputFormat::Json => Ok(format_json(table)),
        OutputFormat::Csv => format_csv(table),
    }
}

/// Formats the table as a bordered text table.
fn format_text_table(table: &Table) -> String {
    let mut out = TextTable::new();

    out.set_content_arrangement(ContentArrangement::Dynamic)
        .load_preset(comfy_table::presets::UTF8_FULL)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

    if table.column_count() > 0 {
        out.set_header(
            table
                .column_descriptors()
                .iter()
                .map(|c| TableCell::new(c.name())),
        );
    }

    let numeric: Vec<bool> = table
        .column_descriptors()
        .iter()
        .map(|c| c.data_type().is_numeric())
        .collect();

    for row in table.get_rows() {
        out.add_row(row.into_iter().zip(&numeric).map(|(value, &right)| {
            let cell = TableCell::new(value);
            if right {
                cell.set_alignment(CellAlignment::Right)
            } else {
                cell
            }
        }));
    }

    out.to_string()
}

/// Formats the table as a JSON array of objects keyed by column name.
fn format_json(table: &Table) -> String {
    let keys = json_keys(table);
    let rows: Vec<JsonValue> = table
        .rows()
        .map(|(_, row)| {
            let mut obj = serde_json::Map::new();
            for (key, cell) in keys.iter().zip(row) {
                obj.insert(key.clone(), cell_to_json(cell));
            }
            JsonValue::Object(obj)
        })
        .collect();

    serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".to_string())
}

/// Returns one distinct object key per column.
///
/// A repeated column name gets its column index appended, so `x, x`
/// becomes `x, x_1`.
fn json_keys(table: &Table) -> Vec<String> {
    let mut used = HashSet::new();
    table
        .column_descriptors()
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let mut key = column.name().to_string();
            let mut suffix = i;
            while used.contains(&key) {
                key = format!("{}_{}", column.name(), suffix);
                suffix += 1;
            }
            used.insert(key.clone());
            key
        })
        .collect()
}

/// Converts a cell to a JSON value.
fn cell_to_json(cell: &Cell) -> JsonValue {
    match cell {
        Cell::Text(s) => json!(s),
        Cell::Real(f) => json!(*f),
        Cell::Integer(i) => json!(*i),
    }
}

/// Formats the table as CSV, exactly as the exporter writes it.
fn format_csv(table: &Table) -> TabulaResult<String> {
    let mut out = Vec::new();
    tabula_db::write_csv(table, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
