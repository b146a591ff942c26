//! CSV export.
//!
//! Writes a table as comma-separated text: a header of column names followed
//! by one line per row in ascending id order. Only the engine's public
//! accessors are used.
//!
//! Fields are written as-is. Values containing commas or newlines are not
//! quoted, so such tables do not round-trip through a CSV reader.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tabula_common::constants::{CSV_FIELD_SEPARATOR, CSV_RECORD_SEPARATOR};
use tabula_common::TabulaResult;
use tabula_table::Table;
use tracing::info;

/// Writes `table` as CSV to `writer`.
pub fn write_csv<W: Write>(table: &Table, mut writer: W) -> TabulaResult<()> {
    let header: Vec<&str> = table
        .column_descriptors()
        .iter()
        .map(|c| c.name())
        .collect();
    write_record(&mut writer, &header)?;

    for row in table.get_rows() {
        write_record(&mut writer, &row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes `table` as CSV to the file at `path`, replacing any existing file.
pub fn export_table_to_csv(table: &Table, path: impl AsRef<Path>) -> TabulaResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(table, BufWriter::new(file))?;
    info!("Exported {} rows to {}", table.row_count(), path.display());
    Ok(())
}

fn write_record<W: Write, S: AsRef<str>>(writer: &mut W, fields: &[S]) -> TabulaResult<()> {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            write!(writer, "{}", CSV_FIELD_SEPARATOR)?;
        }
        writer.write_all(field.as_ref().as_bytes())?;
    }
    write!(writer, "{}", CSV_RECORD_SEPARATOR)?;
    Ok(())
}
