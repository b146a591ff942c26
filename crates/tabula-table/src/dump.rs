//! Diagnostic rendering of a table.
//!
//! The first line lists the schema as `name(type)` entries; each following
//! line is one row, in ascending id order. The ordering is stable and may be
//! relied upon, the exact spacing is not an interchange format.

use std::fmt;

use tabula_common::constants::DUMP_CELL_SEPARATOR;

use super::Table;

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, column) in self.column_descriptors().iter().enumerate() {
            if i > 0 {
                f.write_str(DUMP_CELL_SEPARATOR)?;
            }
            write!(f, "{}", column)?;
        }
        writeln!(f)?;

        for (_, row) in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
