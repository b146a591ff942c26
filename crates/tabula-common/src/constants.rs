//! System-wide constants for Tabula.

// =============================================================================
// Row Storage
// =============================================================================

/// Slot width every new table starts with.
///
/// Rows are allocated this many cell slots up front; the width doubles each
/// time a column is added to a table whose schema already fills it.
pub const DEFAULT_ROW_CAPACITY: usize = 2;

/// Factor applied to the row slot width when the schema outgrows it.
pub const ROW_CAPACITY_GROWTH_FACTOR: usize = 2;

/// First row id handed out by a fresh table.
pub const FIRST_ROW_ID: u64 = 0;

// =============================================================================
// Rendering
// =============================================================================

/// Separator between cells in the diagnostic dump.
pub const DUMP_CELL_SEPARATOR: &str = ", ";

/// Field separator used by CSV export.
pub const CSV_FIELD_SEPARATOR: char = ',';

/// Record separator used by CSV export.
pub const CSV_RECORD_SEPARATOR: char = '\n';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_defaults() {
        assert!(DEFAULT_ROW_CAPACITY > 0);
        assert!(ROW_CAPACITY_GROWTH_FACTOR >= 2);
    }
}
