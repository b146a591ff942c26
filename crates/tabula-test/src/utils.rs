//! Shared fixtures for integration tests.

use tabula_common::DataType;
use tabula_db::Database;
use tabula_table::Table;

/// Schema of the students fixture.
pub const STUDENT_COLUMNS: [(&str, DataType); 3] = [
    ("name", DataType::Text),
    ("age", DataType::Integer),
    ("gpa", DataType::Real),
];

/// Rows of the students fixture, as raw input strings.
pub const STUDENT_ROWS: [[&str; 3]; 2] = [["Alice", "20", "3.5"], ["Bob", "22", "4.0"]];

/// Builds an empty table with the given schema.
pub fn table_with_columns(columns: &[(&str, DataType)]) -> Table {
    let mut table = Table::new();
    for (name, data_type) in columns {
        table.add_column(*name, *data_type);
    }
    table
}

/// Builds the `(name, age, gpa)` table holding Alice and Bob.
pub fn students_table() -> Table {
    let mut table = table_with_columns(&STUDENT_COLUMNS);
    for row in STUDENT_ROWS {
        table
            .add_row(row)
            .expect("fixture rows match the fixture schema");
    }
    table
}

/// Builds a registry holding the students table under `students`.
pub fn students_database() -> Database {
    let mut db = Database::new();
    let table = db
        .create_table("students")
        .expect("fresh registry has no tables");
    table.clone_from(&students_table());
    db
}

/// Converts string-literal rows into owned rows for comparison with `get_rows`.
pub fn strings<const N: usize>(rows: &[[&str; N]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
}
