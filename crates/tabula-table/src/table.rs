//! The single-table storage engine.
//!
//! `Table` owns a mutable schema and the rows stored against it. Every
//! structural change keeps two things true: each row holds exactly one cell
//! per column, and cell `i` has the type declared by column `i`.

use std::collections::btree_map;
use std::collections::BTreeMap;

use tabula_common::config::TableConfig;
use tabula_common::constants::{DEFAULT_ROW_CAPACITY, ROW_CAPACITY_GROWTH_FACTOR};
use tabula_common::{DataType, RowId, TabulaError, TabulaResult};
use tracing::debug;

use super::{Cell, ColumnDescriptor, Row};

/// An in-memory table with a mutable schema.
///
/// Rows are keyed by a surrogate [`RowId`] assigned at insertion. Ids grow
/// monotonically and are never reused. Iteration and rendering always
/// proceed in ascending id order.
///
/// Cloning a table is a deep copy: the clone shares no row or cell storage
/// with the source. `clone_from` drops every destination row before copying.
#[derive(Debug, PartialEq)]
pub struct Table {
    /// Id the next inserted row will receive.
    next_id: RowId,
    /// Slot width of every row. Never shrinks.
    capacity: usize,
    /// Schema, in slot order.
    columns: Vec<ColumnDescriptor>,
    /// Rows by id.
    rows: BTreeMap<RowId, Row>,
}

impl Table {
    /// Creates an empty table with the default row width.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ROW_CAPACITY)
    }

    /// Creates an empty table whose rows start `capacity` slots wide.
    ///
    /// A zero width is bumped to one so that doubling can make progress.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            next_id: RowId::FIRST,
            capacity: capacity.max(1),
            columns: Vec::new(),
            rows: BTreeMap::new(),
        }
    }

    /// Creates an empty table from configuration.
    pub fn with_config(config: &TableConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the schema in slot order.
    pub fn column_descriptors(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Returns the column at the given index.
    pub fn column(&self, index: usize) -> Option<&ColumnDescriptor> {
        self.columns.get(index)
    }

    /// Returns the index of the first column with the given name.
    pub fn find_column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the current row slot width.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the id the next inserted row will receive.
    pub fn next_id(&self) -> RowId {
        self.next_id
    }

    /// Returns true if a row with this id exists.
    pub fn contains_row(&self, id: RowId) -> bool {
        self.rows.contains_key(&id)
    }

    /// Returns the row with this id.
    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.get(&id)
    }

    /// Returns a single cell.
    pub fn cell(&self, id: RowId, column: usize) -> Option<&Cell> {
        self.rows.get(&id).and_then(|row| row.get(column))
    }

    /// Iterates rows in ascending id order.
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            inner: self.rows.iter(),
        }
    }

    // =========================================================================
    // Column Operations
    // =========================================================================

    /// Appends a column to the schema.
    ///
    /// When the schema already fills the row width, the width doubles and
    /// every row is widened first. Each existing row then receives the zero
    /// value of `data_type` in the new trailing slot.
    pub fn add_column(&mut self, name: impl Into<String>, data_type: DataType) {
        if self.columns.len() == self.capacity {
            self.grow_rows();
        }

        let column = ColumnDescriptor::new(name, data_type);
        debug!(
            "Adding column {} at index {} to {} rows",
            column,
            self.columns.len(),
            self.rows.len()
        );
        self.columns.push(column);

        for row in self.rows.values_mut() {
            row.push(Cell::zero(data_type));
        }
    }

    /// Removes the column at `index` and its cell from every row.
    ///
    /// Later columns move one position left. The row width is unchanged.
    /// The last column cannot be removed while the table has rows.
    pub fn delete_column_by_idx(&mut self, index: usize) -> TabulaResult<()> {
        if index >= self.columns.len() {
            return Err(TabulaError::IndexOutOfRange {
                index,
                len: self.columns.len(),
            });
        }

        if self.columns.len() == 1 && !self.rows.is_empty() {
            return Err(TabulaError::invariant(
                "cannot delete the last column while rows exist",
            ));
        }

        for row in self.rows.values_mut() {
            row.remove(index);
        }
        let column = self.columns.remove(index);
        debug!("Deleted column {} from index {}", column, index);

        Ok(())
    }

    /// Doubles the row width, widening every existing row.
    fn grow_rows(&mut self) {
        let new_capacity = self.capacity.saturating_mul(ROW_CAPACITY_GROWTH_FACTOR);
        debug!(
            "Growing row capacity from {} to {} across {} rows",
            self.capacity,
            new_capacity,
            self.rows.len()
        );

        for row in self.rows.values_mut() {
            row.reserve_slots(new_capacity);
        }
        self.capacity = new_capacity;
    }

    // =========================================================================
    // Row Operations
    // =========================================================================

    /// Inserts a row, parsing each value according to its column's type.
    ///
    /// Either the whole row is committed and its id returned, or nothing
    /// changes: a parse failure leaves both the rows and the id counter
    /// untouched. A table with no columns accepts an empty value list.
    pub fn add_row<I, S>(&mut self, values: I) -> TabulaResult<RowId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values: Vec<S> = values.into_iter().collect();

        if values.len() != self.columns.len() {
            return Err(TabulaError::ArityMismatch {
                expected: self.columns.len(),
                actual: values.len(),
            });
        }

        let mut row = Row::with_capacity(self.capacity);
        for (column, value) in self.columns.iter().zip(&values) {
            let value = value.as_ref();
            let cell = Cell::parse(column.data_type, value).map_err(|reason| {
                TabulaError::ParseError {
                    column: column.name.clone(),
                    data_type: column.data_type,
                    value: value.to_string(),
                    reason,
                }
            })?;
            row.push(cell);
        }

        let id = self.next_id;
        self.next_id = id
            .checked_next()
            .ok_or_else(|| TabulaError::invariant("row id space exhausted"))?;
        self.rows.insert(id, row);
        debug!("Inserted row {}", id);

        Ok(id)
    }

    /// Removes the row with this id.
    pub fn delete_row_by_id(&mut self, id: RowId) -> TabulaResult<()> {
        match self.rows.remove(&id) {
            Some(_) => {
                debug!("Deleted row {}", id);
                Ok(())
            }
            None => Err(TabulaError::RowNotFound { id }),
        }
    }

    /// Renders every row as strings, in ascending id order.
    ///
    /// The result is a fresh snapshot, not a view.
    pub fn get_rows(&self) -> Vec<Vec<String>> {
        self.rows.values().map(Row::to_strings).collect()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Table {
    fn clone(&self) -> Self {
        Self {
            next_id: self.next_id,
            capacity: self.capacity,
            columns: self.columns.clone(),
            rows: self.rows.clone(),
        }
    }

    /// Releases every row owned by `self`, then deep-copies `source`.
    fn clone_from(&mut self, source: &Self) {
        self.rows.clear();
        self.next_id = source.next_id;
        self.capacity = source.capacity;
        self.columns.clone_from(&source.columns);
        self.rows
            .extend(source.rows.iter().map(|(id, row)| (*id, row.clone())));
    }
}

/// Iterator over `(RowId, &Row)` pairs in ascending id order.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    inner: btree_map::Iter<'a, RowId, Row>,
}

impl<'a> Iterator for Rows<'a> {
    type Item = (RowId, &'a Row);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(id, row)| (*id, row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Rows<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(id, row)| (*id, row))
    }
}

impl ExactSizeIterator for Rows<'_> {}
