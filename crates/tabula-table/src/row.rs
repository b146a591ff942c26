//! Row storage.
//!
//! A `Row` is a fixed-width run of cell slots. Only the first
//! `column_count` slots hold values; the remainder is spare room reserved
//! so that appending a column does not reallocate every row.

use std::fmt;

use tabula_common::constants::DUMP_CELL_SEPARATOR;

use super::Cell;

/// A single row of cells, in schema order.
#[derive(Debug, PartialEq)]
pub struct Row {
    /// The cells of this row. `cells.capacity()` is the slot width.
    cells: Vec<Cell>,
}

impl Row {
    /// Creates an empty row with room for `capacity` cells.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of cells in this row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if this row holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the number of allocated cell slots.
    pub fn slot_capacity(&self) -> usize {
        self.cells.capacity()
    }

    /// Returns the cell at the given index.
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Returns the cells as a slice.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns an iterator over the cells.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Renders every cell as a string.
    pub fn to_strings(&self) -> Vec<String> {
        self.cells.iter().map(Cell::to_string).collect()
    }

    /// Appends a cell into the next slot.
    pub(crate) fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Removes the cell at `index`, shifting later cells one slot left.
    pub(crate) fn remove(&mut self, index: usize) -> Cell {
        self.cells.remove(index)
    }

    /// Widens the slot array to hold at least `capacity` cells.
    ///
    /// Existing cells keep their positions and values.
    pub(crate) fn reserve_slots(&mut self, capacity: usize) {
        if let Some(additional) = capacity.checked_sub(self.cells.len()) {
            self.cells.reserve_exact(additional);
        }
    }
}

impl Clone for Row {
    /// Copies every cell into a fresh slot array of the same width.
    fn clone(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.capacity());
        cells.extend(self.cells.iter().cloned());
        Self { cells }
    }

    fn clone_from(&mut self, source: &Self) {
        self.cells.clear();
        self.reserve_slots(source.cells.capacity());
        self.cells.extend(source.cells.iter().cloned());
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(DUMP_CELL_SEPARATOR)?;
            }
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
