//! Row identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Row identifier - the surrogate key of a row within one table.
///
/// Ids are handed out in strictly increasing order at insertion time and are
/// never reused, even after the row they named has been deleted.
///
/// # Example
///
/// ```rust
/// use tabula_common::types::RowId;
///
/// let id = RowId::new(41);
/// assert_eq!(id.checked_next(), Some(RowId::new(42)));
/// assert_eq!(id.as_u64(), 41);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct RowId(u64);

impl RowId {
    /// The id given to the first row of a fresh table.
    pub const FIRST: Self = Self(crate::constants::FIRST_ROW_ID);

    /// Creates a new `RowId` from a raw u64 value.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw u64 value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns the id that follows this one, or `None` once the id space
    /// is used up.
    #[inline]
    #[must_use]
    pub const fn checked_next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }
}

impl fmt::Debug for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RowId({})", self.0)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RowId {
    #[inline]
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl From<RowId> for u64 {
    #[inline]
    fn from(id: RowId) -> Self {
        id.0
    }
}
