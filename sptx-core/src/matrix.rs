//! Sparse matrix storage model
//!
//! A matrix is a mapping from coordinates to stored integer values plus
//! declared dimensions. Coordinates outside the declared shape are accepted
//! silently on both read and write; unset coordinates read as zero.

use hashbrown::HashMap;

/// A single (row, col) cell address
///
/// Ordering is lexicographic, row first, which is the canonical entry order
/// of the text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Row index (unbounded, may be negative)
    pub row: i64,
    /// Column index (unbounded, may be negative)
    pub col: i64,
}

impl Coordinate {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

/// Sparse integer matrix keyed by coordinate
///
/// Dimensions are fixed at construction. The element map stores whatever was
/// explicitly set, including explicit zeros: `set_element(r, c, 0)` is
/// distinguishable from never setting the cell (both read as 0 through
/// `get_element`, but the stored zero survives formatting and counts toward
/// `nnz`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseMatrix {
    nrows: i64,
    ncols: i64,
    pub(crate) elements: HashMap<Coordinate, i64>,
}

impl SparseMatrix {
    /// Create an empty matrix with the given dimensions
    pub fn with_dims(nrows: i64, ncols: i64) -> Self {
        Self {
            nrows,
            ncols,
            elements: HashMap::new(),
        }
    }

    /// Number of declared rows
    pub fn nrows(&self) -> i64 {
        self.nrows
    }

    /// Number of declared columns
    pub fn ncols(&self) -> i64 {
        self.ncols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (i64, i64) {
        (self.nrows, self.ncols)
    }

    /// Number of stored elements (explicit zeros included)
    pub fn nnz(&self) -> usize {
        self.elements.len()
    }

    /// True when no element has been stored
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the value at the given position, 0 when unset
    ///
    /// No bounds check against the declared dimensions: any coordinate is a
    /// valid lookup and unset cells read as zero.
    pub fn get_element(&self, row: i64, col: i64) -> i64 {
        self.elements
            .get(&Coordinate::new(row, col))
            .copied()
            .unwrap_or(0)
    }

    /// Insert or overwrite the value at the given position
    ///
    /// No bounds check; explicit zeros are stored rather than pruned.
    pub fn set_element(&mut self, row: i64, col: i64, value: i64) {
        self.elements.insert(Coordinate::new(row, col), value);
    }

    /// Iterate over stored entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, i64)> + '_ {
        self.elements.iter().map(|(coord, value)| (*coord, *value))
    }
}
