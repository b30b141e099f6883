//! Rendering of the SPTX text format
//!
//! Inverse of the parser: a matrix always renders to the same byte sequence
//! for a given element set, so format-then-parse reproduces dimensions and
//! elements exactly.

use std::fmt::Write;

use crate::matrix::{Coordinate, SparseMatrix};

impl SparseMatrix {
    /// Render the matrix in canonical form
    ///
    /// Two header lines followed by one `(<row>, <col>, <value>)` line per
    /// stored entry (explicit zeros included), sorted by coordinate, row
    /// first then column.
    pub fn to_text(&self) -> String {
        let mut entries: Vec<(Coordinate, i64)> = self.iter().collect();
        entries.sort_unstable();

        let mut output = String::new();
        let _ = writeln!(output, "rows={}", self.nrows());
        let _ = writeln!(output, "cols={}", self.ncols());
        for (coord, value) in entries {
            let _ = writeln!(output, "({}, {}, {})", coord.row, coord.col, value);
        }
        output
    }
}

impl std::fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}
