//! Parsing of the SPTX text format
//!
//! This module provides pure parsing functions for the sparse matrix text
//! representation with no I/O dependencies. The format is two header lines
//! (`rows=<int>`, `cols=<int>`) followed by one `(<row>, <col>, <value>)`
//! triple per line. Blank lines between entries are ignored.

use crate::error::{Result, SptxError};
use crate::matrix::{Coordinate, SparseMatrix};

impl SparseMatrix {
    /// Parse a matrix from its text representation
    ///
    /// Duplicate coordinates collapse silently to the last value seen.
    /// On any failure no partial matrix is returned.
    pub fn from_text(input: &str) -> Result<Self> {
        let mut lines = input.lines().enumerate();

        let nrows = parse_dimension_line(lines.next(), "rows", 1)?;
        let ncols = parse_dimension_line(lines.next(), "cols", 2)?;

        let mut matrix = SparseMatrix::with_dims(nrows, ncols);
        for (index, raw) in lines {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let (coord, value) = parse_entry_line(line, index + 1)?;
            // last write wins on duplicate coordinates
            matrix.elements.insert(coord, value);
        }

        Ok(matrix)
    }
}

/// Parse a `key=<int>` header line
///
/// Splits on the first `=`, requires the exact key, and parses the trimmed
/// suffix as a signed integer. `line_number` is 1-based and only used for
/// diagnostics.
pub fn parse_dimension_line(
    line: Option<(usize, &str)>,
    key: &'static str,
    line_number: usize,
) -> Result<i64> {
    let (_, raw) = line.ok_or(SptxError::MalformedHeader {
        line: line_number,
        detail: "missing header line",
    })?;

    let (found_key, value) = raw.trim().split_once('=').ok_or(SptxError::MalformedHeader {
        line: line_number,
        detail: "header line has no '='",
    })?;

    if found_key != key {
        return Err(SptxError::MalformedHeader {
            line: line_number,
            detail: "unexpected header key",
        });
    }

    value
        .trim()
        .parse::<i64>()
        .map_err(|_| SptxError::MalformedHeader {
            line: line_number,
            detail: "header value is not an integer",
        })
}

/// Parse a single `(<row>, <col>, <value>)` entry line
///
/// The line must already be trimmed and non-empty. `line_number` is 1-based.
pub fn parse_entry_line(line: &str, line_number: usize) -> Result<(Coordinate, i64)> {
    let interior = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(SptxError::MalformedEntry {
            line: line_number,
            detail: "entry is not parenthesized",
        })?;

    let mut fields = interior.split(',');
    let row = parse_entry_field(fields.next(), line_number)?;
    let col = parse_entry_field(fields.next(), line_number)?;
    let value = parse_entry_field(fields.next(), line_number)?;

    if fields.next().is_some() {
        return Err(SptxError::MalformedEntry {
            line: line_number,
            detail: "expected exactly three comma-separated integers",
        });
    }

    Ok((Coordinate::new(row, col), value))
}

fn parse_entry_field(field: Option<&str>, line_number: usize) -> Result<i64> {
    field
        .ok_or(SptxError::MalformedEntry {
            line: line_number,
            detail: "expected exactly three comma-separated integers",
        })?
        .trim()
        .parse::<i64>()
        .map_err(|_| SptxError::MalformedEntry {
            line: line_number,
            detail: "entry field is not an integer",
        })
}
