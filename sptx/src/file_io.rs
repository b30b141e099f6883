//! File I/O for SPTX matrices
//!
//! This module wraps the pure parser and formatter from `sptx-core` with
//! filesystem access. Every I/O failure is folded into the same umbrella
//! error category as a malformed file, with the path and OS error preserved
//! in the message.

use std::fs;
use std::path::Path;

use sptx_core::{Result, SparseMatrix, SptxError};

/// Load a matrix from a file in SPTX text format
///
/// Open/read failures and parse failures both surface as format-category
/// errors; callers that need to tell them apart match on the variant.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|err| SptxError::FileIo {
        cause: format!("{}: {err}", path.display()),
    })?;
    SparseMatrix::from_text(&text)
}

/// Write a matrix to a file in canonical SPTX text format
///
/// Overwrites any existing file at the destination.
pub fn save_matrix<P: AsRef<Path>>(path: P, matrix: &SparseMatrix) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, matrix.to_text()).map_err(|err| SptxError::FileIo {
        cause: format!("{}: {err}", path.display()),
    })
}

/// Construct a matrix either from a file or as an empty matrix with the
/// given dimensions
///
/// A file path takes precedence when both are supplied; supplying neither
/// fails with `InvalidConstruction`.
pub fn build_matrix(path: Option<&Path>, dims: Option<(i64, i64)>) -> Result<SparseMatrix> {
    match (path, dims) {
        (Some(path), _) => load_matrix(path),
        (None, Some((nrows, ncols))) => Ok(SparseMatrix::with_dims(nrows, ncols)),
        (None, None) => Err(SptxError::InvalidConstruction),
    }
}
