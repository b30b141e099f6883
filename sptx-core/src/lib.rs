//! SPTX Core - Sparse Matrix Text Format Definitions
//!
//! This crate provides the storage model, parser, arithmetic, and formatter
//! for the SPTX sparse matrix text format, with no I/O dependencies. File
//! loading and the CLI live in the `sptx` crate.
//!
//! A matrix records only explicitly set entries, keyed by `(row, col)`
//! coordinate; every other cell reads as zero. The text format is two header
//! lines followed by one parenthesized triple per entry:
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 0, 1)
//! (2, 1, -4)
//! ```
//!
//! ```
//! use sptx_core::SparseMatrix;
//!
//! let a = SparseMatrix::from_text("rows=2\ncols=2\n(0, 0, 2)\n")?;
//! let mut b = SparseMatrix::with_dims(2, 2);
//! b.set_element(0, 0, 40);
//!
//! let sum = a.add(&b)?;
//! assert_eq!(sum.get_element(0, 0), 42);
//! assert_eq!(sum.to_text(), "rows=2\ncols=2\n(0, 0, 42)\n");
//! # Ok::<(), sptx_core::SptxError>(())
//! ```

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod parse;

pub use error::{ErrorCategory, Result, SptxError};
pub use matrix::{Coordinate, SparseMatrix};
pub use ops::BinaryOp;
pub use parse::{parse_dimension_line, parse_entry_line};
