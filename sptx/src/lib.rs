//! SPTX - Sparse Matrix Text Format with File I/O
//!
//! This library pairs the pure `sptx-core` engine with filesystem access.
//!
//! ## Architecture
//!
//! SPTX follows a specification/implementation separation:
//!
//! - **sptx-core**: storage model, parser, arithmetic, formatter (no I/O)
//! - **sptx**: file loading/saving and the arithmetic CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sptx::{load_matrix, save_matrix};
//!
//! fn example() -> sptx::Result<()> {
//!     let a = load_matrix("a.txt")?;
//!     let b = load_matrix("b.txt")?;
//!     save_matrix("sum.txt", &a.add(&b)?)?;
//!     Ok(())
//! }
//! ```

// Re-export the core engine
pub use sptx_core::{
    // Storage model
    Coordinate, SparseMatrix,
    // Error handling
    BinaryOp, ErrorCategory, Result, SptxError,
};

pub mod file_io;

pub use file_io::{build_matrix, load_matrix, save_matrix};
