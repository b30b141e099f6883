//! Error types for SPTX operations

use crate::ops::BinaryOp;

/// Errors that can occur during SPTX operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SptxError {
    /// Neither a file path nor explicit dimensions were supplied
    InvalidConstruction,
    /// A `rows=`/`cols=` header line is missing or malformed
    MalformedHeader {
        /// 1-based line number in the input
        line: usize,
        /// What was wrong with the line
        detail: &'static str,
    },
    /// An entry line fails the `(row, col, value)` contract
    MalformedEntry {
        /// 1-based line number in the input
        line: usize,
        /// What was wrong with the line
        detail: &'static str,
    },
    /// Underlying file open/read/write failure
    FileIo {
        /// Path and OS error, preserved for diagnostics
        cause: String,
    },
    /// Operand shapes incompatible for the requested operation
    DimensionMismatch {
        /// The operation that was attempted
        op: BinaryOp,
        /// Shape of the left operand as (rows, cols)
        lhs: (i64, i64),
        /// Shape of the right operand as (rows, cols)
        rhs: (i64, i64),
    },
}

/// Coarse error classification for callers that only branch on failure kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input file could not be read or has the wrong format
    Format,
    /// The caller asked for something the operands cannot support
    Usage,
}

impl SptxError {
    /// Classify this error
    ///
    /// Header, entry, and I/O failures share the `Format` umbrella: callers
    /// who only want a yes/no on "could this file be loaded" branch on the
    /// category, callers who need the root cause match on the variant.
    pub fn category(&self) -> ErrorCategory {
        match self {
            SptxError::MalformedHeader { .. }
            | SptxError::MalformedEntry { .. }
            | SptxError::FileIo { .. } => ErrorCategory::Format,
            SptxError::InvalidConstruction | SptxError::DimensionMismatch { .. } => {
                ErrorCategory::Usage
            }
        }
    }

    /// True for the umbrella "input file has wrong format" condition
    pub fn is_format_error(&self) -> bool {
        self.category() == ErrorCategory::Format
    }
}

impl std::fmt::Display for SptxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SptxError::InvalidConstruction => {
                write!(f, "either a file path or explicit dimensions must be provided")
            }
            SptxError::MalformedHeader { line, detail } => {
                write!(f, "input file has wrong format: line {line}: {detail}")
            }
            SptxError::MalformedEntry { line, detail } => {
                write!(f, "input file has wrong format: line {line}: {detail}")
            }
            SptxError::FileIo { cause } => {
                write!(f, "input file has wrong format: {cause}")
            }
            SptxError::DimensionMismatch { op, lhs, rhs } => {
                write!(
                    f,
                    "matrix dimensions do not match for {op}: {}x{} vs {}x{}",
                    lhs.0, lhs.1, rhs.0, rhs.1
                )
            }
        }
    }
}

impl std::error::Error for SptxError {}

/// Result type for SPTX operations
pub type Result<T> = std::result::Result<T, SptxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_umbrella() {
        let header = SptxError::MalformedHeader {
            line: 1,
            detail: "missing rows= header",
        };
        let entry = SptxError::MalformedEntry {
            line: 3,
            detail: "expected three comma-separated integers",
        };
        let io = SptxError::FileIo {
            cause: "missing.txt: No such file or directory".into(),
        };

        assert!(header.is_format_error());
        assert!(entry.is_format_error());
        assert!(io.is_format_error());
        assert!(!SptxError::InvalidConstruction.is_format_error());

        // The variants stay distinguishable under the umbrella
        assert_ne!(header, entry);
    }

    #[test]
    fn test_display_messages() {
        let err = SptxError::DimensionMismatch {
            op: BinaryOp::Add,
            lhs: (2, 3),
            rhs: (3, 2),
        };
        assert_eq!(
            err.to_string(),
            "matrix dimensions do not match for addition: 2x3 vs 3x2"
        );

        let err = SptxError::MalformedEntry {
            line: 4,
            detail: "entry is not parenthesized",
        };
        assert!(err.to_string().starts_with("input file has wrong format"));
    }
}
