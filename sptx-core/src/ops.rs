//! Arithmetic over sparse matrices
//!
//! All operations validate operand shapes, never mutate their operands, and
//! return freshly allocated results whose element maps are value copies.

use crate::error::{Result, SptxError};
use crate::matrix::{Coordinate, SparseMatrix};

/// Binary matrix operations, named for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOp::Add => write!(f, "addition"),
            BinaryOp::Subtract => write!(f, "subtraction"),
            BinaryOp::Multiply => write!(f, "multiplication"),
        }
    }
}

impl SparseMatrix {
    fn require_same_shape(&self, other: &Self, op: BinaryOp) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(SptxError::DimensionMismatch {
                op,
                lhs: self.dimensions(),
                rhs: other.dimensions(),
            });
        }
        Ok(())
    }

    /// Element-wise sum of two matrices of identical shape
    ///
    /// The result starts as a copy of `self`'s entries, then `other`'s
    /// entries are merged in: matching coordinates sum, new coordinates are
    /// inserted. Numerically commutative, though the stored key set follows
    /// the copy-then-merge direction.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.require_same_shape(other, BinaryOp::Add)?;

        let mut result = self.clone();
        for (coord, value) in other.iter() {
            *result.elements.entry(coord).or_insert(0) += value;
        }
        Ok(result)
    }

    /// Element-wise difference of two matrices of identical shape
    ///
    /// Copy of `self`'s entries, then `other`'s entries subtracted in;
    /// coordinates absent from the copy are inserted negated.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.require_same_shape(other, BinaryOp::Subtract)?;

        let mut result = self.clone();
        for (coord, value) in other.iter() {
            *result.elements.entry(coord).or_insert(0) -= value;
        }
        Ok(result)
    }

    /// Sparse matrix product
    ///
    /// Requires `self.ncols() == other.nrows()`; the result has shape
    /// `(self.nrows(), other.ncols())`. Entry-driven: iterates the stored
    /// entries of `self` against every result column, skipping products
    /// where `self`'s factor is structurally zero. Cost is nnz(self) times
    /// ncols(other).
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.ncols() != other.nrows() {
            return Err(SptxError::DimensionMismatch {
                op: BinaryOp::Multiply,
                lhs: self.dimensions(),
                rhs: other.dimensions(),
            });
        }

        let mut result = SparseMatrix::with_dims(self.nrows(), other.ncols());
        for (Coordinate { row, col }, value) in self.iter() {
            for k in 0..other.ncols() {
                if let Some(&factor) = other.elements.get(&Coordinate::new(col, k)) {
                    *result.elements.entry(Coordinate::new(row, k)).or_insert(0) +=
                        value * factor;
                }
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(nrows: i64, ncols: i64, entries: &[(i64, i64, i64)]) -> SparseMatrix {
        let mut m = SparseMatrix::with_dims(nrows, ncols);
        for &(row, col, value) in entries {
            m.set_element(row, col, value);
        }
        m
    }

    #[test]
    fn test_add_merges_entries() {
        let a = matrix(2, 2, &[(0, 0, 1), (1, 1, 2)]);
        let b = matrix(2, 2, &[(0, 0, 3), (0, 1, 4)]);

        let sum = a.add(&b).unwrap();
        assert_eq!(sum.dimensions(), (2, 2));
        assert_eq!(sum.get_element(0, 0), 4);
        assert_eq!(sum.get_element(0, 1), 4);
        assert_eq!(sum.get_element(1, 1), 2);

        // Operands untouched
        assert_eq!(a.get_element(0, 0), 1);
        assert_eq!(b.nnz(), 2);
    }

    #[test]
    fn test_additive_identity() {
        let a = matrix(3, 3, &[(0, 2, 5), (2, 0, -5)]);
        let zero = SparseMatrix::with_dims(3, 3);

        let sum = a.add(&zero).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(sum.get_element(row, col), a.get_element(row, col));
            }
        }
    }

    #[test]
    fn test_add_commutes_by_value() {
        let a = matrix(2, 3, &[(0, 0, 1), (1, 2, 7)]);
        let b = matrix(2, 3, &[(0, 0, -1), (0, 1, 4)]);

        let ab = a.add(&b).unwrap();
        let ba = b.add(&a).unwrap();
        for row in 0..2 {
            for col in 0..3 {
                assert_eq!(ab.get_element(row, col), ba.get_element(row, col));
            }
        }
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let a = SparseMatrix::with_dims(2, 3);
        let b = SparseMatrix::with_dims(3, 2);

        assert_eq!(
            a.add(&b),
            Err(SptxError::DimensionMismatch {
                op: BinaryOp::Add,
                lhs: (2, 3),
                rhs: (3, 2),
            })
        );
    }

    #[test]
    fn test_subtract_self_is_zero_everywhere() {
        let a = matrix(3, 3, &[(0, 0, 4), (1, 2, -6), (2, 2, 11)]);

        let diff = a.subtract(&a).unwrap();
        for (coord, _) in a.iter() {
            assert_eq!(diff.get_element(coord.row, coord.col), 0);
        }
        // Stored-but-zero entries remain, only their values cancel
        assert_eq!(diff.nnz(), a.nnz());
    }

    #[test]
    fn test_subtract_inserts_negated_entries() {
        let a = matrix(2, 2, &[(0, 0, 10)]);
        let b = matrix(2, 2, &[(0, 0, 3), (1, 1, 5)]);

        let diff = a.subtract(&b).unwrap();
        assert_eq!(diff.get_element(0, 0), 7);
        assert_eq!(diff.get_element(1, 1), -5);
    }

    #[test]
    fn test_subtract_not_commutative() {
        let a = matrix(1, 1, &[(0, 0, 5)]);
        let b = matrix(1, 1, &[(0, 0, 2)]);

        assert_eq!(a.subtract(&b).unwrap().get_element(0, 0), 3);
        assert_eq!(b.subtract(&a).unwrap().get_element(0, 0), -3);
    }

    #[test]
    fn test_multiply_dimension_law() {
        let a = SparseMatrix::with_dims(2, 3);
        let b = SparseMatrix::with_dims(3, 5);
        let c = SparseMatrix::with_dims(2, 5);

        assert_eq!(a.multiply(&b).unwrap().dimensions(), (2, 5));
        assert_eq!(
            a.multiply(&c),
            Err(SptxError::DimensionMismatch {
                op: BinaryOp::Multiply,
                lhs: (2, 3),
                rhs: (2, 5),
            })
        );
    }

    #[test]
    fn test_sparse_multiply_worked_example() {
        // (2x2) * (2x1): [[2, 3], [0, 0]] * [[1], [4]] = [[14], [0]]
        let a = matrix(2, 2, &[(0, 0, 2), (0, 1, 3)]);
        let b = matrix(2, 1, &[(0, 0, 1), (1, 0, 4)]);

        let product = a.multiply(&b).unwrap();
        assert_eq!(product.dimensions(), (2, 1));
        assert_eq!(product.nnz(), 1);
        assert_eq!(product.get_element(0, 0), 14);
        assert_eq!(product.get_element(1, 0), 0);
    }

    #[test]
    fn test_multiply_accumulates_across_inner_dimension() {
        // [[1, 2, 3]] * [[1], [1], [1]] = [[6]]
        let a = matrix(1, 3, &[(0, 0, 1), (0, 1, 2), (0, 2, 3)]);
        let b = matrix(3, 1, &[(0, 0, 1), (1, 0, 1), (2, 0, 1)]);

        assert_eq!(a.multiply(&b).unwrap().get_element(0, 0), 6);
    }

    #[test]
    fn test_multiply_by_identity() {
        let a = matrix(2, 2, &[(0, 1, 5), (1, 0, -2)]);
        let identity = matrix(2, 2, &[(0, 0, 1), (1, 1, 1)]);

        let product = a.multiply(&identity).unwrap();
        for row in 0..2 {
            for col in 0..2 {
                assert_eq!(product.get_element(row, col), a.get_element(row, col));
            }
        }
    }
}
