use crate::error::LinalgError;
use crate::matrix::row_vector::RowVector;
use crate::rings::fraction::{Fraction, IntoFraction};
use itertools::Itertools;
use num_traits::{One, Zero};
use rayon::prelude::*;
use std::fmt;
use std::fmt::Display;
use tracing::{debug, trace};

/// Non-empty sequence of equal-length rows of exact fractions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: Vec<RowVector>,
}

impl Matrix {
    /// Builds a matrix from real-valued rows, e.g. `[[1, 2], [3, 4]]` or
    /// `[["0.5", "1/3"], ["2", "-1"]]`.
    ///
    /// Fails with [`LinalgError::DimensionMismatch`] if the rows do not all
    /// have the same length.
    pub fn from_rows<R, T>(rows: impl IntoIterator<Item = R>) -> Result<Self, LinalgError>
    where
        R: IntoIterator<Item = T>,
        T: IntoFraction,
    {
        let rows = rows
            .into_iter()
            .map(RowVector::from_values)
            .collect::<Result<Vec<RowVector>, LinalgError>>()?;
        Matrix::from_row_vectors(rows)
    }

    pub fn from_row_vectors(rows: Vec<RowVector>) -> Result<Self, LinalgError> {
        let cols = rows.first().ok_or(LinalgError::Empty)?.len();

        if let Some(bad) = rows.iter().find(|r| r.len() != cols) {
            return Err(LinalgError::DimensionMismatch {
                expected: cols,
                found: bad.len(),
            });
        }

        Ok(Matrix { rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    pub fn rows(&self) -> &[RowVector] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Result<&RowVector, LinalgError> {
        self.rows.get(index).ok_or(LinalgError::IndexOutOfRange {
            index,
            len: self.row_count(),
        })
    }

    pub fn set_row(&mut self, index: usize, row: RowVector) -> Result<(), LinalgError> {
        if row.len() != self.column_count() {
            return Err(LinalgError::DimensionMismatch {
                expected: self.column_count(),
                found: row.len(),
            });
        }
        let len = self.row_count();
        let slot = self
            .rows
            .get_mut(index)
            .ok_or(LinalgError::IndexOutOfRange { index, len })?;
        *slot = row;
        Ok(())
    }

    pub fn at(&self, row: usize, col: usize) -> Result<&Fraction, LinalgError> {
        self.row(row)?.get(col)
    }

    pub fn to_list(&self) -> Vec<Vec<Fraction>> {
        self.rows.iter().map(|r| r.entries().to_vec()).collect()
    }

    /// Reduced row echelon form, computed on a private copy by Gauss-Jordan
    /// elimination.
    ///
    /// Before each step the rows are stably sorted by pivot column, so rows
    /// that tie keep their relative order and the output is reproducible.
    /// The loop stops at the first row without a pivot; every row below it
    /// is zero as well.
    pub fn reduce_to_rref(&self) -> Matrix {
        debug!(
            rows = self.row_count(),
            cols = self.column_count(),
            "reducing matrix to rref"
        );

        let mut work = self.rows.clone();

        for i in 0..work.len() {
            work.sort_by_key(RowVector::first_nonzero_index);

            let pivot_col = work[i].first_nonzero_index();
            let Some(inverse) = work[i].get(pivot_col).ok().and_then(Fraction::recip) else {
                debug!(rank = i, "no pivot left, remaining rows are zero");
                break;
            };
            trace!(row = i, col = pivot_col, "pivot");

            let pivot_row = work[i].scale(&inverse);
            for (j, row) in work.iter_mut().enumerate() {
                if j != i {
                    row.eliminate(&pivot_row, pivot_col);
                }
            }
            work[i] = pivot_row;
        }

        Matrix { rows: work }
    }

    /// Checks the echelon invariants: every nonzero row starts with a 1 that
    /// sits strictly right of the pivot above it, pivot columns are zero
    /// elsewhere, and zero rows come last.
    pub fn is_rref(&self) -> bool {
        let mut lead = None;

        for (i, row) in self.rows.iter().enumerate() {
            if !row.has_pivot() {
                return self.rows[i + 1..].iter().all(|r| !r.has_pivot());
            }

            let pivot_col = row.first_nonzero_index();
            if let Some(prev_lead) = lead {
                if pivot_col <= prev_lead {
                    return false;
                }
            }
            lead = Some(pivot_col);

            if !row.entries()[pivot_col].is_one() {
                return false;
            }

            let column_clear = self
                .rows
                .iter()
                .enumerate()
                .all(|(r, other)| r == i || other.entries()[pivot_col].is_zero());
            if !column_clear {
                return false;
            }
        }
        true
    }

    /// Leading column of every row that has one, top to bottom.
    pub fn pivot_columns(&self) -> Vec<usize> {
        self.rows
            .iter()
            .filter(|r| r.has_pivot())
            .map(RowVector::first_nonzero_index)
            .collect()
    }

    /// `Matrix([a, b, ...], [c, d, ...], ...)`
    pub fn to_canonical_string(&self) -> String {
        format!("Matrix({})", self.rows.iter().join(", "))
    }
}

/// Reduces independent matrices in parallel. The output is in input order.
pub fn reduce_many(matrices: &[Matrix]) -> Vec<Matrix> {
    matrices.par_iter().map(Matrix::reduce_to_rref).collect()
}

/// One row per line, entries right-aligned to the widest entry and
/// separated by two spaces.
impl Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(RowVector::max_entry_width)
            .max()
            .unwrap_or(0);

        let text = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|v| format!("{:>width$}", v.to_string(), width = width))
                    .join("  ")
            })
            .join("\n");
        write!(f, "{}", text)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
