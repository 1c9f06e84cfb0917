use crate::error::LinalgError;
use crate::rings::fraction::{Fraction, IntoFraction};
use itertools::Itertools;
use num_traits::Zero;
use std::fmt;
use std::fmt::Display;

/// Fixed-length row of exact fractions.
///
/// The length never changes after construction; entries can be replaced
/// one by one with [`RowVector::set`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowVector {
    entries: Vec<Fraction>,
}

impl RowVector {
    pub fn from_values<T: IntoFraction>(
        values: impl IntoIterator<Item = T>,
    ) -> Result<Self, LinalgError> {
        let entries = values
            .into_iter()
            .map(IntoFraction::into_fraction)
            .collect::<Result<Vec<Fraction>, LinalgError>>()?;
        RowVector::from_fractions(entries)
    }

    pub fn from_fractions(entries: Vec<Fraction>) -> Result<Self, LinalgError> {
        if entries.is_empty() {
            return Err(LinalgError::Empty);
        }
        Ok(RowVector { entries })
    }

    pub fn zeros(len: usize) -> Result<Self, LinalgError> {
        RowVector::from_fractions(vec![Fraction::zero(); len])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Fraction] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fraction> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Result<&Fraction, LinalgError> {
        self.entries.get(index).ok_or(LinalgError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    pub fn set(&mut self, index: usize, value: Fraction) -> Result<(), LinalgError> {
        let len = self.len();
        let slot = self
            .entries
            .get_mut(index)
            .ok_or(LinalgError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    pub fn add(&self, rhs: &RowVector) -> Result<RowVector, LinalgError> {
        self.zip_with(rhs, Fraction::add)
    }

    pub fn subtract(&self, rhs: &RowVector) -> Result<RowVector, LinalgError> {
        self.zip_with(rhs, Fraction::subtract)
    }

    pub fn scale(&self, multiplier: &Fraction) -> RowVector {
        RowVector {
            entries: self.entries.iter().map(|v| v.multiply(multiplier)).collect(),
        }
    }

    pub fn divide(&self, divisor: &Fraction) -> Result<RowVector, LinalgError> {
        if divisor.is_zero() {
            return Err(LinalgError::DivisionByZero);
        }
        Ok(RowVector {
            entries: self
                .entries
                .iter()
                .map(|v| v.divide(divisor))
                .collect::<Result<_, _>>()?,
        })
    }

    /// Index of the leftmost nonzero entry, or `len()` when every entry is
    /// zero.
    pub fn first_nonzero_index(&self) -> usize {
        self.entries
            .iter()
            .position(|v| !v.is_zero())
            .unwrap_or(self.len())
    }

    pub fn has_pivot(&self) -> bool {
        self.first_nonzero_index() < self.len()
    }

    /// Width of the longest canonical entry.
    pub fn max_entry_width(&self) -> usize {
        self.entries
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(0)
    }

    /// Replaces `self` with `self - pivot_row * self[column]`, clearing
    /// `column` when `pivot_row[column]` is 1. Lengths must already agree.
    pub(crate) fn eliminate(&mut self, pivot_row: &RowVector, column: usize) {
        let factor = self.entries[column].clone();
        if factor.is_zero() {
            return;
        }
        for (entry, pivot_entry) in self.entries.iter_mut().zip(pivot_row.entries.iter()) {
            *entry = entry.subtract(&pivot_entry.multiply(&factor));
        }
    }

    /// `RowVector(a, b, ...)`
    pub fn to_canonical_string(&self) -> String {
        format!("RowVector({})", self.entries.iter().join(", "))
    }

    fn zip_with(
        &self,
        rhs: &RowVector,
        op: impl Fn(&Fraction, &Fraction) -> Fraction,
    ) -> Result<RowVector, LinalgError> {
        if self.len() != rhs.len() {
            return Err(LinalgError::DimensionMismatch {
                expected: self.len(),
                found: rhs.len(),
            });
        }

        Ok(RowVector {
            entries: self
                .entries
                .iter()
                .zip(rhs.entries.iter())
                .map(|(a, b)| op(a, b))
                .collect(),
        })
    }
}

impl<'a> IntoIterator for &'a RowVector {
    type Item = &'a Fraction;
    type IntoIter = std::slice::Iter<'a, Fraction>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Display for RowVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.entries.iter().join(", "))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
