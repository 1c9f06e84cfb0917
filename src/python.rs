//! Python bindings, enabled with the `python` feature.
//!
//! Python values are converted through `str(value)`, so `0.1` arrives as
//! the text `"0.1"` and becomes exactly `1/10`.

use crate::error::LinalgError;
use crate::matrix::matrix::{self, Matrix};
use pyo3::exceptions::{PyIndexError, PyValueError, PyZeroDivisionError};
use pyo3::prelude::*;
use pyo3::types::PyType;

impl From<LinalgError> for PyErr {
    fn from(error: LinalgError) -> PyErr {
        match error {
            LinalgError::DivisionByZero => PyZeroDivisionError::new_err(error.to_string()),
            LinalgError::IndexOutOfRange { .. } => PyIndexError::new_err(error.to_string()),
            _ => PyValueError::new_err(error.to_string()),
        }
    }
}

fn rows_as_text(rows: &[Vec<Bound<'_, PyAny>>]) -> PyResult<Vec<Vec<String>>> {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|value| Ok(value.str()?.to_string()))
                .collect::<PyResult<Vec<String>>>()
        })
        .collect()
}

#[derive(Debug, Clone)]
#[pyclass(frozen, name = "Matrix")]
pub struct PyMatrix {
    inner: Matrix,
}

#[pymethods]
impl PyMatrix {
    #[classmethod]
    pub fn from_rows<'py>(
        _cls: &Bound<'py, PyType>,
        rows: Vec<Vec<Bound<'py, PyAny>>>,
    ) -> PyResult<Self> {
        Ok(PyMatrix {
            inner: Matrix::from_rows(rows_as_text(&rows)?)?,
        })
    }

    pub fn reduce_to_rref(&self) -> PyMatrix {
        PyMatrix {
            inner: self.inner.reduce_to_rref(),
        }
    }

    pub fn is_rref(&self) -> bool {
        self.inner.is_rref()
    }

    pub fn to_list(&self) -> Vec<Vec<String>> {
        self.inner
            .to_list()
            .iter()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.row_count()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.column_count()
    }

    pub fn __repr__(&self) -> String {
        self.inner.to_canonical_string()
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

/// Reduces every matrix with the GIL released.
#[pyfunction]
pub fn reduce_many(py: Python<'_>, matrices: Vec<PyRef<'_, PyMatrix>>) -> Vec<PyMatrix> {
    let inputs: Vec<Matrix> = matrices.iter().map(|m| m.inner.clone()).collect();
    py.allow_threads(|| matrix::reduce_many(&inputs))
        .into_iter()
        .map(|inner| PyMatrix { inner })
        .collect()
}

/// Canonical string of the reduced form of `rows`.
#[pyfunction]
pub fn rref<'py>(rows: Vec<Vec<Bound<'py, PyAny>>>) -> PyResult<String> {
    let matrix = Matrix::from_rows(rows_as_text(&rows)?)?;
    Ok(matrix.reduce_to_rref().to_canonical_string())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
