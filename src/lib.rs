pub mod error;

pub mod matrix {
    pub mod matrix;
    pub mod row_vector;
}
pub mod rings {
    pub mod fraction;
}

#[cfg(feature = "python")]
pub mod python;

mod proptests;

pub use error::LinalgError;
pub use matrix::matrix::{reduce_many, Matrix};
pub use matrix::row_vector::RowVector;
pub use rings::fraction::{Fraction, IntoFraction};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn exact_rref(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<python::PyMatrix>()?;
    m.add_function(wrap_pyfunction!(python::reduce_many, m)?)?;
    m.add_function(wrap_pyfunction!(python::rref, m)?)?;
    Ok(())
}
