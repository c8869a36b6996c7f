// This file is part of iaa-accel.
// Licensed under the MIT license, see LICENSE.md for details.
// SPDX-License-Identifier: MIT

//! Python bindings.

use std::convert::Infallible;

use log::*;
use pyo3::{
    exceptions::{PyRuntimeError, PyTypeError, PyValueError, PyZeroDivisionError},
    prelude::*,
    types::{PyBool, PyDict, PyFloat, PyInt, PyString},
};

use crate::agreement::{self, AgreementStats};
use crate::data::{CategoryIndex, RatingMatrix, Scalar};
use crate::errors::AgreementError;
use crate::parallel;
use crate::weighting::{IdentityWeighting, WeightTable};

impl From<AgreementError> for PyErr {
    fn from(err: AgreementError) -> PyErr {
        if err.is_degenerate() {
            PyZeroDivisionError::new_err(err.to_string())
        } else if err.is_malformed() {
            PyValueError::new_err(err.to_string())
        } else {
            PyRuntimeError::new_err(err.to_string())
        }
    }
}

/// A category value received from Python.
///
/// Wraps [Scalar] so that values Python considers equal (`True`, `1`, `1.0`)
/// land in one category, as they would as dict keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PyCategory(Scalar);

impl<'py> FromPyObject<'py> for PyCategory {
    fn extract_bound(ob: &Bound<'py, PyAny>) -> PyResult<Self> {
        // bool is a subclass of int, so it must be checked first
        let value = if let Ok(b) = ob.downcast::<PyBool>() {
            Scalar::from(b.is_true())
        } else if ob.is_instance_of::<PyInt>() {
            Scalar::Int(ob.extract()?)
        } else if let Ok(f) = ob.downcast::<PyFloat>() {
            Scalar::from_f64(f.value())
        } else if let Ok(s) = ob.downcast::<PyString>() {
            Scalar::Str(s.to_str()?.to_owned())
        } else {
            return Err(PyTypeError::new_err(format!(
                "unsupported category value {}",
                ob
            )));
        };
        Ok(PyCategory(value))
    }
}

impl<'py> IntoPyObject<'py> for &PyCategory {
    type Target = PyAny;
    type Output = Bound<'py, PyAny>;
    type Error = Infallible;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        Ok(match &self.0 {
            Scalar::Int(i) => i.into_pyobject(py)?.into_any(),
            Scalar::Float(f) => PyFloat::new(py, f.into_inner()).into_any(),
            Scalar::Str(s) => PyString::new(py, s).into_any(),
        })
    }
}

/// Evaluate a Python weighting callable over every category pair.
fn weight_table<'py>(
    matrix: &RatingMatrix<PyCategory>,
    func: &Bound<'py, PyAny>,
) -> PyResult<WeightTable<PyCategory>> {
    let categories = CategoryIndex::from_rows(matrix.rows());
    debug!(
        "evaluating Python weighting over {} category pairs",
        categories.len() * categories.len()
    );
    let mut table = WeightTable::new();
    for a in categories.iter() {
        for b in categories.iter() {
            let w: f64 = func.call1((a, b))?.extract()?;
            table.insert(a.clone(), b.clone(), w)?;
        }
    }
    Ok(table)
}

fn stats_to_dict<'py>(
    py: Python<'py>,
    stats: &AgreementStats<PyCategory>,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("percent_agreement", stats.percent_agreement)?;
    dict.set_item("kripp_alpha", stats.kripp_alpha)?;
    dict.set_item("ac2", stats.ac2)?;
    dict.set_item("n_categories", stats.n_categories)?;
    dict.set_item("n_annotators", stats.n_annotators)?;
    dict.set_item("n_examples", stats.n_examples)?;
    dict.set_item("n_coincident_examples", stats.n_coincident_examples)?;
    dict.set_item("avg_raters_per_example", stats.avg_raters_per_example)?;
    dict.set_item("n_single_annotation", stats.n_single_annotation)?;

    let per_category = PyDict::new(py);
    for (cat, n) in &stats.coincident_annotations_per_category {
        per_category.set_item(cat, *n)?;
    }
    dict.set_item("coincident_annotations_per_category", per_category)?;
    Ok(dict)
}

/// Compute agreement statistics for an item-by-annotator matrix.
#[pyfunction]
#[pyo3(signature = (matrix, weighting=None))]
fn calculate_agreement<'py>(
    py: Python<'py>,
    matrix: Vec<Vec<Option<PyCategory>>>,
    weighting: Option<Bound<'py, PyAny>>,
) -> PyResult<Bound<'py, PyDict>> {
    let matrix = RatingMatrix::new(matrix)?;
    let stats = match weighting {
        None => py.allow_threads(|| agreement::calculate_agreement(&matrix, &IdentityWeighting))?,
        Some(func) => {
            let table = weight_table(&matrix, &func)?;
            py.allow_threads(|| agreement::calculate_agreement(&matrix, &table))?
        }
    };
    stats_to_dict(py, &stats)
}

#[pyfunction]
fn init_pool(n_threads: usize) -> PyResult<()> {
    Ok(parallel::init_pool(n_threads)?)
}

#[pyfunction]
fn thread_count() -> PyResult<usize> {
    Ok(parallel::thread_count())
}

pub(crate) fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(calculate_agreement, m)?)?;
    m.add_function(wrap_pyfunction!(init_pool, m)?)?;
    m.add_function(wrap_pyfunction!(thread_count, m)?)?;
    Ok(())
}
