//! Python bindings for the tennis-points engine.
//!
//! # Quick Start
//!
//! ```python
//! import tennis_points as tp
//!
//! trajectory = tp.process_match("Federer", "Nadal", "SSSS;RRRR.", "classic_slam_men")
//! print(trajectory[-1].summary())
//!
//! trajectory = tp.simulate_match("Federer", "Nadal", "us_open_ladies", 0.62, seed=7)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::rules::RuleSet;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

pub(crate) fn to_py_err(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub(crate) fn parse_rules(name: &str) -> PyResult<RuleSet> {
    name.parse::<RuleSet>().map_err(to_py_err)
}

/// tennis_points: point-by-point tennis match states.
///
/// This module provides:
/// - Match state snapshots
/// - Whole-match processing from booleans or dataset point codes
/// - Score strings and random simulation
#[pymodule]
fn tennis_points(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatchState>()?;
    m.add_class::<PyTrajectory>()?;

    m.add_function(wrap_pyfunction!(py_engine::process_points, m)?)?;
    m.add_function(wrap_pyfunction!(py_engine::process_match, m)?)?;
    m.add_function(wrap_pyfunction!(py_engine::decode_point_code, m)?)?;
    m.add_function(wrap_pyfunction!(py_engine::match_summary, m)?)?;
    m.add_function(wrap_pyfunction!(py_engine::points_to_tennis_notation, m)?)?;
    m.add_function(wrap_pyfunction!(py_engine::simulate_match, m)?)?;

    Ok(())
}
