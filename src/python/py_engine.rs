//! Engine function bindings for Python.
//!
//! Rule sets are passed by their snake-case name, e.g. `"us_open_men"`.

use pyo3::prelude::*;

use crate::core::{MatchState, PointRng};
use crate::dataset;
use crate::engine;
use crate::format;

use super::py_core::{PyMatchState, PyTrajectory};
use super::{parse_rules, to_py_err};

/// Apply a point sequence to a starting state.
#[pyfunction]
#[pyo3(signature = (points, start, rules="standard_best_of_three"))]
pub fn process_points(points: Vec<bool>, start: &PyMatchState, rules: &str) -> PyResult<PyTrajectory> {
    let rules = parse_rules(rules)?;
    engine::process_points(&points, &start.0, &rules)
        .map(PyTrajectory)
        .map_err(to_py_err)
}

/// Decode a dataset point code and run the whole match.
#[pyfunction]
#[pyo3(signature = (first_server, first_returner, point_code, rules="standard_best_of_three"))]
pub fn process_match(
    first_server: &str,
    first_returner: &str,
    point_code: &str,
    rules: &str,
) -> PyResult<PyTrajectory> {
    let rules = parse_rules(rules)?;
    dataset::process_match(first_server, first_returner, point_code, &rules)
        .map(PyTrajectory)
        .map_err(to_py_err)
}

/// Decode a dataset point code into "server won" booleans.
#[pyfunction]
pub fn decode_point_code(point_code: &str) -> PyResult<Vec<bool>> {
    dataset::decode_point_code(point_code).map_err(to_py_err)
}

/// Render a state as a score string.
#[pyfunction]
#[pyo3(signature = (state, score_only=false))]
pub fn match_summary(state: &PyMatchState, score_only: bool) -> String {
    format::match_summary(&state.0, score_only)
}

/// Render a game score from one player's perspective.
#[pyfunction]
pub fn points_to_tennis_notation(p_win: u32, p_lose: u32) -> PyResult<String> {
    if p_win.max(p_lose) > 3 && p_win.abs_diff(p_lose) > 1 {
        return Err(to_py_err(format!("game already over at {}-{}", p_win, p_lose)));
    }
    Ok(format::points_to_tennis_notation(p_win, p_lose))
}

/// Simulate a match where the server wins each point with `p_server`.
#[pyfunction]
#[pyo3(signature = (first_server, first_returner, rules, p_server, seed=0, max_points=2000))]
pub fn simulate_match(
    first_server: &str,
    first_returner: &str,
    rules: &str,
    p_server: f64,
    seed: u64,
    max_points: usize,
) -> PyResult<PyTrajectory> {
    if !(0.0..=1.0).contains(&p_server) {
        return Err(to_py_err(format!("p_server out of range: {}", p_server)));
    }

    let rules = parse_rules(rules)?;
    let start = MatchState::try_new(first_server, first_returner).map_err(to_py_err)?;
    let mut rng = PointRng::new(seed);

    let (_, trajectory) = crate::simulate::simulate_match(&start, &rules, p_server, &mut rng, max_points);
    Ok(PyTrajectory(trajectory))
}
