use std::collections::BTreeMap;
use std::fmt;

use crate::model::Model;

/// Solver-reported outcome of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// An optimal solution was found
    Optimal,
    /// No assignment satisfies all constraints
    Infeasible,
    /// The objective can be improved without bound
    Unbounded,
    /// The solver could not classify the problem
    Undefined,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Status::Optimal => "Optimal",
            Status::Infeasible => "Infeasible",
            Status::Unbounded => "Unbounded",
            Status::Undefined => "Undefined",
        };
        f.write_str(word)
    }
}

/// The result of solving a model.
///
/// Variable values and the objective value are only present for
/// [`Status::Optimal`]; every other status carries an empty value map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub status: Status,
    /// Resolved value per variable name, in name order
    pub values: BTreeMap<String, f64>,
    /// Optimal objective value
    pub objective_value: Option<f64>,
}

impl Solution {
    pub fn optimal(values: BTreeMap<String, f64>, objective_value: f64) -> Self {
        Self {
            status: Status::Optimal,
            values,
            objective_value: Some(objective_value),
        }
    }

    pub fn infeasible() -> Self {
        Self::without_values(Status::Infeasible)
    }

    pub fn unbounded() -> Self {
        Self::without_values(Status::Unbounded)
    }

    pub fn undefined() -> Self {
        Self::without_values(Status::Undefined)
    }

    fn without_values(status: Status) -> Self {
        Self {
            status,
            values: BTreeMap::new(),
            objective_value: None,
        }
    }
}

/// The external solving capability.
///
/// A backend receives a fully built model and returns a [`Solution`]. Solver
/// failures are reported through [`Status`], never by panicking, so a backend
/// is free to be an actual solver or a test double.
pub trait SolverBackend {
    fn solve(&self, model: &Model) -> Solution;
}
