use std::collections::BTreeMap;

use microlp::{ComparisonOp, OptimizationDirection, Problem};
use optiplan_model::{ConstraintOp, Model, Sense, Solution, SolverBackend, VarDomain};

/// [`SolverBackend`] backed by the microlp LP/MILP solver.
///
/// The model is lowered into a fresh `microlp::Problem` on every call, so
/// re-solves carry no state from an earlier solve.
#[derive(Debug, Default)]
pub struct MicrolpSolver;

impl MicrolpSolver {
    pub fn new() -> Self {
        Self
    }
}

impl SolverBackend for MicrolpSolver {
    fn solve(&self, model: &Model) -> Solution {
        let Some(objective) = model.objective() else {
            // The model layer rejects this before delegating; treat a bare
            // backend call the same way the solver would.
            return Solution::undefined();
        };

        let direction = match objective.sense {
            Sense::Maximize => OptimizationDirection::Maximize,
            Sense::Minimize => OptimizationDirection::Minimize,
        };
        let mut problem = Problem::new(direction);

        let mut handles: BTreeMap<&str, microlp::Variable> = BTreeMap::new();
        for var in model.variables() {
            let coeff = objective.expr.terms.get(&var.name).copied().unwrap_or(0.0);
            let handle = match var.domain {
                VarDomain::Continuous => problem.add_var(
                    coeff,
                    (
                        var.lower.unwrap_or(f64::NEG_INFINITY),
                        var.upper.unwrap_or(f64::INFINITY),
                    ),
                ),
                // Fractional bounds on an integer variable tighten inward:
                // the smallest admissible integer is ceil(lower), the largest
                // floor(upper).
                VarDomain::Integer => problem.add_integer_var(
                    coeff,
                    (
                        var.lower.map(|b| b.ceil() as i32).unwrap_or(i32::MIN),
                        var.upper.map(|b| b.floor() as i32).unwrap_or(i32::MAX),
                    ),
                ),
            };
            handles.insert(var.name.as_str(), handle);
        }

        for constraint in model.constraints() {
            let terms: Vec<(microlp::Variable, f64)> = constraint
                .expr
                .terms
                .iter()
                .map(|(name, &coeff)| (handles[name.as_str()], coeff))
                .collect();
            let op = match constraint.op {
                ConstraintOp::Le => ComparisonOp::Le,
                ConstraintOp::Ge => ComparisonOp::Ge,
                ConstraintOp::Eq => ComparisonOp::Eq,
            };
            // The expression constant folds into the right-hand side.
            problem.add_constraint(terms, op, constraint.rhs - constraint.expr.constant);
        }

        match problem.solve() {
            Ok(solved) => {
                let values: BTreeMap<String, f64> = model
                    .variables()
                    .iter()
                    .map(|var| (var.name.clone(), solved[handles[var.name.as_str()]]))
                    .collect();
                // The solver knows nothing of the objective's constant term.
                let objective_value = solved.objective() + objective.expr.constant;
                Solution::optimal(values, objective_value)
            }
            Err(microlp::Error::Infeasible) => Solution::infeasible(),
            Err(microlp::Error::Unbounded) => Solution::unbounded(),
            Err(_) => Solution::undefined(),
        }
    }
}
