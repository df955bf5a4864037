use std::fmt;

use crate::error::ModelError;
use crate::expr::LinearExpr;
use crate::solve::{Solution, SolverBackend, Status};
use crate::variable::Variable;

/// Whether the objective is to be maximized or minimized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sense {
    Maximize,
    Minimize,
}

/// Comparison operator of a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstraintOp {
    /// Less than or equal (<=)
    Le,
    /// Greater than or equal (>=)
    Ge,
    /// Equal (=)
    Eq,
}

impl fmt::Display for ConstraintOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            ConstraintOp::Le => "<=",
            ConstraintOp::Ge => ">=",
            ConstraintOp::Eq => "=",
        };
        f.write_str(symbol)
    }
}

/// A named linear constraint `expr op rhs`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    /// Name/label for the constraint (for diagnostics and LP export)
    pub name: String,
    pub expr: LinearExpr,
    pub op: ConstraintOp,
    pub rhs: f64,
}

/// The objective expression together with its sense.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objective {
    pub expr: LinearExpr,
    pub sense: Sense,
}

/// An LP/MILP model: variables, an objective, and named constraints.
///
/// A model is built up by the caller, solved through a [`SolverBackend`], and
/// then queried for results. Mutating the model discards any stored solution;
/// a later solve recomputes from scratch.
#[derive(Debug, Clone)]
pub struct Model {
    name: String,
    variables: Vec<Variable>,
    objective: Option<Objective>,
    constraints: Vec<Constraint>,
    solution: Option<Solution>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: Vec::new(),
            objective: None,
            constraints: Vec::new(),
            solution: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn objective(&self) -> Option<&Objective> {
        self.objective.as_ref()
    }

    /// Look up a registered variable by name.
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Register a variable. Names must be unique within the model.
    pub fn add_variable(&mut self, var: Variable) -> Result<(), ModelError> {
        if self.variable(&var.name).is_some() {
            return Err(ModelError::DuplicateName(var.name));
        }
        self.solution = None;
        self.variables.push(var);
        Ok(())
    }

    /// Set the objective. Every variable the expression references must
    /// already be registered.
    pub fn set_objective(&mut self, expr: LinearExpr, sense: Sense) -> Result<(), ModelError> {
        self.check_known(&expr)?;
        self.solution = None;
        self.objective = Some(Objective { expr, sense });
        Ok(())
    }

    /// Add a named constraint `expr op rhs`. Every variable the expression
    /// references must already be registered.
    pub fn add_constraint(
        &mut self,
        name: impl Into<String>,
        expr: LinearExpr,
        op: ConstraintOp,
        rhs: f64,
    ) -> Result<(), ModelError> {
        self.check_known(&expr)?;
        self.solution = None;
        self.constraints.push(Constraint {
            name: name.into(),
            expr,
            op,
            rhs,
        });
        Ok(())
    }

    /// Solve through the given backend and store the result.
    ///
    /// Returns the solver status. Infeasible, unbounded, and undefined are
    /// normal outcomes; the only error here is attempting to solve a model
    /// with no objective.
    pub fn solve(&mut self, backend: &impl SolverBackend) -> Result<Status, ModelError> {
        if self.objective.is_none() {
            return Err(ModelError::MissingObjective(self.name.clone()));
        }
        let solution = backend.solve(self);
        let status = solution.status;
        self.solution = Some(solution);
        Ok(status)
    }

    /// Status of the stored solution, if the model has been solved.
    pub fn status(&self) -> Option<Status> {
        self.solution.as_ref().map(|s| s.status)
    }

    /// Resolved value of a variable from the stored solution.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.solution.as_ref()?.values.get(name).copied()
    }

    /// Optimal objective value from the stored solution.
    pub fn objective_value(&self) -> Option<f64> {
        self.solution.as_ref()?.objective_value
    }

    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    fn check_known(&self, expr: &LinearExpr) -> Result<(), ModelError> {
        for name in expr.variable_names() {
            if self.variable(name).is_none() {
                return Err(ModelError::UnknownVariable(name.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variable::VarDomain;
    use std::collections::BTreeMap;

    /// Backend double returning a canned solution.
    struct FixedBackend(Solution);

    impl SolverBackend for FixedBackend {
        fn solve(&self, _model: &Model) -> Solution {
            self.0.clone()
        }
    }

    fn var(name: &str) -> Variable {
        Variable::new(name, Some(0.0), None, VarDomain::Continuous).unwrap()
    }

    #[test]
    fn test_duplicate_variable_name_rejected() {
        let mut model = Model::new("dup");
        model.add_variable(var("x")).unwrap();
        let err = model.add_variable(var("x")).unwrap_err();
        assert_eq!(err, ModelError::DuplicateName("x".to_string()));
    }

    #[test]
    fn test_unknown_variable_in_constraint_rejected() {
        let mut model = Model::new("unknown");
        let ghost = var("ghost");
        let expr = LinearExpr::new().term(&ghost, 1.0);
        let err = model
            .add_constraint("c", expr, ConstraintOp::Le, 1.0)
            .unwrap_err();
        assert_eq!(err, ModelError::UnknownVariable("ghost".to_string()));
    }

    #[test]
    fn test_unknown_variable_in_objective_rejected() {
        let mut model = Model::new("unknown");
        model.add_variable(var("x")).unwrap();
        let ghost = var("ghost");
        let expr = LinearExpr::new().term(&ghost, 1.0);
        let err = model.set_objective(expr, Sense::Maximize).unwrap_err();
        assert_eq!(err, ModelError::UnknownVariable("ghost".to_string()));
    }

    #[test]
    fn test_solve_without_objective_rejected() {
        let mut model = Model::new("empty");
        model.add_variable(var("x")).unwrap();
        let backend = FixedBackend(Solution::infeasible());
        let err = model.solve(&backend).unwrap_err();
        assert_eq!(err, ModelError::MissingObjective("empty".to_string()));
    }

    #[test]
    fn test_solve_stores_solution() {
        let mut model = Model::new("stored");
        let x = var("x");
        model.add_variable(x.clone()).unwrap();
        model
            .set_objective(LinearExpr::from(&x), Sense::Maximize)
            .unwrap();

        let mut values = BTreeMap::new();
        values.insert("x".to_string(), 7.0);
        let backend = FixedBackend(Solution::optimal(values, 7.0));

        let status = model.solve(&backend).unwrap();
        assert_eq!(status, Status::Optimal);
        assert_eq!(model.value("x"), Some(7.0));
        assert_eq!(model.objective_value(), Some(7.0));
    }

    #[test]
    fn test_mutation_discards_solution() {
        let mut model = Model::new("stale");
        let x = var("x");
        model.add_variable(x.clone()).unwrap();
        model
            .set_objective(LinearExpr::from(&x), Sense::Maximize)
            .unwrap();

        let backend = FixedBackend(Solution::optimal(BTreeMap::new(), 0.0));
        model.solve(&backend).unwrap();
        assert!(model.status().is_some());

        model
            .add_constraint("late", LinearExpr::from(&x), ConstraintOp::Le, 1.0)
            .unwrap();
        assert!(model.status().is_none());
        assert_eq!(model.objective_value(), None);
    }

    #[test]
    fn test_infeasible_status_is_not_an_error() {
        let mut model = Model::new("infeasible");
        let x = var("x");
        model.add_variable(x.clone()).unwrap();
        model
            .set_objective(LinearExpr::from(&x), Sense::Minimize)
            .unwrap();

        let backend = FixedBackend(Solution::infeasible());
        let status = model.solve(&backend).unwrap();
        assert_eq!(status, Status::Infeasible);
        assert_eq!(model.value("x"), None);
        assert_eq!(model.objective_value(), None);
    }
}
