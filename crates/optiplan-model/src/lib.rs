mod error;
mod expr;
mod lp_format;
mod model;
mod solve;
mod variable;

pub use error::ModelError;
pub use expr::LinearExpr;
pub use model::{Constraint, ConstraintOp, Model, Objective, Sense};
pub use solve::{Solution, SolverBackend, Status};
pub use variable::{VarDomain, Variable};
