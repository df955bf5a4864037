use thiserror::Error;

/// Errors raised when a model is built or solved incorrectly.
///
/// All of these indicate caller misuse and are raised synchronously at the
/// point of the offending call. Solver outcomes such as infeasibility are
/// reported through [`crate::Status`], not through this type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("invalid bounds for variable '{name}': lower bound {lower} exceeds upper bound {upper}")]
    InvalidBounds {
        name: String,
        lower: f64,
        upper: f64,
    },
    #[error("a variable named '{0}' already exists in this model")]
    DuplicateName(String),
    #[error("expression references unknown variable '{0}'")]
    UnknownVariable(String),
    #[error("cannot solve '{0}': no objective has been set")]
    MissingObjective(String),
}
