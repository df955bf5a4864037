use crate::error::ModelError;

/// Domain of a decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VarDomain {
    /// Variable may take any real value within its bounds
    Continuous,
    /// Variable is restricted to integer values within its bounds
    Integer,
}

/// A named decision variable with optional bounds and a domain.
///
/// Variables are immutable once constructed; their resolved values live in the
/// [`crate::Solution`] produced by a solve, not on the variable itself.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    /// Name, unique within the owning model
    pub name: String,
    /// Lower bound, or unbounded below when `None`
    pub lower: Option<f64>,
    /// Upper bound, or unbounded above when `None`
    pub upper: Option<f64>,
    /// Continuous or integer
    pub domain: VarDomain,
}

impl Variable {
    /// Create a variable, validating that the bounds do not cross.
    pub fn new(
        name: impl Into<String>,
        lower: Option<f64>,
        upper: Option<f64>,
        domain: VarDomain,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        if let (Some(lo), Some(hi)) = (lower, upper) {
            if lo > hi {
                return Err(ModelError::InvalidBounds {
                    name,
                    lower: lo,
                    upper: hi,
                });
            }
        }
        Ok(Self {
            name,
            lower,
            upper,
            domain,
        })
    }

    /// A continuous variable with the given bounds.
    pub fn continuous(
        name: impl Into<String>,
        lower: Option<f64>,
        upper: Option<f64>,
    ) -> Result<Self, ModelError> {
        Self::new(name, lower, upper, VarDomain::Continuous)
    }

    /// An integer variable with the given bounds.
    pub fn integer(
        name: impl Into<String>,
        lower: Option<f64>,
        upper: Option<f64>,
    ) -> Result<Self, ModelError> {
        Self::new(name, lower, upper, VarDomain::Integer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossed_bounds_rejected() {
        let err = Variable::new("x", Some(10.0), Some(5.0), VarDomain::Continuous).unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidBounds {
                name: "x".to_string(),
                lower: 10.0,
                upper: 5.0,
            }
        );
    }

    #[test]
    fn test_equal_bounds_allowed() {
        let v = Variable::new("fixed", Some(3.0), Some(3.0), VarDomain::Integer).unwrap();
        assert_eq!(v.lower, Some(3.0));
        assert_eq!(v.upper, Some(3.0));
    }

    #[test]
    fn test_half_open_bounds_allowed() {
        assert!(Variable::continuous("a", Some(0.0), None).is_ok());
        assert!(Variable::continuous("b", None, Some(-1.0)).is_ok());
        assert!(Variable::continuous("c", None, None).is_ok());
    }
}
