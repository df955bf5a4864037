use std::collections::BTreeMap;
use std::ops::{Add, Mul};

use crate::variable::Variable;

/// A weighted sum of variables plus a constant.
///
/// Terms are keyed by variable name; adding the same variable twice accumulates
/// its coefficient. Builders consume and return the expression, so composed
/// expressions are never mutated in place after being shared.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearExpr {
    /// Coefficient per variable name, in name order
    pub terms: BTreeMap<String, f64>,
    /// Constant offset
    pub constant: f64,
}

impl LinearExpr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `coeff * var` to the expression.
    pub fn term(mut self, var: &Variable, coeff: f64) -> Self {
        *self.terms.entry(var.name.clone()).or_insert(0.0) += coeff;
        self
    }

    /// Add another expression term-wise.
    pub fn add_expr(mut self, other: LinearExpr) -> Self {
        for (name, coeff) in other.terms {
            *self.terms.entry(name).or_insert(0.0) += coeff;
        }
        self.constant += other.constant;
        self
    }

    /// Multiply every coefficient and the constant by `factor`.
    pub fn scale(mut self, factor: f64) -> Self {
        for coeff in self.terms.values_mut() {
            *coeff *= factor;
        }
        self.constant *= factor;
        self
    }

    /// Add a constant offset.
    pub fn plus(mut self, value: f64) -> Self {
        self.constant += value;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Names of the variables this expression references, in name order.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }
}

impl From<&Variable> for LinearExpr {
    fn from(var: &Variable) -> Self {
        LinearExpr::new().term(var, 1.0)
    }
}

impl Add for LinearExpr {
    type Output = LinearExpr;

    fn add(self, other: LinearExpr) -> LinearExpr {
        self.add_expr(other)
    }
}

impl Add<f64> for LinearExpr {
    type Output = LinearExpr;

    fn add(self, value: f64) -> LinearExpr {
        self.plus(value)
    }
}

impl Mul<f64> for LinearExpr {
    type Output = LinearExpr;

    fn mul(self, factor: f64) -> LinearExpr {
        self.scale(factor)
    }
}

/// `coeff * &var` builds a single-term expression.
impl Mul<&Variable> for f64 {
    type Output = LinearExpr;

    fn mul(self, var: &Variable) -> LinearExpr {
        LinearExpr::new().term(var, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variable::VarDomain;

    fn var(name: &str) -> Variable {
        Variable::new(name, Some(0.0), None, VarDomain::Continuous).unwrap()
    }

    #[test]
    fn test_repeated_terms_accumulate() {
        let x = var("x");
        let expr = LinearExpr::new().term(&x, 2.0).term(&x, 3.0);
        assert_eq!(expr.terms.get("x"), Some(&5.0));
        assert_eq!(expr.terms.len(), 1);
    }

    #[test]
    fn test_accumulation_is_order_independent() {
        let x = var("x");
        let y = var("y");
        let a = LinearExpr::new().term(&x, 1.0).term(&y, 4.0).term(&x, 2.0);
        let b = LinearExpr::new().term(&x, 2.0).term(&x, 1.0).term(&y, 4.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_add_expr_merges_terms_and_constants() {
        let x = var("x");
        let y = var("y");
        let left = LinearExpr::new().term(&x, 1.0).plus(2.0);
        let right = LinearExpr::new().term(&x, 3.0).term(&y, 1.0).plus(-1.0);
        let sum = left.add_expr(right);
        assert_eq!(sum.terms.get("x"), Some(&4.0));
        assert_eq!(sum.terms.get("y"), Some(&1.0));
        assert_eq!(sum.constant, 1.0);
    }

    #[test]
    fn test_scale_applies_to_constant() {
        let x = var("x");
        let expr = LinearExpr::new().term(&x, 2.0).plus(5.0).scale(3.0);
        assert_eq!(expr.terms.get("x"), Some(&6.0));
        assert_eq!(expr.constant, 15.0);
    }

    #[test]
    fn test_operator_sugar() {
        let x = var("x");
        let y = var("y");
        let expr = 20.0 * &x + 30.0 * &y;
        assert_eq!(expr.terms.get("x"), Some(&20.0));
        assert_eq!(expr.terms.get("y"), Some(&30.0));
        assert_eq!(expr.constant, 0.0);
    }
}
