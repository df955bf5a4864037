//! Plain-text export of a model in the conventional LP file layout.
//!
//! This is a one-way artifact for human inspection; nothing in the crate
//! reads it back.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use crate::expr::LinearExpr;
use crate::model::{Model, Sense};

impl Model {
    /// Render the model as LP-format text
    /// (`Maximize`/`Minimize`, `Subject To`, `Bounds`, `Generals`, `End`).
    pub fn to_lp_format(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "\\ Problem: {}", self.name());

        let sense = match self.objective().map(|o| o.sense) {
            Some(Sense::Minimize) => "Minimize",
            _ => "Maximize",
        };
        out.push_str(sense);
        out.push('\n');
        out.push_str(" obj: ");
        match self.objective() {
            Some(objective) => push_terms(&mut out, &objective.expr),
            None => out.push('0'),
        }
        out.push('\n');

        out.push_str("Subject To\n");
        for constraint in self.constraints() {
            let _ = write!(out, " {}: ", constraint.name);
            push_terms(&mut out, &constraint.expr);
            // The expression constant folds into the right-hand side.
            let rhs = constraint.rhs - constraint.expr.constant;
            let _ = writeln!(out, " {} {}", constraint.op, rhs);
        }

        out.push_str("Bounds\n");
        for var in self.variables() {
            match (var.lower, var.upper) {
                (Some(lo), Some(hi)) => {
                    let _ = writeln!(out, " {} <= {} <= {}", lo, var.name, hi);
                }
                (Some(lo), None) => {
                    let _ = writeln!(out, " {} >= {}", var.name, lo);
                }
                (None, Some(hi)) => {
                    let _ = writeln!(out, " {} <= {}", var.name, hi);
                }
                (None, None) => {
                    let _ = writeln!(out, " {} free", var.name);
                }
            }
        }

        let integers: Vec<&str> = self
            .variables()
            .iter()
            .filter(|v| v.domain == crate::VarDomain::Integer)
            .map(|v| v.name.as_str())
            .collect();
        if !integers.is_empty() {
            out.push_str("Generals\n");
            for name in integers {
                let _ = writeln!(out, " {}", name);
            }
        }

        out.push_str("End\n");
        out
    }

    /// Write the LP-format rendering to a file.
    pub fn write_lp(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, self.to_lp_format())
    }
}

fn push_terms(out: &mut String, expr: &LinearExpr) {
    let mut first = true;
    for (name, &coeff) in &expr.terms {
        if coeff == 0.0 {
            continue;
        }
        if first {
            if coeff < 0.0 {
                out.push_str("- ");
            }
            first = false;
        } else {
            out.push_str(if coeff < 0.0 { " - " } else { " + " });
        }
        let magnitude = coeff.abs();
        if magnitude == 1.0 {
            out.push_str(name);
        } else {
            let _ = write!(out, "{} {}", magnitude, name);
        }
    }
    if first {
        out.push('0');
    }
}

#[cfg(test)]
mod tests {
    use crate::{ConstraintOp, LinearExpr, Model, Sense, VarDomain, Variable};

    fn sample_model() -> Model {
        let mut model = Model::new("Sample");
        let x = Variable::new("x", Some(0.0), Some(400.0), VarDomain::Integer).unwrap();
        let y = Variable::new("y", Some(0.0), None, VarDomain::Continuous).unwrap();
        model.add_variable(x.clone()).unwrap();
        model.add_variable(y.clone()).unwrap();
        model
            .set_objective(20.0 * &x + 30.0 * &y, Sense::Maximize)
            .unwrap();
        model
            .add_constraint("hours", 2.0 * &x + 3.0 * &y, ConstraintOp::Le, 8.0)
            .unwrap();
        model
    }

    #[test]
    fn test_lp_sections_present() {
        let text = sample_model().to_lp_format();
        assert!(text.starts_with("\\ Problem: Sample\n"));
        assert!(text.contains("Maximize\n obj: 20 x + 30 y\n"));
        assert!(text.contains("Subject To\n hours: 2 x + 3 y <= 8\n"));
        assert!(text.contains(" 0 <= x <= 400\n"));
        assert!(text.contains(" y >= 0\n"));
        assert!(text.contains("Generals\n x\n"));
        assert!(text.ends_with("End\n"));
    }

    #[test]
    fn test_constraint_constant_folds_into_rhs() {
        let mut model = Model::new("offset");
        let x = Variable::continuous("x", Some(0.0), None).unwrap();
        model.add_variable(x.clone()).unwrap();
        model
            .set_objective(LinearExpr::from(&x), Sense::Minimize)
            .unwrap();
        let expr = LinearExpr::from(&x).plus(3.0);
        model
            .add_constraint("shifted", expr, ConstraintOp::Le, 10.0)
            .unwrap();
        assert!(model.to_lp_format().contains(" shifted: x <= 7\n"));
    }

    #[test]
    fn test_negative_and_unit_coefficients() {
        let mut model = Model::new("signs");
        let x = Variable::continuous("x", None, None).unwrap();
        let y = Variable::continuous("y", None, None).unwrap();
        model.add_variable(x.clone()).unwrap();
        model.add_variable(y.clone()).unwrap();
        let expr = LinearExpr::new().term(&x, 1.0).term(&y, -2.5);
        model.set_objective(expr, Sense::Minimize).unwrap();
        let text = model.to_lp_format();
        assert!(text.contains(" obj: x - 2.5 y\n"));
        assert!(text.contains(" x free\n"));
    }
}
