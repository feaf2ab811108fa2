//! Numeric evaluation of expression trees.
//!
//! Evaluation walks the tree recursively and reduces it to a single `f64` under an
//! explicit [`Environment`]. The only failure mode is a variable without a binding.
//!
//! # Example
//!
//! ```
//! use symexpr::expr::Expr;
//! use symexpr::types::Environment;
//!
//! let expr = Expr::add(Expr::variable("x"), Expr::number(1.0));
//! let env = Environment::from([("x".to_string(), 3.0)]);
//! assert_eq!(expr.evaluate(&env).unwrap(), 4.0);
//! assert!(expr.evaluate(&Environment::new()).is_err());
//! ```

use crate::{errors::EvalError, expr::Expr, types::Environment};

impl Expr {
    /// Evaluates the expression under the given variable binding.
    ///
    /// # Arguments
    /// * `env` - Mapping from variable name to value, possibly empty
    ///
    /// # Returns
    /// The value of the expression, or `EvalError::UnboundVariable` naming the first
    /// variable encountered that has no binding
    pub fn evaluate(&self, env: &Environment) -> Result<f64, EvalError> {
        match self {
            Expr::Number(value) => Ok(*value),
            Expr::Variable(name) => env
                .get(name)
                .copied()
                .ok_or_else(|| EvalError::UnboundVariable(name.clone())),
            Expr::Negation(operand) => Ok(-operand.evaluate(env)?),
            Expr::Sine(operand) => Ok(operand.evaluate(env)?.sin()),
            Expr::Cosine(operand) => Ok(operand.evaluate(env)?.cos()),
            Expr::Addition(left, right) => Ok(left.evaluate(env)? + right.evaluate(env)?),
            Expr::Multiplication(left, right) => Ok(left.evaluate(env)? * right.evaluate(env)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn env(bindings: &[(&str, f64)]) -> Environment {
        bindings
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    #[test]
    fn test_number() {
        assert_eq!(Expr::number(5.0).evaluate(&Environment::new()).unwrap(), 5.0);
        assert_eq!(Expr::number(5.0).evaluate(&env(&[("x", 1.0)])).unwrap(), 5.0);
    }

    #[test]
    fn test_variable() {
        let x = Expr::variable("x");
        assert_eq!(x.evaluate(&env(&[("x", 3.0)])).unwrap(), 3.0);
        assert_eq!(
            x.evaluate(&Environment::new()),
            Err(EvalError::UnboundVariable("x".to_string()))
        );
        assert_eq!(
            x.evaluate(&env(&[("y", 3.0)])),
            Err(EvalError::UnboundVariable("x".to_string()))
        );
    }

    #[test]
    fn test_operators() {
        let bindings = env(&[("x", 2.0), ("y", -3.0)]);

        let neg = Expr::negate(Expr::variable("x"));
        assert_eq!(neg.evaluate(&bindings).unwrap(), -2.0);

        let sum = Expr::add(Expr::variable("x"), Expr::variable("y"));
        assert_eq!(sum.evaluate(&bindings).unwrap(), -1.0);

        let product = Expr::multiply(Expr::variable("x"), Expr::variable("y"));
        assert_eq!(product.evaluate(&bindings).unwrap(), -6.0);

        let sine = Expr::sine(Expr::number(PI / 2.0));
        assert!((sine.evaluate(&bindings).unwrap() - 1.0).abs() < 1e-12);

        let cosine = Expr::cosine(Expr::number(PI));
        assert!((cosine.evaluate(&bindings).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_shared_tree_across_threads() {
        let expr = Expr::multiply(Expr::variable("x"), Expr::sine(Expr::variable("x")));

        let values: Vec<f64> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let expr = &expr;
                    scope.spawn(move || expr.evaluate(&env(&[("x", i as f64)])).unwrap())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for (i, value) in values.into_iter().enumerate() {
            let x = i as f64;
            assert_eq!(value, x * x.sin());
        }
    }

    #[test]
    fn test_nested_unbound_variable() {
        // sin(x) * (1 + z) with z missing
        let expr = Expr::multiply(
            Expr::sine(Expr::variable("x")),
            Expr::add(Expr::number(1.0), Expr::variable("z")),
        );
        let err = expr.evaluate(&env(&[("x", 0.0)])).unwrap_err();
        assert_eq!(err, EvalError::UnboundVariable("z".to_string()));
        assert_eq!(err.to_string(), "Unbound variable: z");
    }
}
