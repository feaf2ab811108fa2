//! Mathematical equation evaluation and differentiation on top of expression trees.
//!
//! This module provides the `Equation` type which bundles a simplified expression tree with
//! its variable ordering and precomputed symbolic derivatives.
//!
//! # Features
//!
//! - Positional evaluation with a fixed, alphabetical variable ordering
//! - First order derivatives for every variable, precomputed on creation
//! - Second order derivatives (Hessian), precomputed on creation
//! - Mixed higher order derivatives on demand
//!
//! # Example
//!
//! ```
//! use symexpr::Equation;
//!
//! // 2 * x + y * y
//! let eq = Equation::new(
//!     r#"("+", ("*", ("number", 2), ("variable", "x")), ("*", ("variable", "y"), ("variable", "y")))"#
//!         .to_string(),
//! )
//! .unwrap();
//! assert_eq!(eq.eval(&[1.0, 2.0]).unwrap(), 6.0);
//! assert_eq!(eq.gradient(&[1.0, 2.0]).unwrap(), vec![2.0, 4.0]);
//! assert_eq!(eq.hessian(&[1.0, 2.0]).unwrap(), vec![vec![0.0, 0.0], vec![0.0, 2.0]]);
//! ```
//!
//! # Variable Handling
//!
//! Variables can be specified either:
//! - Automatically extracted and sorted alphabetically using `new()` or `from_expr()`
//! - Explicitly ordered using `from_variables()`
//!
//! Input slices must match the variable ordering.

use std::collections::HashMap;

use colored::Colorize;

use crate::convert::{build, Description};
use crate::errors::EquationError;
use crate::expr::Expr;
use crate::types::Environment;

/// Represents a mathematical equation that can be evaluated and differentiated.
///
/// The expression is simplified once on creation. All first and second order partial
/// derivatives are derived symbolically up front and kept as expression trees.
#[derive(Clone)]
pub struct Equation {
    ast: Expr,
    derivatives_first_order: HashMap<String, Expr>,
    derivatives_second_order: Vec<Vec<Expr>>,
    sorted_variables: Vec<String>,
}

impl std::fmt::Debug for Equation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{{\n")?;
        writeln!(f, "    {}: {}\n", "Equation".cyan(), self.ast)?;
        writeln!(f, "    {}: {:?}\n", "Variables".cyan(), self.sorted_variables)?;
        for variable in &self.sorted_variables {
            writeln!(
                f,
                "    {}: {}\n",
                format!("d/d{variable}").cyan(),
                self.derivatives_first_order[variable]
            )?;
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl std::fmt::Display for Equation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ast)
    }
}

impl Equation {
    /// Creates a new `Equation` from a description literal.
    ///
    /// Variables are extracted from the expression and sorted alphabetically; input slices
    /// are expected in that order. For explicit ordering use `from_variables()`.
    ///
    /// # Arguments
    /// * `literal` - The nested description literal, e.g. `("sin", ("variable", "x"))`
    ///
    /// # Returns
    /// * `Result<Self, EquationError>` - The equation or a build error
    pub fn new(literal: String) -> Result<Self, EquationError> {
        let expr = build(&Description::parse(&literal)?)?;
        Ok(Self::from_expr(expr))
    }

    /// Creates a new `Equation` from an existing expression tree.
    pub fn from_expr(expr: Expr) -> Self {
        let variables = expr.variables();
        Self::build(expr, variables)
    }

    /// Creates a new `Equation` with an explicit variable ordering.
    ///
    /// The list may contain variables that do not occur in the expression, but every
    /// variable of the expression must be listed.
    ///
    /// # Errors
    /// Returns `EquationError::VariableNotFound` listing every missing variable.
    pub fn from_variables(literal: String, variables: &[&str]) -> Result<Self, EquationError> {
        let expr = build(&Description::parse(&literal)?)?;

        let missing: Vec<String> = expr
            .variables()
            .into_iter()
            .filter(|name| !variables.contains(&name.as_str()))
            .collect();
        if !missing.is_empty() {
            return Err(EquationError::VariableNotFound(missing.join(", ")));
        }

        let variables = variables.iter().map(|name| name.to_string()).collect();
        Ok(Self::build(expr, variables))
    }

    /// Simplifies the expression and precomputes its first and second order derivatives.
    fn build(expr: Expr, sorted_variables: Vec<String>) -> Self {
        let ast = expr.simplify();

        let derivatives_first_order: HashMap<String, Expr> = sorted_variables
            .iter()
            .map(|variable| (variable.clone(), ast.derive(variable)))
            .collect();

        let derivatives_second_order: Vec<Vec<Expr>> = sorted_variables
            .iter()
            .map(|first| {
                sorted_variables
                    .iter()
                    .map(|second| derivatives_first_order[first].derive(second))
                    .collect()
            })
            .collect();

        Self {
            ast,
            derivatives_first_order,
            derivatives_second_order,
            sorted_variables,
        }
    }

    /// Evaluates the equation at the given point.
    ///
    /// # Arguments
    /// * `values` - Input values in the order of `sorted_variables()`
    pub fn eval(&self, values: &[f64]) -> Result<f64, EquationError> {
        let env = self.environment(values)?;
        Ok(self.ast.evaluate(&env)?)
    }

    /// Computes the gradient, one partial derivative per variable in sorted order.
    pub fn gradient(&self, values: &[f64]) -> Result<Vec<f64>, EquationError> {
        let env = self.environment(values)?;
        self.sorted_variables
            .iter()
            .map(|variable| {
                self.derivatives_first_order[variable]
                    .evaluate(&env)
                    .map_err(EquationError::from)
            })
            .collect()
    }

    /// Computes the Hessian matrix of second order partial derivatives.
    pub fn hessian(&self, values: &[f64]) -> Result<Vec<Vec<f64>>, EquationError> {
        let env = self.environment(values)?;
        self.derivatives_second_order
            .iter()
            .map(|row| {
                row.iter()
                    .map(|derivative| derivative.evaluate(&env).map_err(EquationError::from))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect()
    }

    /// Returns the precomputed first order derivative with respect to `variable`.
    pub fn derivative(&self, variable: &str) -> Result<&Expr, EquationError> {
        self.derivatives_first_order
            .get(variable)
            .ok_or(EquationError::DerivativeNotFound(variable.to_string()))
    }

    /// Derives the equation successively with respect to each of `variables`.
    ///
    /// For example `["x", "y"]` yields the mixed partial derivative d²f/dxdy.
    ///
    /// # Errors
    /// Returns `EquationError::DerivativeNotFound` if any variable is not part of the equation.
    pub fn derive_wrt(&self, variables: &[&str]) -> Result<Expr, EquationError> {
        let unknown: Vec<&str> = variables
            .iter()
            .copied()
            .filter(|variable| !self.sorted_variables.iter().any(|known| known == variable))
            .collect();
        if !unknown.is_empty() {
            return Err(EquationError::DerivativeNotFound(unknown.join(", ")));
        }

        Ok(variables
            .iter()
            .fold(self.ast.clone(), |expr, variable| expr.derive(variable)))
    }

    pub fn ast(&self) -> &Expr {
        &self.ast
    }

    pub fn sorted_variables(&self) -> &[String] {
        &self.sorted_variables
    }

    fn environment(&self, values: &[f64]) -> Result<Environment, EquationError> {
        if values.len() != self.sorted_variables.len() {
            return Err(EquationError::InvalidInputLength {
                expected: self.sorted_variables.len(),
                got: values.len(),
            });
        }
        Ok(self
            .sorted_variables
            .iter()
            .cloned()
            .zip(values.iter().copied())
            .collect())
    }
}
