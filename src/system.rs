//! System of expressions evaluated together.
//!
//! This module provides functionality for evaluating multiple expressions that share a
//! common variable ordering.
//!
//! # Features
//!
//! - Consistent variable ordering across expressions
//! - Automatic variable extraction and mapping
//! - Symbolic Jacobian, precomputed on creation
//! - Parallel batch evaluation over many input points
//!
//! # Example
//!
//! ```
//! use symexpr::system::EquationSystem;
//!
//! let system = EquationSystem::new(vec![
//!     r#"("+", ("variable", "x"), ("variable", "y"))"#.to_string(),
//!     r#"("*", ("variable", "x"), ("variable", "z"))"#.to_string(),
//! ])
//! .unwrap();
//!
//! // Variables are automatically sorted (x, y, z)
//! let results = system.eval(&[1.0, 2.0, 3.0]).unwrap();
//! assert_eq!(results, vec![3.0, 3.0]);
//!
//! // d/dx of each expression
//! let dx = system.gradient(&[1.0, 2.0, 3.0], "x").unwrap();
//! assert_eq!(dx, vec![1.0, 3.0]);
//! ```

use std::collections::HashMap;

use itertools::Itertools;
use rayon::prelude::*;

use crate::convert::{build, Description};
use crate::errors::EquationError;
use crate::expr::Expr;
use crate::types::Environment;

/// Represents a system of expressions that can be evaluated together.
#[derive(Debug, Clone)]
pub struct EquationSystem {
    /// The simplified expression trees, in input order
    pub asts: Vec<Expr>,
    /// Variables of all expressions in sorted order, defining input order
    pub sorted_variables: Vec<String>,
    /// Jacobian of the system - maps variable names to the derivative of every expression
    pub jacobian_exprs: HashMap<String, Vec<Expr>>,
}

impl EquationSystem {
    /// Creates a new equation system from description literals.
    ///
    /// # Arguments
    /// * `literals` - One nested description literal per expression
    ///
    /// # Returns
    /// The system, or the first build error encountered
    pub fn new(literals: Vec<String>) -> Result<Self, EquationError> {
        let asts = literals
            .iter()
            .map(|literal| -> Result<Expr, EquationError> {
                Ok(build(&Description::parse(literal)?)?)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_exprs(asts))
    }

    /// Creates a new equation system from existing expression trees.
    ///
    /// The variable list is the sorted union of the variables of all expressions.
    pub fn from_exprs(exprs: Vec<Expr>) -> Self {
        let asts: Vec<Expr> = exprs.iter().map(Expr::simplify).collect();

        let sorted_variables: Vec<String> = asts
            .iter()
            .flat_map(Expr::variables)
            .unique()
            .sorted()
            .collect();

        let jacobian_exprs: HashMap<String, Vec<Expr>> = sorted_variables
            .iter()
            .map(|variable| {
                let derivatives = asts.iter().map(|ast| ast.derive(variable)).collect::<Vec<_>>();
                (variable.clone(), derivatives)
            })
            .collect();

        Self {
            asts,
            sorted_variables,
            jacobian_exprs,
        }
    }

    /// Evaluates every expression at the given point.
    ///
    /// # Arguments
    /// * `inputs` - Input values in the order of `sorted_variables`
    pub fn eval(&self, inputs: &[f64]) -> Result<Vec<f64>, EquationError> {
        let env = self.environment(inputs)?;
        evaluate_all(&self.asts, &env)
    }

    /// Evaluates the system for many input points in parallel.
    ///
    /// The trees are immutable and shared between worker threads without any locking.
    ///
    /// # Arguments
    /// * `input_sets` - Slice of input vectors, each must match the number of variables
    ///
    /// # Returns
    /// Vector of result vectors, one for each input set, or the first error encountered
    ///
    /// # Example
    /// ```
    /// # use symexpr::system::EquationSystem;
    /// let system = EquationSystem::new(vec![
    ///     r#"("+", ("variable", "x"), ("variable", "y"))"#.to_string(),
    ///     r#"("*", ("variable", "x"), ("variable", "y"))"#.to_string(),
    /// ]).unwrap();
    ///
    /// let input_sets = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    /// let results = system.eval_batch(&input_sets).unwrap();
    /// assert_eq!(results, vec![vec![3.0, 2.0], vec![7.0, 12.0]]);
    /// ```
    pub fn eval_batch(&self, input_sets: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, EquationError> {
        input_sets
            .par_iter()
            .map(|inputs| self.eval(inputs))
            .collect()
    }

    /// Returns the partial derivatives of every expression with respect to `variable`.
    ///
    /// # Errors
    /// Returns `EquationError::VariableNotFound` if the variable is not part of the system.
    pub fn gradient(&self, inputs: &[f64], variable: &str) -> Result<Vec<f64>, EquationError> {
        let env = self.environment(inputs)?;
        let derivatives = self
            .jacobian_exprs
            .get(variable)
            .ok_or(EquationError::VariableNotFound(variable.to_string()))?;
        evaluate_all(derivatives, &env)
    }

    /// Computes the Jacobian matrix of the system at the given input values.
    ///
    /// Each row corresponds to an expression and each column to a variable in sorted order.
    pub fn jacobian(&self, inputs: &[f64]) -> Result<Vec<Vec<f64>>, EquationError> {
        let env = self.environment(inputs)?;

        let columns = self
            .sorted_variables
            .iter()
            .map(|variable| evaluate_all(&self.jacobian_exprs[variable], &env))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((0..self.asts.len())
            .map(|row| columns.iter().map(|column| column[row]).collect::<Vec<_>>())
            .collect())
    }

    pub fn len(&self) -> usize {
        self.asts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asts.is_empty()
    }

    fn environment(&self, inputs: &[f64]) -> Result<Environment, EquationError> {
        if inputs.len() != self.sorted_variables.len() {
            return Err(EquationError::InvalidInputLength {
                expected: self.sorted_variables.len(),
                got: inputs.len(),
            });
        }
        Ok(self
            .sorted_variables
            .iter()
            .cloned()
            .zip(inputs.iter().copied())
            .collect())
    }
}

fn evaluate_all(exprs: &[Expr], env: &Environment) -> Result<Vec<f64>, EquationError> {
    exprs
        .iter()
        .map(|expr| expr.evaluate(env).map_err(EquationError::from))
        .collect()
}
