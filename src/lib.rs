//! Symbolic expression trees with evaluation, differentiation and simplification.
//!
//! This crate represents arithmetic expressions over numbers and named variables with the
//! operators negation, addition, multiplication, sine and cosine. Every tree supports three
//! operations:
//!
//! - Numeric evaluation under an explicit variable environment
//! - Symbolic differentiation with respect to a named variable
//! - Simplification by constant folding and identity rules
//!
//! Trees are built from nested operator descriptions, either assembled in code or read
//! from a tuple literal.
//!
//! # Example
//!
//! ```rust
//! use symexpr::prelude::*;
//!
//! // x * x
//! let description = Description::parse(r#"("*", ("variable", "x"), ("variable", "x"))"#).unwrap();
//! let expr = build(&description).unwrap();
//!
//! // Differentiate: 1*x + x*1 simplifies to x + x
//! let derivative = expr.derive("x");
//! assert_eq!(derivative, Expr::add(Expr::variable("x"), Expr::variable("x")));
//!
//! // Evaluate at x = 3
//! let env = Environment::from([("x".to_string(), 3.0)]);
//! assert_eq!(derivative.evaluate(&env).unwrap(), 6.0);
//! ```

pub use equation::Equation;
pub use system::EquationSystem;

pub mod prelude {
    pub use crate::convert::{build, Description, Operand};
    pub use crate::equation::Equation;
    pub use crate::expr::Expr;
    pub use crate::types::Environment;
}

/// Conversion from nested operator descriptions to expression trees
pub mod convert;
/// Symbolic differentiation
pub mod derivative;
/// High-level equation handling
pub mod equation;
/// Error types for the various failure modes
pub mod errors;
/// Numeric evaluation
pub mod evaluate;
/// Expression tree representation
pub mod expr;
/// Algebraic simplification
pub mod simplify;
/// System of equations
pub mod system;
/// Shared type aliases
pub mod types;
