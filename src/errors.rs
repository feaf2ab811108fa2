//! Error types for the symexpr crate.
//!
//! This module defines the error types that can occur while building, evaluating and
//! working with expressions. The main error types are:
//!
//! - `BuildError`: Malformed expression descriptions rejected by the builder
//! - `EvalError`: Failures while evaluating an expression tree
//! - `EquationError`: High-level errors when working with equations and systems
//!
//! Differentiation and simplification cannot fail and therefore have no error type.

use evalexpr::{DefaultNumericTypes, EvalexprError};
use thiserror::Error;

/// Errors that can occur while converting a description into an expression tree.
///
/// Every variant except `Literal` is a flavour of a malformed expression: the
/// description does not follow the operator grammar.
#[derive(Error, Debug)]
pub enum BuildError {
    /// Error when the operator tag is not one of the supported operators
    #[error("Malformed expression: unknown operator `{0}`")]
    UnknownOperator(String),
    /// Error when an operator receives the wrong number of operands
    #[error("Malformed expression: `{tag}` expects {expected} operand(s), got {got}")]
    WrongArity {
        tag: String,
        expected: usize,
        got: usize,
    },
    /// Error when an operand has the wrong kind for its operator
    #[error("Malformed expression: {0}")]
    MalformedExpression(String),
    /// Error when a description literal cannot be read by evalexpr
    #[error("Failed to read description literal")]
    Literal(#[from] EvalexprError<DefaultNumericTypes>),
}

/// Errors that can occur while evaluating an expression tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Error when a variable has no value in the environment
    #[error("Unbound variable: {0}")]
    UnboundVariable(String),
}

/// High-level errors that can occur when working with equations.
///
/// This enum wraps the lower-level build and evaluation errors and adds the
/// input validation failures of the positional evaluation API.
#[derive(Debug, Error)]
pub enum EquationError {
    /// Error when building the expression tree from its description
    #[error("Failed to build expression")]
    Build(#[from] BuildError),
    /// Error when evaluating the expression tree
    #[error("Failed to evaluate expression")]
    Eval(#[from] EvalError),
    /// Error when trying to get derivative for a variable that doesn't exist
    #[error("Derivative not found for variable: {0}")]
    DerivativeNotFound(String),
    /// Error when the input length is not the same as the number of variables
    #[error("Invalid input length: expected {expected}, got {got}")]
    InvalidInputLength { expected: usize, got: usize },
    /// Error when a variable of the expression is missing from the variable list
    #[error("Variable not found in equation: {0}")]
    VariableNotFound(String),
}
