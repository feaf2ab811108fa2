//! Expression module for representing symbolic arithmetic expressions.
//!
//! This module defines `Expr`, the single tree type shared by every operation in the
//! crate. The tree is built recursively using `Box<Expr>` for nested expressions and can be:
//! - Evaluated under an explicit variable environment (see [`crate::evaluate`])
//! - Symbolically differentiated (see [`crate::derivative`])
//! - Simplified using constant folding and identity rules (see [`crate::simplify`])
//! - Compared structurally and rendered in infix notation
//!
//! # Expression Tree Structure
//! The expression tree is built recursively with each node being one of:
//! - Leaf nodes: Number and Variable
//! - Unary operations: Negation, Sine, Cosine
//! - Binary operations: Addition, Multiplication
//!
//! Trees are never mutated in place. Every transformation returns a new tree and each
//! operand is owned exclusively by its parent node.
//!
//! # Example
//!
//! ```
//! use symexpr::expr::Expr;
//!
//! // 2 * x + 0
//! let expr = Expr::add(
//!     Expr::multiply(Expr::number(2.0), Expr::variable("x")),
//!     Expr::number(0.0),
//! );
//! assert!(!expr.is_exact());
//! assert_eq!(expr.to_string(), "((2 * x) + 0)");
//! ```

use itertools::Itertools;

/// An expression tree node representing a mathematical operation.
///
/// Equality is structural: two trees are equal iff they have the same variant and
/// recursively equal payloads, operand by operand in matching position.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A constant floating point value
    Number(f64),
    /// A reference to a named variable
    Variable(String),
    /// Negation of an expression
    Negation(Box<Expr>),
    /// Sine of an expression (argument in radians)
    Sine(Box<Expr>),
    /// Cosine of an expression (argument in radians)
    Cosine(Box<Expr>),
    /// Addition of two expressions
    Addition(Box<Expr>, Box<Expr>),
    /// Multiplication of two expressions
    Multiplication(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn number(value: f64) -> Expr {
        Expr::Number(value)
    }

    pub fn variable(name: impl Into<String>) -> Expr {
        Expr::Variable(name.into())
    }

    pub fn negate(operand: Expr) -> Expr {
        Expr::Negation(Box::new(operand))
    }

    pub fn sine(operand: Expr) -> Expr {
        Expr::Sine(Box::new(operand))
    }

    pub fn cosine(operand: Expr) -> Expr {
        Expr::Cosine(Box::new(operand))
    }

    pub fn add(left: Expr, right: Expr) -> Expr {
        Expr::Addition(Box::new(left), Box::new(right))
    }

    pub fn multiply(left: Expr, right: Expr) -> Expr {
        Expr::Multiplication(Box::new(left), Box::new(right))
    }

    /// Returns true if this node is the constant `value`.
    pub(crate) fn is_number(&self, value: f64) -> bool {
        self.equals(&Expr::Number(value))
    }

    /// Structural equality between two expression trees.
    ///
    /// Binary operands are compared position by position, so the relation is not
    /// commutative: `x + 1` and `1 + x` are different trees.
    ///
    /// # Example
    /// ```
    /// # use symexpr::expr::Expr;
    /// let a = Expr::add(Expr::number(1.0), Expr::variable("x"));
    /// let b = Expr::add(Expr::variable("x"), Expr::number(1.0));
    /// assert!(a.equals(&a.clone()));
    /// assert!(!a.equals(&b));
    /// ```
    pub fn equals(&self, other: &Expr) -> bool {
        self == other
    }

    /// Returns whether the value of this expression is independent of any variable binding.
    ///
    /// A number is exact, a variable never is. Unary nodes inherit exactness from their
    /// operand and binary nodes are exact only when both operands are. Nothing is evaluated.
    pub fn is_exact(&self) -> bool {
        match self {
            Expr::Number(_) => true,
            Expr::Variable(_) => false,
            Expr::Negation(operand) | Expr::Sine(operand) | Expr::Cosine(operand) => {
                operand.is_exact()
            }
            Expr::Addition(left, right) | Expr::Multiplication(left, right) => {
                left.is_exact() && right.is_exact()
            }
        }
    }

    /// Returns the names of all variables in the expression, sorted and without duplicates.
    pub fn variables(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names.into_iter().unique().sorted().map(String::from).collect()
    }

    fn collect_variables<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Expr::Number(_) => {}
            Expr::Variable(name) => names.push(name),
            Expr::Negation(operand) | Expr::Sine(operand) | Expr::Cosine(operand) => {
                operand.collect_variables(names)
            }
            Expr::Addition(left, right) | Expr::Multiplication(left, right) => {
                left.collect_variables(names);
                right.collect_variables(names);
            }
        }
    }
}

/// Implements string formatting for expressions.
///
/// This implementation converts expressions to their standard mathematical notation:
/// - Numbers are formatted with `f64` Display
/// - Variables are formatted as their names
/// - Binary operations (+,*) are wrapped in parentheses
/// - Trigonometric functions use function call notation
/// - Negation uses - prefix
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{value}"),
            Expr::Variable(name) => write!(f, "{name}"),
            Expr::Negation(operand) => write!(f, "-({operand})"),
            Expr::Sine(operand) => write!(f, "sin({operand})"),
            Expr::Cosine(operand) => write!(f, "cos({operand})"),
            Expr::Addition(left, right) => write!(f, "({left} + {right})"),
            Expr::Multiplication(left, right) => write!(f, "({left} * {right})"),
        }
    }
}
