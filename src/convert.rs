//! Conversion module for transforming nested operator descriptions into expression trees.
//!
//! A [`Description`] is an operator tag plus up to two operands, each of which is a
//! nested description, a literal number, or a variable name:
//!
//! ```text
//! number(v) | variable(name) | negate(d) | sine(d) | cosine(d) | add(d1, d2) | multiply(d1, d2)
//! ```
//!
//! Descriptions can be assembled in code or read from a tuple literal using evalexpr's
//! value syntax, e.g. `("+", ("variable", "x"), ("number", 2))`. The main entry point is
//! [`build`], which recursively converts a description into an [`Expr`].
//!
//! # Example
//!
//! ```
//! use symexpr::convert::{build, Description};
//! use symexpr::expr::Expr;
//!
//! let description = Description::parse(r#"("*", ("variable", "x"), ("sin", ("number", 0)))"#).unwrap();
//! let expr = build(&description).unwrap();
//! assert_eq!(expr, Expr::multiply(Expr::variable("x"), Expr::sine(Expr::number(0.0))));
//! ```

use evalexpr::{build_operator_tree, Node, Value};

use crate::{errors::BuildError, expr::Expr};

/// A single operand of a [`Description`].
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A further nested description
    Nested(Description),
    /// A literal number, valid only as the operand of `number`
    Number(f64),
    /// A variable name, valid only as the operand of `variable`
    Name(String),
}

/// An operator tag together with its operands.
///
/// Descriptions are not validated on construction; [`build`] rejects unknown tags,
/// wrong arities and operands of the wrong kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Description {
    pub tag: String,
    pub operands: Vec<Operand>,
}

impl Description {
    pub fn new(tag: impl Into<String>, operands: Vec<Operand>) -> Self {
        Self {
            tag: tag.into(),
            operands,
        }
    }

    pub fn number(value: f64) -> Self {
        Self::new("number", vec![Operand::Number(value)])
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::new("variable", vec![Operand::Name(name.into())])
    }

    pub fn negate(operand: Description) -> Self {
        Self::new("negate", vec![Operand::Nested(operand)])
    }

    pub fn sine(operand: Description) -> Self {
        Self::new("sine", vec![Operand::Nested(operand)])
    }

    pub fn cosine(operand: Description) -> Self {
        Self::new("cosine", vec![Operand::Nested(operand)])
    }

    pub fn add(left: Description, right: Description) -> Self {
        Self::new("add", vec![Operand::Nested(left), Operand::Nested(right)])
    }

    pub fn multiply(left: Description, right: Description) -> Self {
        Self::new(
            "multiply",
            vec![Operand::Nested(left), Operand::Nested(right)],
        )
    }

    /// Reads a description from a tuple literal.
    ///
    /// The literal is evaluated by evalexpr without any variables in scope, so names
    /// must be written as string literals.
    ///
    /// # Arguments
    /// * `source` - A literal such as `("cos", ("variable", "t"))`
    ///
    /// # Returns
    /// * `Result<Description, BuildError>` - The description, `BuildError::Literal` if the
    ///   literal does not evaluate, or a malformed-expression error if its shape is wrong
    pub fn parse(source: &str) -> Result<Self, BuildError> {
        let node: Node = build_operator_tree(source)?;
        let value = node.eval()?;
        Description::try_from(&value)
    }
}

/// Converts an evaluated evalexpr tuple into a description.
///
/// The first tuple element must be a string tag. Nested tuples become nested
/// descriptions, integers and floats become literal numbers and strings become names.
impl TryFrom<&Value> for Description {
    type Error = BuildError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let Value::Tuple(items) = value else {
            return Err(BuildError::MalformedExpression(format!(
                "expected a tuple, got {value}"
            )));
        };

        let Some((head, rest)) = items.split_first() else {
            return Err(BuildError::MalformedExpression(
                "empty description".to_string(),
            ));
        };

        let tag = match head {
            Value::String(tag) => tag.clone(),
            other => {
                return Err(BuildError::MalformedExpression(format!(
                    "expected an operator tag, got {other}"
                )))
            }
        };

        let operands = rest
            .iter()
            .map(|item| match item {
                Value::Tuple(_) => Ok(Operand::Nested(Description::try_from(item)?)),
                Value::Float(f) => Ok(Operand::Number(*f)),
                Value::Int(i) => Ok(Operand::Number(*i as f64)),
                Value::String(name) => Ok(Operand::Name(name.clone())),
                other => Err(BuildError::MalformedExpression(format!(
                    "unsupported operand {other} for `{tag}`"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Description { tag, operands })
    }
}

/// Renders a description back into its tuple literal form.
impl std::fmt::Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}", self.tag)?;
        for operand in &self.operands {
            match operand {
                Operand::Nested(description) => write!(f, ", {description}")?,
                Operand::Number(value) => write!(f, ", {value:?}")?,
                Operand::Name(name) => write!(f, ", {name:?}")?,
            }
        }
        write!(f, ")")
    }
}

/// Converts a description into an expression tree.
///
/// Operand subtrees are built before their parent node.
///
/// # Arguments
/// * `description` - The nested operator description
///
/// # Returns
/// * `Result<Expr, BuildError>` - The expression tree or a malformed-expression error
///
/// # Supported tags
/// * `number`, `variable`
/// * `negate` or `-`, `sine` or `sin`, `cosine` or `cos`
/// * `add` or `+`, `multiply` or `*`
pub fn build(description: &Description) -> Result<Expr, BuildError> {
    let tag = description.tag.as_str();
    match tag {
        "number" => match expect_operands::<1>(description)? {
            [Operand::Number(value)] => Ok(Expr::Number(*value)),
            [other] => Err(wrong_operand(tag, "literal number", other)),
        },
        "variable" => match expect_operands::<1>(description)? {
            [Operand::Name(name)] => Ok(Expr::Variable(name.clone())),
            [other] => Err(wrong_operand(tag, "variable name", other)),
        },
        "negate" | "-" => Ok(Expr::negate(build_unary(description)?)),
        "sine" | "sin" => Ok(Expr::sine(build_unary(description)?)),
        "cosine" | "cos" => Ok(Expr::cosine(build_unary(description)?)),
        "add" | "+" => {
            let (left, right) = build_binary(description)?;
            Ok(Expr::add(left, right))
        }
        "multiply" | "*" => {
            let (left, right) = build_binary(description)?;
            Ok(Expr::multiply(left, right))
        }
        _ => Err(BuildError::UnknownOperator(description.tag.clone())),
    }
}

fn build_unary(description: &Description) -> Result<Expr, BuildError> {
    let [operand] = expect_operands::<1>(description)?;
    build_nested(&description.tag, operand)
}

fn build_binary(description: &Description) -> Result<(Expr, Expr), BuildError> {
    let [left, right] = expect_operands::<2>(description)?;
    Ok((
        build_nested(&description.tag, left)?,
        build_nested(&description.tag, right)?,
    ))
}

fn build_nested(tag: &str, operand: &Operand) -> Result<Expr, BuildError> {
    match operand {
        Operand::Nested(description) => build(description),
        other => Err(wrong_operand(tag, "nested description", other)),
    }
}

fn expect_operands<const N: usize>(description: &Description) -> Result<&[Operand; N], BuildError> {
    description
        .operands
        .as_slice()
        .try_into()
        .map_err(|_| BuildError::WrongArity {
            tag: description.tag.clone(),
            expected: N,
            got: description.operands.len(),
        })
}

fn wrong_operand(tag: &str, expected: &str, got: &Operand) -> BuildError {
    BuildError::MalformedExpression(format!("`{tag}` expects a {expected}, got {got:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_leaves() {
        assert_eq!(
            build(&Description::number(2.5)).unwrap(),
            Expr::number(2.5)
        );
        assert_eq!(
            build(&Description::variable("x")).unwrap(),
            Expr::variable("x")
        );
    }

    #[test]
    fn test_build_operators() {
        let description = Description::add(
            Description::multiply(Description::number(2.0), Description::variable("x")),
            Description::negate(Description::cosine(Description::sine(
                Description::variable("y"),
            ))),
        );

        assert_eq!(
            build(&description).unwrap(),
            Expr::add(
                Expr::multiply(Expr::number(2.0), Expr::variable("x")),
                Expr::negate(Expr::cosine(Expr::sine(Expr::variable("y")))),
            )
        );
    }

    #[test]
    fn test_build_symbolic_tags() {
        let description = Description::new(
            "+",
            vec![
                Operand::Nested(Description::new(
                    "-",
                    vec![Operand::Nested(Description::variable("x"))],
                )),
                Operand::Nested(Description::new(
                    "*",
                    vec![
                        Operand::Nested(Description::number(3.0)),
                        Operand::Nested(Description::new(
                            "sin",
                            vec![Operand::Nested(Description::variable("x"))],
                        )),
                    ],
                )),
            ],
        );

        assert_eq!(
            build(&description).unwrap(),
            Expr::add(
                Expr::negate(Expr::variable("x")),
                Expr::multiply(Expr::number(3.0), Expr::sine(Expr::variable("x"))),
            )
        );
    }

    #[test]
    fn test_unknown_operator() {
        let description = Description::new("tan", vec![Operand::Nested(Description::number(1.0))]);
        assert!(matches!(
            build(&description),
            Err(BuildError::UnknownOperator(tag)) if tag == "tan"
        ));
    }

    #[test]
    fn test_wrong_arity() {
        let description = Description::new("add", vec![Operand::Nested(Description::number(1.0))]);
        assert!(matches!(
            build(&description),
            Err(BuildError::WrongArity { expected: 2, got: 1, .. })
        ));

        let description = Description::new("number", vec![]);
        assert!(matches!(
            build(&description),
            Err(BuildError::WrongArity { expected: 1, got: 0, .. })
        ));
    }

    #[test]
    fn test_wrong_operand_kind() {
        // Operators take nested descriptions, not bare literals
        let description = Description::new("sine", vec![Operand::Number(1.0)]);
        assert!(matches!(
            build(&description),
            Err(BuildError::MalformedExpression(_))
        ));

        let description = Description::new("variable", vec![Operand::Number(1.0)]);
        assert!(matches!(
            build(&description),
            Err(BuildError::MalformedExpression(_))
        ));
    }

    #[test]
    fn test_malformed_nested_operand() {
        // The error surfaces from deep inside the tree
        let description = Description::multiply(
            Description::variable("x"),
            Description::new("sqrt", vec![Operand::Nested(Description::variable("x"))]),
        );
        assert!(matches!(
            build(&description),
            Err(BuildError::UnknownOperator(_))
        ));
    }

    #[test]
    fn test_parse_literal() {
        let description =
            Description::parse(r#"("+", ("variable", "x"), ("number", 2))"#).unwrap();
        assert_eq!(
            description,
            Description::new(
                "+",
                vec![
                    Operand::Nested(Description::variable("x")),
                    Operand::Nested(Description::number(2.0)),
                ],
            )
        );
        assert_eq!(
            build(&description).unwrap(),
            Expr::add(Expr::variable("x"), Expr::number(2.0))
        );
    }

    #[test]
    fn test_parse_float_literal() {
        let description = Description::parse(r#"("number", 1.5)"#).unwrap();
        assert_eq!(build(&description).unwrap(), Expr::number(1.5));
    }

    #[test]
    fn test_parse_errors() {
        // Not a tuple
        assert!(matches!(
            Description::parse("42"),
            Err(BuildError::MalformedExpression(_))
        ));

        // Tag is not a string
        assert!(matches!(
            Description::parse(r#"(1, "x")"#),
            Err(BuildError::MalformedExpression(_))
        ));

        // Not a valid literal at all
        assert!(matches!(
            Description::parse(r#"("+", "#),
            Err(BuildError::Literal(_))
        ));
    }

    #[test]
    fn test_display_round_trip() {
        let description = Description::multiply(
            Description::variable("x"),
            Description::sine(Description::number(0.5)),
        );
        let literal = description.to_string();
        assert_eq!(
            literal,
            r#"("multiply", ("variable", "x"), ("sine", ("number", 0.5)))"#
        );
        assert_eq!(Description::parse(&literal).unwrap(), description);
    }
}
