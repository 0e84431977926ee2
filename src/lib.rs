//! # benchexpr
//!
//! benchexpr is a small expression language for benchmark result
//! visualisation. Expressions derive chart axes and filter predicates from
//! per-seed variables such as `N`, `score`, `time` or values scraped from a
//! program's stderr (`$turns`).
//!
//! Every value is an array of numbers. Binary operators combine arrays
//! element-wise and broadcast one-element arrays against longer ones, so the
//! same expression serves both a single record and an aggregated group:
//!
//! ```
//! use benchexpr::{Variables, evaluate};
//!
//! let mut variables = Variables::new();
//! variables.insert("score".to_string(), vec![10.0, 30.0, 20.0]);
//!
//! assert_eq!(evaluate("score / max(score)", &variables).unwrap(),
//!            vec![10.0 / 30.0, 1.0, 20.0 / 30.0]);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::str::FromStr;

use crate::interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse_tokens};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// an expression as a tree. The tree is built by the parser and walked by the
/// evaluator.
pub mod ast;
/// Provides the error types for tokenizing, parsing and evaluation.
///
/// # Responsibilities
/// - Defines one error enum per stage, plus an umbrella [`Error`].
/// - Carries offending tokens, characters, names and positions.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluation.
///
/// This module exposes each stage separately for callers that need finer
/// control than the top-level functions of this crate.
pub mod interpreter;
/// Extraction of `$name = number` variables from program diagnostic output.
pub mod scrape;
/// Filtering records and building chart points from axis expressions.
///
/// This is where evaluation failures are turned into dropped data points
/// instead of errors.
pub mod series;

pub use crate::{
    error::Error,
    interpreter::{
        evaluator::function::random::{ProcessRandom, RandomSource, SeededRandom},
        value::{Array, Variables},
    },
};

/// Parses an expression into its syntax tree.
///
/// Only tokenizing and parsing happen here; unknown variables and functions
/// are accepted and only fail once evaluated.
///
/// # Errors
/// Returns [`Error::Lex`] or [`Error::Parse`] describing the first problem.
///
/// # Examples
/// ```
/// use benchexpr::parse;
///
/// let expr = parse("2 ^ 3 ^ 2").unwrap();
/// assert_eq!(expr.to_string(), "(2 ^ (3 ^ 2))");
///
/// assert!(parse("(1 + 2").is_err());
/// ```
pub fn parse(source: &str) -> Result<ast::Expr, Error> {
    let tokens = tokenize(source)?;
    let expr = parse_tokens(&tokens)?;
    tracing::trace!(source, %expr, "parsed expression");
    Ok(expr)
}

/// Returns whether an expression is syntactically valid.
///
/// Empty and whitespace-only input counts as valid (an unset expression).
/// Unknown variables and functions do not make an expression invalid; only
/// lexical and syntax errors do. Used for live feedback while typing.
///
/// # Examples
/// ```
/// use benchexpr::is_valid_expression;
///
/// assert!(is_valid_expression(""));
/// assert!(is_valid_expression("N >= 100"));
/// assert!(is_valid_expression("1+ +2"));
/// assert!(is_valid_expression("unknown(1)"));
///
/// assert!(!is_valid_expression("(1+2"));
/// assert!(!is_valid_expression("1+"));
/// assert!(!is_valid_expression("a = 1"));
/// ```
#[must_use]
pub fn is_valid_expression(source: &str) -> bool {
    if source.trim().is_empty() {
        return true;
    }
    match parse(source) {
        Ok(_) => true,
        Err(e) => {
            tracing::trace!(source, error = %e, "invalid expression");
            false
        },
    }
}

/// Evaluates an expression against a set of variables.
///
/// Runs the full tokenize → parse → evaluate pipeline. Each call is
/// independent; nothing is cached. `random()` draws from the thread-local
/// generator; use [`evaluate_with`] to inject a source.
///
/// # Errors
/// Returns an [`Error`] for lexical, syntax or evaluation failures.
///
/// # Examples
/// ```
/// use benchexpr::{Variables, evaluate};
///
/// let mut variables = Variables::new();
/// variables.insert("N".to_string(), vec![50.0, 150.0]);
///
/// assert_eq!(evaluate("N >= 100", &variables).unwrap(), vec![0.0, 1.0]);
/// assert!(evaluate("Q + 1", &variables).is_err());
/// ```
pub fn evaluate(source: &str, variables: &Variables) -> Result<Array, Error> {
    evaluate_with(source, variables, &ProcessRandom)
}

/// Evaluates an expression with an explicit source for `random()`.
///
/// # Errors
/// Returns an [`Error`] for lexical, syntax or evaluation failures.
pub fn evaluate_with(source: &str,
                     variables: &Variables,
                     random: &dyn RandomSource)
                     -> Result<Array, Error> {
    let expr = parse(source)?;
    Ok(Context::with_random(variables, random).eval(&expr)?)
}

/// A parsed expression, ready to be evaluated many times.
///
/// Parsing once and evaluating per data point avoids re-tokenizing the same
/// axis or filter expression for every record of a chart.
///
/// # Examples
/// ```
/// use benchexpr::{Expression, Variables};
///
/// let expr: Expression = "score * 2".parse().unwrap();
///
/// for score in [1.0, 2.0] {
///     let mut variables = Variables::new();
///     variables.insert("score".to_string(), vec![score]);
///     assert_eq!(expr.evaluate(&variables).unwrap(), vec![score * 2.0]);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    ast:    ast::Expr,
}

impl Expression {
    /// Parses `source` into an expression.
    ///
    /// # Errors
    /// Returns [`Error::Lex`] or [`Error::Parse`] when the source is not a
    /// valid expression. Empty input is an [`error::ParseError::EmptyExpression`].
    pub fn parse(source: &str) -> Result<Self, Error> {
        Ok(Self { source: source.to_string(),
                  ast:    parse(source)?, })
    }

    /// The text the expression was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed tree.
    #[must_use]
    pub const fn ast(&self) -> &ast::Expr {
        &self.ast
    }

    /// Evaluates against `variables`, drawing `random()` from the
    /// thread-local generator.
    ///
    /// # Errors
    /// Returns an [`error::RuntimeError`] when evaluation fails.
    pub fn evaluate(&self, variables: &Variables) -> Result<Array, error::RuntimeError> {
        Context::new(variables).eval(&self.ast)
    }

    /// Evaluates against `variables` with an explicit random source.
    ///
    /// # Errors
    /// Returns an [`error::RuntimeError`] when evaluation fails.
    pub fn evaluate_with(&self,
                         variables: &Variables,
                         random: &dyn RandomSource)
                         -> Result<Array, error::RuntimeError> {
        Context::with_random(variables, random).eval(&self.ast)
    }
}

impl FromStr for Expression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
