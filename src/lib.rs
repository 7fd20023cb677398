//! # sigfig
//!
//! sigfig evaluates arithmetic expressions while propagating significant
//! figures, so that a result carries the precision its inputs justify and not
//! just a value.
//!
//! ```
//! use sigfig::{SigFigs, evaluate};
//!
//! let result = evaluate("34.56 * 230").unwrap();
//! assert_eq!(result.sig_figs, SigFigs::Count(2));
//! assert_eq!(result.to_string(), "7.9e3");
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
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of decomposed expressions.
///
/// This module declares the `Operator` enum and the `Expr` tree that the
/// decomposer builds and the evaluator reduces.
///
/// # Responsibilities
/// - Names every supported operation and its spelling.
/// - Represents binary operations and function applications as a typed tree.
/// - Converts and reduces trees without exposing their recursion to callers.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines malformed-literal and malformed-expression errors.
/// - Defines numeric domain errors (division by zero, non-finite results).
/// - Carries the offending substring or operation for user feedback.
pub mod error;
/// Orchestrates the entire process of evaluation.
///
/// This module ties together the decomposer, the literal interpreter, the
/// rule engine and the value types.
pub mod interpreter;
/// General utilities for magnitudes, conversions and rendering.
pub mod util;

pub use crate::{
    ast::{Expr, Operator},
    error::{DomainError, Error, ParseError},
    interpreter::{
        evaluator::{EvalResult, evaluate, parse},
        value::{PrecisionValue, SigFigs},
    },
    util::render::render,
};

/// One expression of a batch and its outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<'a> {
    /// The expression as written, comment removed and trimmed.
    pub expression: &'a str,
    /// Its value, or the reason it failed.
    pub result:     EvalResult<PrecisionValue>,
}

/// Yields the expressions of a multi-line source.
///
/// Each non-empty line is one expression; `#` starts a comment that runs to
/// the end of the line.
///
/// # Example
/// ```
/// use sigfig::expressions;
///
/// let source = "1+1\n\n# constants\n2*pi  # circumference\n";
/// assert_eq!(expressions(source).collect::<Vec<_>>(), vec!["1+1", "2*pi"]);
/// ```
pub fn expressions(source: &str) -> impl Iterator<Item = &str> {
    source.lines()
          .map(|line| line.split_once('#').map_or(line, |(code, _)| code).trim())
          .filter(|line| !line.is_empty())
}

/// Evaluates every expression of a multi-line source independently.
///
/// A failing line does not stop the others.
///
/// # Example
/// ```
/// use sigfig::evaluate_all;
///
/// let results = evaluate_all("1+1\n1/0\nsqrt4");
/// assert_eq!(results.len(), 3);
/// assert!(results[0].result.is_ok());
/// assert!(results[1].result.is_err());
/// assert_eq!(results[2].expression, "sqrt4");
/// ```
#[must_use]
pub fn evaluate_all(source: &str) -> Vec<Evaluation<'_>> {
    expressions(source).map(|expression| Evaluation { expression,
                                                      result: evaluate(expression) })
                       .collect()
}
