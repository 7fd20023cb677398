use tracing::{debug, trace};

use crate::{
    ast::Expr,
    error::{Error, ParseError},
    interpreter::{decomposer::decompose, literal::interpret, rules::apply, value::PrecisionValue},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an [`Error`]
/// describing the failure.
pub type EvalResult<T> = Result<T, Error>;

/// Strips all whitespace and folds the expression to lowercase.
///
/// # Example
/// ```
/// use sigfig::interpreter::evaluator::normalize;
///
/// assert_eq!(normalize(" 2 * PI ^ 1.0E2 "), "2*pi^1.0e2");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars()
       .filter(|c| !c.is_whitespace())
       .flat_map(char::to_lowercase)
       .collect()
}

/// Normalizes and decomposes an expression without evaluating it.
///
/// # Errors
/// Returns `ParseError::MalformedExpression` for empty input or input the
/// decomposer cannot split.
///
/// # Example
/// ```
/// use sigfig::interpreter::evaluator::parse;
///
/// let tree = parse("sqrt 4 + 1").unwrap();
/// assert_eq!(tree.to_string(), "[[sqrt, 4], +, 1]");
/// ```
pub fn parse(raw: &str) -> EvalResult<Expr<String>> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Err(ParseError::malformed(raw, "empty expression").into());
    }

    let tree = decompose(&normalized)?;
    debug!(expression = %normalized, depth = tree.depth(), %tree, "decomposed expression");
    Ok(tree)
}

/// Evaluates an expression to a precision-carrying value.
///
/// The expression is normalized, decomposed into an operator tree, every leaf
/// is interpreted as a number or constant, and the tree is reduced bottom-up
/// through the rule engine.
///
/// # Errors
/// Returns the first parse or domain error met; there is no partial result.
///
/// # Example
/// ```
/// use sigfig::interpreter::{evaluator::evaluate, value::PrecisionValue};
///
/// assert_eq!(evaluate("1 + 1").unwrap(), PrecisionValue::new(2.0, 1));
/// assert!(evaluate("1/0").is_err());
/// ```
pub fn evaluate(raw: &str) -> EvalResult<PrecisionValue> {
    let tree = parse(raw)?.try_map(&mut |token: String| interpret(&token))?;

    let result = tree.try_reduce(&mut |op, first, second| {
                         let result = apply(op, first, second)?;
                         trace!(%op,
                                first = first.value,
                                second = ?second.map(|b| b.value),
                                value = result.value,
                                sig_figs = %result.sig_figs,
                                "reduced operation");
                         Ok::<_, Error>(result)
                     })?;

    debug!(expression = raw, value = result.value, sig_figs = %result.sig_figs, "evaluated expression");
    Ok(result)
}
