use tracing::trace;

use crate::{
    ast::{Expr, Operator},
    error::ParseError,
    interpreter::lexer::classify,
};

/// Result type used while decomposing expressions and interpreting literals.
pub type ParseResult<T> = Result<T, ParseError>;

/// Where a token is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Split {
    /// At the binary operator found at byte offset `at`.
    Binary { at: usize, op: Operator },
    /// After the leading function name.
    Function(Operator),
}

/// Decomposes a normalized expression into an operator tree.
///
/// The string is split recursively at its loosest-binding operator outside of
/// parentheses:
/// 1. `+` and `-` (rightmost first, so chains group left to right),
/// 2. `*` and `/` (rightmost first),
/// 3. `^` (leftmost first, so `2^3^2` is `2^(3^2)`),
/// 4. a leading function name: `antilog`, `sqrt`, `exp`, `log` or `ln`.
///
/// Before each split, parentheses enclosing the whole token are stripped and
/// a leading minus that does not start a number is rewritten as `0-…`, which
/// negates without limiting precision. A leading minus followed by a digit
/// signs the first number, so `-2^2` is `(-2)^2`. Numbers and the constants
/// `e` and `pi` become leaves.
///
/// The input is expected to be whitespace-free and lowercase.
///
/// # Errors
/// Returns `ParseError::MalformedExpression` for unbalanced parentheses,
/// empty operands or tokens that are neither atoms nor splittable.
///
/// # Example
/// ```
/// use sigfig::interpreter::decomposer::decompose;
///
/// let tree = decompose("34.56*230^(0.0789+ln(546/70.00))").unwrap();
/// assert_eq!(tree.to_string(),
///            "[34.56, *, [230, ^, [0.0789, +, [ln, [546, /, 70.00]]]]]");
///
/// assert_eq!(decompose("(((5)))").unwrap(), decompose("5").unwrap());
/// assert!(decompose("2+*3").is_err());
/// ```
pub fn decompose(expression: &str) -> ParseResult<Expr<String>> {
    check_balance(expression)?;
    decompose_token(expression)
}

fn decompose_token(raw: &str) -> ParseResult<Expr<String>> {
    let token = strip_redundant_parens(raw);
    if token.is_empty() {
        return Err(ParseError::malformed(raw, "missing operand"));
    }
    if classify(token).is_some() {
        return Ok(Expr::Leaf(token.to_string()));
    }
    if let Some(rest) = token.strip_prefix('-')
       && !rest.starts_with(|c: char| c.is_ascii_digit() || c == '.')
    {
        return decompose_token(&format!("0{token}"));
    }

    let split = crack(token)?;
    trace!(token, ?split, "cracked token");

    match split {
        Split::Binary { at, op } => {
            let (left, right) = (&token[..at], &token[at + 1..]);
            if left.is_empty() || right.is_empty() {
                return Err(ParseError::malformed(token, "operator is missing an operand"));
            }
            Ok(Expr::binary(decompose_token(left)?, op, decompose_token(right)?))
        },
        Split::Function(op) => {
            let operand = &token[op.symbol().len()..];
            if operand.is_empty() {
                return Err(ParseError::malformed(token, "function is missing its operand"));
            }
            Ok(Expr::function(op, decompose_token(operand)?))
        },
    }
}

/// Rejects expressions whose parentheses do not pair up.
fn check_balance(expression: &str) -> ParseResult<()> {
    let mut depth = 0_usize;
    for b in expression.bytes() {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth = depth.checked_sub(1)
                             .ok_or_else(|| ParseError::malformed(expression, "unbalanced parentheses"))?;
            },
            _ => {},
        }
    }
    if depth == 0 {
        Ok(())
    } else {
        Err(ParseError::malformed(expression, "unbalanced parentheses"))
    }
}

/// Removes parentheses that enclose the whole token, as often as they do.
///
/// `((2+3))` becomes `2+3`, while `(2+3)*(4)` is returned unchanged because
/// its first pair closes before the end.
///
/// # Example
/// ```
/// use sigfig::interpreter::decomposer::strip_redundant_parens;
///
/// assert_eq!(strip_redundant_parens("((2+3))"), "2+3");
/// assert_eq!(strip_redundant_parens("(2+3)*(4)"), "(2+3)*(4)");
/// assert_eq!(strip_redundant_parens("(((5)))"), "5");
/// ```
#[must_use]
pub fn strip_redundant_parens(mut token: &str) -> &str {
    while token.starts_with('(') && token.ends_with(')') && encloses_whole(token) {
        token = &token[1..token.len() - 1];
    }
    token
}

/// Whether the opening parenthesis at the start closes at the very end.
fn encloses_whole(token: &str) -> bool {
    let last = token.len() - 1;
    let mut depth = 0_usize;
    for (i, b) in token.bytes().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            _ => {},
        }
        if depth == 0 && i < last {
            return false;
        }
    }
    true
}

/// Finds where `token` splits, honoring precedence and parentheses.
///
/// Parentheses are known to be balanced by the time a token is cracked.
fn crack(token: &str) -> ParseResult<Split> {
    let bytes = token.as_bytes();
    let mut depth = 0_usize;
    let mut additive = None;
    let mut multiplicative = None;
    let mut power = None;

    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            _ if depth > 0 => {},
            b'+' | b'-' if !is_unary_sign(token, i) => additive = Some(i),
            b'*' | b'/' => multiplicative = Some(i),
            b'^' => {
                power.get_or_insert(i);
            },
            _ => {},
        }
    }

    if let Some(at) = additive.or(multiplicative).or(power)
       && let Some(op) = Operator::from_symbol(char::from(bytes[at]))
    {
        return Ok(Split::Binary { at, op });
    }

    Operator::match_function(token).map(Split::Function)
                                   .ok_or_else(|| {
                                       ParseError::malformed(token,
                                                             "no operator or function to split on")
                                   })
}

/// Whether the `+` or `-` at byte offset `at` is a sign rather than an
/// operator.
///
/// Signs open the token, follow another operator or `(`, follow a function
/// name (`ln-5`), or belong to the exponent of a numeric literal (`2e-5`).
fn is_unary_sign(token: &str, at: usize) -> bool {
    let bytes = token.as_bytes();
    let Some(previous) = at.checked_sub(1).map(|p| bytes[p]) else {
        return true;
    };

    match previous {
        b'+' | b'-' | b'*' | b'/' | b'^' | b'(' => true,
        b'e' if is_exponent_marker(bytes, at - 1) => true,
        _ => Operator::match_function(&token[..at]).is_some_and(|f| f.symbol().len() == at),
    }
}

/// Whether the `e` at `at` introduces the exponent of a numeric literal: it
/// follows a digit or point and is followed by a signed digit.
fn is_exponent_marker(bytes: &[u8], at: usize) -> bool {
    let mantissa_ends = at.checked_sub(1)
                          .is_some_and(|p| bytes[p].is_ascii_digit() || bytes[p] == b'.');
    let exponent_starts = bytes.get(at + 2).is_some_and(u8::is_ascii_digit);
    mantissa_ends && exponent_starts
}
