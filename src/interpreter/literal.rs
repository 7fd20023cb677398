use std::f64::consts::{E, PI};

use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::{
        decomposer::ParseResult,
        lexer::{LiteralToken, classify},
        value::PrecisionValue,
    },
    util::num::usize_to_i32_checked,
};

/// Interprets a numeric literal or constant as a precision-carrying value.
///
/// Constants (`e`, `pi`) are exact. Numbers carry as many significant figures
/// as their spelling shows, see [`count_significant_digits`].
///
/// # Errors
/// Returns `ParseError::MalformedLiteral` if the token is neither a constant
/// nor a finite numeric literal.
///
/// # Example
/// ```
/// use sigfig::interpreter::{
///     literal::interpret,
///     value::{PrecisionValue, SigFigs},
/// };
///
/// assert_eq!(interpret("70.00").unwrap(), PrecisionValue::new(70.0, 4));
/// assert_eq!(interpret("pi").unwrap().sig_figs, SigFigs::Exact);
/// assert!(interpret("7o").is_err());
/// ```
pub fn interpret(token: &str) -> ParseResult<PrecisionValue> {
    let malformed = || ParseError::MalformedLiteral { literal: token.to_string() };

    let value = match classify(token).ok_or_else(malformed)? {
        LiteralToken::E => PrecisionValue::exact(E),
        LiteralToken::Pi => PrecisionValue::exact(PI),
        LiteralToken::Number => {
            let number: f64 = token.parse().map_err(|_| malformed())?;
            if !number.is_finite() {
                return Err(malformed());
            }
            let count = usize_to_i32_checked(count_significant_digits(token), malformed())?;
            PrecisionValue::new(number, count)
        },
    };

    trace!(token, value = value.value, sig_figs = %value.sig_figs, "interpreted literal");
    Ok(value)
}

/// Counts the significant digits spelled out by a numeric literal.
///
/// The sign never counts.
/// - Scientific notation: every mantissa digit counts except leading zeros
///   (`1.0200e4` has 5).
/// - Zero: one more than the number of decimals (`0.00` has 3, `0` has 1).
/// - Otherwise leading zeros are dropped (`0.00450` has 3). Without a decimal
///   point trailing zeros are dropped as well (`2300` has 2, `2300.0` has 5).
///
/// The literal is assumed to be well formed.
///
/// # Example
/// ```
/// use sigfig::interpreter::literal::count_significant_digits;
///
/// assert_eq!(count_significant_digits("2300"), 2);
/// assert_eq!(count_significant_digits("2300.0"), 5);
/// assert_eq!(count_significant_digits("-0.00450"), 3);
/// assert_eq!(count_significant_digits("1.0200e4"), 5);
/// assert_eq!(count_significant_digits("0.00"), 3);
/// ```
#[must_use]
pub fn count_significant_digits(literal: &str) -> usize {
    let unsigned = literal.strip_prefix('-').unwrap_or(literal);
    let (mantissa, scientific) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], true),
        None => (unsigned, false),
    };

    if mantissa.bytes().all(|b| b == b'0' || b == b'.') {
        return match mantissa.split_once('.') {
            Some((_, decimals)) => decimals.len() + 1,
            None => 1,
        };
    }

    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let significant = digits.trim_start_matches('0');
    if scientific || mantissa.contains('.') {
        significant.len()
    } else {
        significant.trim_end_matches('0').len()
    }
}
