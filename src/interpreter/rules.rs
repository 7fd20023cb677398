use crate::{
    ast::Operator,
    error::{DomainError, ParseError},
    interpreter::{
        evaluator::EvalResult,
        value::{PrecisionValue, SigFigs},
    },
    util::num::digit_rank,
};

/// Applies an operator to precision-carrying operands.
///
/// The value is computed with ordinary floating-point arithmetic; the
/// significant figures follow the usual propagation conventions:
/// - `+` and `-` keep digits down to the coarsest last significant digit of
///   the operands (see [`PrecisionValue::last_significant_rank`]);
/// - `*` and `/` keep the smaller count;
/// - `^` keeps one figure less than the base, whatever the exponent;
/// - `sqrt` keeps one figure more;
/// - `ln` and `log` keep as many decimals as the operand had figures;
/// - `exp` and `antilog` keep as many figures as the operand had decimals.
///
/// Unary operators ignore `second`. Exact operands stay exact under every
/// adjustment.
///
/// # Errors
/// - `DomainError::DivisionByZero` when dividing by a zero-valued operand.
/// - `DomainError::NonFinite` when the result is infinite or NaN.
/// - `ParseError::MalformedExpression` when a binary operator has no second
///   operand.
///
/// # Example
/// ```
/// use sigfig::{
///     ast::Operator,
///     interpreter::{rules::apply, value::PrecisionValue},
/// };
///
/// let product = apply(Operator::Multiply,
///                     PrecisionValue::new(34.56, 4),
///                     Some(PrecisionValue::new(230.0, 2))).unwrap();
/// assert_eq!(product.sig_figs.count(), Some(2));
///
/// let root = apply(Operator::Sqrt, PrecisionValue::new(4.0, 1), None).unwrap();
/// assert_eq!(root, PrecisionValue::new(2.0, 2));
/// ```
pub fn apply(op: Operator,
             first: PrecisionValue,
             second: Option<PrecisionValue>)
             -> EvalResult<PrecisionValue> {
    let result = match (op, second) {
        (Operator::Add, Some(b)) => add(first, b),
        (Operator::Subtract, Some(b)) => add(first, b.negate()),
        (Operator::Multiply, Some(b)) => multiply(first, b),
        (Operator::Divide, Some(b)) => divide(first, b)?,
        (Operator::Power, Some(b)) => {
            PrecisionValue { value:    first.value.powf(b.value),
                             sig_figs: first.sig_figs.adjust(-1), }
        },
        (Operator::Add | Operator::Subtract | Operator::Multiply | Operator::Divide | Operator::Power,
         None) => {
            return Err(ParseError::malformed(op.symbol(), "binary operator is missing its second operand").into());
        },
        (Operator::Sqrt, _) => PrecisionValue { value:    first.value.sqrt(),
                                                sig_figs: first.sig_figs.adjust(1), },
        (Operator::Ln, _) => logarithm(first.value.ln(), first.sig_figs),
        (Operator::Log10, _) => logarithm(first.value.log10(), first.sig_figs),
        (Operator::Exp, _) => exponential(first.value.exp(), first),
        (Operator::Pow10, _) => exponential(10_f64.powf(first.value), first),
    };

    if result.value.is_finite() {
        Ok(result)
    } else {
        Err(DomainError::NonFinite { operator: op,
                                     operand:  first.value, }.into())
    }
}

/// Sum, significant down to the coarsest last significant digit.
///
/// Zero and exact operands impose no limit. Without any limit the sum is
/// exact, unless it is zero, in which case the smaller count is kept. A zero
/// sum under a limit gets the figures a zero literal written down to that
/// place would have.
fn add(a: PrecisionValue, b: PrecisionValue) -> PrecisionValue {
    let sum = a.value + b.value;
    let limit = [a, b].iter().filter_map(PrecisionValue::last_significant_rank).min();

    let sig_figs = match (limit, digit_rank(sum)) {
        (Some(last), Some(rank)) => SigFigs::Count(last - rank + 1),
        (Some(last), None) => SigFigs::Count(last.max(0) + 1),
        (None, Some(_)) => SigFigs::Exact,
        (None, None) => a.sig_figs.min(b.sig_figs),
    };
    PrecisionValue { value: sum,
                     sig_figs }
}

fn multiply(a: PrecisionValue, b: PrecisionValue) -> PrecisionValue {
    PrecisionValue { value:    a.value * b.value,
                     sig_figs: a.sig_figs.min(b.sig_figs), }
}

fn divide(a: PrecisionValue, b: PrecisionValue) -> Result<PrecisionValue, DomainError> {
    if b.value == 0.0 {
        return Err(DomainError::DivisionByZero { dividend: a.value });
    }
    Ok(PrecisionValue { value:    a.value / b.value,
                        sig_figs: a.sig_figs.min(b.sig_figs), })
}

/// Logarithms keep as many decimals as the operand had significant figures,
/// so every digit left of the decimal point is added on top.
fn logarithm(value: f64, sig_figs: SigFigs) -> PrecisionValue {
    let sig_figs = match digit_rank(value) {
        Some(rank) if rank < 1 => sig_figs.adjust(1 - rank),
        _ => sig_figs,
    };
    PrecisionValue { value, sig_figs }
}

/// Exponentials keep as many significant figures as the operand had
/// decimals. Operands below one in magnitude keep their count.
fn exponential(value: f64, operand: PrecisionValue) -> PrecisionValue {
    let sig_figs = match digit_rank(operand.value) {
        Some(rank) if rank <= 0 => operand.sig_figs.adjust(rank - 1),
        _ => operand.sig_figs,
    };
    PrecisionValue { value, sig_figs }
}
