use sigfig::{
    DomainError,
    Error,
    Operator,
    ParseError,
    PrecisionValue,
    SigFigs,
    interpreter::rules::apply,
};

fn value(value: f64, sig_figs: i32) -> PrecisionValue {
    PrecisionValue::new(value, sig_figs)
}

fn binary(op: Operator, a: PrecisionValue, b: PrecisionValue) -> PrecisionValue {
    apply(op, a, Some(b)).unwrap_or_else(|e| panic!("{op} failed: {e}"))
}

fn unary(op: Operator, a: PrecisionValue) -> PrecisionValue {
    apply(op, a, None).unwrap_or_else(|e| panic!("{op} failed: {e}"))
}

#[test]
fn addition_aligns_last_significant_digits() {
    assert_eq!(binary(Operator::Add, value(546.0, 3), value(0.0789, 3)).sig_figs,
               SigFigs::Count(3));
    assert_eq!(binary(Operator::Add, value(1.0, 1), value(1.0, 1)), value(2.0, 1));
    assert_eq!(binary(Operator::Add, value(9.0, 1), value(1.0, 1)), value(10.0, 2));
    assert_eq!(binary(Operator::Add, value(12.11, 4), value(0.3, 1)).sig_figs,
               SigFigs::Count(3));
}

#[test]
fn subtraction_negates_and_adds() {
    let difference = binary(Operator::Subtract, value(10.5, 3), value(0.25, 2));
    assert_eq!(difference.value, 10.25);
    assert_eq!(difference.sig_figs, SigFigs::Count(3));

    assert_eq!(binary(Operator::Subtract, value(10.5, 3), value(10.25, 4)), value(0.25, 1));
}

#[test]
fn cancellation_to_zero_keeps_the_limiting_place() {
    assert_eq!(binary(Operator::Subtract, value(1.5, 3), value(1.5, 3)), value(0.0, 3));
    assert_eq!(binary(Operator::Subtract, value(200.0, 1), value(200.0, 1)), value(0.0, 1));
}

#[test]
fn zero_and_exact_operands_do_not_limit_sums() {
    let pi = PrecisionValue::exact(std::f64::consts::PI);
    assert_eq!(binary(Operator::Add, value(0.0, 1), value(2.5, 2)), value(2.5, 2));
    assert_eq!(binary(Operator::Add, value(0.0, 1), pi).sig_figs, SigFigs::Exact);
    assert_eq!(binary(Operator::Add, pi, pi).sig_figs, SigFigs::Exact);
    assert_eq!(binary(Operator::Add, value(0.0, 2), value(0.0, 3)), value(0.0, 2));
}

#[test]
fn multiplication_and_division_keep_fewest_figures() {
    assert_eq!(binary(Operator::Multiply, value(34.56, 4), value(230.0, 2)).sig_figs,
               SigFigs::Count(2));
    assert_eq!(binary(Operator::Divide, value(546.0, 3), value(70.0, 4)).sig_figs,
               SigFigs::Count(3));
    assert_eq!(binary(Operator::Multiply,
                      PrecisionValue::exact(2.0),
                      value(1.5, 2)).sig_figs,
               SigFigs::Count(2));
}

#[test]
fn power_loses_one_figure_of_the_base() {
    assert_eq!(binary(Operator::Power, value(230.0, 2), value(2.1, 4)).sig_figs,
               SigFigs::Count(1));
    assert_eq!(binary(Operator::Power, value(2.0, 1), value(3.0, 1)), value(8.0, 0));
    assert_eq!(binary(Operator::Power, PrecisionValue::exact(2.0), value(3.0, 1)).sig_figs,
               SigFigs::Exact);
}

#[test]
fn square_root_gains_one_figure() {
    assert_eq!(unary(Operator::Sqrt, value(4.0, 1)), value(2.0, 2));
    assert_eq!(unary(Operator::Sqrt, value(16.0, 3)), value(4.0, 4));
}

#[test]
fn logarithms_keep_operand_figures_as_decimals() {
    assert_eq!(unary(Operator::Ln, value(7.8, 3)).sig_figs, SigFigs::Count(4));
    assert_eq!(unary(Operator::Ln, value(1e10, 3)).sig_figs, SigFigs::Count(5));
    assert_eq!(unary(Operator::Ln, value(1.1, 2)).sig_figs, SigFigs::Count(2));
    assert_eq!(unary(Operator::Ln, value(1.0, 2)), value(0.0, 2));
    assert_eq!(unary(Operator::Log10, value(546.0, 3)).sig_figs, SigFigs::Count(4));
    assert_eq!(unary(Operator::Log10, value(1e20, 2)).sig_figs, SigFigs::Count(4));
}

#[test]
fn exponentials_keep_operand_decimals_as_figures() {
    assert_eq!(unary(Operator::Exp, value(0.5, 1)).sig_figs, SigFigs::Count(1));
    assert_eq!(unary(Operator::Exp, value(2.05, 3)).sig_figs, SigFigs::Count(2));
    assert_eq!(unary(Operator::Exp, value(20.5, 3)).sig_figs, SigFigs::Count(1));
    assert_eq!(unary(Operator::Exp, value(0.0, 1)), value(1.0, 1));

    let antilog = unary(Operator::Pow10, value(2.0, 2));
    assert_eq!(antilog.sig_figs, SigFigs::Count(1));
    assert!((antilog.value - 100.0).abs() < 1e-9);
}

#[test]
fn unary_operators_ignore_the_second_operand() {
    assert_eq!(apply(Operator::Sqrt, value(9.0, 1), Some(value(123.0, 3))).unwrap(),
               value(3.0, 2));
}

#[test]
fn division_by_zero() {
    assert_eq!(apply(Operator::Divide, value(5.0, 1), Some(value(0.0, 2))),
               Err(Error::Domain(DomainError::DivisionByZero { dividend: 5.0 })));
}

#[test]
fn non_finite_results() {
    assert_eq!(apply(Operator::Pow10, value(400.0, 1), None),
               Err(Error::Domain(DomainError::NonFinite { operator: Operator::Pow10,
                                                          operand:  400.0, })));
    assert!(matches!(apply(Operator::Ln, value(-1.0, 1), None),
                     Err(Error::Domain(DomainError::NonFinite { operator: Operator::Ln, .. }))));
    assert!(matches!(apply(Operator::Power, value(-8.0, 1), Some(value(0.5, 1))),
                     Err(Error::Domain(DomainError::NonFinite { .. }))));
}

#[test]
fn binary_operator_without_second_operand() {
    assert!(matches!(apply(Operator::Add, value(1.0, 1), None),
                     Err(Error::Parse(ParseError::MalformedExpression { .. }))));
}
