use sigfig::{
    Error,
    Expr,
    Operator,
    ParseError,
    interpreter::decomposer::{decompose, strip_redundant_parens},
    parse,
};

fn leaf(token: &str) -> Expr<String> {
    Expr::Leaf(token.to_string())
}

fn tree(src: &str) -> String {
    decompose(src).unwrap_or_else(|e| panic!("'{src}' failed: {e}"))
                  .to_string()
}

fn assert_malformed(src: &str) {
    assert!(matches!(decompose(src), Err(ParseError::MalformedExpression { .. })),
            "'{src}' should be malformed");
}

#[test]
fn worked_example_tree() {
    let expected =
        Expr::binary(leaf("34.56"),
                     Operator::Multiply,
                     Expr::binary(leaf("230"),
                                  Operator::Power,
                                  Expr::binary(leaf("0.0789"),
                                               Operator::Add,
                                               Expr::function(Operator::Ln,
                                                              Expr::binary(leaf("546"),
                                                                           Operator::Divide,
                                                                           leaf("70.00"))))));

    assert_eq!(decompose("34.56*230^(0.0789+ln(546/70.00))").unwrap(), expected);
}

#[test]
fn redundant_parentheses_are_stripped_idempotently() {
    assert_eq!(decompose("(((5)))").unwrap(), decompose("5").unwrap());
    assert_eq!(decompose("((2+3))*(4)").unwrap(), decompose("(2+3)*4").unwrap());
    assert_eq!(strip_redundant_parens("(2)+(3)"), "(2)+(3)");
    assert_eq!(strip_redundant_parens(strip_redundant_parens("((7))")), "7");
}

#[test]
fn lowest_precedence_splits_first() {
    assert_eq!(tree("2+3*4"), "[2, +, [3, *, 4]]");
    assert_eq!(tree("2*3^4"), "[2, *, [3, ^, 4]]");
    assert_eq!(tree("(2+3)*4"), "[[2, +, 3], *, 4]");
    assert_eq!(tree("ln5*2"), "[[ln, 5], *, 2]");
    assert_eq!(tree("sqrt(4)^2"), "[[sqrt, 4], ^, 2]");
}

#[test]
fn associativity() {
    assert_eq!(tree("8-2-1"), "[[8, -, 2], -, 1]");
    assert_eq!(tree("8/4*2"), "[[8, /, 4], *, 2]");
    assert_eq!(tree("2^3^2"), "[2, ^, [3, ^, 2]]");
}

#[test]
fn signs() {
    assert_eq!(tree("-5"), "-5");
    assert_eq!(tree("-(5)"), "[0, -, 5]");
    assert_eq!(tree("-2^2"), "[-2, ^, 2]");
    assert_eq!(tree("-2.5^2"), "[-2.5, ^, 2]");
    assert_eq!(tree("-(2)^2"), "[0, -, [2, ^, 2]]");
    assert_eq!(tree("-pi"), "[0, -, pi]");
    assert_eq!(tree("2*-3"), "[2, *, -3]");
    assert_eq!(tree("2^-1"), "[2, ^, -1]");
    assert_eq!(tree("(-2)^2"), "[-2, ^, 2]");
    assert_eq!(tree("ln-5"), "[ln, -5]");
    assert_eq!(tree("2e-5*3"), "[2e-5, *, 3]");
    assert_eq!(tree("2*e-5"), "[[2, *, e], -, 5]");
}

#[test]
fn function_names_match_longest_first() {
    assert_eq!(tree("antilog2"), "[antilog, 2]");
    assert_eq!(tree("log2"), "[log, 2]");
    assert_eq!(tree("exp2"), "[exp, 2]");
    assert_eq!(tree("e^2"), "[e, ^, 2]");
    assert_eq!(tree("sqrtpi"), "[sqrt, pi]");
    assert_eq!(tree("antilog(log(5))"), "[antilog, [log, 5]]");
}

#[test]
fn embedded_function_names_are_not_functions() {
    assert_malformed("blog5");
    assert_malformed("2ln3");
    assert_malformed("santilog2");
    assert_malformed("lnx");
}

#[test]
fn malformed_input() {
    assert_malformed("2+*3");
    assert_malformed("(2+3");
    assert_malformed("2+3)");
    assert_malformed("()");
    assert_malformed("2*");
    assert_malformed("ln");
    assert_malformed("ln()");
    assert_malformed("");
}

#[test]
fn malformed_errors_name_the_offending_substring() {
    match decompose("1+(2+*3)") {
        Err(ParseError::MalformedExpression { expression, .. }) => assert_eq!(expression, "*3"),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn parse_normalizes_before_decomposing() {
    assert_eq!(parse(" 2 * PI ").unwrap().to_string(), "[2, *, pi]");
    assert!(matches!(parse(" \t"), Err(Error::Parse(ParseError::MalformedExpression { .. }))));
}

#[test]
fn leaves_are_numbers_and_constants_only() {
    let tree = decompose("34.56*230^(0.0789+ln(546/70.00))").unwrap();
    assert_eq!(tree.leaves(), vec!["34.56", "230", "0.0789", "546", "70.00"]);
    assert_eq!(tree.depth(), 6);
}
