/// The decomposer turns an expression string into an operator tree.
///
/// It splits the string at its loosest-binding operator outside parentheses,
/// recursively, without tokenizing the expression first.
///
/// # Responsibilities
/// - Strips parentheses that enclose a whole sub-expression.
/// - Splits by precedence tier, honoring grouping and associativity.
/// - Reports malformed expressions with the offending substring.
pub mod decomposer;
/// The evaluator orchestrates a complete evaluation.
///
/// # Responsibilities
/// - Normalizes whitespace and case.
/// - Drives decomposition, literal interpretation and reduction.
/// - Logs the decomposed tree and the final result.
pub mod evaluator;
/// The lexer recognizes the atoms of an expression.
///
/// Numeric literals and the named constants are the only tokens; everything
/// else is left to the decomposer.
pub mod lexer;
/// Interpretation of numeric literals and constants.
///
/// Turns a leaf token into a value and counts the significant figures its
/// spelling carries.
pub mod literal;
/// The significant-figure rule engine.
///
/// Computes the value and the significant figures of every operation.
pub mod rules;
/// Precision-carrying values.
///
/// Defines `PrecisionValue` and its `SigFigs` count.
pub mod value;
