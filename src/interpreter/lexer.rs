use logos::Logos;

/// Represents an atomic token of an expression.
///
/// The lexer only recognizes what can stand alone as a leaf of a decomposed
/// expression: numeric literals and the named constants. Operators, functions
/// and parentheses are handled by the decomposer on the raw string.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LiteralToken {
    /// Numeric literal tokens, such as `42`, `-3.50`, `.5`, `2.` or
    /// `1.02e-4`.
    #[regex(r"-?[0-9]+\.?[0-9]*([eE][+-]?[0-9]+)?")]
    #[regex(r"-?\.[0-9]+([eE][+-]?[0-9]+)?")]
    Number,
    /// `e`, the base of natural logarithms.
    #[token("e", ignore(ascii_case))]
    E,
    /// `pi`
    #[token("pi", ignore(ascii_case))]
    Pi,
}

/// Classifies `source` if it consists of exactly one literal token.
///
/// # Returns
/// - `Some(token)` when the whole of `source` is a single number or constant.
/// - `None` when it is empty, contains anything else, or holds several tokens.
///
/// # Example
/// ```
/// use sigfig::interpreter::lexer::{LiteralToken, classify};
///
/// assert_eq!(classify("1.0200e4"), Some(LiteralToken::Number));
/// assert_eq!(classify("PI"), Some(LiteralToken::Pi));
/// assert_eq!(classify("2e"), None);
/// assert_eq!(classify("2+3"), None);
/// ```
#[must_use]
pub fn classify(source: &str) -> Option<LiteralToken> {
    let mut lexer = LiteralToken::lexer(source);
    let token = lexer.next()?.ok()?;
    (lexer.span() == (0..source.len())).then_some(token)
}
