#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while decomposing an expression or
/// interpreting its literals.
pub enum ParseError {
    /// A token expected to be a number or a constant is neither.
    MalformedLiteral {
        /// The offending token.
        literal: String,
    },
    /// No valid split point was found and the substring is not an atom.
    ///
    /// Also raised for unbalanced parentheses, empty operands and empty
    /// input.
    MalformedExpression {
        /// The offending substring.
        expression: String,
        /// Why the substring was rejected.
        reason:     &'static str,
    },
}

impl ParseError {
    pub(crate) fn malformed(expression: &str, reason: &'static str) -> Self {
        Self::MalformedExpression { expression: expression.to_string(),
                                    reason }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedLiteral { literal } => {
                write!(f, "Error: '{literal}' is not a number or a known constant.")
            },
            Self::MalformedExpression { expression, reason } => {
                write!(f, "Error: Malformed expression '{expression}': {reason}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
