/// Parsing errors.
///
/// Defines the errors raised while decomposing an expression string or
/// interpreting one of its literals. Parse errors are detected before any
/// arithmetic is attempted.
pub mod parse_error;
/// Numeric domain errors.
///
/// Contains the errors raised while applying an operator to precision-carrying
/// operands: division by zero and operations whose result is not a finite
/// number.
pub mod domain_error;

pub use domain_error::DomainError;
pub use parse_error::ParseError;

/// Any failure of a single evaluation.
///
/// Every variant aborts the whole evaluation; there is no partial result.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The expression or one of its literals could not be parsed.
    Parse(ParseError),
    /// An operation left the domain of finite numbers.
    Domain(DomainError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<DomainError> for Error {
    fn from(error: DomainError) -> Self {
        Self::Domain(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Domain(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Domain(e) => Some(e),
        }
    }
}
