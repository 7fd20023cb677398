use crate::ast::Operator;

#[derive(Debug, Clone, PartialEq)]
/// Represents the numeric domain errors raised by the rule engine.
pub enum DomainError {
    /// Attempted division by a zero-valued operand.
    DivisionByZero {
        /// The value that was being divided.
        dividend: f64,
    },
    /// The operation produced an infinite or NaN value.
    NonFinite {
        /// The operator that was applied.
        operator: Operator,
        /// The first operand of the operation.
        operand:  f64,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { dividend } => {
                write!(f, "Error: Division by zero while dividing {dividend}.")
            },
            Self::NonFinite { operator, operand } => write!(f,
                                                            "Error: '{operator}' applied to {operand} does not give a finite number."),
        }
    }
}

impl std::error::Error for DomainError {}
