use crate::ast::Operation;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Represents all errors that can occur while applying an operation.
pub enum RuntimeError {
    /// The accumulator is outside the domain of a unary operation.
    DomainError {
        /// The rejected operation.
        op:    Operation,
        /// The rejected operand.
        value: f64,
    },
    /// Division or remainder by zero.
    DivisionByZero {
        /// Either [`Operation::Divide`] or [`Operation::Remainder`].
        op: Operation,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainError { op, value } => write!(f, "Bad argument for {op}: {value}"),
            Self::DivisionByZero { op: Operation::Remainder } => {
                write!(f, "Bad right argument for remainder: 0")
            },
            Self::DivisionByZero { .. } => write!(f, "Bad right argument for division: 0"),
        }
    }
}

impl std::error::Error for RuntimeError {}
