use crate::{ast::Operation, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either the new accumulator or a
/// `RuntimeError` describing why the operation was rejected.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Rejects `value` for `op` unless `accept` holds.
///
/// # Example
/// ```
/// use accumula::{ast::Operation, interpreter::evaluator::core::require};
///
/// assert_eq!(require(Operation::SquareRoot, 4.0, true), Ok(4.0));
/// assert!(require(Operation::SquareRoot, -4.0, false).is_err());
/// ```
pub const fn require(op: Operation, value: f64, accept: bool) -> EvalResult<f64> {
    if accept {
        Ok(value)
    } else {
        Err(RuntimeError::DomainError { op, value })
    }
}
