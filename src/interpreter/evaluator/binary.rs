use crate::{
    ast::Operation,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Applies a binary operation with the accumulator on the left and the
/// literal on the right.
///
/// `SET` discards `left`. `%` is the truncated remainder, taking the sign of
/// `left`. `^` follows [`f64::powf`] without further checks, so a negative
/// base with a fractional exponent yields NaN. Operations that are not binary
/// leave `left` unchanged.
///
/// # Errors
/// Returns [`RuntimeError::DivisionByZero`] when `/` or `%` get a zero
/// `right`.
///
/// # Example
/// ```
/// use accumula::{ast::Operation, interpreter::evaluator::binary::apply_binary};
///
/// assert_eq!(apply_binary(Operation::Add, 1.5, 2.0), Ok(3.5));
/// assert_eq!(apply_binary(Operation::SetValue, 1.5, 2.0), Ok(2.0));
/// assert!(apply_binary(Operation::Divide, 1.5, 0.0).is_err());
/// ```
pub fn apply_binary(op: Operation, left: f64, right: f64) -> EvalResult<f64> {
    match op {
        Operation::SetValue => Ok(right),
        Operation::Add => Ok(left + right),
        Operation::Subtract => Ok(left - right),
        Operation::Multiply => Ok(left * right),
        Operation::Divide | Operation::Remainder if right == 0.0 => {
            Err(RuntimeError::DivisionByZero { op })
        },
        Operation::Divide => Ok(left / right),
        Operation::Remainder => Ok(left % right),
        Operation::Power => Ok(left.powf(right)),
        _ => Ok(left),
    }
}
