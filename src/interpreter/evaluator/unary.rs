use std::f64::consts::FRAC_PI_2;

use crate::{
    ast::Operation,
    interpreter::evaluator::core::{EvalResult, require},
};

/// Applies a unary operation to the accumulator.
///
/// Angles are radians; unit conversion is the caller's business. Domain
/// checks:
/// - `SQRT` requires `x >= 0`.
/// - `ASIN` and `ACOS` require `-1 <= x <= 1`.
/// - `CTN` of exactly zero is positive infinity.
///
/// Operations that are not unary leave `x` unchanged.
///
/// # Errors
/// Returns [`RuntimeError::DomainError`](crate::error::RuntimeError) when `x`
/// is outside the domain of `op`.
///
/// # Example
/// ```
/// use accumula::{ast::Operation, interpreter::evaluator::unary::apply_unary};
///
/// assert_eq!(apply_unary(Operation::SquareRoot, 9.0), Ok(3.0));
/// assert_eq!(apply_unary(Operation::Cotan, 0.0), Ok(f64::INFINITY));
/// assert!(apply_unary(Operation::Arcsin, 2.0).is_err());
/// ```
pub fn apply_unary(op: Operation, x: f64) -> EvalResult<f64> {
    let unit_interval = (-1.0..=1.0).contains(&x);

    match op {
        Operation::Negate => Ok(-x),
        Operation::SquareRoot => require(op, x, x >= 0.0).map(f64::sqrt),
        Operation::Sin => Ok(x.sin()),
        Operation::Cos => Ok(x.cos()),
        Operation::Tan => Ok(x.tan()),
        Operation::Cotan if x == 0.0 => Ok(f64::INFINITY),
        Operation::Cotan => Ok(x.tan().recip()),
        Operation::Arcsin => require(op, x, unit_interval).map(f64::asin),
        Operation::Arccos => require(op, x, unit_interval).map(f64::acos),
        Operation::Arctan => Ok(x.atan()),
        Operation::Arccotan => Ok(FRAC_PI_2 - x.atan()),
        _ => Ok(x),
    }
}
