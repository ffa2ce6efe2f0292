/// Shared evaluation types and domain checks.
///
/// Defines the evaluator's result type and the helper every domain-checked
/// operation goes through.
pub mod core;

/// Unary operation evaluation.
///
/// Negation, square root, and the trig and inverse trig functions, all in
/// radians.
pub mod unary;

/// Binary operation evaluation.
///
/// Assignment, the four arithmetic operations, remainder and power, with the
/// literal as the right operand.
pub mod binary;

pub use binary::apply_binary;
pub use self::core::EvalResult;
pub use unary::apply_unary;
