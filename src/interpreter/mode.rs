use std::f64::consts::PI;

use crate::{
    ast::{AngleMode, Operation},
    interpreter::evaluator::{EvalResult, apply_unary},
};

/// Factor converting degrees to radians.
pub const DEGREES_TO_RADIANS: f64 = PI / 180.0;
/// Factor converting radians to degrees.
pub const RADIANS_TO_DEGREES: f64 = 180.0 / PI;

/// How a line interpreter treats angles.
///
/// Arity checks and dispatch are shared; a policy only decides what the
/// mode toggles do and how trig operations see their operand.
pub trait AnglePolicy {
    /// Applies `DEG` or `RAD` to the accumulator.
    fn switch(&mut self, op: Operation, value: f64) -> f64;

    /// Applies a trig or inverse trig operation to the accumulator.
    ///
    /// # Errors
    /// Propagates domain errors from the evaluator.
    fn trig(&self, op: Operation, value: f64) -> EvalResult<f64>;
}

/// Ignores angle units entirely.
///
/// Trig operations work in radians and the mode toggles are accepted but do
/// nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeBlind;

impl AnglePolicy for ModeBlind {
    fn switch(&mut self, _op: Operation, value: f64) -> f64 {
        value
    }

    fn trig(&self, op: Operation, value: f64) -> EvalResult<f64> {
        apply_unary(op, value)
    }
}

/// Tracks a caller-owned [`AngleMode`].
///
/// In degrees, forward trig converts its input to radians first and inverse
/// trig converts its result back to degrees. Switching mode rescales the
/// accumulator; switching to the current mode does nothing.
///
/// # Example
/// ```
/// use accumula::{
///     ast::{AngleMode, Operation},
///     interpreter::mode::{AnglePolicy, ModeAware},
/// };
///
/// let mut mode = AngleMode::Degrees;
/// let mut policy = ModeAware::new(&mut mode);
///
/// let sine = policy.trig(Operation::Sin, 30.0).unwrap();
/// assert!((sine - 0.5).abs() < 1e-12);
///
/// let half_turn = policy.switch(Operation::SetRadians, 180.0);
/// assert!((half_turn - std::f64::consts::PI).abs() < 1e-12);
/// assert_eq!(mode, AngleMode::Radians);
/// ```
#[derive(Debug)]
pub struct ModeAware<'a> {
    mode: &'a mut AngleMode,
}

impl<'a> ModeAware<'a> {
    /// Wraps the session's angle mode.
    pub const fn new(mode: &'a mut AngleMode) -> Self {
        Self { mode }
    }

    /// The current angle mode.
    #[must_use]
    pub const fn mode(&self) -> AngleMode {
        *self.mode
    }
}

impl AnglePolicy for ModeAware<'_> {
    fn switch(&mut self, op: Operation, value: f64) -> f64 {
        match (op, *self.mode) {
            (Operation::SetRadians, AngleMode::Degrees) => {
                *self.mode = AngleMode::Radians;
                value * DEGREES_TO_RADIANS
            },
            (Operation::SetDegrees, AngleMode::Radians) => {
                *self.mode = AngleMode::Degrees;
                value * RADIANS_TO_DEGREES
            },
            _ => value,
        }
    }

    fn trig(&self, op: Operation, value: f64) -> EvalResult<f64> {
        match *self.mode {
            AngleMode::Degrees if op.is_forward_trig() => {
                apply_unary(op, value * DEGREES_TO_RADIANS)
            },
            AngleMode::Degrees if op.is_inverse_trig() => {
                apply_unary(op, value).map(|angle| angle * RADIANS_TO_DEGREES)
            },
            _ => apply_unary(op, value),
        }
    }
}
