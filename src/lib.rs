//! # accumula
//!
//! accumula is a single-accumulator calculator driven by short command lines.
//! Each line names one operation, such as `+2.5`, `SQRT` or `ASIN`, and the
//! interpreter applies it to a running value. Trig operations honour a
//! degrees/radians angle mode that the `DEG` and `RAD` commands switch.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::{AngleMode, Arity},
    error::{Diagnostic, DiagnosticSink, ParseError},
    interpreter::{
        evaluator::{apply_binary, apply_unary},
        lexer::recognize,
        literal::read_literal,
        mode::{AnglePolicy, ModeAware, ModeBlind},
    },
};

/// Defines the decoded form of a command line.
///
/// This module declares the `Operation` tag set, its fixed arities, and the
/// `AngleMode` flag that sessions carry between lines.
pub mod ast;
/// Provides the diagnostics raised while processing a line.
///
/// This module defines every error a line can produce, classifies them into
/// recovery kinds, and declares the sink they are reported through.
///
/// # Responsibilities
/// - Defines parse and runtime error enums with human-readable messages.
/// - Wraps both in a reportable `Diagnostic`.
/// - Provides collecting, printing and discarding sinks.
pub mod error;
/// Orchestrates the processing of a single command line.
///
/// This module ties together opcode recognition, literal reading, evaluation
/// and angle handling, and provides the `Session` convenience type.
pub mod interpreter;

/// Processes one command line against `accumulator` and returns the new
/// accumulator.
///
/// The opcode is recognized first. Binary operations then read their literal
/// from the rest of the line; nullary and unary operations must end the line.
/// Mode toggles and trig operations go through `policy`, everything else goes
/// straight to the evaluator.
///
/// Every rejection is reported to `sink` and leaves the accumulator as it was.
///
/// # Example
/// ```
/// use accumula::{error::Diagnostic, interpreter::mode::ModeBlind, process_line};
///
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
///
/// assert_eq!(process_line(2.0, "^ 3", &mut ModeBlind, &mut diagnostics), 8.0);
/// assert_eq!(process_line(2.0, "_ 3", &mut ModeBlind, &mut diagnostics), 2.0);
/// assert_eq!(diagnostics.len(), 1);
/// ```
pub fn process_line<P: AnglePolicy + ?Sized>(accumulator: f64,
                                             line: &str,
                                             policy: &mut P,
                                             sink: &mut dyn DiagnosticSink)
                                             -> f64 {
    let (op, cursor) = recognize(line, 0, sink);
    let Some(arity) = op.arity() else {
        return accumulator;
    };

    let result: Result<f64, Diagnostic> = match arity {
        Arity::Binary => read_literal(line, cursor).map_err(Diagnostic::from)
                                                   .and_then(|(argument, _)| {
                                                       Ok(apply_binary(op, accumulator, argument)?)
                                                   }),
        _ if cursor < line.len() => {
            Err(ParseError::UnexpectedSuffix { arity,
                                               suffix: line[cursor..].to_string() }.into())
        },
        Arity::Nullary => Ok(policy.switch(op, accumulator)),
        Arity::Unary if op.is_trig() => policy.trig(op, accumulator).map_err(Diagnostic::from),
        Arity::Unary => apply_unary(op, accumulator).map_err(Diagnostic::from),
    };

    result.unwrap_or_else(|diagnostic| {
              sink.report(diagnostic);
              accumulator
          })
}

/// Processes one command line without tracking angle units.
///
/// Trig operations work in radians. `DEG` and `RAD` are accepted but leave
/// the accumulator alone.
///
/// # Example
/// ```
/// use accumula::{error::Diagnostic, evaluate_mode_blind};
///
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
///
/// assert_eq!(evaluate_mode_blind(4.0, "SQRT", &mut diagnostics), 2.0);
/// assert_eq!(evaluate_mode_blind(-4.0, "SQRT", &mut diagnostics), -4.0);
/// assert_eq!(evaluate_mode_blind(7.0, "DEG", &mut diagnostics), 7.0);
/// assert_eq!(diagnostics.len(), 1);
/// ```
pub fn evaluate_mode_blind(accumulator: f64, line: &str, sink: &mut dyn DiagnosticSink) -> f64 {
    process_line(accumulator, line, &mut ModeBlind, sink)
}

/// Processes one command line, honouring and updating `angle_mode`.
///
/// In degrees, forward trig reads the accumulator as degrees and inverse trig
/// produces degrees. `RAD` and `DEG` rescale the accumulator when they change
/// the mode.
///
/// # Example
/// ```
/// use accumula::{ast::AngleMode, error::Discard, evaluate_mode_aware};
///
/// let mut mode = AngleMode::Degrees;
///
/// let sine = evaluate_mode_aware(90.0, &mut mode, "SIN", &mut Discard);
/// assert!((sine - 1.0).abs() < 1e-12);
///
/// let radians = evaluate_mode_aware(180.0, &mut mode, "RAD", &mut Discard);
/// assert!((radians - std::f64::consts::PI).abs() < 1e-12);
/// assert_eq!(mode, AngleMode::Radians);
/// ```
pub fn evaluate_mode_aware(accumulator: f64,
                           angle_mode: &mut AngleMode,
                           line: &str,
                           sink: &mut dyn DiagnosticSink)
                           -> f64 {
    process_line(accumulator, line, &mut ModeAware::new(angle_mode), sink)
}
