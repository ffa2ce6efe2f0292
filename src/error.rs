/// Parsing errors.
///
/// Defines the errors raised while decoding a command line: unknown opcodes,
/// leftover input after an opcode, and missing or malformed literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while applying a decoded operation, such as
/// division by zero or an operand outside a function's domain.
pub mod runtime_error;
/// Diagnostics and where they go.
///
/// Wraps both error families in a single reportable value, classifies them,
/// and defines the sink trait the interpreter reports through.
pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticSink, Discard, ErrorKind, Stderr};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
