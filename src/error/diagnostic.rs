use crate::error::{ParseError, RuntimeError};

/// The recovery class of a diagnostic.
///
/// Every class is recovered locally: the accumulator keeps its previous value
/// and the interpreter is ready for the next line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No opcode matched.
    Recognition,
    /// Input was left over after the opcode or its literal.
    ArityMismatch,
    /// A binary operation got no literal at all.
    MissingArgument,
    /// The operand is outside the operation's domain.
    Domain,
}

/// A single problem reported while processing one line.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Raised while decoding the line.
    Parse(ParseError),
    /// Raised while applying the decoded operation.
    Runtime(RuntimeError),
}

impl Diagnostic {
    /// Classifies the diagnostic.
    ///
    /// # Example
    /// ```
    /// use accumula::error::{Diagnostic, ErrorKind, ParseError};
    ///
    /// let d = Diagnostic::from(ParseError::MissingArgument);
    /// assert_eq!(d.kind(), ErrorKind::MissingArgument);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::UnknownOperation { .. }) => ErrorKind::Recognition,
            Self::Parse(ParseError::MissingArgument) => ErrorKind::MissingArgument,
            Self::Parse(ParseError::UnexpectedSuffix { .. }
                        | ParseError::MalformedArgument { .. }
                        | ParseError::ArgumentNotFullyParsed { .. }) => ErrorKind::ArityMismatch,
            Self::Runtime(_) => ErrorKind::Domain,
        }
    }
}

impl From<ParseError> for Diagnostic {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Diagnostic {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Diagnostic {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

/// Receives diagnostics as they are raised.
///
/// The interpreter never writes to an output stream itself; whoever drives it
/// decides where diagnostics go.
pub trait DiagnosticSink {
    /// Accepts one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Writes each diagnostic to standard error, one per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stderr;

impl DiagnosticSink for Stderr {
    fn report(&mut self, diagnostic: Diagnostic) {
        eprintln!("{diagnostic}");
    }
}

/// Drops every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl DiagnosticSink for Discard {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Arity, Operation};

    #[test]
    fn kinds_follow_the_taxonomy() {
        let cases = [(Diagnostic::from(ParseError::UnknownOperation { line: "X".into() }),
                      ErrorKind::Recognition),
                     (ParseError::UnexpectedSuffix { arity:  Arity::Unary,
                                                     suffix: "2".into(), }.into(),
                      ErrorKind::ArityMismatch),
                     (ParseError::ArgumentNotFullyParsed { rest: "1".into() }.into(),
                      ErrorKind::ArityMismatch),
                     (ParseError::MalformedArgument { position: 2,
                                                      rest:     "x".into(), }.into(),
                      ErrorKind::ArityMismatch),
                     (ParseError::MissingArgument.into(), ErrorKind::MissingArgument),
                     (RuntimeError::DivisionByZero { op: Operation::Divide }.into(),
                      ErrorKind::Domain)];

        for (diagnostic, kind) in cases {
            assert_eq!(diagnostic.kind(), kind, "{diagnostic}");
        }
    }

    #[test]
    fn messages_name_the_offending_input() {
        let d = Diagnostic::from(ParseError::UnknownOperation { line: "FOO 1".into() });
        assert_eq!(d.to_string(), "Unknown operation FOO 1");

        let d = Diagnostic::from(RuntimeError::DomainError { op:    Operation::SquareRoot,
                                                             value: -4.0, });
        assert_eq!(d.to_string(), "Bad argument for SQRT: -4");

        let d = Diagnostic::from(RuntimeError::DivisionByZero { op: Operation::Remainder });
        assert_eq!(d.to_string(), "Bad right argument for remainder: 0");
    }

    #[test]
    fn vec_sink_collects_in_order() {
        let mut sink = Vec::new();
        sink.report(ParseError::MissingArgument.into());
        sink.report(RuntimeError::DivisionByZero { op: Operation::Divide }.into());
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].kind(), ErrorKind::MissingArgument);
    }
}
