use crate::ast::Arity;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while decoding a command line.
pub enum ParseError {
    /// The line does not start with a known opcode.
    UnknownOperation {
        /// The whole offending line.
        line: String,
    },
    /// A nullary or unary opcode was followed by more input.
    UnexpectedSuffix {
        /// Arity of the recognized operation.
        arity:  Arity,
        /// Everything after the opcode.
        suffix: String,
    },
    /// A binary opcode was not followed by any digit.
    MissingArgument,
    /// The literal stopped on a character that cannot appear in it.
    MalformedArgument {
        /// Byte offset of the offending character.
        position: usize,
        /// The unparsed remainder starting at `position`.
        rest:     String,
    },
    /// The literal hit the digit limit with input still left over.
    ArgumentNotFullyParsed {
        /// The unparsed remainder.
        rest: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOperation { line } => write!(f, "Unknown operation {line}"),
            Self::UnexpectedSuffix { arity, suffix } => {
                write!(f, "Unexpected suffix for a {arity} operation: '{suffix}'")
            },
            Self::MissingArgument => write!(f, "No argument for a binary operation"),
            Self::MalformedArgument { position, rest } => {
                write!(f, "Argument parsing error at {position}: '{rest}'")
            },
            Self::ArgumentNotFullyParsed { rest } => {
                write!(f, "Argument isn't fully parsed, suffix left: '{rest}'")
            },
        }
    }
}

impl std::error::Error for ParseError {}
