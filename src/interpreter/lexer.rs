use logos::Logos;

use crate::{
    ast::Operation,
    error::{DiagnosticSink, ParseError},
};

/// An opcode at the start of a command line.
///
/// No code is a prefix of another, so the longest-match automaton generated
/// by logos either lands on exactly one code or fails.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Opcode {
    /// A decimal digit. It starts the literal of an implicit `SET` and is not
    /// part of the opcode.
    #[regex(r"[0-9]")]
    Digit,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `_`
    #[token("_")]
    Underscore,
    /// `^`
    #[token("^")]
    Caret,
    /// `DEG`
    #[token("DEG")]
    Deg,
    /// `RAD`
    #[token("RAD")]
    Rad,
    /// `SQRT`
    #[token("SQRT")]
    Sqrt,
    /// `SIN`
    #[token("SIN")]
    Sin,
    /// `COS`
    #[token("COS")]
    Cos,
    /// `TAN`
    #[token("TAN")]
    Tan,
    /// `CTN`
    #[token("CTN")]
    Ctn,
    /// `ASIN`
    #[token("ASIN")]
    Asin,
    /// `ACOS`
    #[token("ACOS")]
    Acos,
    /// `ATAN`
    #[token("ATAN")]
    Atan,
    /// `ACTN`
    #[token("ACTN")]
    Actn,
}

impl From<Opcode> for Operation {
    fn from(value: Opcode) -> Self {
        match value {
            Opcode::Digit => Self::SetValue,
            Opcode::Plus => Self::Add,
            Opcode::Minus => Self::Subtract,
            Opcode::Star => Self::Multiply,
            Opcode::Slash => Self::Divide,
            Opcode::Percent => Self::Remainder,
            Opcode::Underscore => Self::Negate,
            Opcode::Caret => Self::Power,
            Opcode::Deg => Self::SetDegrees,
            Opcode::Rad => Self::SetRadians,
            Opcode::Sqrt => Self::SquareRoot,
            Opcode::Sin => Self::Sin,
            Opcode::Cos => Self::Cos,
            Opcode::Tan => Self::Tan,
            Opcode::Ctn => Self::Cotan,
            Opcode::Asin => Self::Arcsin,
            Opcode::Acos => Self::Arccos,
            Opcode::Atan => Self::Arctan,
            Opcode::Actn => Self::Arccotan,
        }
    }
}

/// Decodes the opcode starting at byte offset `cursor` of `line`.
///
/// Returns the operation and the cursor just past the opcode. A leading digit
/// yields [`Operation::SetValue`] without consuming the digit, since it
/// belongs to the literal. If nothing matches, an
/// [`ParseError::UnknownOperation`] naming the line is reported and
/// [`Operation::Invalid`] is returned with the cursor unchanged.
///
/// # Example
/// ```
/// use accumula::{ast::Operation, error::Diagnostic, interpreter::lexer::recognize};
///
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
///
/// assert_eq!(recognize("ASIN", 0, &mut diagnostics), (Operation::Arcsin, 4));
/// assert_eq!(recognize("42", 0, &mut diagnostics), (Operation::SetValue, 0));
/// assert_eq!(recognize("ASK", 0, &mut diagnostics), (Operation::Invalid, 0));
/// assert_eq!(diagnostics.len(), 1);
/// ```
pub fn recognize(line: &str,
                 cursor: usize,
                 sink: &mut dyn DiagnosticSink)
                 -> (Operation, usize) {
    let mut lexer = Opcode::lexer(line.get(cursor..).unwrap_or_default());

    match lexer.next() {
        Some(Ok(Opcode::Digit)) => (Operation::SetValue, cursor),
        Some(Ok(opcode)) => (opcode.into(), cursor + lexer.span().end),
        _ => {
            sink.report(ParseError::UnknownOperation { line: line.to_string() }.into());
            (Operation::Invalid, cursor)
        },
    }
}
