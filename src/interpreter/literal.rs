use crate::error::ParseError;

/// Maximum number of digit characters in a literal, integer and fractional
/// digits combined. The decimal point does not count.
pub const MAX_DIGITS: usize = 10;

/// Reads the fixed-point literal of a binary operation.
///
/// ASCII whitespace between the opcode and the literal is skipped. Digits are then
/// read left to right, with at most one `.` switching to the fractional part,
/// until [`MAX_DIGITS`] digits have been read or another character shows up.
/// The literal must run to the end of the line.
///
/// On success returns the value and the cursor just past the literal (the
/// line length).
///
/// # Errors
/// - [`ParseError::MissingArgument`] if no digit was read.
/// - [`ParseError::MalformedArgument`] if reading stopped on a character that
///   cannot be part of a literal.
/// - [`ParseError::ArgumentNotFullyParsed`] if the digit limit was reached
///   with input left over.
///
/// # Example
/// ```
/// use accumula::{error::ParseError, interpreter::literal::read_literal};
///
/// assert_eq!(read_literal("+ 2.5", 1), Ok((2.5, 5)));
/// assert_eq!(read_literal("+", 1), Err(ParseError::MissingArgument));
/// assert!(read_literal("+12345678901", 1).is_err());
/// ```
pub fn read_literal(line: &str, cursor: usize) -> Result<(f64, usize), ParseError> {
    let rest = line.get(cursor..).unwrap_or_default();
    let literal = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let start = cursor + (rest.len() - literal.len());

    let mut value = 0.0;
    let mut weight = 1.0;
    let mut digits = 0;
    let mut fractional = false;
    let mut end = start;
    let mut stopped_at = None;

    for (offset, c) in literal.char_indices() {
        if digits == MAX_DIGITS {
            break;
        }
        match c.to_digit(10) {
            Some(d) if fractional => {
                weight /= 10.0;
                value += f64::from(d) * weight;
                digits += 1;
            },
            Some(d) => {
                value = value * 10.0 + f64::from(d);
                digits += 1;
            },
            None if c == '.' && !fractional => fractional = true,
            None => {
                stopped_at = Some(start + offset);
                break;
            },
        }
        end = start + offset + c.len_utf8();
    }

    if digits == 0 {
        return Err(ParseError::MissingArgument);
    }
    if let Some(position) = stopped_at {
        return Err(ParseError::MalformedArgument { position,
                                                   rest: line[position..].to_string() });
    }
    if end < line.len() {
        return Err(ParseError::ArgumentNotFullyParsed { rest: line[end..].to_string() });
    }

    Ok((value, end))
}
