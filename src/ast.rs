/// A decoded command, produced by the opcode recognizer.
///
/// Every variant except [`Operation::Invalid`] has a single arity that is
/// fixed for the variant and never depends on the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `DEG`: switch the session to degrees.
    SetDegrees,
    /// `RAD`: switch the session to radians.
    SetRadians,
    /// `_`
    Negate,
    /// `SQRT`
    SquareRoot,
    /// `SIN`
    Sin,
    /// `COS`
    Cos,
    /// `TAN`
    Tan,
    /// `CTN`
    Cotan,
    /// `ASIN`
    Arcsin,
    /// `ACOS`
    Arccos,
    /// `ATAN`
    Arctan,
    /// `ACTN`
    Arccotan,
    /// A leading digit: replace the accumulator with the literal.
    SetValue,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Remainder,
    /// `^`
    Power,
    /// The line did not start with a known opcode. Never evaluated.
    Invalid,
}

/// Number of operands an operation consumes.
///
/// The accumulator counts as one operand, so unary operations read nothing
/// from the line and binary operations read exactly one literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Mode toggles.
    Nullary,
    /// Operates on the accumulator alone.
    Unary,
    /// Accumulator on the left, literal on the right.
    Binary,
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nullary => write!(f, "nullary"),
            Self::Unary => write!(f, "unary"),
            Self::Binary => write!(f, "binary"),
        }
    }
}

impl Operation {
    /// Returns the arity of the operation, or `None` for
    /// [`Operation::Invalid`].
    ///
    /// # Example
    /// ```
    /// use accumula::ast::{Arity, Operation};
    ///
    /// assert_eq!(Operation::SetRadians.arity(), Some(Arity::Nullary));
    /// assert_eq!(Operation::Arccotan.arity(), Some(Arity::Unary));
    /// assert_eq!(Operation::SetValue.arity(), Some(Arity::Binary));
    /// assert_eq!(Operation::Invalid.arity(), None);
    /// ```
    #[must_use]
    pub const fn arity(self) -> Option<Arity> {
        match self {
            Self::SetDegrees | Self::SetRadians => Some(Arity::Nullary),
            Self::Negate
            | Self::SquareRoot
            | Self::Sin
            | Self::Cos
            | Self::Tan
            | Self::Cotan
            | Self::Arcsin
            | Self::Arccos
            | Self::Arctan
            | Self::Arccotan => Some(Arity::Unary),
            Self::SetValue
            | Self::Add
            | Self::Subtract
            | Self::Multiply
            | Self::Divide
            | Self::Remainder
            | Self::Power => Some(Arity::Binary),
            Self::Invalid => None,
        }
    }

    /// `true` for trig functions whose input is an angle.
    #[must_use]
    pub const fn is_forward_trig(self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan | Self::Cotan)
    }

    /// `true` for inverse trig functions whose result is an angle.
    #[must_use]
    pub const fn is_inverse_trig(self) -> bool {
        matches!(self, Self::Arcsin | Self::Arccos | Self::Arctan | Self::Arccotan)
    }

    /// `true` for any operation affected by the angle mode.
    #[must_use]
    pub const fn is_trig(self) -> bool {
        self.is_forward_trig() || self.is_inverse_trig()
    }

    /// The textual opcode, as typed by the user.
    ///
    /// [`Operation::SetValue`] has no opcode of its own and is shown as
    /// `SET`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::SetDegrees => "DEG",
            Self::SetRadians => "RAD",
            Self::Negate => "_",
            Self::SquareRoot => "SQRT",
            Self::Sin => "SIN",
            Self::Cos => "COS",
            Self::Tan => "TAN",
            Self::Cotan => "CTN",
            Self::Arcsin => "ASIN",
            Self::Arccos => "ACOS",
            Self::Arctan => "ATAN",
            Self::Arccotan => "ACTN",
            Self::SetValue => "SET",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Remainder => "%",
            Self::Power => "^",
            Self::Invalid => "ERR",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// The unit trig operations read and produce angles in.
///
/// Owned by the caller and threaded into every mode-aware evaluation. A
/// session starts in [`AngleMode::Degrees`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleMode {
    /// Angles are degrees.
    #[default]
    Degrees,
    /// Angles are radians.
    Radians,
}
