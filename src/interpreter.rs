/// The evaluator module applies decoded operations to the accumulator.
///
/// It holds the arithmetic and trig semantics, including the domain checks,
/// and knows nothing about angle units or input text.
///
/// # Responsibilities
/// - Applies unary operations to the accumulator.
/// - Applies binary operations to the accumulator and a literal.
/// - Rejects operands outside an operation's domain.
pub mod evaluator;
/// The lexer module recognizes the opcode at the start of a line.
///
/// # Responsibilities
/// - Matches the fixed opcode set by longest match.
/// - Leaves a leading digit unconsumed for the literal reader.
/// - Reports unknown opcodes without consuming input.
pub mod lexer;
/// The literal module reads the numeric argument of binary operations.
pub mod literal;
/// Angle handling policies.
///
/// Decides what the mode toggles do and how trig operations see their
/// operand, on top of the evaluator.
pub mod mode;
/// Caller-side session state.
pub mod session;
