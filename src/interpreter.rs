/// The evaluator module classifies token sequences and computes results.
///
/// Routing is by token count alone. Two-token commands put the command
/// first (`negate 5`); three-token commands put it in the middle (`5 + 4`).
///
/// # Responsibilities
/// - Routes token sequences to the unary or binary evaluator.
/// - Applies integer operators with checked arithmetic.
/// - Reports failures as typed `CalcError` values.
pub mod evaluator;
/// The lexer module splits input and recognizes tokens.
///
/// # Responsibilities
/// - Splits raw input on the space character, keeping empty tokens.
/// - Recognizes command symbols by full-content match.
/// - Parses integer operand literals.
pub mod lexer;
/// The runner module turns an input line into display text.
pub mod runner;
