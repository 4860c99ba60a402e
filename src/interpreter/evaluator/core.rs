use crate::{
    error::CalcError,
    interpreter::lexer::{Command, parse_operand, tokenize},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `CalcError` describing the failure.
pub type EvalResult<T> = Result<T, CalcError>;

/// The successful result of dispatching one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A computed integer.
    Value(i32),
    /// The user asked to stop.
    Quit,
}

/// Evaluates tokenized commands.
///
/// The evaluator holds no state. Every call is independent, so the same
/// input always produces the same outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandEvaluator;

impl CommandEvaluator {
    /// Routes a token sequence by its length.
    ///
    /// | tokens | behavior                                   |
    /// |--------|--------------------------------------------|
    /// | 0      | `IllegalLength`                            |
    /// | 1      | `Quit` for `quit`, otherwise `IllegalCommand` |
    /// | 2      | [`CommandEvaluator::eval_unary`]           |
    /// | 3      | [`CommandEvaluator::eval_binary`]          |
    /// | 4+     | `IllegalLength`                            |
    ///
    /// Results and errors from the arity-specific evaluators are returned
    /// unchanged.
    ///
    /// # Example
    /// ```
    /// use tokcalc::{
    ///     error::CalcError,
    ///     interpreter::evaluator::{CommandEvaluator, Outcome},
    /// };
    ///
    /// assert_eq!(CommandEvaluator::dispatch(&["quit"]), Ok(Outcome::Quit));
    /// assert_eq!(CommandEvaluator::dispatch(&["2", "+", "3"]), Ok(Outcome::Value(5)));
    /// assert_eq!(CommandEvaluator::dispatch(&[]), Err(CalcError::IllegalLength));
    /// ```
    pub fn dispatch(tokens: &[&str]) -> EvalResult<Outcome> {
        match tokens {
            [] => Err(CalcError::IllegalLength),
            [token] => Self::command(token, 1).map(|_| Outcome::Quit),
            [_, _] => Self::eval_unary(tokens).map(Outcome::Value),
            [_, _, _] => Self::eval_binary(tokens).map(Outcome::Value),
            _ => Err(CalcError::IllegalLength),
        }
    }

    /// Tokenizes `input` and dispatches it.
    pub fn eval_line(input: &str) -> EvalResult<Outcome> {
        Self::dispatch(&tokenize(input))
    }

    /// Recognizes `token` as a command accepted at `arity` tokens.
    ///
    /// A known symbol used at the wrong arity, such as `quit 5` or
    /// `5 negate 5`, is an `IllegalCommand`.
    pub(crate) fn command(token: &str, arity: usize) -> EvalResult<Command> {
        let command = Command::from_token(token);
        if command.arity() == Some(arity) {
            Ok(command)
        } else {
            Err(CalcError::IllegalCommand)
        }
    }

    /// Parses an operand token, reporting the token itself on failure.
    pub(crate) fn operand(token: &str) -> EvalResult<i32> {
        parse_operand(token).ok_or_else(|| CalcError::ParseError { token: token.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_long_inputs_have_illegal_length() {
        assert_eq!(CommandEvaluator::dispatch(&[]), Err(CalcError::IllegalLength));
        assert_eq!(CommandEvaluator::dispatch(&["5", "-", "2", "4"]),
                   Err(CalcError::IllegalLength));
        assert_eq!(CommandEvaluator::dispatch(&["yes"; 9]), Err(CalcError::IllegalLength));
    }

    #[test]
    fn single_token_must_be_quit() {
        assert_eq!(CommandEvaluator::dispatch(&["quit"]), Ok(Outcome::Quit));
        assert_eq!(CommandEvaluator::dispatch(&["foo"]), Err(CalcError::IllegalCommand));
        assert_eq!(CommandEvaluator::dispatch(&["5"]), Err(CalcError::IllegalCommand));
        assert_eq!(CommandEvaluator::dispatch(&[""]), Err(CalcError::IllegalCommand));
    }

    #[test]
    fn delegates_by_arity() {
        assert_eq!(CommandEvaluator::dispatch(&["negate", "5"]), Ok(Outcome::Value(-5)));
        assert_eq!(CommandEvaluator::dispatch(&["2", "+", "3"]), Ok(Outcome::Value(5)));
        assert_eq!(CommandEvaluator::dispatch(&["quit", "5"]), Err(CalcError::IllegalCommand));
    }

    #[test]
    fn commands_are_only_accepted_at_their_arity() {
        assert_eq!(CommandEvaluator::command("quit", 1), Ok(Command::Quit));
        assert_eq!(CommandEvaluator::command("halve", 2), Ok(Command::Halve));
        assert_eq!(CommandEvaluator::command("/", 3), Ok(Command::Divide));
        assert_eq!(CommandEvaluator::command("negate", 1), Err(CalcError::IllegalCommand));
        assert_eq!(CommandEvaluator::command("quit", 3), Err(CalcError::IllegalCommand));
        assert_eq!(CommandEvaluator::command("+", 2), Err(CalcError::IllegalCommand));
        assert_eq!(CommandEvaluator::command("nope", 2), Err(CalcError::IllegalCommand));
    }

    #[test]
    fn min_value_result_is_not_quit() {
        assert_eq!(CommandEvaluator::eval_line("-2147483647 - 1"),
                   Ok(Outcome::Value(i32::MIN)));
    }
}
