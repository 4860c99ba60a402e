use crate::{
    error::CalcError,
    interpreter::{
        evaluator::core::{CommandEvaluator, EvalResult},
        lexer::Command,
    },
};

impl CommandEvaluator {
    /// Evaluates a two-token command of the form `[command, operand]`.
    ///
    /// Supported commands:
    /// - `negate`: integer negation.
    /// - `halve`: division by two, truncated toward zero (`-5` halves to
    ///   `-2`).
    ///
    /// The operand is parsed before the command is looked at, so
    /// `["foo", "bar"]` is a parse error rather than an illegal command.
    ///
    /// # Errors
    /// - `ParseError` if the operand is not an `i32` literal.
    /// - `IllegalCommand` if the command is not `negate` or `halve`.
    /// - `Overflow` when negating `i32::MIN`.
    /// - `IllegalLength` if `tokens` does not hold exactly two tokens.
    ///
    /// # Example
    /// ```
    /// use tokcalc::interpreter::evaluator::CommandEvaluator;
    ///
    /// assert_eq!(CommandEvaluator::eval_unary(&["negate", "5"]), Ok(-5));
    /// assert_eq!(CommandEvaluator::eval_unary(&["halve", "-5"]), Ok(-2));
    /// ```
    pub fn eval_unary(tokens: &[&str]) -> EvalResult<i32> {
        let [command, operand] = tokens else {
            return Err(CalcError::IllegalLength);
        };
        let value = Self::operand(operand)?;

        match Self::command(command, 2)? {
            Command::Negate => value.checked_neg().ok_or(CalcError::Overflow),
            Command::Halve => Ok(value / 2),
            _ => unreachable!(),
        }
    }
}
