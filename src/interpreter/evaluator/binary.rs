use crate::{
    error::CalcError,
    interpreter::{
        evaluator::core::{CommandEvaluator, EvalResult},
        lexer::Command,
    },
};

impl CommandEvaluator {
    /// Evaluates a three-token command of the form `[left, command, right]`.
    ///
    /// Both operands are parsed first, left before right. Division truncates
    /// toward zero. All arithmetic is checked; results outside `i32` are
    /// reported instead of wrapping.
    ///
    /// # Errors
    /// - `ParseError` for the first operand that is not an `i32` literal.
    /// - `IllegalCommand` if the command is not `+`, `-` or `/`.
    /// - `DivisionByZero` for `/` with a zero right operand.
    /// - `Overflow` if the result does not fit in an `i32`.
    /// - `IllegalLength` if `tokens` does not hold exactly three tokens.
    ///
    /// # Example
    /// ```
    /// use tokcalc::{error::CalcError, interpreter::evaluator::CommandEvaluator};
    ///
    /// assert_eq!(CommandEvaluator::eval_binary(&["9", "/", "3"]), Ok(3));
    /// assert_eq!(CommandEvaluator::eval_binary(&["-7", "/", "2"]), Ok(-3));
    /// assert_eq!(CommandEvaluator::eval_binary(&["1", "/", "0"]), Err(CalcError::DivisionByZero));
    /// ```
    pub fn eval_binary(tokens: &[&str]) -> EvalResult<i32> {
        let [left, command, right] = tokens else {
            return Err(CalcError::IllegalLength);
        };
        let a = Self::operand(left)?;
        let b = Self::operand(right)?;

        match Self::command(command, 3)? {
            Command::Add => a.checked_add(b).ok_or(CalcError::Overflow),
            Command::Subtract => a.checked_sub(b).ok_or(CalcError::Overflow),
            Command::Divide => {
                if b == 0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    a.checked_div(b).ok_or(CalcError::Overflow)
                }
            },
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::CalcError, interpreter::evaluator::core::CommandEvaluator};

    fn parse_error(token: &str) -> CalcError {
        CalcError::ParseError { token: token.to_string() }
    }

    #[test]
    fn arithmetic() {
        assert_eq!(CommandEvaluator::eval_binary(&["2", "+", "3"]), Ok(5));
        assert_eq!(CommandEvaluator::eval_binary(&["3", "-", "2"]), Ok(1));
        assert_eq!(CommandEvaluator::eval_binary(&["2", "-", "3"]), Ok(-1));
        assert_eq!(CommandEvaluator::eval_binary(&["9", "/", "3"]), Ok(3));
    }

    #[test]
    fn division_truncates_toward_zero() {
        for (a, b) in [(7, 2), (-7, 2), (7, -2), (-7, -2), (1, 3), (-1, 3), (0, -4)] {
            let (left, right) = (a.to_string(), b.to_string());
            assert_eq!(CommandEvaluator::eval_binary(&[left.as_str(), "/", right.as_str()]),
                       Ok(a / b),
                       "{a} / {b}");
        }
    }

    #[test]
    fn division_by_zero() {
        for a in ["0", "5", "-5", "2147483647"] {
            assert_eq!(CommandEvaluator::eval_binary(&[a, "/", "0"]),
                       Err(CalcError::DivisionByZero));
        }
        assert_eq!(CommandEvaluator::eval_binary(&["5", "/", "-0"]),
                   Err(CalcError::DivisionByZero));
    }

    #[test]
    fn left_operand_is_checked_first() {
        assert_eq!(CommandEvaluator::eval_binary(&["foo", "+", "5"]), Err(parse_error("foo")));
        assert_eq!(CommandEvaluator::eval_binary(&["5", "+", "foo"]), Err(parse_error("foo")));
        assert_eq!(CommandEvaluator::eval_binary(&["a", "+", "b"]), Err(parse_error("a")));
    }

    #[test]
    fn parse_error_wins_over_illegal_command_and_division_by_zero() {
        assert_eq!(CommandEvaluator::eval_binary(&["5", "heh", "x"]), Err(parse_error("x")));
        assert_eq!(CommandEvaluator::eval_binary(&["x", "/", "0"]), Err(parse_error("x")));
    }

    #[test]
    fn illegal_command_wins_over_division_by_zero() {
        assert_eq!(CommandEvaluator::eval_binary(&["5", "heh", "0"]),
                   Err(CalcError::IllegalCommand));
    }

    #[test]
    fn unknown_or_misplaced_command_is_illegal() {
        for command in ["heh", "*", "negate", "quit", "+-", ""] {
            assert_eq!(CommandEvaluator::eval_binary(&["5", command, "3"]),
                       Err(CalcError::IllegalCommand),
                       "command {command:?}");
        }
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(CommandEvaluator::eval_binary(&["2147483647", "+", "1"]),
                   Err(CalcError::Overflow));
        assert_eq!(CommandEvaluator::eval_binary(&["-2147483648", "-", "1"]),
                   Err(CalcError::Overflow));
        assert_eq!(CommandEvaluator::eval_binary(&["-2147483648", "/", "-1"]),
                   Err(CalcError::Overflow));
        assert_eq!(CommandEvaluator::eval_binary(&["-2147483648", "/", "1"]), Ok(i32::MIN));
    }
}
