use crate::{
    error::CalcError,
    interpreter::evaluator::{CommandEvaluator, EvalResult, Outcome},
};

/// Text returned by [`run`] when the user asks to stop.
pub const QUIT: &str = "quit";

/// Evaluates one line of input and renders the outcome for display.
///
/// The input is split on single spaces, dispatched by token count, and every
/// outcome, including every error, becomes a string. Nothing is printed or
/// logged.
///
/// # Example
/// ```
/// use tokcalc::run;
///
/// assert_eq!(run("5 + 4"), "The result is: 9");
/// assert_eq!(run("5 / 0"), "Attempted to divide by 0. Please try again.");
/// assert_eq!(run("quit"), "quit");
/// ```
#[must_use]
pub fn run(input: &str) -> String {
    render(&CommandEvaluator::eval_line(input))
}

/// Renders an evaluation result as the user-facing string.
#[must_use]
pub fn render(result: &EvalResult<Outcome>) -> String {
    match result {
        Ok(Outcome::Quit) => QUIT.to_string(),
        Ok(Outcome::Value(v)) => format!("The result is: {v}"),
        Err(e) if e.is_calculator_exception() => {
            format!("Calculator Exception, message is: {}", e.message())
        },
        Err(CalcError::DivisionByZero) => "Attempted to divide by 0. Please try again.".to_string(),
        Err(CalcError::ParseError { .. }) => {
            "Input number cannot be parsed to an int. Please try again.".to_string()
        },
        Err(_) => "Integer overflow while computing the result. Please try again.".to_string(),
    }
}
