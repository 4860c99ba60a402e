/// Message carried by [`CalcError::IllegalCommand`].
pub const ILLEGAL_COMMAND: &str = "Illegal Command";
/// Message carried by [`CalcError::IllegalLength`].
pub const ILLEGAL_TOKEN_LENGTH: &str = "Illegal Token Length";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a command.
///
/// When more than one condition applies, the evaluator reports them in this
/// order: `ParseError`, `IllegalCommand`, `DivisionByZero`, `Overflow`.
/// `IllegalLength` is decided from the token count alone, before any token is
/// inspected.
pub enum CalcError {
    /// A token in operand position is not a valid `i32` literal.
    ParseError {
        /// The offending token, exactly as it appeared in the input.
        token: String,
    },
    /// The command token is not recognized for the given arity, or a lone
    /// token is not `quit`.
    IllegalCommand,
    /// The divide command was given a zero right operand.
    DivisionByZero,
    /// The input held zero tokens or more than three.
    IllegalLength,
    /// The result does not fit in an `i32`.
    Overflow,
}

impl CalcError {
    /// Returns the short message attached to the error.
    ///
    /// For `IllegalCommand` and `IllegalLength` this is the exact text shown
    /// after `"Calculator Exception, message is: "`.
    ///
    /// # Example
    /// ```
    /// use tokcalc::error::CalcError;
    ///
    /// assert_eq!(CalcError::IllegalCommand.message(), "Illegal Command");
    /// assert_eq!(CalcError::IllegalLength.message(), "Illegal Token Length");
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::ParseError { token } => format!("For input string: \"{token}\""),
            Self::IllegalCommand => ILLEGAL_COMMAND.to_string(),
            Self::DivisionByZero => "A division by zero has occurred".to_string(),
            Self::IllegalLength => ILLEGAL_TOKEN_LENGTH.to_string(),
            Self::Overflow => "Integer overflow".to_string(),
        }
    }

    /// Whether the error belongs to the calculator-exception family, i.e. is
    /// reported to the user with its message attached.
    #[must_use]
    pub const fn is_calculator_exception(&self) -> bool {
        matches!(self, Self::IllegalCommand | Self::IllegalLength)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CalcError {}
