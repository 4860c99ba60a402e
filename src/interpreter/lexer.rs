use logos::Logos;

/// A recognized command symbol.
///
/// Commands are pure tags. Which one a token names is decided by comparing
/// its full content against the known symbols; a token that names none of
/// them is `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `quit`
    Quit,
    /// `negate`
    Negate,
    /// `halve`
    Halve,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `/`
    Divide,
    /// Any token that is not a known command symbol.
    Invalid,
}

/// Raw command symbols as seen by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Symbol {
    #[token("quit")]
    Quit,
    #[token("negate")]
    Negate,
    #[token("halve")]
    Halve,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("/")]
    Slash,
}

/// Integer operand literals: an optional leading minus followed by ASCII
/// decimal digits, within `i32` range.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Literal {
    #[regex(r"-?[0-9]+", parse_integer)]
    Integer(i32),
}

impl Command {
    /// Classifies a single token.
    ///
    /// # Example
    /// ```
    /// use tokcalc::interpreter::lexer::Command;
    ///
    /// assert_eq!(Command::from_token("halve"), Command::Halve);
    /// assert_eq!(Command::from_token("/"), Command::Divide);
    /// assert_eq!(Command::from_token("halves"), Command::Invalid);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match lex_whole::<Symbol>(token) {
            Some(Symbol::Quit) => Self::Quit,
            Some(Symbol::Negate) => Self::Negate,
            Some(Symbol::Halve) => Self::Halve,
            Some(Symbol::Plus) => Self::Add,
            Some(Symbol::Minus) => Self::Subtract,
            Some(Symbol::Slash) => Self::Divide,
            None => Self::Invalid,
        }
    }

    /// The token count at which this command is accepted, or `None` for
    /// `Invalid`.
    #[must_use]
    pub const fn arity(self) -> Option<usize> {
        match self {
            Self::Quit => Some(1),
            Self::Negate | Self::Halve => Some(2),
            Self::Add | Self::Subtract | Self::Divide => Some(3),
            Self::Invalid => None,
        }
    }
}

/// Splits raw input on the literal space character.
///
/// Empty tokens produced by leading, trailing, or repeated spaces are kept,
/// so `"5  + 4"` yields four tokens. Tabs and other whitespace are not
/// delimiters.
///
/// # Example
/// ```
/// use tokcalc::tokenize;
///
/// assert_eq!(tokenize("5 + 4"), vec!["5", "+", "4"]);
/// assert_eq!(tokenize(" quit"), vec!["", "quit"]);
/// assert_eq!(tokenize(""), vec![""]);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<&str> {
    input.split(' ').collect()
}

/// Parses an operand token as an `i32`.
///
/// Returns `None` when the token is not entirely an integer literal or when
/// its value is out of range. A leading `+` is rejected.
///
/// # Example
/// ```
/// use tokcalc::interpreter::lexer::parse_operand;
///
/// assert_eq!(parse_operand("-42"), Some(-42));
/// assert_eq!(parse_operand("+42"), None);
/// assert_eq!(parse_operand("2147483648"), None);
/// ```
#[must_use]
pub fn parse_operand(token: &str) -> Option<i32> {
    lex_whole::<Literal>(token).map(|Literal::Integer(n)| n)
}

/// Lexes `source` and returns its token only if exactly one token spans the
/// whole input.
fn lex_whole<'s, T>(source: &'s str) -> Option<T>
    where T: Logos<'s, Source = str>,
          T::Extras: Default
{
    let mut lexer = T::lexer(source);
    let token = lexer.next()?.ok()?;

    (lexer.span().start == 0 && lexer.remainder().is_empty()).then_some(token)
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i32)`: The parsed value if it fits.
/// - `None`: If the literal overflows `i32`.
fn parse_integer(lex: &logos::Lexer<Literal>) -> Option<i32> {
    lex.slice().parse().ok()
}
