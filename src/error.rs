/// Lexical errors.
///
/// Raised by the tokenizer for characters the language does not recognise:
/// a bare `$`, a lone `=` or `!`, or anything outside the token set.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into a tree:
/// missing parentheses, unexpected or trailing tokens and empty expressions.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unknown variables or functions, division by zero, invalid arguments or
/// arrays that cannot be broadcast against each other.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of the tokenize → parse → evaluate pipeline.
///
/// Every variant is recoverable: validators map it to "invalid input",
/// chart builders map it to "skip this data point".
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The source could not be tokenized.
    Lex(LexError),
    /// The tokens do not form an expression.
    Parse(ParseError),
    /// The expression could not be evaluated against the given variables.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns `true` when the failure is a syntax problem (lexical or
    /// grammatical) rather than an evaluation problem.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Lex(_) | Self::Parse(_))
    }
}

impl From<LexError> for Error {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
