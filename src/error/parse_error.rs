#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while parsing tokens.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    UnexpectedEndOfInput {
        /// Byte offset of the end of input.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The token found instead.
        found:    String,
        /// Byte offset of the token found instead.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset of the extra token.
        position: usize,
    },
    /// The source contained no tokens at all.
    EmptyExpression,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Syntax error at {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Syntax error at {position}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { found, position } => write!(f,
                                                                     "Syntax error at {position}: Expected closing parenthesis ')' but found {found}."),

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Syntax error at {position}: Unexpected token after expression: {token}."),

            Self::EmptyExpression => write!(f, "Syntax error: Empty expression."),
        }
    }
}

impl std::error::Error for ParseError {}
