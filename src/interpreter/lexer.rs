use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in an expression.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Identifiers keep their source text (including a leading `$` sigil), numbers
/// carry their parsed value.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    ///
    /// There is no sign, no exponent and no leading `.`; a sign is a unary
    /// operator applied by the parser.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// Identifier tokens; variable or function names such as `N`, `score` or
    /// the stderr-sourced `$turns`.
    #[regex(r"\$?[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// Any run of whitespace, including Unicode spaces.
    #[regex(r"\s+", logos::skip)]
    Ignored,
    /// Marks the end of the token stream. Never produced by the regex engine;
    /// appended by [`tokenize`].
    EndOfInput,
}

impl Token {
    /// Returns `true` for the six comparison operators.
    #[must_use]
    pub const fn is_comparison(&self) -> bool {
        matches!(self,
                 Self::Less
                 | Self::LessEqual
                 | Self::Greater
                 | Self::GreaterEqual
                 | Self::EqualEqual
                 | Self::BangEqual)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::EqualEqual => write!(f, "=="),
            Self::BangEqual => write!(f, "!="),
            Self::LessEqual => write!(f, "<="),
            Self::GreaterEqual => write!(f, ">="),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::Ignored => write!(f, "whitespace"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A token paired with the byte offset where it starts in the source.
pub type Spanned = (Token, usize);

/// Converts an expression into its token stream.
///
/// The returned vector always ends with [`Token::EndOfInput`] positioned at
/// the length of the source, so an empty or whitespace-only input yields a
/// single end marker.
///
/// # Errors
/// Returns a [`LexError`] naming the offending character and its offset when
/// the source contains something the language does not know: a bare `$`, a
/// lone `=` or `!`, or any other unrecognised character.
///
/// # Example
/// ```
/// use benchexpr::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("N >= 100").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Identifier("N".to_string()), 0),
///                 (Token::GreaterEqual, 2),
///                 (Token::Number(100.0), 5),
///                 (Token::EndOfInput, 8)]);
///
/// assert!(tokenize("a = 1").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => return Err(classify_error(lexer.slice(), position)),
        }
    }

    tokens.push((Token::EndOfInput, source.len()));
    Ok(tokens)
}

/// Turns the slice the lexer choked on into the matching [`LexError`].
fn classify_error(slice: &str, position: usize) -> LexError {
    match slice.chars().next() {
        Some('$') => LexError::BareSigil { position },
        Some(character @ ('=' | '!')) => LexError::DanglingComparison { character, position },
        Some(character) => LexError::UnexpectedCharacter { character, position },
        None => LexError::UnexpectedCharacter { character: '\0',
                                                position },
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap()
                        .into_iter()
                        .map(|(tok, _)| tok)
                        .collect()
    }

    #[test]
    fn empty_input_is_only_end_marker() {
        assert_eq!(tokenize("").unwrap(), vec![(Token::EndOfInput, 0)]);
        assert_eq!(tokenize("   \t").unwrap(), vec![(Token::EndOfInput, 4)]);
    }

    #[test]
    fn numbers_and_identifiers() {
        assert_eq!(kinds("3.25 + x_1*$turns"),
                   vec![Token::Number(3.25),
                        Token::Plus,
                        Token::Identifier("x_1".to_string()),
                        Token::Star,
                        Token::Identifier("$turns".to_string()),
                        Token::EndOfInput]);
    }

    #[test]
    fn comparisons_are_greedy() {
        assert_eq!(kinds("a<=b<c>=d>e==f!=g"),
                   vec![Token::Identifier("a".to_string()),
                        Token::LessEqual,
                        Token::Identifier("b".to_string()),
                        Token::Less,
                        Token::Identifier("c".to_string()),
                        Token::GreaterEqual,
                        Token::Identifier("d".to_string()),
                        Token::Greater,
                        Token::Identifier("e".to_string()),
                        Token::EqualEqual,
                        Token::Identifier("f".to_string()),
                        Token::BangEqual,
                        Token::Identifier("g".to_string()),
                        Token::EndOfInput]);
    }

    #[test]
    fn positions_are_byte_offsets() {
        let tokens = tokenize("  max( x )").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|(_, pos)| *pos).collect();
        assert_eq!(positions, vec![2, 5, 7, 9, 10]);
    }

    #[rstest]
    #[case("1\u{a0}+\u{0B}2")]
    #[case("1\u{2003}+\u{0C}2")]
    #[case("\r\n1 +\t2\n")]
    fn any_whitespace_separates_tokens(#[case] source: &str) {
        assert_eq!(kinds(source),
                   vec![Token::Number(1.0), Token::Plus, Token::Number(2.0), Token::EndOfInput]);
    }

    #[rstest]
    #[case("$", LexError::BareSigil { position: 0 })]
    #[case("1 + $", LexError::BareSigil { position: 4 })]
    #[case("a = 1", LexError::DanglingComparison { character: '=', position: 2 })]
    #[case("!a", LexError::DanglingComparison { character: '!', position: 0 })]
    #[case("2 % 3", LexError::UnexpectedCharacter { character: '%', position: 2 })]
    #[case("f(1, 2)", LexError::UnexpectedCharacter { character: ',', position: 3 })]
    fn rejects_unknown_input(#[case] source: &str, #[case] expected: LexError) {
        assert_eq!(tokenize(source), Err(expected));
    }

    #[test]
    fn leading_dot_is_not_a_number() {
        assert!(tokenize(".5").is_err());
    }
}
