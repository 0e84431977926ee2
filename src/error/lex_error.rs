#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// A character outside the language's token set.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
    /// A `$` sigil not immediately followed by a letter or underscore.
    BareSigil {
        /// Byte offset of the `$` in the source.
        position: usize,
    },
    /// A `=` or `!` that is not part of `==` or `!=`.
    DanglingComparison {
        /// Either `=` or `!`.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
}

impl LexError {
    /// Byte offset of the offending input.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::BareSigil { position }
            | Self::DanglingComparison { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Lexical error at {position}: Unexpected character '{character}'.")
            },
            Self::BareSigil { position } => write!(f,
                                                   "Lexical error at {position}: '$' must be followed by a letter or underscore."),
            Self::DanglingComparison { character, position } => write!(f,
                                                                       "Lexical error at {position}: Unexpected character '{character}', did you mean '{character}='?"),
        }
    }
}

impl std::error::Error for LexError {}
