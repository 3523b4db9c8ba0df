#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an expression.
pub enum ParseError {
    /// Encountered a character that is not part of the expression grammar.
    InvalidCharacter {
        /// The character encountered.
        found:    char,
        /// Byte offset of the character within the input line.
        position: usize,
    },
    /// The counts of `(` and `)` differ at the end of the input.
    MismatchedParentheses,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { found, position } => {
                write!(f, "Invalid character '{found}' at position {position}.")
            },

            Self::MismatchedParentheses => write!(f, "Mismatched parentheses."),
        }
    }
}

impl std::error::Error for ParseError {}
