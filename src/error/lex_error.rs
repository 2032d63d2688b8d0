#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexError {
    /// Found text that no token rule accepts.
    UnexpectedToken {
        /// The offending slice of source text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A line number too large to be stored exactly as a number.
    LineTooLarge {
        /// The offending line number.
        line: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },
            Self::LineTooLarge { line } => write!(f,
                                                  "Error on line {line}: Line number is too large to be recorded exactly."),
        }
    }
}

impl std::error::Error for LexError {}
