/// A lexical token: raw text and whether it was a quoted string literal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Token {
    text:           String,
    string_literal: bool,
}

impl Token {
    /// Creates a bare (unquoted) token.
    ///
    /// # Example
    /// ```
    /// use plotatom::reader::token::Token;
    /// let token = Token::new("foo");
    /// assert_eq!(token.as_str(), "foo");
    /// assert!(!token.is_string_literal());
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text:           text.into(),
               string_literal: false, }
    }

    /// Creates a token that was written as a quoted string literal.
    ///
    /// `text` is the literal's content without the surrounding quotes.
    #[must_use]
    pub fn string_literal(text: impl Into<String>) -> Self {
        Self { text:           text.into(),
               string_literal: true, }
    }

    /// Returns the raw token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the token was a quoted string literal.
    #[must_use]
    pub const fn is_string_literal(&self) -> bool {
        self.string_literal
    }

    /// Returns `true` if the token is an opening or closing parenthesis.
    #[must_use]
    pub fn is_delimiter(&self) -> bool {
        !self.string_literal && matches!(self.text.as_str(), "(" | ")")
    }
}
