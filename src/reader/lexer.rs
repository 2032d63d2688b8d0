use logos::Logos;

use crate::{error::LexError, reader::token::Token};

/// The lexemes recognized in source text.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Lexeme {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Quoted string literals such as `"hello world"`. Quotes are stripped.
    #[regex(r#""[^"]*""#, parse_string, allow_greedy = true)]
    StringLiteral(String),
    /// Any other run of non-blank characters: numbers, names, operators.
    #[regex(r#"[^ \t\f\r\n()";]+"#, |lex| lex.slice().to_string(), allow_greedy = true)]
    Word(String),
    /// `; Comments.`
    #[regex(r";[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, feeds and carriage returns.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for token positions and diagnostics.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

impl From<Lexeme> for Token {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::LParen => Self::new("("),
            Lexeme::RParen => Self::new(")"),
            Lexeme::StringLiteral(text) => Self::string_literal(text),
            Lexeme::Word(text) => Self::new(text),
            // their callbacks skip them, so the lexer never emits them
            Lexeme::Comment | Lexeme::NewLine | Lexeme::Ignored => {
                unreachable!("skipped lexemes are never emitted")
            },
        }
    }
}

/// Splits `source` into tokens, each paired with the line it starts on.
///
/// Lines are counted from 1. A string literal that spans several lines is
/// reported on the line of its opening quote.
///
/// # Errors
/// Returns `LexError::UnexpectedToken` for input no rule accepts, such as a
/// string literal missing its closing quote.
///
/// # Example
/// ```
/// use plotatom::reader::{lexer::tokenize, token::Token};
///
/// let tokens = tokenize("(define x \"hi\")\n; note\n7").unwrap();
/// let texts: Vec<&str> = tokens.iter().map(|(t, _)| t.as_str()).collect();
/// assert_eq!(texts, ["(", "define", "x", "hi", ")", "7"]);
/// assert_eq!(tokens[3].0, Token::string_literal("hi"));
/// assert_eq!(tokens[5].1, 3);
///
/// assert!(tokenize("\"open").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        match lexeme {
            Ok(lexeme) => {
                // string literals have already advanced the counter past their own newlines
                let line = lexer.extras.line - newlines_in(lexer.slice());
                tokens.push((lexeme.into(), line));
            },
            Err(()) => {
                return Err(LexError::UnexpectedToken { token: lexer.slice().to_string(),
                                                       line:  lexer.extras.line, });
            },
        }
    }

    Ok(tokens)
}

/// Strips the quotes from a string literal and counts the lines it spans.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The literal's content without the surrounding quotes.
fn parse_string(lex: &mut logos::Lexer<Lexeme>) -> String {
    let slice = lex.slice();
    lex.extras.line += newlines_in(slice);

    slice[1..slice.len() - 1].to_string()
}

fn newlines_in(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}
