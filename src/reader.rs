/// The lexer module tokenizes source text for atom construction.
///
/// The lexer reads raw source text and produces a stream of tokens paired
/// with the line they start on. Parentheses, quoted string literals and bare
/// words are recognized; whitespace and `;` comments are skipped.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Strips the quotes from string literals and flags them as such.
/// - Reports lexical errors for input no rule accepts.
pub mod lexer;
/// The token module defines the lexical token atoms are built from.
///
/// A token is the raw text of one lexeme plus a flag telling whether it was
/// written as a quoted string literal. It is the only input, besides plain
/// numbers and text, that an atom can be constructed from.
pub mod token;

pub use lexer::tokenize;
pub use token::Token;
