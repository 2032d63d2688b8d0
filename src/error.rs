/// Tokenizer errors.
///
/// Raised while turning source text into tokens, when a fragment of the input
/// matches no lexical rule (an unterminated string literal, for example).
pub mod lex_error;
/// Property list errors.
///
/// Raised by the annotation map of an atom. Adding a property under a key
/// that is not a `String` atom is the only operation on an atom that fails
/// instead of degrading to a default.
pub mod property_error;

pub use lex_error::LexError;
pub use property_error::PropertyError;
