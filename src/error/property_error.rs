use crate::atom::kind::AtomKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while editing an atom's property
/// list.
pub enum PropertyError {
    /// The key atom was not a `String` atom.
    InvalidKeyType {
        /// The kind of atom that was supplied as the key.
        found: AtomKind,
    },
}

impl std::fmt::Display for PropertyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKeyType { found } => write!(f,
                                                     "Attempt to add non-string to the property list: key is a {found}."),
        }
    }
}

impl std::error::Error for PropertyError {}
