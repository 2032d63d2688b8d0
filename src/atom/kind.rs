use std::fmt::Display;

/// The five kinds an atom can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomKind {
    /// The empty atom.
    None,
    /// A real number.
    Number,
    /// A complex number.
    Complex,
    /// An identifier.
    Symbol,
    /// A string literal.
    String,
}

impl Display for AtomKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::None => "None",
            Self::Number => "Number",
            Self::Complex => "Complex",
            Self::Symbol => "Symbol",
            Self::String => "String",
        };

        write!(f, "{name}")
    }
}
