use std::collections::HashMap;

use crate::{
    atom::{
        complex::{ComplexNumber, ZERO},
        kind::AtomKind,
    },
    error::PropertyError,
    reader::token::Token,
    util::float::{Real, approx_eq, has_numeric_prefix, parse_strict},
};

/// The payload of an atom.
///
/// Exactly one variant is active. Replacing the value drops the previous
/// payload, so text owned by a `Symbol` or `String` is released as soon as the
/// atom changes kind.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// No payload; the default value.
    #[default]
    None,
    /// A real number.
    Number(f64),
    /// A complex number.
    Complex(ComplexNumber),
    /// An identifier or name.
    Symbol(String),
    /// A string literal.
    String(String),
}

impl Value {
    /// Returns the kind of this payload.
    #[must_use]
    pub const fn kind(&self) -> AtomKind {
        match self {
            Self::None => AtomKind::None,
            Self::Number(_) => AtomKind::Number,
            Self::Complex(_) => AtomKind::Complex,
            Self::Symbol(_) => AtomKind::Symbol,
            Self::String(_) => AtomKind::String,
        }
    }
}

/// Payloads are equal when their kinds match and then:
/// numbers agree within machine epsilon (NaN never equal), complex numbers
/// agree component-wise under the same rule, and text matches byte for byte.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Number(a), Self::Number(b)) => approx_eq(*a, *b),
            (Self::Complex(a), Self::Complex(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) | (Self::String(a), Self::String(b)) => a == b,
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "NONE"),
            Self::Number(n) => write!(f, "{}", Real(*n)),
            Self::Complex(c) => write!(f, "{c}"),
            Self::Symbol(s) | Self::String(s) => write!(f, "{s}"),
        }
    }
}

/// The universal value of the interpreter.
///
/// An atom is a tagged [`Value`] plus an annotation map (its property list):
/// string keys mapping to further atoms, used for metadata such as the source
/// line an atom was read from. The annotation map is part of the atom's value
/// and is cloned with it, but equality and rendering ignore it.
///
/// # Example
/// ```
/// use plotatom::atom::{Atom, AtomKind};
///
/// let mut atom = Atom::from(2.5);
/// assert!(atom.is_number());
///
/// atom.set_symbol("pi");
/// assert_eq!(atom.kind(), AtomKind::Symbol);
/// assert_eq!(atom.as_symbol(), "pi");
/// assert_eq!(atom.as_number(), 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Atom {
    value:      Value,
    properties: HashMap<String, Self>,
}

impl From<Value> for Atom {
    fn from(value: Value) -> Self {
        Self { value,
               properties: HashMap::new() }
    }
}

impl From<f64> for Atom {
    fn from(n: f64) -> Self {
        Value::Number(n).into()
    }
}

impl From<ComplexNumber> for Atom {
    fn from(c: ComplexNumber) -> Self {
        Value::Complex(c).into()
    }
}

impl From<(f64, f64)> for Atom {
    fn from(pair: (f64, f64)) -> Self {
        ComplexNumber::from(pair).into()
    }
}

impl From<&str> for Atom {
    fn from(text: &str) -> Self {
        Value::Symbol(text.to_string()).into()
    }
}

impl From<String> for Atom {
    fn from(text: String) -> Self {
        Value::Symbol(text).into()
    }
}

/// Classifies a lexical token.
///
/// - Text that parses completely as a finite float becomes a `Number`.
/// - Text that opens like a number (optional sign, then a digit or a dot and a
///   digit) but is not a valid one (`3.14xyz`, `-3abc`, `.5x`, `1e400`) is a
///   malformed literal and yields `None`.
/// - Any other text becomes a `String` if the token was a quoted literal, a
///   `Symbol` if not.
///
/// # Example
/// ```
/// use plotatom::{atom::Atom, reader::token::Token};
///
/// assert_eq!(Atom::from(&Token::new("42")), Atom::from(42.0));
/// assert!(Atom::from(&Token::new("3.14xyz")).is_none());
/// assert!(Atom::from(&Token::new("-3abc")).is_none());
/// assert!(Atom::from(&Token::new("foo")).is_symbol());
/// assert!(Atom::from(&Token::string_literal("foo")).is_string());
/// ```
impl From<&Token> for Atom {
    fn from(token: &Token) -> Self {
        let text = token.as_str();

        if let Some(n) = parse_strict(text) {
            return n.into();
        }

        if has_numeric_prefix(text) {
            Self::default()
        } else if token.is_string_literal() {
            Self::string_literal(text)
        } else {
            text.into()
        }
    }
}

impl Atom {
    /// Creates an empty (`None`) atom.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `String` atom holding `text`.
    ///
    /// Plain text conversions (`From<&str>`, `From<String>`) always produce a
    /// `Symbol`; this is the constructor for string literals.
    ///
    /// # Example
    /// ```
    /// use plotatom::atom::Atom;
    /// let s = Atom::string_literal("line");
    /// assert!(s.is_string());
    /// assert_ne!(s, Atom::from("line"));
    /// ```
    #[must_use]
    pub fn string_literal(text: impl Into<String>) -> Self {
        Value::String(text.into()).into()
    }

    /// Returns the payload.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the kind of the active payload.
    #[must_use]
    pub const fn kind(&self) -> AtomKind {
        self.value.kind()
    }

    /// Returns `true` if the atom is [`None`](Value::None).
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self.value, Value::None)
    }

    /// Returns `true` if the atom is a [`Number`](Value::Number).
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self.value, Value::Number(..))
    }

    /// Returns `true` if the atom is [`Complex`](Value::Complex).
    #[must_use]
    pub const fn is_complex(&self) -> bool {
        matches!(self.value, Value::Complex(..))
    }

    /// Returns `true` if the atom is a [`Symbol`](Value::Symbol).
    #[must_use]
    pub const fn is_symbol(&self) -> bool {
        matches!(self.value, Value::Symbol(..))
    }

    /// Returns `true` if the atom is a [`String`](Value::String).
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self.value, Value::String(..))
    }

    /// Returns the number, or `0.0` if the atom is not a `Number`.
    ///
    /// Use [`Atom::is_number`] or [`Atom::number`] to tell a stored zero apart
    /// from the default.
    #[must_use]
    pub const fn as_number(&self) -> f64 {
        match self.value {
            Value::Number(n) => n,
            _ => 0.0,
        }
    }

    /// Returns the complex pair, or `0+0i` if the atom is not `Complex`.
    #[must_use]
    pub const fn as_complex(&self) -> ComplexNumber {
        match self.value {
            Value::Complex(c) => c,
            _ => ZERO,
        }
    }

    /// Returns the symbol text, or `""` if the atom is not a `Symbol`.
    #[must_use]
    pub fn as_symbol(&self) -> &str {
        self.symbol().unwrap_or_default()
    }

    /// Returns the string text, or `""` if the atom is not a `String`.
    #[must_use]
    pub fn as_string(&self) -> &str {
        self.string().unwrap_or_default()
    }

    /// Returns the number if the atom is a `Number`.
    ///
    /// # Example
    /// ```
    /// use plotatom::atom::Atom;
    /// assert_eq!(Atom::from(0.0).number(), Some(0.0));
    /// assert_eq!(Atom::from("x").number(), None);
    /// ```
    #[must_use]
    pub const fn number(&self) -> Option<f64> {
        match self.value {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the complex pair if the atom is `Complex`.
    #[must_use]
    pub const fn complex(&self) -> Option<ComplexNumber> {
        match self.value {
            Value::Complex(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the symbol text if the atom is a `Symbol`.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        match &self.value {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the string text if the atom is a `String`.
    #[must_use]
    pub fn string(&self) -> Option<&str> {
        match &self.value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Turns the atom into a `Number`. The property list is kept.
    pub fn set_number(&mut self, n: f64) {
        self.value = Value::Number(n);
    }

    /// Turns the atom into `Complex`. The property list is kept.
    pub fn set_complex(&mut self, c: impl Into<ComplexNumber>) {
        self.value = Value::Complex(c.into());
    }

    /// Turns the atom into a `Symbol`. The property list is kept.
    pub fn set_symbol(&mut self, text: impl Into<String>) {
        self.value = Value::Symbol(text.into());
    }

    /// Turns the atom into a `String`. The property list is kept.
    ///
    /// `set_string("")` is the way to get an empty string atom.
    pub fn set_string(&mut self, text: impl Into<String>) {
        self.value = Value::String(text.into());
    }

    /// Returns `true` if `key` is a `String` atom naming a stored property.
    ///
    /// Keys of any other kind are never present; this does not fail.
    #[must_use]
    pub fn has_property(&self, key: &Self) -> bool {
        key.string()
           .is_some_and(|name| self.properties.contains_key(name))
    }

    /// Returns a copy of the property stored under `key`.
    ///
    /// Returns a `None` atom if `key` is not a `String` atom or no property is
    /// stored under it.
    #[must_use]
    pub fn get_property(&self, key: &Self) -> Self {
        key.string()
           .and_then(|name| self.properties.get(name))
           .cloned()
           .unwrap_or_default()
    }

    /// Stores `value` under `key`, replacing any property already there.
    ///
    /// # Errors
    /// Returns `PropertyError::InvalidKeyType` if `key` is not a `String` atom.
    /// The property list is left untouched in that case.
    ///
    /// # Example
    /// ```
    /// use plotatom::{
    ///     atom::{Atom, AtomKind},
    ///     error::PropertyError,
    /// };
    ///
    /// let mut atom = Atom::from("x");
    /// let line = Atom::string_literal("line");
    ///
    /// atom.add_property(&line, Atom::from(7.0)).unwrap();
    /// atom.add_property(&line, Atom::from(8.0)).unwrap();
    /// assert_eq!(atom.get_property(&line), Atom::from(8.0));
    ///
    /// let err = atom.add_property(&Atom::from("line"), Atom::new()).unwrap_err();
    /// assert_eq!(err, PropertyError::InvalidKeyType { found: AtomKind::Symbol });
    /// ```
    pub fn add_property(&mut self, key: &Self, value: Self) -> Result<(), PropertyError> {
        let Some(name) = key.string() else {
            return Err(PropertyError::InvalidKeyType { found: key.kind() });
        };

        self.properties.insert(name.to_string(), value);
        Ok(())
    }

    /// Returns the number of stored properties.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Returns the stored properties ordered by key.
    #[must_use]
    pub fn properties(&self) -> Vec<(&str, &Self)> {
        let mut entries: Vec<(&str, &Self)> =
            self.properties.iter().map(|(key, value)| (key.as_str(), value)).collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// Compares payloads only; property lists are ignored.
impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// Renders the payload only; property lists are not printed.
///
/// # Example
/// ```
/// use plotatom::atom::Atom;
/// assert_eq!(Atom::new().to_string(), "NONE");
/// assert_eq!(Atom::from(42.0).to_string(), "42");
/// assert_eq!(Atom::from((1.0, -2.0)).to_string(), "1-2i");
/// assert_eq!(Atom::string_literal("hi").to_string(), "hi");
/// ```
impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
