/// Complex number payload.
///
/// Defines the `ComplexNumber` pair carried by `Complex` atoms, its textual
/// rendering, and the epsilon comparison applied to each component.
pub mod complex;
/// The atom itself.
///
/// Declares `Atom`, its payload enum `Value`, and every operation the rest of
/// the interpreter uses on atoms: construction from numbers, pairs, text and
/// tokens, the variant predicates and accessors, equality, rendering, and the
/// annotation map.
pub mod core;
/// Variant discriminant.
///
/// Names the five kinds of atom without their payloads, for callers that only
/// need to branch on the kind and for error messages.
pub mod kind;

pub use complex::ComplexNumber;
pub use self::core::{Atom, Value};
pub use kind::AtomKind;
