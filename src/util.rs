/// Floating-point helpers.
///
/// This module holds the numeric policy shared by atom construction and atom
/// equality: the strict, whole-text float parse used when classifying tokens,
/// and the absolute machine-epsilon comparison used by `==`.
///
/// Both functions are pure and never fail loudly; callers receive `None` or
/// `false` when a value does not qualify.
pub mod float;
/// Numeric conversion helpers.
///
/// Converts integers such as source line numbers into the `f64` payload of a
/// `Number` atom, refusing any value an `f64` cannot hold exactly.
pub mod num;
