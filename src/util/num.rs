/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts a `u64` to `f64` if and only if it is exactly representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Parameters
/// - `value`: The unsigned integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Example
/// ```
/// use plotatom::util::num::{MAX_SAFE_U64_INT, u64_to_f64_checked};
///
/// assert_eq!(u64_to_f64_checked(1234, "too big!"), Ok(1234.0));
/// assert_eq!(u64_to_f64_checked(MAX_SAFE_U64_INT + 1, "too big!"), Err("too big!"));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn u64_to_f64_checked<E>(value: u64, error: E) -> Result<f64, E> {
    if value > MAX_SAFE_U64_INT {
        return Err(error);
    }

    Ok(value as f64)
}

/// Safely converts a `usize` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use plotatom::{error::LexError, util::num::usize_to_f64_checked};
///
/// let line = usize_to_f64_checked(12, LexError::LineTooLarge { line: 12 }).unwrap();
/// assert_eq!(line, 12.0);
/// ```
pub fn usize_to_f64_checked<E>(value: usize, error: E) -> Result<f64, E> {
    u64_to_f64_checked(value as u64, error)
}
