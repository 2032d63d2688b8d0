/// Compares two floats against the absolute machine epsilon.
///
/// Returns `true` when `|left - right| <= f64::EPSILON`. Any NaN operand
/// (or a difference that is NaN, such as `inf - inf`) compares unequal.
///
/// # Parameters
/// - `left`: The first value.
/// - `right`: The second value.
///
/// # Example
/// ```
/// use plotatom::util::float::approx_eq;
///
/// assert!(approx_eq(1.0, 1.0 + f64::EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + 2.0 * f64::EPSILON));
/// assert!(!approx_eq(f64::NAN, f64::NAN));
/// assert!(!approx_eq(f64::INFINITY, f64::INFINITY));
/// ```
#[must_use]
pub fn approx_eq(left: f64, right: f64) -> bool {
    let diff = (left - right).abs();
    !diff.is_nan() && diff <= f64::EPSILON
}

/// Parses the whole of `text` as a decimal floating-point literal.
///
/// The parse is strict: leading or trailing characters of any kind make it
/// fail. Spelled-out specials (`inf`, `infinity`, `nan`) are rejected, so
/// a literal must contain at least one decimal digit. Literals too large for
/// an `f64` (`1e400`) are rejected instead of becoming infinite.
///
/// # Parameters
/// - `text`: The raw token text.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If `text` is not exactly one finite float literal.
///
/// # Example
/// ```
/// use plotatom::util::float::parse_strict;
///
/// assert_eq!(parse_strict("42"), Some(42.0));
/// assert_eq!(parse_strict("-.5e1"), Some(-5.0));
/// assert_eq!(parse_strict("3.14xyz"), None);
/// assert_eq!(parse_strict(" 1"), None);
/// assert_eq!(parse_strict("inf"), None);
/// assert_eq!(parse_strict("NaN"), None);
/// assert_eq!(parse_strict("1e400"), None);
/// ```
#[must_use]
pub fn parse_strict(text: &str) -> Option<f64> {
    if !text.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    text.parse().ok().filter(|n: &f64| n.is_finite())
}

/// Returns `true` if `text` opens like a number literal.
///
/// That is an optional sign followed by a digit, or by a dot and a digit
/// (`[+-]?(\d|\.\d)`). Such text is never a name, even when the rest of
/// it fails to parse.
///
/// # Example
/// ```
/// use plotatom::util::float::has_numeric_prefix;
///
/// assert!(has_numeric_prefix("3abc"));
/// assert!(has_numeric_prefix("-3abc"));
/// assert!(has_numeric_prefix("+5q"));
/// assert!(has_numeric_prefix(".5x"));
/// assert!(has_numeric_prefix("-.5"));
/// assert!(!has_numeric_prefix("-"));
/// assert!(!has_numeric_prefix("-x"));
/// assert!(!has_numeric_prefix(".x"));
/// assert!(!has_numeric_prefix("inf"));
/// ```
#[must_use]
pub fn has_numeric_prefix(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let digits = unsigned.strip_prefix('.').unwrap_or(unsigned);

    digits.starts_with(|c: char| c.is_ascii_digit())
}

/// Displays a real number compactly.
///
/// Finite values of magnitude `1e16` and above, or below `1e-4`, use
/// exponent notation. Everything else uses the shortest decimal form that
/// round-trips.
///
/// # Example
/// ```
/// use plotatom::util::float::Real;
///
/// assert_eq!(Real(42.0).to_string(), "42");
/// assert_eq!(Real(-0.25).to_string(), "-0.25");
/// assert_eq!(Real(1e300).to_string(), "1e300");
/// assert_eq!(Real(-1.5e-7).to_string(), "-1.5e-7");
/// assert_eq!(Real(0.0).to_string(), "0");
/// assert_eq!(Real(f64::NAN).to_string(), "NaN");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Real(pub f64);

impl std::fmt::Display for Real {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let magnitude = self.0.abs();

        if self.0.is_finite() && magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
            write!(f, "{:e}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
