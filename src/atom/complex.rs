use std::fmt::Display;

use crate::util::float::{Real, approx_eq};

/// `0.0` as a complex number.
pub const ZERO: ComplexNumber = ComplexNumber::new(0.0, 0.0);

/// Represents a complex number with real and imaginary parts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

impl Display for ComplexNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.imaginary.is_sign_negative() && !self.imaginary.is_nan() {
            '-'
        } else {
            '+'
        };

        write!(f, "{}{sign}{}i", Real(self.real), Real(self.imaginary.abs()))
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Parameters
    /// - `real`: The real part.
    /// - `imaginary`: The imaginary part.
    ///
    /// # Returns
    /// The new `ComplexNumber`.
    ///
    /// # Example
    /// ```
    /// use plotatom::atom::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// assert_eq!(c.to_string(), "5-1i");
    /// assert_eq!(ComplexNumber::new(1.0, f64::NAN).to_string(), "1+NaNi");
    /// assert_eq!(ComplexNumber::new(0.5, 1e20).to_string(), "0.5+1e20i");
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Returns the `(real, imaginary)` pair.
    #[must_use]
    pub const fn parts(self) -> (f64, f64) {
        (self.real, self.imaginary)
    }
}

impl From<f64> for ComplexNumber {
    fn from(value: f64) -> Self {
        Self { real:      value,
               imaginary: 0.0, }
    }
}

impl From<(f64, f64)> for ComplexNumber {
    fn from((real, imaginary): (f64, f64)) -> Self {
        Self { real, imaginary }
    }
}

/// Both components must agree within machine epsilon.
///
/// # Example
/// ```
/// use plotatom::atom::complex::ComplexNumber;
/// let a = ComplexNumber::new(1.0, -2.0);
/// assert_eq!(a, ComplexNumber::new(1.0, -2.0));
/// assert_ne!(a, ComplexNumber::new(1.0, 2.0));
/// assert_ne!(ComplexNumber::new(f64::NAN, 0.0), ComplexNumber::new(f64::NAN, 0.0));
/// ```
impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.real, other.real) && approx_eq(self.imaginary, other.imaginary)
    }
}
