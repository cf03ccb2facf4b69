//! # Fractions
//!
//! A numerator and a denominator of the same fixed-width signed integer type. The only way to
//! create a value is through a normalizing constructor, so every value that can be observed is in
//! lowest terms and has a non-negative denominator.
use num_traits::{PrimInt, Signed};

use crate::error::FractionError;
use crate::gcd::gcd;

mod macros;
mod ops;
mod ordering;
mod primitive;

/// Fraction of two `i32` values.
pub type Fraction32 = Fraction<i32>;
/// Fraction of two `i64` values.
pub type Fraction64 = Fraction<i64>;
/// Fraction of two `i128` values.
pub type Fraction128 = Fraction<i128>;

/// An immutable simple fraction `numerator / denominator`.
///
/// Equality is structural, which coincides with equality of value because of the normalization.
///
/// A zero denominator is allowed. Such values are sentinels: `(1, 0)` and `(-1, 0)` behave like
/// signed infinities, `(0, 0)` is the result of e.g. multiplying zero by an infinity.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Fraction<I = i64> {
    numerator: I,
    denominator: I,
}

impl<I: PrimInt + Signed> Fraction<I> {
    /// Create a new fraction in lowest terms.
    ///
    /// This function is total. A negative denominator moves its sign to the numerator, and a zero
    /// denominator results in a sentinel value.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any value.
    /// * `denominator`: Any value, including zero.
    ///
    /// # Return value
    ///
    /// The normalized fraction. For a zero denominator, this is `(sign(numerator), 0)`.
    pub fn new(numerator: I, denominator: I) -> Self {
        let (numerator, denominator) = if denominator < I::zero() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };

        let divisor = gcd(numerator, denominator);
        if divisor.is_zero() {
            // Both are zero
            Self { numerator, denominator }
        } else {
            Self {
                numerator: numerator / divisor,
                denominator: denominator / divisor,
            }
        }
    }

    /// Create a new fraction, rejecting a zero denominator.
    ///
    /// Apart from the zero denominator, this is the same as `Fraction::new`.
    pub fn try_new(numerator: I, denominator: I) -> Result<Self, FractionError> {
        if denominator.is_zero() {
            Err(FractionError::ZeroDenominator)
        } else {
            Ok(Self::new(numerator, denominator))
        }
    }

    /// Embed an integer, which is always in lowest terms.
    pub fn from_int(value: I) -> Self {
        Self {
            numerator: value,
            denominator: I::one(),
        }
    }

    /// Numerator, carries the sign of the value.
    pub fn numerator(self) -> I {
        self.numerator
    }

    /// Denominator, never negative.
    pub fn denominator(self) -> I {
        self.denominator
    }

    /// Split into `(numerator, denominator)`.
    pub fn into_parts(self) -> (I, I) {
        (self.numerator, self.denominator)
    }

    /// Whether this value is not one of the zero denominator sentinels.
    pub fn is_finite(self) -> bool {
        !self.denominator.is_zero()
    }

    /// Whether this value is a whole number.
    pub fn is_integer(self) -> bool {
        self.denominator.is_one()
    }

    /// Absolute value.
    pub fn abs(self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator,
        }
    }

    /// Sign of the value as `-1`, `0` or `1`.
    ///
    /// The signed sentinels have the sign of their numerator, `(0, 0)` has sign zero.
    pub fn signum(self) -> Self {
        Self::from_int(self.numerator.signum())
    }

    /// Multiplicative inverse.
    ///
    /// The inverse of zero is the positive sentinel `(1, 0)`, and the inverse of a signed sentinel
    /// is zero.
    pub fn reciprocal(self) -> Self {
        Self::new(self.denominator, self.numerator)
    }

    /// Convert to the nearest float.
    ///
    /// # Return value
    ///
    /// `numerator / denominator`, or `0.0` for all values with a zero denominator.
    pub fn to_float(self) -> f64 {
        match (self.numerator.to_f64(), self.denominator.to_f64()) {
            (Some(numerator), Some(denominator)) if denominator != 0f64 => numerator / denominator,
            _ => 0f64,
        }
    }

    /// Split into a whole part and a proper fraction.
    ///
    /// Division truncates towards zero, so the fractional part has the sign of this value. The two
    /// parts add up to the original value.
    ///
    /// # Return value
    ///
    /// `(whole, remainder)`. For the zero denominator sentinels, the whole part is zero and the
    /// remainder is the sentinel itself, so the parts still add up to the sentinel.
    pub fn to_mixed_numbers(self) -> (I, Self) {
        if self.denominator.is_zero() {
            return (I::zero(), self);
        }

        (
            self.numerator / self.denominator,
            Self::new(self.numerator % self.denominator, self.denominator),
        )
    }
}

impl<I: PrimInt + Signed> Default for Fraction<I> {
    fn default() -> Self {
        Self::from_int(I::zero())
    }
}

impl<I: PrimInt + Signed> From<I> for Fraction<I> {
    fn from(value: I) -> Self {
        Self::from_int(value)
    }
}

impl<I> From<Fraction<I>> for (I, I) {
    fn from(value: Fraction<I>) -> Self {
        (value.numerator, value.denominator)
    }
}
