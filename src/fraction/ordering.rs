//! # Ordering
//!
//! A total order over all fractions, including the zero denominator sentinels: `(-1, 0)` is below
//! all other values and `(1, 0)` above them. The `(0, 0)` sentinel is placed directly below zero.
use std::cmp::Ordering;

use num_traits::{PrimInt, Signed};

use crate::fraction::Fraction;
use crate::gcd::gcd;

impl<I: PrimInt + Signed> Fraction<I> {
    /// Compare the values of two fractions.
    ///
    /// Values of a different sign are ordered without multiplying. Otherwise, the numerators are
    /// divided by their gcd before cross multiplying, which is exact because that gcd divides
    /// both.
    pub fn compare(self, with: Self) -> Ordering {
        if self == with {
            return Ordering::Equal;
        }

        let zero = I::zero();
        if self.numerator >= zero && with.numerator < zero {
            return Ordering::Greater;
        }
        if with.numerator >= zero && self.numerator < zero {
            return Ordering::Less;
        }

        let divisor = gcd(self.numerator, with.numerator);
        // Both numerators are zero
        let divisor = if divisor.is_zero() { I::one() } else { divisor };

        let left = with.denominator * (self.numerator / divisor);
        let right = self.denominator * (with.numerator / divisor);

        // Cross multiplication only ties for distinct values when one of them is `(0, 0)`
        left.cmp(&right)
            .then_with(|| self.denominator.cmp(&with.denominator))
            .then_with(|| self.numerator.cmp(&with.numerator))
    }
}

impl<I: PrimInt + Signed> Ord for Fraction<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

impl<I: PrimInt + Signed> PartialOrd for Fraction<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
