//! # Greatest common divisor
//!
//! Shared by the normalizing constructor and the comparison of fractions.
use num_traits::{PrimInt, Signed};

/// Greatest common divisor, using the Euclidean algorithm.
///
/// The result is never negative: `gcd(a, 0)` is `|a|`, such that dividing both components of a
/// fraction by it never flips a sign. Note that `gcd(0, 0)` is `0`, callers dividing by the result
/// have to handle that case themselves.
pub fn gcd<I: PrimInt + Signed>(mut a: I, mut b: I) -> I {
    while !b.is_zero() {
        let remainder = a % b;
        a = b;
        b = remainder;
    }

    a.abs()
}
