//! # Interoperability with `num_traits`
//!
//! Identities, conversions from and to primitives and the checked operations.
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, FromPrimitive, Inv, NumCast, One, PrimInt, Signed};
use num_traits::{ToPrimitive, Zero};

use crate::approximation::{PRECISION_SCALE, approximate};
use crate::fraction::Fraction;

mod identities {
    use super::*;

    impl<I: PrimInt + Signed> Zero for Fraction<I> {
        fn zero() -> Self {
            Self::from_int(I::zero())
        }

        fn is_zero(&self) -> bool {
            self.numerator.is_zero() && self.denominator.is_one()
        }
    }

    impl<I: PrimInt + Signed> One for Fraction<I> {
        fn one() -> Self {
            Self::from_int(I::one())
        }

        fn is_one(&self) -> bool {
            self.numerator.is_one() && self.denominator.is_one()
        }
    }

    impl<I: PrimInt + Signed> Inv for Fraction<I> {
        type Output = Self;

        fn inv(self) -> Self::Output {
            self.reciprocal()
        }
    }
}

mod conversion {
    use super::*;

    impl<I: PrimInt + Signed> ToPrimitive for Fraction<I> {
        /// The whole part, truncated towards zero. `None` for the zero denominator sentinels.
        fn to_i64(&self) -> Option<i64> {
            if self.is_finite() {
                (self.numerator / self.denominator).to_i64()
            } else {
                None
            }
        }

        fn to_u64(&self) -> Option<u64> {
            if self.is_finite() {
                (self.numerator / self.denominator).to_u64()
            } else {
                None
            }
        }

        fn to_f64(&self) -> Option<f64> {
            Some(self.to_float())
        }
    }

    impl<I: PrimInt + Signed> FromPrimitive for Fraction<I> {
        fn from_i64(n: i64) -> Option<Self> {
            <I as NumCast>::from(n).map(Self::from_int)
        }

        fn from_u64(n: u64) -> Option<Self> {
            <I as NumCast>::from(n).map(Self::from_int)
        }

        /// Approximation with the largest denominator that the precision of the approximation can
        /// produce. `None` for non-finite input or when the value doesn't fit.
        fn from_f64(n: f64) -> Option<Self> {
            if !n.is_finite() {
                return None;
            }

            let max_denominator = <I as NumCast>::from(PRECISION_SCALE).unwrap_or_else(I::max_value);
            Some(approximate(n, max_denominator)).filter(|result| result.is_finite())
        }
    }
}

mod checked {
    use super::*;

    impl<I: PrimInt + Signed> CheckedAdd for Fraction<I> {
        fn checked_add(&self, v: &Self) -> Option<Self> {
            Fraction::checked_add(*self, *v)
        }
    }

    impl<I: PrimInt + Signed> CheckedSub for Fraction<I> {
        fn checked_sub(&self, v: &Self) -> Option<Self> {
            Fraction::checked_sub(*self, *v)
        }
    }

    impl<I: PrimInt + Signed> CheckedMul for Fraction<I> {
        fn checked_mul(&self, v: &Self) -> Option<Self> {
            Fraction::checked_mul(*self, *v)
        }
    }

    impl<I: PrimInt + Signed> CheckedDiv for Fraction<I> {
        fn checked_div(&self, v: &Self) -> Option<Self> {
            Fraction::checked_div(*self, *v)
        }
    }
}
