//! # Arithmetic
//!
//! All operations compute a raw numerator and denominator from the operands and pass them through
//! the normalizing constructor, which is the only place where values are reduced. Sentinel values
//! flow through the same formulas: dividing by zero gives `(±1, 0)` and e.g. `(1, 0) + (-1, 0)`
//! gives `(0, 0)`.
//!
//! The plain operations use the integer operators of `I` directly, and overflow as those do. The
//! `checked_*` variants return `None` instead.
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{PrimInt, Signed};

use crate::fraction::Fraction;

impl<I: PrimInt + Signed> Fraction<I> {
    /// Sum of two fractions.
    ///
    /// The operands are cross multiplied without scaling them down first.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        Self::new(
            self.numerator * other.denominator + other.numerator * self.denominator,
            self.denominator * other.denominator,
        )
    }

    /// Difference of two fractions.
    pub fn subtract(self, other: Self) -> Self {
        Self::new(
            self.numerator * other.denominator - other.numerator * self.denominator,
            self.denominator * other.denominator,
        )
    }

    /// Product of two fractions.
    ///
    /// There is no cross cancellation before multiplying, the product is reduced as a whole.
    pub fn multiply(self, other: Self) -> Self {
        Self::new(
            self.numerator * other.numerator,
            self.denominator * other.denominator,
        )
    }

    /// Quotient of two fractions.
    ///
    /// Dividing by a zero numerator gives a zero denominator sentinel.
    pub fn divide(self, by: Self) -> Self {
        Self::new(
            self.numerator * by.denominator,
            self.denominator * by.numerator,
        )
    }

    /// Sum, or `None` if an intermediate value overflows.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        let left = self.numerator.checked_mul(&other.denominator)?;
        let right = other.numerator.checked_mul(&self.denominator)?;
        let denominator = self.denominator.checked_mul(&other.denominator)?;

        Self::checked_new(left.checked_add(&right)?, denominator)
    }

    /// Difference, or `None` if an intermediate value overflows.
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        let left = self.numerator.checked_mul(&other.denominator)?;
        let right = other.numerator.checked_mul(&self.denominator)?;
        let denominator = self.denominator.checked_mul(&other.denominator)?;

        Self::checked_new(left.checked_sub(&right)?, denominator)
    }

    /// Product, or `None` if an intermediate value overflows.
    pub fn checked_mul(self, other: Self) -> Option<Self> {
        Self::checked_new(
            self.numerator.checked_mul(&other.numerator)?,
            self.denominator.checked_mul(&other.denominator)?,
        )
    }

    /// Quotient, or `None` if an intermediate value overflows.
    ///
    /// Note that a zero divisor is not an overflow, it results in a sentinel value like `divide`.
    pub fn checked_div(self, by: Self) -> Option<Self> {
        Self::checked_new(
            self.numerator.checked_mul(&by.denominator)?,
            self.denominator.checked_mul(&by.numerator)?,
        )
    }

    /// Normalize, unless moving the sign or taking the absolute value in the gcd overflows.
    fn checked_new(numerator: I, denominator: I) -> Option<Self> {
        let min = I::min_value();
        let negation_overflows = denominator < I::zero() && (numerator == min || denominator == min);
        let gcd_overflows = denominator.is_zero() && numerator == min;

        if negation_overflows || gcd_overflows {
            None
        } else {
            Some(Self::new(numerator, denominator))
        }
    }
}

/// Implement an operator trait and its assigning variant for all combinations of owned and
/// borrowed operands, by delegating to an inherent method.
macro_rules! impl_operator {
    ($operator:ident, $operator_method:ident, $assign:ident, $assign_method:ident, $inherent:ident) => {
        impl<I: PrimInt + Signed> $operator for Fraction<I> {
            type Output = Self;

            fn $operator_method(self, rhs: Self) -> Self::Output {
                Fraction::$inherent(self, rhs)
            }
        }

        impl<'a, I: PrimInt + Signed> $operator<&'a Fraction<I>> for Fraction<I> {
            type Output = Self;

            fn $operator_method(self, rhs: &'a Fraction<I>) -> Self::Output {
                Fraction::$inherent(self, *rhs)
            }
        }

        impl<I: PrimInt + Signed> $operator<Fraction<I>> for &Fraction<I> {
            type Output = Fraction<I>;

            fn $operator_method(self, rhs: Fraction<I>) -> Self::Output {
                Fraction::$inherent(*self, rhs)
            }
        }

        impl<I: PrimInt + Signed> $operator for &Fraction<I> {
            type Output = Fraction<I>;

            fn $operator_method(self, rhs: Self) -> Self::Output {
                Fraction::$inherent(*self, *rhs)
            }
        }

        impl<I: PrimInt + Signed> $assign for Fraction<I> {
            fn $assign_method(&mut self, rhs: Self) {
                *self = Fraction::$inherent(*self, rhs);
            }
        }

        impl<'a, I: PrimInt + Signed> $assign<&'a Fraction<I>> for Fraction<I> {
            fn $assign_method(&mut self, rhs: &'a Self) {
                *self = Fraction::$inherent(*self, *rhs);
            }
        }
    };
}

impl_operator!(Add, add, AddAssign, add_assign, add);
impl_operator!(Sub, sub, SubAssign, sub_assign, subtract);
impl_operator!(Mul, mul, MulAssign, mul_assign, multiply);
impl_operator!(Div, div, DivAssign, div_assign, divide);

impl<I: PrimInt + Signed> Neg for Fraction<I> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl<I: PrimInt + Signed> Neg for &Fraction<I> {
    type Output = Fraction<I>;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl<I: PrimInt + Signed> Sum for Fraction<I> {
    fn sum<It: Iterator<Item=Self>>(iter: It) -> Self {
        iter.fold(Self::from_int(I::zero()), Self::add)
    }
}

impl<'a, I: PrimInt + Signed> Sum<&'a Fraction<I>> for Fraction<I> {
    fn sum<It: Iterator<Item=&'a Self>>(iter: It) -> Self {
        iter.copied().sum()
    }
}

impl<I: PrimInt + Signed> Product for Fraction<I> {
    fn product<It: Iterator<Item=Self>>(iter: It) -> Self {
        iter.fold(Self::from_int(I::one()), Self::multiply)
    }
}

impl<'a, I: PrimInt + Signed> Product<&'a Fraction<I>> for Fraction<I> {
    fn product<It: Iterator<Item=&'a Self>>(iter: It) -> Self {
        iter.copied().product()
    }
}
