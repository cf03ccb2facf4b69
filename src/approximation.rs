//! # Approximating floats
//!
//! Convert a float into a simple fraction with a bounded denominator, using the continued
//! fraction expansion of the float.
//!
//! The float is first rounded to a fixed number of decimals. The expansion is done on that scaled
//! integer, so it can't recover any precision beyond those decimals. All intermediate values are
//! `i128` regardless of the target integer type, such that the square of the scale never
//! overflows.
use num_traits::{NumCast, PrimInt, Signed, ToPrimitive};
use tracing::{debug, trace};

use crate::error::FractionError;
use crate::fraction::Fraction;

/// The float is rounded to a multiple of one over this value before it is expanded.
pub const PRECISION_SCALE: i64 = 100_000;

/// Approximate a float by the last convergent of its continued fraction that respects a
/// denominator bound.
///
/// This function is total. Non-finite input and values of which the integer part doesn't fit in
/// `I` map onto the sentinel values: NaN becomes `(0, 0)`, and the others the signed `(±1, 0)`.
///
/// # Arguments
///
/// * `value`: Float to approximate.
/// * `max_denominator`: Largest denominator allowed in the result. Values below one are treated as
/// one, such that only the integer part is returned.
///
/// # Return value
///
/// A fraction of which the denominator does not exceed `max_denominator`.
pub fn approximate<I: PrimInt + Signed>(value: f64, max_denominator: I) -> Fraction<I> {
    if value.is_nan() {
        return Fraction::new(I::zero(), I::zero());
    }
    let Some(scaled) = (value * PRECISION_SCALE as f64).round().to_i128() else {
        return out_of_range(value);
    };
    let max_denominator = max_denominator.to_i128().map_or(1, |bound| bound.max(1)) as u128;

    let scale: i128 = PRECISION_SCALE.into();
    let whole = scaled / scale;
    let Some(mut best) = to_fraction((whole, 1)) else {
        return out_of_range(value);
    };

    // The two most recent convergents, starting with the conventional `1 / 0` before the first
    let (mut previous, mut current) = ((1, 0), (whole, 1));
    let (mut residual, mut term) = (scaled, whole);
    loop {
        let remainder = residual - term * scale;
        if remainder == 0 {
            debug!(numerator = %current.0, denominator = %current.1, "expansion terminated");
            return best;
        }

        residual = scale * scale / remainder;
        term = residual / scale;
        if term == 0 {
            debug!(numerator = %current.0, denominator = %current.1, "expansion terminated");
            return best;
        }

        let Some(next) = next_convergent(term, current, previous) else {
            debug!(%term, "convergent overflows");
            return best;
        };
        if next.1.unsigned_abs() > max_denominator {
            debug!(denominator = %next.1, %max_denominator, "denominator bound reached");
            return best;
        }
        let Some(fraction) = to_fraction(next) else {
            debug!(numerator = %next.0, denominator = %next.1, "convergent doesn't fit");
            return best;
        };
        trace!(%term, numerator = %next.0, denominator = %next.1, "convergent");

        previous = current;
        current = next;
        best = fraction;
    }
}

/// Approximate a float, rejecting input that `approximate` would map onto a sentinel value.
///
/// # Errors
///
/// * `NotFinite` if `value` is NaN or infinite.
/// * `InvalidBound` if `max_denominator` is smaller than one.
/// * `OutOfRange` if the integer part of `value` doesn't fit in `I`.
pub fn try_approximate<I: PrimInt + Signed>(
    value: f64,
    max_denominator: I,
) -> Result<Fraction<I>, FractionError> {
    if !value.is_finite() {
        return Err(FractionError::NotFinite(value));
    }
    if max_denominator < I::one() {
        return Err(FractionError::InvalidBound);
    }

    let result = approximate(value, max_denominator);
    if result.is_finite() {
        Ok(result)
    } else {
        Err(FractionError::OutOfRange(value))
    }
}

/// Recurrence of the convergents: `h_k = a_k h_{k - 1} + h_{k - 2}`, same for the denominator.
fn next_convergent(term: i128, current: (i128, i128), previous: (i128, i128)) -> Option<(i128, i128)> {
    let numerator = term.checked_mul(current.0)?.checked_add(previous.0)?;
    let denominator = term.checked_mul(current.1)?.checked_add(previous.1)?;

    Some((numerator, denominator))
}

fn to_fraction<I: PrimInt + Signed>((numerator, denominator): (i128, i128)) -> Option<Fraction<I>> {
    let numerator: I = NumCast::from(numerator)?;
    let denominator: I = NumCast::from(denominator)?;

    Some(Fraction::new(numerator, denominator))
}

fn out_of_range<I: PrimInt + Signed>(value: f64) -> Fraction<I> {
    let sign = if value.is_sign_negative() { -I::one() } else { I::one() };

    Fraction::new(sign, I::zero())
}
