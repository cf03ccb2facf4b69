//! # Simple fractions
//!
//! Exact arithmetic on fractions with a fixed-width integer numerator and denominator, for
//! computations where floating point rounding can't be tolerated.
//!
//! Every value is created through the normalizing constructor `Fraction::new`, which moves the
//! sign onto the numerator and reduces to lowest terms. A zero denominator is not an error: it
//! produces one of the sentinel values `(1, 0)`, `(-1, 0)` or `(0, 0)`.
//!
//! Operands are not widened, so large products overflow following the integer semantics of the
//! build (panic in debug, wrap in release). The `checked_*` methods detect this instead.
#![warn(missing_docs)]

pub mod approximation;
pub mod error;
pub mod fraction;
pub mod gcd;

pub use approximation::{PRECISION_SCALE, approximate, try_approximate};
pub use error::FractionError;
pub use fraction::{Fraction, Fraction128, Fraction32, Fraction64};
pub use gcd::gcd;
