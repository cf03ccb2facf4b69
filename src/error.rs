//! # Error reporting for the strict constructors
//!
//! All arithmetic on fractions is total. Only the APIs that opt out of the zero denominator
//! sentinel values, or that validate their float input, report errors.
use std::error::Error;
use std::fmt;

/// A `FractionError` is created when a strict constructor rejects its input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractionError {
    /// A denominator of zero was provided.
    ///
    /// The lenient constructor would have produced a sentinel value instead.
    ZeroDenominator,
    /// The float to approximate is NaN or infinite.
    ///
    /// The contained value is the rejected input.
    NotFinite(f64),
    /// The integer part of the float to approximate doesn't fit the integer type.
    ///
    /// The contained value is the rejected input.
    OutOfRange(f64),
    /// The maximum denominator of an approximation should be at least one.
    InvalidBound,
}

impl fmt::Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FractionError::ZeroDenominator => f.write_str("denominator is zero"),
            FractionError::NotFinite(value) => write!(f, "can't approximate non-finite value {}", value),
            FractionError::OutOfRange(value) => write!(f, "value {} is out of range", value),
            FractionError::InvalidBound => f.write_str("maximum denominator should be at least one"),
        }
    }
}

impl Error for FractionError {
}
