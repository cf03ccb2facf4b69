/// Shorthand for creating a fraction of `i32` values.
#[macro_export]
macro_rules! F32 {
    ($value:expr) => {
        $crate::fraction::Fraction32::from_int($value)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::fraction::Fraction32::new($numerator, $denominator)
    };
}

/// Shorthand for creating a fraction of `i64` values.
#[macro_export]
macro_rules! F64 {
    ($value:expr) => {
        $crate::fraction::Fraction64::from_int($value)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::fraction::Fraction64::new($numerator, $denominator)
    };
}

/// Shorthand for creating a fraction of `i128` values.
#[macro_export]
macro_rules! F128 {
    ($value:expr) => {
        $crate::fraction::Fraction128::from_int($value)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::fraction::Fraction128::new($numerator, $denominator)
    };
}
