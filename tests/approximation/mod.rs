//! Approximating floats through the public interface.
use approx::assert_abs_diff_eq;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use simple_fraction::{F64, FractionError, PRECISION_SCALE, approximate, try_approximate};

#[test]
fn known_values() {
    assert_eq!(approximate(1.5, 10i64), F64!(3, 2));
    assert_eq!(approximate(3.1415926, 10i64), F64!(22, 7));
    assert_eq!(approximate(3.1415926, 150i64), F64!(355, 113));
    assert_eq!(approximate(3.0, 1000i64), F64!(3, 1));
}

#[test]
fn ratios() {
    // Equal temperament fifth and a perfect fifth
    assert_eq!(approximate(1.4983, 10i64), F64!(3, 2));
    assert_eq!(approximate(2f64.sqrt(), 100i64), F64!(99, 70));
}

#[test]
fn bounded() {
    let mut rng = StdRng::seed_from_u64(0xb0);
    for _ in 0..5_000 {
        let value = rng.gen_range(-1_000f64..1_000f64);
        let limit = rng.gen_range(1..=10_000i64);

        let result = approximate(value, limit);
        assert!(result.denominator() >= 1);
        assert!(result.denominator() <= limit);
        // The integer part is always allowed
        assert!((result.to_float() - value).abs() < 1f64 + 1e-5);
    }
}

#[test]
fn close_with_enough_room() {
    let mut rng = StdRng::seed_from_u64(0xc1);
    for _ in 0..1_000 {
        let value = rng.gen_range(-100f64..100f64);
        let result = approximate(value, PRECISION_SCALE);

        assert_abs_diff_eq!(result.to_float(), value, epsilon = 1e-4);
    }
}

#[test]
fn strict() {
    assert_eq!(try_approximate(0.25, 4i64), Ok(F64!(1, 4)));
    assert_eq!(try_approximate(0.25, 0i64), Err(FractionError::InvalidBound));
    assert_eq!(try_approximate(f64::NEG_INFINITY, 4i64), Err(FractionError::NotFinite(f64::NEG_INFINITY)));
}
