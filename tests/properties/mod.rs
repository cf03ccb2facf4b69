//! Properties over randomly generated fractions.
use std::cmp::Ordering;

use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use simple_fraction::{F64, F128, Fraction64, Fraction128, gcd};

const SEED: u64 = 0x5eed;

fn random_fractions(rng: &mut StdRng, count: usize, bound: i64) -> Vec<Fraction64> {
    (0..count)
        .map(|_| Fraction64::new(rng.gen_range(-bound..=bound), rng.gen_range(-bound..=bound)))
        .collect()
}

/// Same value, with the wider type to compute a reference with.
fn widen(value: Fraction64) -> Fraction128 {
    let (numerator, denominator) = value.into_parts();
    F128!(i128::from(numerator), i128::from(denominator))
}

#[test]
fn normalization() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..10_000 {
        let numerator = rng.gen_range(-1_000_000..=1_000_000);
        let denominator = rng.gen_range(-1_000_000..=1_000_000);
        let value = F64!(numerator, denominator);

        assert!(value.denominator() >= 0);
        if denominator != 0 {
            assert_eq!(value, F64!(-numerator, -denominator));
        }
        if denominator != 0 && value.numerator() != 0 {
            assert_eq!(gcd(value.numerator(), value.denominator()), 1);
            // Same value as the input
            assert_eq!(value.numerator() * denominator, numerator * value.denominator());
        }
    }
}

#[test]
fn arithmetic_matches_wide_reference() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let values = random_fractions(&mut rng, 200, 10_000);

    for (&a, &b) in values.iter().tuple_windows() {
        let (wide_a, wide_b) = (widen(a), widen(b));

        assert_eq!(widen(a + b), wide_a + wide_b);
        assert_eq!(widen(a - b), wide_a - wide_b);
        assert_eq!(widen(a * b), wide_a * wide_b);
        assert_eq!(widen(a / b), wide_a / wide_b);

        assert_eq!(a + b, b + a);
        assert_eq!(a * b, b * a);
        assert_eq!(a.checked_add(b), Some(a + b));
    }
}

#[test]
fn ordering_antisymmetric() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let values = random_fractions(&mut rng, 200, 50);

    for (&a, &b) in values.iter().tuple_combinations() {
        assert_eq!(a.compare(b), b.compare(a).reverse());
        assert_eq!(a.compare(b) == Ordering::Equal, a == b);
    }
}

#[test]
fn ordering_transitive() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut values = random_fractions(&mut rng, 60, 20);
    values.extend([F64!(0, 0), F64!(1, 0), F64!(-1, 0), F64!(0)]);

    for (a, b, c) in values.iter().tuple_combinations() {
        for (x, y, z) in [(a, b, c), (a, c, b), (b, a, c), (b, c, a), (c, a, b), (c, b, a)] {
            if x <= y && y <= z {
                assert!(x <= z, "{:?} <= {:?} <= {:?}", x, y, z);
            }
        }
    }
}

#[test]
fn ordering_matches_floats() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let values = random_fractions(&mut rng, 300, 1_000)
        .into_iter()
        .filter(|value| value.is_finite())
        .collect::<Vec<_>>();

    for (&a, &b) in values.iter().tuple_windows() {
        let (left, right) = (a.to_float(), b.to_float());
        if left != right {
            assert_eq!(Some(a.cmp(&b)), left.partial_cmp(&right));
        }
    }
}

#[test]
fn mixed_numbers_reconstruct() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for value in random_fractions(&mut rng, 1_000, 100_000) {
        if !value.is_finite() {
            continue;
        }

        let (whole, remainder) = value.to_mixed_numbers();
        assert_eq!(Fraction64::from_int(whole) + remainder, value);
        assert!(remainder.denominator() == 1 || remainder.denominator() == value.denominator());
    }
}
