//! # Integration tests
//!
//! All code written in this module could be written by an external user of the crate.
use std::collections::HashMap;

use approx::assert_abs_diff_eq;
use itertools::iproduct;

use rational_numbers::{ExpReal, InvalidArgument, Rational, Rational32, Rational64, RationalError};

fn r(numerator: i32, denominator: i32) -> Rational32 {
    Rational32::new(numerator, denominator).unwrap()
}

fn invalid(argument: InvalidArgument) -> RationalError {
    RationalError::InvalidArgument(argument)
}

#[test]
fn construction() {
    for n in -20..=20 {
        assert_eq!(Rational32::new(n, 0), Err(invalid(InvalidArgument::ZeroDenominator)));
    }
    for d in (-20..=20).filter(|&d| d != 0) {
        assert_eq!(r(0, d), r(0, 1));
    }
    for (n, d) in iproduct!(-20..=20, 1..=20) {
        assert_eq!(r(n, -d), r(-n, d));
    }
    assert_eq!(r(4, 6), r(2, 3));

    for (n, d) in iproduct!([i32::MIN, i32::MAX], [1, 3, 5, 7, 9, 11, 13, 15, 17]) {
        let x = r(n, d);
        assert_eq!((x.numerator(), x.denominator()), (n, d));
    }
    let x = r(i32::MIN + 1, i32::MAX);
    assert_eq!((x.numerator(), x.denominator()), (-1, 1));
}

#[test]
fn arithmetic() -> Result<(), RationalError> {
    let half = r(1, 2);
    let two_thirds = r(2, 3);

    assert_eq!(half.add(&two_thirds)?, r(7, 6));
    assert_eq!(half.add(&r(-1, 2))?, r(0, 1));
    assert_eq!(half.subtract(&two_thirds)?, r(-1, 6));
    assert_eq!(half.multiply(&two_thirds)?, r(1, 3));
    assert_eq!(half.multiply(&r(2, 1))?, r(1, 1));
    assert_eq!(half.divide(&two_thirds)?, r(3, 4));

    let total = [r(1, 2), r(1, 3), r(1, 6)]
        .iter()
        .try_fold(Rational32::zero(), |sum, x| &sum + x)?;
    assert_eq!(total, Rational32::one());

    Ok(())
}

#[test]
fn errors_are_reported_by_kind() {
    let x = r(2, 3);
    assert_eq!(x.divide(&r(0, 1)), Err(RationalError::DivisionByZero));
    assert_eq!(&x + None::<&Rational32>, Err(invalid(InvalidArgument::MissingOperand)));
    assert_eq!(&x / None::<&Rational32>, Err(invalid(InvalidArgument::MissingOperand)));
    assert_eq!(r(0, 1).exp_rational(-9), Err(invalid(InvalidArgument::ZeroToNegativePower)));
    assert_eq!(0_i32.exp_real(&r(-1, 3)), Err(invalid(InvalidArgument::ZeroBaseNegativeExponent)));
    assert!(matches!(r(i32::MAX, 1) * r(2, 1), Err(RationalError::Overflow(_))));
}

#[test]
fn exponentiation() -> Result<(), RationalError> {
    assert_eq!(r(1, 2).exp_rational(3)?, r(1, 8));
    assert_eq!(r(1, 1).exp_rational(-5)?, r(1, 1));
    assert_eq!(r(0, 1).exp_rational(0)?, r(1, 1));
    assert_eq!(r(2, 3).exp_rational(-2)?, r(9, 4));

    assert_abs_diff_eq!(8_i32.exp_real(&r(4, 3))?, 16_f64, epsilon = 1e-7);
    assert_abs_diff_eq!(0_i32.exp_real(&r(0, 1))?, 1_f64, epsilon = 1e-7);
    assert_abs_diff_eq!(27_u8.exp_real(&r(-1, 3))?, 1_f64 / 3_f64, epsilon = 1e-7);

    Ok(())
}

#[test]
fn equality_and_hashing() {
    let x = r(1, 2);
    assert_eq!(x, x);
    assert!(x.equals(&r(2, 4)));
    assert!(!x.equals(&"not a rational"));
    assert!(!x.equals(&None::<Rational32>));
    assert_eq!(r(1, 2).hash_code(), r(1, 2).hash_code());

    let mut counts = HashMap::new();
    for (n, d) in iproduct!(1..=6, 1..=6) {
        *counts.entry(r(n, d)).or_insert(0) += 1;
    }
    assert_eq!(counts[&r(1, 1)], 6);
    assert_eq!(counts[&r(1, 2)], 3);
}

#[test]
fn ordering_and_rendering() {
    let mut values = vec![r(3, 4), r(-1, 2), r(2, 3), r(0, 5)];
    values.sort();
    let rendered = values.iter().map(ToString::to_string).collect::<Vec<_>>();
    assert_eq!(rendered, ["-1/2", "0/1", "2/3", "3/4"]);
    assert_eq!(values.iter().max(), Some(&r(3, 4)));
}

#[test]
fn generic_consumers() {
    fn mean<R: Rational<Int = i64>>(values: &[R]) -> Result<Rational64, RationalError> {
        let mut sum = Rational64::zero();
        for value in values {
            sum = sum.add(value)?;
        }
        sum.divide(&Rational64::from(values.len() as i64))
    }

    let values = [Rational64::new(1, 2).unwrap(), Rational64::new(1, 3).unwrap()];
    assert_eq!(mean(&values), Rational64::new(5, 12));
}
