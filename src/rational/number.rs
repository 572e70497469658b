//! # The rational number value type
//!
//! Values are normalized while they are constructed and are never modified afterwards, so every
//! observable value is in canonical form.
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{overflow, InvalidArgument, Operation, RationalError};
use crate::traits::{Int, Rational};

/// An exact rational number backed by a fixed-width signed integer.
///
/// The denominator is always positive and shares no factor with the numerator, so the sign is
/// carried by the numerator alone. Zero is represented as `0/1` only.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct RationalNumber<I> {
    numerator: I,
    denominator: I,
}

/// Rational number backed by `i32`.
pub type Rational32 = RationalNumber<i32>;
/// Rational number backed by `i64`.
pub type Rational64 = RationalNumber<i64>;
/// Rational number backed by `i128`.
pub type Rational128 = RationalNumber<i128>;

impl<I: Int> RationalNumber<I> {
    /// Create a new rational number in lowest terms.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Any integer.
    /// * `denominator`: Any nonzero integer; a negative sign moves to the numerator.
    ///
    /// # Errors
    ///
    /// `InvalidArgument::ZeroDenominator` when `denominator` is zero, and `Overflow` when the
    /// reduced value can't be represented with a positive denominator (e.g. `i32::MIN / -1`).
    pub fn new(numerator: I, denominator: I) -> Result<Self, RationalError> {
        Self::new_during(numerator, denominator, Operation::Construction)
    }

    /// Like `new`, but errors are attributed to `operation`.
    pub(super) fn new_during(
        numerator: I,
        denominator: I,
        operation: Operation,
    ) -> Result<Self, RationalError> {
        if denominator.is_zero() {
            return Err(InvalidArgument::ZeroDenominator.during(operation));
        }

        let (numerator, denominator) = normalize(numerator, denominator, operation)?;
        Ok(Self { numerator, denominator })
    }

    /// The integer `value` as a rational number with denominator one.
    pub fn from_integer(value: I) -> Self {
        Self { numerator: value, denominator: I::one() }
    }

    /// The additive identity, `0/1`.
    pub fn zero() -> Self {
        Self::from_integer(I::zero())
    }

    /// The multiplicative identity, `1/1`.
    pub fn one() -> Self {
        Self::from_integer(I::one())
    }

    /// The numerator, which carries the sign.
    pub fn numerator(&self) -> I {
        self.numerator
    }

    /// The denominator, which is always positive.
    pub fn denominator(&self) -> I {
        self.denominator
    }

    /// Whether this number is zero.
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Whether this number is less than zero.
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Whether this number is greater than zero.
    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    /// Whether the denominator is one.
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Nearest floating point value, if both terms convert.
    pub fn to_f64(&self) -> Option<f64> {
        Some(self.numerator.to_f64()? / self.denominator.to_f64()?)
    }

    /// Compare with a value of any type.
    ///
    /// Only a `RationalNumber` of the same backing type with the same terms is equal; anything
    /// else, including `None`, is not.
    pub fn equals(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<Self>().is_some_and(|other| other == self)
    }

    /// The square of the numerator minus the denominator, wrapping on overflow.
    ///
    /// Equal values have equal codes. Different values may share one.
    pub fn hash_code(&self) -> I {
        self.numerator.wrapping_mul(&self.numerator).wrapping_sub(&self.denominator)
    }
}

/// Divide out the greatest common divisor, then move the sign to the numerator.
///
/// Reducing first lets values like `i32::MIN / -2` through, which can't be negated as given.
fn normalize<I: Int>(
    numerator: I,
    denominator: I,
    operation: Operation,
) -> Result<(I, I), RationalError> {
    debug_assert!(!denominator.is_zero());

    // Dividing by a negative divisor of `-1` would overflow for `I::MIN`. A magnitude that can't be
    // negated is `2^(w-1)`, so both terms are `0` or `I::MIN` and the division is exact.
    let divisor = gcd(numerator, denominator);
    let divisor = if divisor.is_negative() {
        divisor.checked_neg().unwrap_or(divisor)
    } else {
        divisor
    };
    let (numerator, denominator) = (numerator / divisor, denominator / divisor);

    if denominator.is_negative() {
        match (numerator.checked_neg(), denominator.checked_neg()) {
            (Some(numerator), Some(denominator)) => Ok((numerator, denominator)),
            _ => Err(overflow(operation)),
        }
    } else {
        Ok((numerator, denominator))
    }
}

/// Euclid's algorithm on signed values.
///
/// The magnitude of the result is the greatest common divisor; its sign depends on the inputs.
/// With a zero `a`, the result is `b`.
fn gcd<I: Int>(mut a: I, mut b: I) -> I {
    while !b.is_zero() {
        // `I::MIN % -1` is the only remainder that doesn't fit, and it is zero.
        let remainder = a.checked_rem(&b).unwrap_or_else(I::zero);
        a = b;
        b = remainder;
    }

    a
}

/// Floored division by a positive divisor, such that the remainder is in `[0, divisor)`.
fn div_mod_floor<I: Int>(dividend: I, divisor: I) -> (I, I) {
    debug_assert!(divisor.is_positive());

    let (quotient, remainder) = (dividend / divisor, dividend % divisor);
    if remainder.is_negative() {
        (quotient - I::one(), remainder + divisor)
    } else {
        (quotient, remainder)
    }
}

impl<I: Int> Rational for RationalNumber<I> {
    type Int = I;

    fn numerator(&self) -> I {
        self.numerator
    }

    fn denominator(&self) -> I {
        self.denominator
    }
}

impl<I: Int> Default for RationalNumber<I> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<I: Int> From<I> for RationalNumber<I> {
    fn from(value: I) -> Self {
        Self::from_integer(value)
    }
}

impl<I: Int> fmt::Display for RationalNumber<I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl<I: Int> Hash for RationalNumber<I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_code().hash(state);
    }
}

impl<I: Int> Ord for RationalNumber<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }

        // Cross multiplication could overflow, so compare integer parts and then fractional parts.
        let (self_floor, self_remainder) = div_mod_floor(self.numerator, self.denominator);
        let (other_floor, other_remainder) = div_mod_floor(other.numerator, other.denominator);

        self_floor.cmp(&other_floor).then_with(|| {
            match (self_remainder.is_zero(), other_remainder.is_zero()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => {
                    // Both reciprocals are canonical: gcd(d, n mod d) = gcd(d, n) = 1.
                    let self_reciprocal = Self {
                        numerator: self.denominator,
                        denominator: self_remainder,
                    };
                    let other_reciprocal = Self {
                        numerator: other.denominator,
                        denominator: other_remainder,
                    };
                    self_reciprocal.cmp(&other_reciprocal).reverse()
                }
            }
        })
    }
}

impl<I: Int> PartialOrd for RationalNumber<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
