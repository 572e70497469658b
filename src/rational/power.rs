//! # Exponentiation
//!
//! Raising a rational number to an integer power stays exact. Raising a real number to a rational
//! power leaves the rationals and is delegated to the floating point power function.
use num_traits::checked_pow;

use crate::error::{overflow, InvalidArgument, Operation, RationalError};
use crate::rational::RationalNumber;
use crate::traits::Int;

impl<I: Int> RationalNumber<I> {
    /// Raise this number to an integer power.
    ///
    /// Any number, zero included, raised to the power zero is one. A negative power raises the
    /// reciprocal.
    ///
    /// # Errors
    ///
    /// `InvalidArgument::ZeroToNegativePower` when raising zero to a negative power, and
    /// `Overflow` when a term of the result doesn't fit the backing type.
    pub fn exp_rational(&self, power: i32) -> Result<Self, RationalError> {
        if power == 0 {
            return Ok(Self::one());
        }

        let (numerator, denominator) = if power > 0 {
            (self.numerator(), self.denominator())
        } else if self.is_zero() {
            return Err(InvalidArgument::ZeroToNegativePower.during(Operation::ExpRational));
        } else {
            (self.denominator(), self.numerator())
        };

        let exponent = power.unsigned_abs() as usize;
        let raise = |value: I| checked_pow(value, exponent)
            .ok_or_else(|| overflow(Operation::ExpRational));
        Self::new_during(raise(numerator)?, raise(denominator)?, Operation::ExpRational)
    }

    /// Raise `base` to the power of this number.
    ///
    /// The result is computed by `f64::powf`. A negative base with an exponent that isn't an
    /// integer gives NaN rather than an error.
    ///
    /// # Errors
    ///
    /// `InvalidArgument::ZeroBaseNegativeExponent` when `base` is zero and this number is
    /// negative.
    pub fn exp_real(&self, base: f64) -> Result<f64, RationalError> {
        if base == 0_f64 && self.is_negative() {
            return Err(InvalidArgument::ZeroBaseNegativeExponent.during(Operation::ExpReal));
        }

        let exponent = self.to_f64().ok_or_else(|| overflow(Operation::ExpReal))?;
        Ok(base.powf(exponent))
    }
}

/// Raise a plain number to a rational power.
///
/// Implemented for the primitive types that convert to `f64` without loss.
pub trait ExpReal {
    /// Raise `self` to the power `exponent`, see `RationalNumber::exp_real`.
    fn exp_real<I: Int>(self, exponent: &RationalNumber<I>) -> Result<f64, RationalError>;
}

macro_rules! impl_exp_real {
    ($($t:ty),*) => {
        $(
            impl ExpReal for $t {
                fn exp_real<I: Int>(self, exponent: &RationalNumber<I>) -> Result<f64, RationalError> {
                    exponent.exp_real(f64::from(self))
                }
            }
        )*
    };
}
impl_exp_real!(i8, i16, i32, u8, u16, u32, f32, f64);
