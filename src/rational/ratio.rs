//! # Interoperability with `num_rational`
//!
//! `Ratio` is an alternate representation of the same values. It takes part in arithmetic through
//! the `Rational` capability, and converts to and from `RationalNumber`.
use num_rational::Ratio;

use crate::error::RationalError;
use crate::rational::RationalNumber;
use crate::traits::{Int, Rational};

impl<I: Int> Rational for Ratio<I> {
    type Int = I;

    fn numerator(&self) -> I {
        *self.numer()
    }

    fn denominator(&self) -> I {
        *self.denom()
    }
}

impl<I: Int> From<RationalNumber<I>> for Ratio<I> {
    fn from(value: RationalNumber<I>) -> Self {
        // Already reduced with a positive denominator, which is what `Ratio` maintains as well.
        Ratio::new_raw(value.numerator(), value.denominator())
    }
}

impl<I: Int> TryFrom<Ratio<I>> for RationalNumber<I> {
    type Error = RationalError;

    /// A `Ratio` built with `new_raw` might not be reduced, or might have a zero denominator.
    fn try_from(value: Ratio<I>) -> Result<Self, Self::Error> {
        Self::new(*value.numer(), *value.denom())
    }
}
