//! # Rational numbers
//!
//! Exact fractions over fixed-width integers, always in lowest terms with a positive denominator.
//! Operations never modify their operands; they return a new value or an error.
pub use number::Rational128 as Rational128;
pub use number::Rational32 as Rational32;
pub use number::Rational64 as Rational64;
pub use number::RationalNumber;
pub use power::ExpReal;

#[cfg(test)]
#[macro_use]
mod macros;

mod number;
mod arithmetic;
mod power;
#[cfg(feature = "ratio")]
mod ratio;
