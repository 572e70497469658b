//! # Traits
//!
//! The integers a rational number can be built on, and the capability every representation of a
//! rational number shares. Arithmetic consumes the capability, not a concrete type, so that other
//! representations can take part without being converted first.
use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::{CheckedNeg, CheckedRem, PrimInt, Signed, WrappingMul, WrappingSub};

/// A signed, fixed-width integer that can back a rational number.
///
/// Automatically implemented for all types satisfying the trait's bounds, which includes `i8`
/// through `i128`.
pub trait Int:
    PrimInt +
    Signed +
    CheckedNeg +
    CheckedRem +
    WrappingMul +
    WrappingSub +
    Hash +
    Display +
    Debug +
    Send +
    Sync +
    'static
{
}
impl<T> Int for T
where
    T: PrimInt + Signed + CheckedNeg + CheckedRem + WrappingMul + WrappingSub + Hash + Display + Debug + Send + Sync + 'static,
{
}

/// A value that can be read as a numerator over a denominator.
///
/// Implementors don't need to be in canonical form: every operation that consumes a `Rational`
/// normalizes its result. A zero denominator is never accepted as a result.
pub trait Rational {
    /// The backing integer type.
    type Int: Int;

    /// The numerator, carrying the sign in canonical form.
    fn numerator(&self) -> Self::Int;

    /// The denominator, positive in canonical form.
    fn denominator(&self) -> Self::Int;
}
