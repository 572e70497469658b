//! # Arithmetic
//!
//! The field operations and their operator forms. All intermediate values are computed with
//! checked integer operations: a result that doesn't fit the backing type is an `Overflow` error,
//! never a wrapped value.
use std::ops::{Add, Div, Mul, Sub};

use crate::error::{overflow, InvalidArgument, Operation, RationalError};
use crate::rational::RationalNumber;
use crate::traits::{Int, Rational};

impl<I: Int> RationalNumber<I> {
    /// The sum of this number and `other`.
    pub fn add<R: Rational<Int = I>>(&self, other: &R) -> Result<Self, RationalError> {
        let operation = Operation::Add;
        let (a, b) = (self.numerator(), self.denominator());
        let (c, d) = (other.numerator(), other.denominator());

        let numerator = product(a, d, operation)?.checked_add(&product(b, c, operation)?)
            .ok_or_else(|| overflow(operation))?;
        Self::new_during(numerator, product(b, d, operation)?, operation)
    }

    /// The difference of this number and `other`.
    pub fn subtract<R: Rational<Int = I>>(&self, other: &R) -> Result<Self, RationalError> {
        let operation = Operation::Subtract;
        let (a, b) = (self.numerator(), self.denominator());
        let (c, d) = (other.numerator(), other.denominator());

        let numerator = product(a, d, operation)?.checked_sub(&product(b, c, operation)?)
            .ok_or_else(|| overflow(operation))?;
        Self::new_during(numerator, product(b, d, operation)?, operation)
    }

    /// The product of this number and `other`.
    pub fn multiply<R: Rational<Int = I>>(&self, other: &R) -> Result<Self, RationalError> {
        let operation = Operation::Multiply;

        Self::new_during(
            product(self.numerator(), other.numerator(), operation)?,
            product(self.denominator(), other.denominator(), operation)?,
            operation,
        )
    }

    /// The quotient of this number and `other`.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if the numerator of `other` is zero.
    pub fn divide<R: Rational<Int = I>>(&self, other: &R) -> Result<Self, RationalError> {
        let operation = Operation::Divide;
        if other.numerator().is_zero() {
            return Err(RationalError::DivisionByZero.during(operation));
        }

        Self::new_during(
            product(self.numerator(), other.denominator(), operation)?,
            product(self.denominator(), other.numerator(), operation)?,
            operation,
        )
    }

    /// The absolute value.
    ///
    /// # Errors
    ///
    /// `Overflow` if the numerator is `I::MIN`, whose magnitude isn't representable.
    pub fn abs(&self) -> Result<Self, RationalError> {
        let magnitude = |value: I| {
            if value.is_negative() {
                value.checked_neg().ok_or_else(|| overflow(Operation::Abs))
            } else {
                Ok(value)
            }
        };

        Self::new_during(
            magnitude(self.numerator())?,
            magnitude(self.denominator())?,
            Operation::Abs,
        )
    }

    /// The multiplicative inverse.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` for zero.
    pub fn recip(&self) -> Result<Self, RationalError> {
        if self.is_zero() {
            return Err(RationalError::DivisionByZero.during(Operation::Reciprocal));
        }

        Self::new_during(self.denominator(), self.numerator(), Operation::Reciprocal)
    }
}

fn product<I: Int>(left: I, right: I, operation: Operation) -> Result<I, RationalError> {
    left.checked_mul(&right).ok_or_else(|| overflow(operation))
}

/// Forward an operator to the method that implements it.
///
/// Operators can fail like the methods do, so their output is a `Result`. A `None` right hand
/// side is rejected as a missing operand.
macro_rules! forward_operator {
    ($operator:ident, $method:ident, $implementation:ident, $operation:ident) => {
        impl<I: Int> $operator for RationalNumber<I> {
            type Output = Result<Self, RationalError>;

            fn $method(self, rhs: Self) -> Self::Output {
                RationalNumber::$implementation(&self, &rhs)
            }
        }

        impl<I: Int> $operator<&RationalNumber<I>> for &RationalNumber<I> {
            type Output = Result<RationalNumber<I>, RationalError>;

            fn $method(self, rhs: &RationalNumber<I>) -> Self::Output {
                RationalNumber::$implementation(self, rhs)
            }
        }

        impl<I: Int> $operator<Option<&RationalNumber<I>>> for &RationalNumber<I> {
            type Output = Result<RationalNumber<I>, RationalError>;

            fn $method(self, rhs: Option<&RationalNumber<I>>) -> Self::Output {
                match rhs {
                    Some(rhs) => RationalNumber::$implementation(self, rhs),
                    None => Err(InvalidArgument::MissingOperand.during(Operation::$operation)),
                }
            }
        }
    };
}

forward_operator!(Add, add, add, Add);
forward_operator!(Sub, sub, subtract, Subtract);
forward_operator!(Mul, mul, multiply, Multiply);
forward_operator!(Div, div, divide, Divide);
