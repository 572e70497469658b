//! # Error reporting for operations on rational numbers
//!
//! Every fallible operation returns a `RationalError`. The kinds are distinguishable by matching:
//! an argument that violates a precondition, a division by the zero rational, or an intermediate
//! value that does not fit the backing integer type.
use std::fmt;

use thiserror::Error;
use tracing::debug;

/// A `RationalError` is returned when an operation on a rational number can't produce a value.
///
/// It is the highest error in the hierarchy.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum RationalError {
    /// An argument violates a precondition of the operation.
    ///
    /// The contained value describes which precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    /// The divisor has a zero numerator.
    #[error("cannot divide by zero")]
    DivisionByZero,
    /// An intermediate or final value does not fit the backing integer type.
    ///
    /// # Note
    ///
    /// The mathematical result might still exist; it is the fixed width of the representation
    /// that is exceeded.
    #[error("integer overflow during {0}")]
    Overflow(Operation),
}

/// The precondition that an argument violated.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum InvalidArgument {
    /// A rational number was constructed with a zero denominator.
    #[error("denominator must not be zero")]
    ZeroDenominator,
    /// A binary operation was given no right hand side.
    #[error("operand must be present")]
    MissingOperand,
    /// The zero rational was raised to a negative integer power.
    #[error("cannot raise zero to a negative power")]
    ZeroToNegativePower,
    /// A zero real base was raised to a negative rational exponent.
    #[error("cannot raise 0 to a negative rational number")]
    ZeroBaseNegativeExponent,
}

/// Operation during which an error was encountered.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum Operation {
    Construction,
    Add,
    Subtract,
    Multiply,
    Divide,
    Abs,
    Reciprocal,
    ExpRational,
    ExpReal,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Operation::Construction => "construction",
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
            Operation::Divide => "division",
            Operation::Abs => "absolute value",
            Operation::Reciprocal => "reciprocal",
            Operation::ExpRational => "integer exponentiation",
            Operation::ExpReal => "real exponentiation",
        })
    }
}

impl RationalError {
    /// Record that `operation` is rejected with this error, and hand the error back.
    pub(crate) fn during(self, operation: Operation) -> Self {
        debug!(%operation, error = %self, "rational number operation rejected");
        self
    }
}

impl InvalidArgument {
    pub(crate) fn during(self, operation: Operation) -> RationalError {
        RationalError::from(self).during(operation)
    }
}

/// Overflow error for `operation`, recorded when created.
pub(crate) fn overflow(operation: Operation) -> RationalError {
    RationalError::Overflow(operation).during(operation)
}
