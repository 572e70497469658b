//! # Exact rational numbers
//!
//! An immutable rational number type for computations that need exact fractions instead of
//! floating point approximations. Values are normalized on construction: the denominator is
//! positive and the fraction is in lowest terms, so structural equality is mathematical equality.
//!
//! The backing integers have a fixed width. Instead of wrapping, any operation whose result
//! doesn't fit returns an error.
//!
//! ```
//! use rational_numbers::{ExpReal, Rational32};
//!
//! let half = Rational32::new(1, 2)?;
//! let two_thirds = Rational32::new(4, 6)?;
//!
//! assert_eq!((half + two_thirds)?, Rational32::new(7, 6)?);
//! assert_eq!(two_thirds.exp_rational(-2)?.to_string(), "9/4");
//! assert!((8_i32.exp_real(&Rational32::new(4, 3)?)? - 16.0).abs() < 1e-7);
//! # Ok::<(), rational_numbers::RationalError>(())
//! ```
#![warn(missing_docs)]

#[cfg_attr(test, macro_use)]
pub mod rational;
pub mod error;
pub mod traits;

pub use error::{InvalidArgument, Operation, RationalError};
pub use rational::{ExpReal, Rational128, Rational32, Rational64, RationalNumber};
pub use traits::{Int, Rational};
