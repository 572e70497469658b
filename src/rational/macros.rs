/// Shorthand for creating a rational number in tests.
macro_rules! R32 {
    ($value:expr) => {
        $crate::rational::Rational32::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::rational::Rational32::new($numer, $denom).unwrap()
    };
}

/// Shorthand for creating a rational number in tests.
macro_rules! R64 {
    ($value:expr) => {
        $crate::rational::Rational64::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::rational::Rational64::new($numer, $denom).unwrap()
    };
}

/// Shorthand for creating a rational number in tests.
macro_rules! R128 {
    ($value:expr) => {
        $crate::rational::Rational128::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::rational::Rational128::new($numer, $denom).unwrap()
    };
}
