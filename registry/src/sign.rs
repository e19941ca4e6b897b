//! Sign predicates over numbers.

use structcheck_core::Number;

/// The sign a numeric constraint asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Zero,
    Positive,
    Negative,
}

impl Sign {
    /// Whether `number` carries this sign.
    ///
    /// Complex numbers take the sign of the real part, or of the imaginary
    /// part when the real part is exactly zero. NaN has no sign.
    ///
    /// # Panics
    ///
    /// Panics if the number reads as both positive and negative.
    pub fn matches(self, number: &Number) -> bool {
        let (positive, negative) = match *number {
            Number::Int(i) => (i > 0, i < 0),
            Number::Uint(u) => (u > 0, false),
            Number::F32(x) => (x > 0.0, x < 0.0),
            Number::F64(x) => (x > 0.0, x < 0.0),
            Number::Complex { re, im } => {
                if re != 0.0 {
                    (re > 0.0, re < 0.0)
                } else if im != 0.0 {
                    (im > 0.0, im < 0.0)
                } else {
                    (false, false)
                }
            }
        };
        assert!(
            !(positive && negative),
            "{number} is both positive and negative"
        );

        match self {
            Sign::Zero => !positive && !negative,
            Sign::Positive => positive,
            Sign::Negative => negative,
        }
    }
}
