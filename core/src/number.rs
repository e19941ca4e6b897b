//! Numeric values.

use std::fmt;

/// A numeric value widened to the largest representation of its family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Any signed integer.
    Int(i128),
    /// Any unsigned integer.
    Uint(u128),
    /// 32-bit floating point, kept narrow so rendering stays exact.
    F32(f32),
    /// 64-bit floating point.
    F64(f64),
    /// Complex number with real and imaginary parts.
    Complex { re: f64, im: f64 },
}

impl Number {
    /// Returns true if this is an integer value.
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Int(_) | Number::Uint(_))
    }

    /// Returns true if this is a complex value.
    pub fn is_complex(&self) -> bool {
        matches!(self, Number::Complex { .. })
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Uint(u) => write!(f, "{u}"),
            Number::F32(x) => write!(f, "{x}"),
            Number::F64(x) => write!(f, "{x}"),
            Number::Complex { re, im } => {
                if im.is_sign_negative() {
                    write!(f, "({re}-{}i)", -im)
                } else {
                    write!(f, "({re}+{im}i)")
                }
            }
        }
    }
}

/// A complex number in Cartesian form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;
