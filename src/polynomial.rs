//! Cubic Bézier polynomial for one axis.
//!
//! With endpoints fixed at `0` and `1`, one coordinate of a unit cubic
//! Bézier reduces to `((A·t + B)·t + C)·t` where
//!
//! * `A = 1 − 3·a2 + 3·a1`
//! * `B = 3·a2 − 6·a1`
//! * `C = 3·a1`
//!
//! and `(a1, a2)` are the two interior control coordinates on that axis.

/// Horner-form coefficients of one axis of a unit cubic Bézier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial {
    a: f64,
    b: f64,
    c: f64,
}

impl Polynomial {
    /// Build the polynomial from the interior control coordinates `a1`, `a2`.
    pub fn new(a1: f64, a2: f64) -> Self {
        Self {
            a: 1.0 - 3.0 * a2 + 3.0 * a1,
            b: 3.0 * a2 - 6.0 * a1,
            c: 3.0 * a1,
        }
    }

    /// Coordinate of the curve at parameter `t`.
    #[inline]
    pub fn curve(&self, t: f64) -> f64 {
        ((self.a * t + self.b) * t + self.c) * t
    }

    /// Derivative of [`curve`](Self::curve) with respect to `t`.
    #[inline]
    pub fn slope(&self, t: f64) -> f64 {
        3.0 * self.a * t * t + 2.0 * self.b * t + self.c
    }
}
