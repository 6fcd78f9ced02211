//! CSS-like cubic Bézier easing.
//!
//! A [`CubicBezier`] is the timing function `cubic-bezier(x1, y1, x2, y2)`:
//! control points are (0,0), (x1,y1), (x2,y2), (1,1), the horizontal axis is
//! normalized time and the vertical axis is eased progress.

use crate::polynomial::Polynomial;
use crate::solve::{self, SampleTable};
use log::trace;
use std::fmt;

/// A control point x-coordinate was outside `[0, 1]`.
///
/// Such a curve is not a function of time and cannot be inverted.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("control point x-coordinate out of [0,1] range (x1 = {x1}, x2 = {x2})")]
pub struct DomainError {
    pub x1: f64,
    pub x2: f64,
}

/// The four interior control coordinates of a curve.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ControlPoints {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// An immutable cubic Bézier easing curve.
///
/// The x-axis sample table is computed once in [`new`](Self::new); every
/// query afterwards is read-only, so a curve can be shared freely across
/// threads.
///
/// ```
/// use bezier_ease::CubicBezier;
///
/// let ease_in_out = CubicBezier::new(0.42, 0.0, 0.58, 1.0)?;
/// assert_eq!(ease_in_out.evaluate(0.0), 0.0);
/// assert!((ease_in_out.evaluate(0.5) - 0.5).abs() < 1e-9);
/// # Ok::<(), bezier_ease::DomainError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    points: ControlPoints,
    x_axis: Polynomial,
    y_axis: Polynomial,
    table: SampleTable,
}

impl CubicBezier {
    /// Build a curve from its two interior control points.
    ///
    /// Fails if `x1` or `x2` is not in `[0, 1]` (NaN included).
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, DomainError> {
        if !((0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2)) {
            return Err(DomainError { x1, x2 });
        }

        let x_axis = Polynomial::new(x1, x2);
        let curve = Self {
            points: ControlPoints { x1, y1, x2, y2 },
            x_axis,
            y_axis: Polynomial::new(y1, y2),
            table: SampleTable::new(&x_axis),
        };
        trace!("built {} with samples {:?}", curve, curve.table.samples());
        Ok(curve)
    }

    /// The linear curve `cubic-bezier(0, 0, 1, 1)`.
    pub fn linear() -> Self {
        let x_axis = Polynomial::new(0.0, 1.0);
        Self {
            points: ControlPoints {
                x1: 0.0,
                y1: 0.0,
                x2: 1.0,
                y2: 1.0,
            },
            x_axis,
            y_axis: x_axis,
            table: SampleTable::new(&x_axis),
        }
    }

    /// The control points this curve was built from.
    pub fn control_points(&self) -> ControlPoints {
        self.points
    }

    /// Whether the curve is the identity line (`x1 == y1` and `x2 == y2`).
    pub fn is_linear(&self) -> bool {
        let p = &self.points;
        p.x1 == p.y1 && p.x2 == p.y2
    }

    /// Eased progress for normalized time `x`.
    ///
    /// `x` is expected in `[0, 1]`; values outside are not rejected but the
    /// result is unspecified, so callers should clamp.
    pub fn evaluate(&self, x: f64) -> f64 {
        if x == 0.0 {
            return 0.0;
        }
        if x == 1.0 {
            return 1.0;
        }
        if self.is_linear() {
            return x;
        }
        self.y_axis.curve(self.solve_t(x))
    }

    /// Interpolate between `a` and `b` with this easing at time `x`.
    pub fn interpolate(&self, a: f64, b: f64, x: f64) -> f64 {
        a + (b - a) * self.evaluate(x)
    }

    /// Curve parameter `t` at which the x-coordinate equals `x`.
    pub(crate) fn solve_t(&self, x: f64) -> f64 {
        solve::solve_t(&self.x_axis, &self.table, x)
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::linear()
    }
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.points;
        write!(f, "cubic-bezier({}, {}, {}, {})", p.x1, p.y1, p.x2, p.y2)
    }
}
