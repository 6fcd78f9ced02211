//! **bezier-ease**: CSS-style `cubic-bezier(x1, y1, x2, y2)` easing.
//!
//! A timing curve maps normalized time `x ∈ [0, 1]` to eased progress.  The
//! curve is a cubic Bézier with endpoints fixed at `(0, 0)` and `(1, 1)`;
//! evaluating it means inverting `x(t)` numerically and then sampling `y(t)`.
//!
//! # Architecture
//!
//! * [`polynomial`]: one axis of the curve in Horner form, plus its slope.
//! * [`solve`]: the hybrid root finder: a precomputed sample table gives an
//!   initial guess which is refined by Newton-Raphson, or by bisection where
//!   the slope is too shallow for Newton-Raphson to be safe.
//! * [`bezier`]: [`CubicBezier`], the immutable curve users build and query.
//! * [`parse`]: CSS text form and serde formats of a curve.
//! * [`config`] and [`stream`]: the JSON configuration and the line-based
//!   evaluator used by the `bezier-ease` binary.

pub mod bezier;
pub mod config;
pub mod parse;
pub mod polynomial;
pub mod solve;
pub mod stream;

pub use bezier::{ControlPoints, CubicBezier, DomainError};
pub use parse::ParseError;
