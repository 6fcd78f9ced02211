//! Inversion of `x(t)`: find the curve parameter `t` for a given `x`.
//!
//! `x(t)` has no convenient closed-form inverse, so the solver works in
//! three stages:
//!
//! 1. A precomputed [`SampleTable`] brackets `x` in one of ten equal
//!    `t`-intervals and linear interpolation inside that interval yields an
//!    initial guess.
//! 2. If the slope at the guess is large enough, a fixed number of
//!    Newton-Raphson steps refine it.
//! 3. Otherwise the bracketing interval is bisected.
//!
//! Every loop here has a fixed upper bound, so a query always terminates in
//! constant time.

use crate::polynomial::Polynomial;

/// Number of entries in the sample table.
pub const SAMPLE_TABLE_SIZE: usize = 11;
/// Distance in `t` between consecutive samples.
pub const SAMPLE_STEP_SIZE: f64 = 1.0 / (SAMPLE_TABLE_SIZE as f64 - 1.0);
/// Newton-Raphson steps applied to the initial guess.
pub const NEWTON_ITERATIONS: usize = 4;
/// Below this slope Newton-Raphson is not trusted.
pub const NEWTON_MIN_SLOPE: f64 = 0.001;
/// Residual at which bisection stops early.
pub const SUBDIVISION_PRECISION: f64 = 0.000_000_1;
/// Upper bound on bisection steps.
pub const SUBDIVISION_MAX_ITERATIONS: usize = 10;

/// `x(t)` sampled at `t = 0, 0.1, …, 1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleTable {
    samples: [f64; SAMPLE_TABLE_SIZE],
}

impl SampleTable {
    /// Sample `x` at every table step.
    pub fn new(x: &Polynomial) -> Self {
        let mut samples = [0.0; SAMPLE_TABLE_SIZE];
        for (i, sample) in samples.iter_mut().enumerate() {
            *sample = x.curve(i as f64 * SAMPLE_STEP_SIZE);
        }
        Self { samples }
    }

    /// The raw sample values.
    pub fn samples(&self) -> &[f64; SAMPLE_TABLE_SIZE] {
        &self.samples
    }

    /// Find the interval `[start, start + SAMPLE_STEP_SIZE]` whose samples
    /// bracket `x`.
    ///
    /// Returns the index of the lower sample and the interval start.  When
    /// `x` is beyond every sample the last interval is returned, so
    /// `index + 1` is always a valid sample.
    pub fn bracket(&self, x: f64) -> (usize, f64) {
        let last = SAMPLE_TABLE_SIZE - 1;
        let mut interval_start = 0.0;
        let mut current = 1;

        while current != last && self.samples[current] <= x {
            interval_start += SAMPLE_STEP_SIZE;
            current += 1;
        }

        (current - 1, interval_start)
    }

    /// Initial estimate of `t` for `x`, by linear interpolation between the
    /// bracketing samples.  Also returns the interval start.
    pub fn guess(&self, x: f64) -> (f64, f64) {
        let (i, interval_start) = self.bracket(x);
        let lo = self.samples[i];
        let hi = self.samples[i + 1];
        let dist = (x - lo) / (hi - lo);
        (interval_start + dist * SAMPLE_STEP_SIZE, interval_start)
    }
}

/// Solve `x(t) = x` for `t`.
pub fn solve_t(x_axis: &Polynomial, table: &SampleTable, x: f64) -> f64 {
    let (guess, interval_start) = table.guess(x);
    let initial_slope = x_axis.slope(guess);

    if initial_slope >= NEWTON_MIN_SLOPE {
        newton_raphson(x_axis, x, guess)
    } else if initial_slope == 0.0 {
        guess
    } else {
        binary_subdivide(x_axis, x, interval_start, interval_start + SAMPLE_STEP_SIZE)
    }
}

/// Refine `guess` with [`NEWTON_ITERATIONS`] Newton-Raphson steps.
///
/// Returns the current guess as-is if the slope hits exactly zero.
pub fn newton_raphson(x_axis: &Polynomial, x: f64, mut guess: f64) -> f64 {
    for _ in 0..NEWTON_ITERATIONS {
        let slope = x_axis.slope(guess);
        if slope == 0.0 {
            return guess;
        }
        let residual = x_axis.curve(guess) - x;
        guess -= residual / slope;
    }
    guess
}

/// Bisect `[lo, hi]` until `x(t)` is within [`SUBDIVISION_PRECISION`] of
/// `x` or [`SUBDIVISION_MAX_ITERATIONS`] midpoints have been tried.
pub fn binary_subdivide(x_axis: &Polynomial, x: f64, mut lo: f64, mut hi: f64) -> f64 {
    let mut iterations = 0;
    loop {
        let mid = lo + (hi - lo) / 2.0;
        let residual = x_axis.curve(mid) - x;
        if residual > 0.0 {
            hi = mid;
        } else {
            lo = mid;
        }
        iterations += 1;
        if residual.abs() <= SUBDIVISION_PRECISION || iterations >= SUBDIVISION_MAX_ITERATIONS {
            return mid;
        }
    }
}
