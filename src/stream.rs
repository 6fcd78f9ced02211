//! Line-oriented evaluation of progress values.
//!
//! [`EasingStream`] reads one progress value per line, eases it with a
//! [`CubicBezier`] and writes one result per line.
//!
//! # Format
//!
//! With `cubic-bezier(0.42, 0, 0.58, 1)`:
//!
//! ```text
//! 0          ->  0.000000
//! 0.25       ->  0.129162
//! 0.5        ->  0.500000
//! ```
//!
//! Blank lines are skipped.  Lines that are not a number (or, with clamping
//! disabled, lie outside `[0, 1]`) are logged and skipped; they never stop
//! the stream.

use crate::bezier::CubicBezier;
use crate::config::StreamConfig;
use log::{debug, error};
use std::io::{BufRead, Write};

/// Errors produced by [`EasingStream::run`].
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why an input line was not evaluated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RejectReason {
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("not finite: {0}")]
    NotFinite(f64),
    #[error("outside [0, 1]: {0}")]
    OutOfRange(f64),
}

/// Counts reported once a stream is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Lines that produced an output value.
    pub evaluated: usize,
    /// Lines that were logged and skipped.
    pub rejected: usize,
}

/// Eases a stream of progress values with one curve.
pub struct EasingStream {
    curve: CubicBezier,
    config: StreamConfig,
}

impl EasingStream {
    pub fn new(curve: CubicBezier, config: StreamConfig) -> Self {
        Self { curve, config }
    }

    /// The curve applied to every value.
    pub fn curve(&self) -> &CubicBezier {
        &self.curve
    }

    /// Parse one input line into a progress value in `[0, 1]`.
    pub fn progress(&self, text: &str) -> Result<f64, RejectReason> {
        let text = text.trim();
        let x: f64 = text
            .parse()
            .map_err(|_| RejectReason::NotANumber(text.to_string()))?;
        if !x.is_finite() {
            return Err(RejectReason::NotFinite(x));
        }
        if (0.0..=1.0).contains(&x) {
            return Ok(x);
        }
        if self.config.clamp {
            let clamped = x.clamp(0.0, 1.0);
            debug!("clamped {} to {}", x, clamped);
            Ok(clamped)
        } else {
            Err(RejectReason::OutOfRange(x))
        }
    }

    /// Read `reader` to the end, writing one eased value per accepted line.
    pub fn run<R: BufRead, W: Write>(
        &self,
        reader: R,
        mut writer: W,
    ) -> Result<StreamSummary, StreamError> {
        let mut summary = StreamSummary::default();

        for line in reader.lines() {
            let text = line?;
            if text.trim().is_empty() {
                continue;
            }
            match self.progress(&text) {
                Ok(x) => {
                    let y = self.curve.evaluate(x);
                    writeln!(writer, "{:.*}", usize::from(self.config.precision), y)?;
                    summary.evaluated += 1;
                }
                Err(e) => {
                    error!("skipping line {:?}: {}", text, e);
                    summary.rejected += 1;
                }
            }
        }

        writer.flush()?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(curve: CubicBezier, config: StreamConfig, input: &str) -> (String, StreamSummary) {
        let stream = EasingStream::new(curve, config);
        let mut out = Vec::new();
        let summary = stream.run(Cursor::new(input), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn eases_each_line() {
        let curve = CubicBezier::new(0.42, 0.0, 0.58, 1.0).unwrap();
        let (out, summary) = run(curve, StreamConfig::default(), "0\n0.5\n1\n");
        assert_eq!(out, "0.000000\n0.500000\n1.000000\n");
        assert_eq!(summary, StreamSummary { evaluated: 3, rejected: 0 });
    }

    #[test]
    fn precision_is_configurable() {
        let config = StreamConfig {
            precision: 2,
            clamp: true,
        };
        let (out, _) = run(CubicBezier::linear(), config, "0.126\n0.333\n");
        assert_eq!(out, "0.13\n0.33\n");
    }

    #[test]
    fn widest_precision_does_not_panic() {
        let config = StreamConfig {
            precision: u8::MAX,
            clamp: true,
        };
        let (out, summary) = run(CubicBezier::linear(), config, "0.5\n");
        assert_eq!(summary.evaluated, 1);
        assert!(out.starts_with("0.5000"));
        assert_eq!(out.trim_end().len(), 2 + usize::from(u8::MAX));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let (out, summary) = run(CubicBezier::linear(), StreamConfig::default(), "\n  \n0.25\n\n");
        assert_eq!(out, "0.250000\n");
        assert_eq!(summary, StreamSummary { evaluated: 1, rejected: 0 });
    }

    #[test]
    fn malformed_lines_do_not_stop_the_stream() {
        let (out, summary) = run(
            CubicBezier::linear(),
            StreamConfig::default(),
            "not a number\n0.5\nNaN\ninf\n0.75\n",
        );
        assert_eq!(out, "0.500000\n0.750000\n");
        assert_eq!(summary, StreamSummary { evaluated: 2, rejected: 3 });
    }

    #[test]
    fn out_of_range_is_clamped_by_default() {
        let curve = CubicBezier::new(0.25, 0.1, 0.25, 1.0).unwrap();
        let (out, summary) = run(curve, StreamConfig::default(), "-0.5\n1.5\n");
        assert_eq!(out, "0.000000\n1.000000\n");
        assert_eq!(summary.evaluated, 2);
    }

    #[test]
    fn out_of_range_is_rejected_without_clamp() {
        let config = StreamConfig {
            precision: 6,
            clamp: false,
        };
        let stream = EasingStream::new(CubicBezier::linear(), config);
        assert_eq!(stream.progress("1.5"), Err(RejectReason::OutOfRange(1.5)));
        assert_eq!(stream.progress(" 0.5 "), Ok(0.5));

        let (out, summary) = run(CubicBezier::linear(), config, "-0.1\n0.1\n");
        assert_eq!(out, "0.100000\n");
        assert_eq!(summary, StreamSummary { evaluated: 1, rejected: 1 });
    }

    #[test]
    fn progress_rejects_garbage() {
        let stream = EasingStream::new(CubicBezier::linear(), StreamConfig::default());
        assert_eq!(
            stream.progress("half"),
            Err(RejectReason::NotANumber("half".into()))
        );
        assert!(matches!(stream.progress("NaN"), Err(RejectReason::NotFinite(_))));
    }
}
