//! Application configuration.
//!
//! The configuration is loaded from a JSON file whose path is passed on the
//! command line (`--config <path>`), or found at
//! `$XDG_CONFIG_HOME/bezier-ease/config.json`.
//!
//! # Example
//!
//! ```json
//! {
//!   "curve": "cubic-bezier(0.42, 0, 0.58, 1)",
//!   "stream": {
//!     "precision": 6,
//!     "clamp": true
//!   }
//! }
//! ```
//!
//! `curve` accepts every form [`CubicBezier`] deserializes from, so
//! `{"x1": 0.42, "y1": 0, "x2": 0.58, "y2": 1}` and `[0.42, 0, 0.58, 1]`
//! work as well.

use crate::bezier::CubicBezier;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Most decimal places the output can be asked for.  17 significant digits
/// already round-trip any `f64` in `[0, 1]`.
pub const MAX_PRECISION: u8 = 17;

/// Top-level configuration.
///
/// Every field is optional. A minimal `{}` file is valid and all sections
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// The easing curve.  Defaults to the linear curve.
    #[serde(default)]
    pub curve: CubicBezier,

    /// How progress values are read and eased values written.
    #[serde(default)]
    pub stream: StreamConfig,
}

/// Settings for [`EasingStream`](crate::stream::EasingStream).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Decimal places in each output value, at most [`MAX_PRECISION`].
    pub precision: u8,
    /// Clamp inputs outside `[0, 1]` instead of rejecting them.
    pub clamp: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            precision: 6,
            clamp: true,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    ///
    /// An invalid curve is an error like any other parse failure; no
    /// default curve is substituted.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if config.stream.precision > MAX_PRECISION {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                reason: format!(
                    "stream.precision {} exceeds {}",
                    config.stream.precision, MAX_PRECISION
                ),
            });
        }
        Ok(config)
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config error: failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("config error: failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("config error: {}: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },
}

impl ConfigError {
    /// Whether the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn deserialize_full_config() {
        let json = r#"{
            "curve": "cubic-bezier(0.42, 0, 0.58, 1)",
            "stream": {
                "precision": 3,
                "clamp": false
            }
        }"#;
        let cfg: Config = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.curve, CubicBezier::new(0.42, 0.0, 0.58, 1.0).unwrap());
        assert_eq!(cfg.stream.precision, 3);
        assert!(!cfg.stream.clamp);
    }

    #[test]
    fn deserialize_empty_uses_defaults() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert!(cfg.curve.is_linear());
        assert_eq!(cfg.stream, StreamConfig::default());
    }

    #[test]
    fn deserialize_curve_as_object() {
        let json = r#"{ "curve": { "x1": 0.25, "y1": 0.1, "x2": 0.25, "y2": 1.0 } }"#;
        let cfg: Config = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.curve, CubicBezier::new(0.25, 0.1, 0.25, 1.0).unwrap());
    }

    #[test]
    fn deserialize_partial_stream() {
        let json = r#"{ "stream": { "precision": 2 } }"#;
        let cfg: Config = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.stream.precision, 2);
        assert_eq!(cfg.stream.clamp, StreamConfig::default().clamp);
    }

    #[test]
    fn invalid_curve_is_an_error() {
        let json = r#"{ "curve": [1.5, 0, 0.5, 1] }"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }

    #[test]
    fn unknown_top_level_keys_ignored() {
        let json = r#"{ "stream": {}, "future_section": { "key": 42 } }"#;
        // Should not fail: unknown keys are silently ignored.
        let _cfg: Config = serde_json::from_str(json).unwrap();
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("bezier-ease-config-{}.json", std::process::id()));
        {
            let mut f = std::fs::File::create(&path).unwrap();
            writeln!(f, r#"{{ "curve": [0, 0, 0.58, 1], "stream": {{ "precision": 4 }} }}"#).unwrap();
        }
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.curve, CubicBezier::new(0.0, 0.0, 0.58, 1.0).unwrap());
        assert_eq!(cfg.stream.precision, 4);
        let _ = std::fs::remove_file(&path);
    }

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("bezier-ease-{}-{}.json", name, std::process::id()));
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "{}", contents).unwrap();
        path
    }

    #[test]
    fn load_missing_file_fails() {
        let path = std::env::temp_dir().join("bezier-ease-no-such-config.json");
        let err = Config::load(&path).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("config error: failed to read"));
    }

    #[test]
    fn load_invalid_curve_is_a_parse_error() {
        let path = write_temp("bad-curve", r#"{"curve":[1.5,0,0.5,1]}"#);
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("out of [0,1] range"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn precision_overflowing_u8_is_rejected() {
        let json = r#"{ "stream": { "precision": 70000 } }"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }

    #[test]
    fn load_rejects_precision_above_max() {
        let path = write_temp("precision", r#"{ "stream": { "precision": 18 } }"#);
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.to_string().contains("stream.precision 18 exceeds 17"));
        let _ = std::fs::remove_file(&path);

        let path = write_temp("precision-max", r#"{ "stream": { "precision": 17 } }"#);
        assert_eq!(Config::load(&path).unwrap().stream.precision, MAX_PRECISION);
        let _ = std::fs::remove_file(&path);
    }
}
