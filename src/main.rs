//! Entry point for the **bezier-ease** command.
//!
//! Reads progress values from stdin, one per line, and writes the eased
//! values to stdout.
//!
//! ```text
//! bezier-ease [--config <path>] [CURVE]
//! ```
//!
//! `CURVE` is a curve in CSS syntax (e.g. `"cubic-bezier(0.42, 0, 0.58, 1)"`)
//! and overrides the curve from the configuration.

use bezier_ease::config::{Config, ConfigError};
use bezier_ease::stream::EasingStream;
use bezier_ease::CubicBezier;
use log::{error, info};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: bezier-ease [--config <path>] [CURVE]";

/// Command-line arguments.
#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    curve: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().ok_or("--config requires a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => return Err(USAGE.into()),
            _ if parsed.curve.is_none() => parsed.curve = Some(arg),
            _ => return Err(format!("unexpected argument {:?}\n{}", arg, USAGE)),
        }
    }
    Ok(parsed)
}

/// Resolve the config directory (`$XDG_CONFIG_HOME/bezier-ease`).
fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("bezier-ease")
}

/// Load the config named on the command line, or try `default_path` and
/// fall back to compiled-in defaults when that file does not exist.
///
/// Any other failure (unreadable file, bad JSON, invalid curve) is returned
/// so the caller never runs with a curve it was not given.
fn load_config(explicit: Option<&Path>, default_path: &Path) -> Result<Config, ConfigError> {
    let path = explicit.unwrap_or(default_path);
    match Config::load(path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            Ok(cfg)
        }
        Err(e) if explicit.is_none() && e.is_not_found() => {
            info!("no config file ({}), using defaults", e);
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

fn main() {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(a) => a,
        Err(msg) => {
            eprintln!("{}", msg);
            std::process::exit(1);
        }
    };

    let default_path = config_dir().join("config.json");
    let mut config = match load_config(args.config.as_deref(), &default_path) {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Some(text) = &args.curve {
        match text.parse::<CubicBezier>() {
            Ok(curve) => config.curve = curve,
            Err(e) => {
                error!("invalid curve {:?}: {}", text, e);
                std::process::exit(1);
            }
        }
    }

    info!("easing with {}", config.curve);
    let stream = EasingStream::new(config.curve, config.stream);
    let stdin = io::stdin();
    let stdout = io::stdout();
    match stream.run(stdin.lock(), BufWriter::new(stdout.lock())) {
        Ok(summary) => info!(
            "{} value(s) eased with {}, {} line(s) rejected",
            summary.evaluated,
            stream.curve(),
            summary.rejected
        ),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
