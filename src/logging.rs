//! Logging setup
//!
//! The terminal belongs to the UI, so events go to a log file.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE: &str = "city-weather.log";

/// `<platform data dir>/city-weather.log`, or the working directory when no
/// home directory can be resolved.
pub fn default_log_path() -> PathBuf {
    ProjectDirs::from("", "", "city-weather")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join(LOG_FILE)
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn initialize_logging(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = File::create(path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_CRATE_NAME"))));
    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_subscriber)
        .try_init()
        .map_err(io::Error::other)
}
