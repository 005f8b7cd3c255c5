//! Logging setup
//!
//! Installs the global `tracing` subscriber from [`LoggingConfig`]. `RUST_LOG`
//! takes precedence over the configured level.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use crate::config::LoggingConfig;

/// Errors raised while installing the subscriber
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log level {level:?}: {error}")]
    InvalidLevel { level: String, error: String },

    #[error("Unknown log format {0:?}, expected \"pretty\" or \"json\"")]
    UnknownFormat(String),

    #[error("Failed to open log file {path}: {error}")]
    File { path: String, error: String },

    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

/// Install the global subscriber
pub fn init(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => level_filter(&config.level)?,
    };

    let layer = fmt_layer(config)?;

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))
}

fn level_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(level).map_err(|e| TelemetryError::InvalidLevel {
        level: level.to_string(),
        error: e.to_string(),
    })
}

fn fmt_layer(config: &LoggingConfig) -> Result<Box<dyn Layer<Registry> + Send + Sync>, TelemetryError> {
    let writer = match config.file.as_deref() {
        Some(path) => BoxMakeWriter::new(Mutex::new(open_log_file(path)?)),
        None => BoxMakeWriter::new(std::io::stderr),
    };
    let ansi = config.file.is_none();

    match config.format.as_str() {
        "json" => Ok(fmt::layer()
            .json()
            .with_target(false)
            .with_writer(writer)
            .boxed()),
        "pretty" => Ok(fmt::layer()
            .with_ansi(ansi)
            .with_writer(writer)
            .boxed()),
        other => Err(TelemetryError::UnknownFormat(other.to_string())),
    }
}

fn open_log_file(path: &str) -> Result<File, TelemetryError> {
    let to_error = |e: std::io::Error| TelemetryError::File {
        path: path.to_string(),
        error: e.to_string(),
    };

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(to_error)?;
        }
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(format: &str, file: Option<String>) -> LoggingConfig {
        LoggingConfig {
            level: "info".to_string(),
            format: format.to_string(),
            file,
        }
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = init(&logging("xml", None)).unwrap_err();
        assert!(matches!(err, TelemetryError::UnknownFormat(f) if f == "xml"));
    }

    #[test]
    fn test_level_filter() {
        assert!(level_filter("debug").is_ok());
        assert!(level_filter("foodlog=trace,reqwest=warn").is_ok());
    }

    #[test]
    fn test_log_file_created_with_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("foodlog.log");

        let layer = fmt_layer(&logging("json", Some(path.to_string_lossy().to_string())));

        assert!(layer.is_ok());
        assert!(path.exists());
    }
}
