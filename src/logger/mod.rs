//! Logger Module
//!
//! A logging system based on `tracing-subscriber` with support for:
//! - Console output with color control
//! - File output in Full, Compact or JSON format

pub mod config;
pub mod error;
pub(crate) mod writer;

pub use config::*;
pub use error::LoggerError;

use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use writer::LogFileWriter;

/// Initialize the global subscriber with the given configuration.
///
/// `RUST_LOG`, when set, takes precedence over the configured level.
pub fn init_logger(config: LoggerConfig) -> Result<(), LoggerError> {
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| LoggerError::config(e.to_string()))?;

    // The file layer goes first: span fields are formatted once and cached by
    // the first layer, and ANSI codes from the console would leak into the file.
    let file_layer = if config.file.enabled {
        let writer = LogFileWriter::new(&config.file)?;
        let layer = match config.file.format {
            LogFormat::Full => fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer)
                .boxed(),
            LogFormat::Compact => fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .compact()
                .with_writer(writer)
                .boxed(),
            LogFormat::Json => fmt::layer()
                .with_ansi(false)
                .json()
                .with_writer(writer)
                .boxed(),
        };
        Some(layer)
    } else {
        None
    };

    let console_layer = config.console.enabled.then(|| {
        let use_ansi = config.console.colored && std::io::stdout().is_terminal();
        fmt::layer()
            .with_ansi(use_ansi)
            .with_target(true)
            .with_level(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| LoggerError::Init {
            message: e.to_string(),
        })
}
