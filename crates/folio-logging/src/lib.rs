//! Logging setup for the Folio portfolio
//!
//! Wraps `tracing-subscriber` so every binary in the workspace configures
//! output the same way.
//!
//! # Features
//!
//! - **JSONL Output**: Structured JSON lines on the console (default)
//! - **Pretty Output**: Human-readable console output for development
//! - **File Rotation**: Daily/hourly log rotation via tracing-appender
//! - **RUST_LOG**: Environment filter overrides the configured level
//!
//! # Quick Start
//!
//! ```ignore
//! use folio_logging::{FolioSubscriberBuilder, LogConfig};
//!
//! // JSONL to console
//! FolioSubscriberBuilder::new().init();
//!
//! // Development mode with pretty output
//! FolioSubscriberBuilder::new()
//!     .with_config(LogConfig::development())
//!     .init();
//! ```

pub mod config;

pub use config::{FileConfig, JsonOptions, LogConfig, LogFormat, QUIET_TARGETS, RotationStrategy};

use std::fs::{self, File};

use thiserror::Error;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Errors raised while installing the global subscriber
#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("Failed to prepare log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Global subscriber already installed: {0}")]
    AlreadySet(String),
}

/// Builds and installs the process-wide subscriber
pub struct FolioSubscriberBuilder {
    config: LogConfig,
}

impl FolioSubscriberBuilder {
    /// JSONL on stderr at `info`
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
        }
    }

    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Level used when RUST_LOG is unset
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.level = level.into();
        self
    }

    pub fn with_console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Console format; colors follow the format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.config.format = format;
        self.config.ansi = format == LogFormat::Pretty;
        self
    }

    pub fn with_file_output(mut self, config: FileConfig) -> Self {
        self.config.file = Some(config);
        self
    }

    /// Installs the subscriber.
    ///
    /// Keep the returned guard alive while file output is enabled. Failures
    /// are reported on stderr and leave logging disabled.
    pub fn init(self) -> Option<WorkerGuard> {
        match self.try_init() {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Warning: Failed to initialize logging: {}", e);
                None
            }
        }
    }

    pub fn try_init(self) -> Result<Option<WorkerGuard>, LogInitError> {
        let config = self.config;
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

        let (file_writer, guard) = match &config.file {
            Some(file_config) => {
                let (writer, guard) = create_file_writer(file_config)?;
                (Some(writer), Some(guard))
            }
            None => (None, None),
        };

        let json = &config.json;
        let pretty_console = (config.console && config.format == LogFormat::Pretty)
            .then(|| {
                fmt::layer()
                    .with_ansi(config.ansi)
                    .with_target(true)
                    .with_writer(std::io::stderr)
            });

        let json_console = (config.console && config.format == LogFormat::Json).then(|| {
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(json.include_spans)
                .flatten_event(json.flatten_events)
                .with_file(json.include_location)
                .with_line_number(json.include_location)
                .with_writer(std::io::stderr)
        });

        let file_layer = file_writer.map(|writer| {
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_current_span(true)
                .with_span_list(json.include_spans)
                .flatten_event(json.flatten_events)
                .with_file(json.include_location)
                .with_line_number(json.include_location)
                .with_writer(writer)
        });

        Registry::default()
            .with(env_filter)
            .with(pretty_console)
            .with(json_console)
            .with(file_layer)
            .try_init()
            .map_err(|e| LogInitError::AlreadySet(e.to_string()))?;

        Ok(guard)
    }
}

impl Default for FolioSubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the non-blocking file writer for a file output configuration.
///
/// `Never` truncates a single `<prefix>.log`, the rolling strategies append.
pub fn create_file_writer(
    file_config: &FileConfig,
) -> Result<(NonBlocking, WorkerGuard), LogInitError> {
    fs::create_dir_all(&file_config.directory)?;
    let writer = match file_config.rotation {
        RotationStrategy::Never => {
            let file_path = file_config
                .directory
                .join(format!("{}.log", file_config.prefix));
            let file = File::create(&file_path)?;
            tracing_appender::non_blocking(file)
        }
        RotationStrategy::Daily => tracing_appender::non_blocking(RollingFileAppender::new(
            Rotation::DAILY,
            &file_config.directory,
            &file_config.prefix,
        )),
        RotationStrategy::Hourly => tracing_appender::non_blocking(RollingFileAppender::new(
            Rotation::HOURLY,
            &file_config.directory,
            &file_config.prefix,
        )),
    };
    Ok(writer)
}

/// Initialize logging with default settings (JSONL to console)
pub fn init_default() {
    FolioSubscriberBuilder::new().init();
}

/// Initialize logging for development (verbose, pretty console output)
pub fn init_development() {
    FolioSubscriberBuilder::new()
        .with_config(LogConfig::development())
        .init();
}

/// Initialize logging for testing (minimal output)
///
/// Safe to call from every test; only the first call installs a subscriber.
pub fn init_testing() {
    let _ = FolioSubscriberBuilder::new()
        .with_config(LogConfig::testing())
        .try_init();
}
