//! Configuration types for the logging system

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Crates whose chatter is capped at `warn` unless `RUST_LOG` says otherwise.
///
/// The desktop webview stack and the HTTP client log every event loop turn
/// and connection at `debug`.
pub const QUIET_TARGETS: [&str; 4] = ["tao", "wry", "hyper_util", "reqwest"];

/// Console line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// Human-readable, for a terminal
    Pretty,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogFormat::Json => "json",
            LogFormat::Pretty => "pretty",
        })
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" | "jsonl" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(format!("unknown log format `{other}` (expected json or pretty)")),
        }
    }
}

/// Main logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level (overridden by RUST_LOG)
    pub level: String,
    /// Write to stderr at all
    pub console: bool,
    pub format: LogFormat,
    /// ANSI colors in pretty output
    pub ansi: bool,
    /// Targets capped at `warn`
    pub quiet_targets: Vec<String>,
    /// Optional JSONL files
    pub file: Option<FileConfig>,
    pub json: JsonOptions,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console: true,
            format: LogFormat::Json,
            ansi: false,
            quiet_targets: QUIET_TARGETS.iter().map(|t| t.to_string()).collect(),
            file: None,
            json: JsonOptions::default(),
        }
    }
}

impl LogConfig {
    /// Console output in `format` at `info`.
    pub fn for_format(format: LogFormat) -> Self {
        Self {
            format,
            ansi: format == LogFormat::Pretty,
            ..Default::default()
        }
    }

    /// Pretty console output at `debug`
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            ..Self::for_format(LogFormat::Pretty)
        }
    }

    /// A launched desktop build: daily JSONL files, no console
    pub fn desktop(log_dir: PathBuf) -> Self {
        Self {
            console: false,
            file: Some(FileConfig {
                directory: log_dir,
                ..FileConfig::default()
            }),
            ..Default::default()
        }
    }

    /// Warnings only
    pub fn testing() -> Self {
        Self {
            level: "warn".to_string(),
            ..Default::default()
        }
    }

    /// `EnvFilter` directive used when RUST_LOG is unset, e.g.
    /// `info,tao=warn,wry=warn`.
    pub fn filter_directive(&self) -> String {
        let mut directive = self.level.clone();
        for target in &self.quiet_targets {
            directive.push(',');
            directive.push_str(target);
            directive.push_str("=warn");
        }
        directive
    }
}

/// File output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub directory: PathBuf,
    /// File name prefix
    pub prefix: String,
    pub rotation: RotationStrategy,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("./logs"),
            prefix: "folio".to_string(),
            rotation: RotationStrategy::Daily,
        }
    }
}

/// File rotation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RotationStrategy {
    #[default]
    Daily,
    Hourly,
    /// Single file, truncated on start
    Never,
}

/// Shape of JSON lines
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonOptions {
    /// Event fields at the top level instead of under `fields`
    pub flatten_events: bool,
    pub include_spans: bool,
    /// File and line of the call site
    pub include_location: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            flatten_events: true,
            include_spans: true,
            include_location: false,
        }
    }
}
