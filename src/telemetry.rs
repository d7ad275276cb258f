//! Tracing subscriber setup
//!
//! The client itself only emits `tracing` events (`debug` per request, `error`
//! for every failure it swallows). Applications that do not already install a
//! subscriber can use these helpers.
//!
//! ## Example
//!
//! ```rust,ignore
//! use streamsource::telemetry::{init_subscriber, OutputFormat, SubscriberConfig};
//!
//! let config = SubscriberConfig::builder()
//!     .log_level(tracing::Level::DEBUG)
//!     .output_format(OutputFormat::Json)
//!     .build();
//! let _guard = init_subscriber(config)?;
//! ```

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

use crate::error::StreamsError;

/// Output format for tracing logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format
    Json,
    /// Compact JSON format
    JsonCompact,
}

/// Configuration for the tracing subscriber
#[derive(Debug, Clone)]
pub struct SubscriberConfig {
    pub log_level: tracing::Level,
    pub output_format: OutputFormat,
    /// Write to stdout
    pub enable_console: bool,
    /// Also write to this file (never rotated)
    pub log_file: Option<PathBuf>,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            log_level: tracing::Level::INFO,
            output_format: OutputFormat::Text,
            enable_console: true,
            log_file: None,
        }
    }
}

impl SubscriberConfig {
    pub fn builder() -> SubscriberConfigBuilder {
        SubscriberConfigBuilder::default()
    }

    /// Text output at `DEBUG`, which includes one line per request.
    pub fn debug() -> Self {
        Self {
            log_level: tracing::Level::DEBUG,
            ..Self::default()
        }
    }

    /// JSON at `WARN` into `log_file`, console disabled.
    pub fn production(log_file: PathBuf) -> Self {
        Self {
            log_level: tracing::Level::WARN,
            output_format: OutputFormat::Json,
            enable_console: false,
            log_file: Some(log_file),
        }
    }
}

/// Builder for SubscriberConfig
#[derive(Debug, Default)]
pub struct SubscriberConfigBuilder {
    log_level: Option<tracing::Level>,
    output_format: Option<OutputFormat>,
    enable_console: Option<bool>,
    log_file: Option<PathBuf>,
}

impl SubscriberConfigBuilder {
    pub fn log_level(mut self, level: tracing::Level) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Set the log level from `trace`, `debug`, `info`, `warn` or `error`.
    pub fn log_level_str(mut self, level: &str) -> Result<Self, StreamsError> {
        let level = match level.to_lowercase().as_str() {
            "trace" => tracing::Level::TRACE,
            "debug" => tracing::Level::DEBUG,
            "info" => tracing::Level::INFO,
            "warn" => tracing::Level::WARN,
            "error" => tracing::Level::ERROR,
            _ => {
                return Err(StreamsError::ConfigurationError(format!(
                    "Invalid log level: {level}. Valid options: trace, debug, info, warn, error"
                )));
            }
        };
        self.log_level = Some(level);
        Ok(self)
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn enable_console(mut self, enable: bool) -> Self {
        self.enable_console = Some(enable);
        self
    }

    pub fn log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    pub fn build(self) -> SubscriberConfig {
        SubscriberConfig {
            log_level: self.log_level.unwrap_or(tracing::Level::INFO),
            output_format: self.output_format.unwrap_or_default(),
            enable_console: self.enable_console.unwrap_or(true),
            log_file: self.log_file,
        }
    }
}

/// Install a global `tracing-subscriber` for this crate's events.
///
/// Returns the file writer's `WorkerGuard` when `log_file` is set; keep it
/// alive for as long as logs should be flushed. An already installed global
/// subscriber is not an error.
pub fn init_subscriber(config: SubscriberConfig) -> Result<Option<WorkerGuard>, StreamsError> {
    let filter = format!(
        "streamsource={}",
        config.log_level.as_str().to_lowercase()
    );

    let (init_result, guard) = match (&config.log_file, config.enable_console) {
        (Some(path), console) => {
            let (file_writer, guard) = tracing_appender::non_blocking(file_appender(path));
            let result = if console {
                try_init_with(
                    config.output_format,
                    &filter,
                    std::io::stdout.and(file_writer),
                )
            } else {
                try_init_with(config.output_format, &filter, file_writer)
            };
            (result, Some(guard))
        }
        (None, true) => (
            try_init_with(config.output_format, &filter, std::io::stdout),
            None,
        ),
        (None, false) => (
            try_init_with(config.output_format, &filter, std::io::sink),
            None,
        ),
    };

    match init_result {
        Ok(()) => Ok(guard),
        Err(e) if is_already_initialized(&e.to_string()) => Ok(None),
        Err(e) => Err(StreamsError::ConfigurationError(format!(
            "Failed to initialize tracing: {e}"
        ))),
    }
}

/// Text output to stdout at `INFO`.
pub fn init_default() -> Result<Option<WorkerGuard>, StreamsError> {
    init_subscriber(SubscriberConfig::default())
}

pub fn init_debug() -> Result<Option<WorkerGuard>, StreamsError> {
    init_subscriber(SubscriberConfig::debug())
}

pub fn init_production(log_file: PathBuf) -> Result<Option<WorkerGuard>, StreamsError> {
    init_subscriber(SubscriberConfig::production(log_file))
}

type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

fn try_init_with<W>(format: OutputFormat, filter: &str, writer: W) -> Result<(), InitError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(writer);
    match format {
        OutputFormat::Json => builder
            .with_thread_ids(true)
            .with_thread_names(true)
            .json()
            .try_init(),
        OutputFormat::JsonCompact => builder
            .with_thread_ids(true)
            .with_thread_names(true)
            .json()
            .flatten_event(true)
            .try_init(),
        OutputFormat::Text => builder.try_init(),
    }
}

fn file_appender(path: &Path) -> tracing_appender::rolling::RollingFileAppender {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "streamsource.log".into());
    tracing_appender::rolling::never(dir, file_name)
}

fn is_already_initialized(message: &str) -> bool {
    message.contains("global default trace dispatcher has already been set")
        || message.contains("logging system was already initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let config = SubscriberConfig::builder().build();
        assert_eq!(config.log_level, tracing::Level::INFO);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(config.enable_console);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn log_level_from_str() {
        let config = SubscriberConfig::builder()
            .log_level_str("WARN")
            .unwrap()
            .build();
        assert_eq!(config.log_level, tracing::Level::WARN);
        assert!(SubscriberConfig::builder().log_level_str("loud").is_err());
    }

    #[test]
    fn production_preset() {
        let config = SubscriberConfig::production(PathBuf::from("/tmp/streams.log"));
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(!config.enable_console);
        assert_eq!(config.log_level, tracing::Level::WARN);
    }

    #[test]
    fn repeated_init_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let first = init_subscriber(SubscriberConfig::production(dir.path().join("streams.log")));
        assert!(first.is_ok());
        assert!(init_debug().unwrap().is_none());
    }

    #[test]
    fn already_initialized_messages() {
        assert!(is_already_initialized(
            "a global default trace dispatcher has already been set"
        ));
        assert!(!is_already_initialized("permission denied"));
    }
}
