//! Tracing subscriber setup for the binary
//!
//! Logs go to stderr so `eval` output on stdout stays machine readable.
//! The terminal UI owns the screen, so while it runs logs go to a file or
//! nowhere.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::{ColorChoice, Verbosity};
use crate::error::{Result, UnitPriceError};

/// Environment variable overriding the verbosity-derived filter
pub const LOG_ENV: &str = "UNIT_PRICE_LOG";

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Standard error
    Stderr,
    /// Appended to a file, created if missing
    File(PathBuf),
    /// Dropped
    Discard,
}

impl LogSink {
    /// Picks the sink for a command
    ///
    /// A configured log file always wins. Without one, interactive commands
    /// discard logs and everything else writes to stderr.
    #[must_use]
    pub fn select(interactive: bool, log_file: Option<&Path>) -> Self {
        match log_file {
            Some(path) => Self::File(path.to_path_buf()),
            None if interactive => Self::Discard,
            None => Self::Stderr,
        }
    }

    fn writer(&self) -> Result<BoxMakeWriter> {
        Ok(match self {
            Self::Stderr => BoxMakeWriter::new(std::io::stderr),
            Self::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        UnitPriceError::config(format!("log file {}: {e}", path.display()))
                    })?;
                BoxMakeWriter::new(Mutex::new(file))
            }
            Self::Discard => BoxMakeWriter::new(std::io::sink),
        })
    }

    const fn is_stderr(&self) -> bool {
        matches!(self, Self::Stderr)
    }
}

/// Builds the filter: `UNIT_PRICE_LOG` if set, otherwise the verbosity level
pub fn filter(verbosity: Verbosity) -> Result<EnvFilter> {
    match std::env::var(LOG_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(&directives)
            .map_err(|e| UnitPriceError::config(format!("invalid {LOG_ENV}: {e}"))),
        _ => Ok(EnvFilter::new(verbosity.filter_directive())),
    }
}

/// Builds a subscriber writing to `sink`
///
/// ANSI colors are only used on stderr.
pub fn subscriber(
    verbosity: Verbosity,
    color: ColorChoice,
    format: LogFormat,
    sink: &LogSink,
) -> Result<Box<dyn Subscriber + Send + Sync>> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity)?)
        .with_writer(sink.writer()?)
        .with_target(false);
    Ok(match format {
        LogFormat::Text => Box::new(
            builder
                .with_ansi(sink.is_stderr() && color.should_color())
                .finish(),
        ),
        LogFormat::Json => Box::new(builder.json().finish()),
    })
}

/// Installs the global subscriber
///
/// Fails if a subscriber is already installed, the filter does not parse
/// or the log file cannot be opened.
pub fn init(
    verbosity: Verbosity,
    color: ColorChoice,
    format: LogFormat,
    sink: &LogSink,
) -> Result<()> {
    tracing::subscriber::set_global_default(subscriber(verbosity, color, format, sink)?)
        .map_err(|e| UnitPriceError::config(format!("logging: {e}")))
}
