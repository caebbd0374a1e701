//! Opt-in structured logging.

use std::env;
use std::fmt;
use std::io;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive used when no level is passed to [`enable_logging`].
pub const TRACE_ENV: &str = "BOUNDFOLD_TRACE";
/// Output format, `pretty` (default) or `json`.
pub const LOG_FORMAT_ENV: &str = "BOUNDFOLD_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Result<Self, LoggingError> {
        if value.eq_ignore_ascii_case("pretty") {
            Ok(LogFormat::Pretty)
        } else if value.eq_ignore_ascii_case("json") {
            Ok(LogFormat::Json)
        } else {
            Err(LoggingError::InvalidFormat(value.to_string()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    InvalidFilter(String),
    InvalidFormat(String),
    Init(String),
}

impl LoggingError {
    pub fn code(&self) -> &'static str {
        match self {
            LoggingError::InvalidFilter(_) => "LOGGING_INVALID_FILTER",
            LoggingError::InvalidFormat(_) => "LOGGING_INVALID_FORMAT",
            LoggingError::Init(_) => "LOGGING_INIT_FAILED",
        }
    }
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::InvalidFilter(err) => {
                write!(f, "[{}] Invalid log filter: {}", self.code(), err)
            }
            LoggingError::InvalidFormat(value) => write!(
                f,
                "[{}] Invalid {LOG_FORMAT_ENV} '{}' (expected 'json' or 'pretty')",
                self.code(),
                value
            ),
            LoggingError::Init(err) => {
                write!(f, "[{}] Failed to initialize logging: {}", self.code(), err)
            }
        }
    }
}

impl std::error::Error for LoggingError {}

fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    if level.eq_ignore_ascii_case("off") {
        return Ok(EnvFilter::default().add_directive(LevelFilter::OFF.into()));
    }
    EnvFilter::try_new(level).map_err(|err| LoggingError::InvalidFilter(err.to_string()))
}

/// Install a global subscriber writing to stderr.
///
/// When `level` is None, this reads `BOUNDFOLD_TRACE` if set, otherwise
/// logging stays `off`. Returns `Ok(false)` if a subscriber is already
/// configured.
pub fn enable_logging(level: Option<&str>) -> Result<bool, LoggingError> {
    if tracing::dispatcher::has_been_set() {
        return Ok(false);
    }

    let level_value = level
        .map(str::to_string)
        .or_else(|| env::var(TRACE_ENV).ok())
        .unwrap_or_else(|| "off".to_string());
    let filter = build_filter(&level_value)?;

    let format = match env::var(LOG_FORMAT_ENV) {
        Ok(value) => LogFormat::parse(&value)?,
        Err(_) => LogFormat::Pretty,
    };

    let base = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Json => base
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .json(),
            )
            .try_init(),
        LogFormat::Pretty => base
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .pretty(),
            )
            .try_init(),
    };
    result.map_err(|err| LoggingError::Init(err.to_string()))?;

    Ok(true)
}
