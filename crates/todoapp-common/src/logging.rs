//! Logging setup for todoapp
//!
//! Library code only emits `tracing` events. Binaries and test harnesses
//! call [`init`] once to install a `fmt` subscriber. `RUST_LOG` always
//! takes precedence over the configured level.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors raised while configuring logging
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoggingError {
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Minimum level of events that reach the subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TRACE" => Some(LogLevel::Trace),
            "DEBUG" => Some(LogLevel::Debug),
            "INFO" => Some(LogLevel::Info),
            "WARN" | "WARNING" => Some(LogLevel::Warn),
            "ERROR" => Some(LogLevel::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Directive understood by [`EnvFilter`]
    fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| LoggingError::InvalidLevel(s.to_string()))
    }
}

/// Logging configuration options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    /// Minimum log level when `RUST_LOG` is not set
    pub level: LogLevel,
    /// Emit ANSI colour codes
    pub ansi: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            ansi: true,
        }
    }
}

impl LogOptions {
    pub fn with_level(level: LogLevel) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.level.directive()))
    }
}

/// Install the global `fmt` subscriber
///
/// Only the first call in a process succeeds; later calls report
/// [`LoggingError::AlreadyInitialized`] and leave the existing subscriber in place.
pub fn init(options: LogOptions) -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_env_filter(options.env_filter())
        .with_ansi(options.ansi)
        .with_target(true)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    tracing::debug!(level = %options.level, "logging initialized");
    Ok(())
}

/// Format an error with its cause chain
pub fn format_error(error: &dyn std::error::Error) -> String {
    format_error_recursive(error, 0)
}

fn format_error_recursive(error: &dyn std::error::Error, depth: usize) -> String {
    const MAX_DEPTH: usize = 10;

    let base = error.to_string();
    if depth >= MAX_DEPTH {
        return base;
    }

    match error.source() {
        Some(source) => format!(
            "{} Caused by: {}",
            base,
            format_error_recursive(source, depth + 1)
        ),
        None => base,
    }
}
