//! Viewer runtime configuration.
//!
//! # Responsibility
//! - Carry every tunable the viewer reads at startup.
//! - Validate values before any subsystem starts.
//!
//! # Invariants
//! - [`ViewerConfig::default`] is always valid.
//! - Hosts build a config, call [`ViewerConfig::validate`], then start.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

use crate::clock::CLOCK_REFRESH_INTERVAL;
use crate::logging::{default_log_level, normalize_level, normalize_log_dir, LoggingError};
use crate::router::Page;

/// Characters the ticker advances per clock tick by default.
pub const DEFAULT_TICKER_STEP: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub log_level: String,
    /// Absolute log directory; file logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
    /// JSON file imported over the built-in content at startup.
    pub content_path: Option<PathBuf>,
    /// Directory receiving export files.
    pub export_dir: PathBuf,
    pub start_page: Page,
    pub clock_refresh: Duration,
    pub ticker_step: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            content_path: None,
            export_dir: PathBuf::from("."),
            start_page: Page::Home,
            clock_refresh: CLOCK_REFRESH_INTERVAL,
            ticker_step: DEFAULT_TICKER_STEP,
        }
    }
}

impl ViewerConfig {
    /// Sets the start page from a three-digit page code.
    pub fn with_start_code(mut self, code: &str) -> Result<Self, ConfigError> {
        self.start_page =
            Page::from_code(code.trim()).ok_or_else(|| ConfigError::UnknownPage(code.to_string()))?;
        Ok(self)
    }

    /// Checks every field.
    ///
    /// # Errors
    /// - Log level or log directory is rejected by the logging bootstrap.
    /// - Clock refresh interval is zero.
    /// - Ticker step is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(self.log_level.as_str())?;
        if let Some(dir) = &self.log_dir {
            normalize_log_dir(dir)?;
        }
        if self.clock_refresh.is_zero() {
            return Err(ConfigError::ZeroClockRefresh);
        }
        if self.ticker_step == 0 {
            return Err(ConfigError::ZeroTickerStep);
        }
        Ok(())
    }
}

/// Invalid viewer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Logging(LoggingError),
    UnknownPage(String),
    ZeroClockRefresh,
    ZeroTickerStep,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(err) => write!(f, "{err}"),
            Self::UnknownPage(code) => write!(f, "no page is mapped to code `{code}`"),
            Self::ZeroClockRefresh => write!(f, "clock refresh interval must be positive"),
            Self::ZeroTickerStep => write!(f, "ticker step must be positive"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LoggingError> for ConfigError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}
