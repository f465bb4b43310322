//! Configuration handling for the capture pipeline.
//!
//! Everything is read from environment variables with development defaults,
//! so a bare `pagetrail` invocation works against a JSON file in the current
//! directory. `Config::from_env` validates the values it parses.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::categorizer::Category;

/// Environment variable names. Kept public so tests and binaries can refer
/// to them.
pub const ENV_STORAGE_PATH: &str = "PAGETRAIL_STORAGE_PATH";
pub const ENV_AUTO_CAPTURE: &str = "PAGETRAIL_AUTO_CAPTURE";
pub const ENV_FALLBACK_CATEGORY: &str = "PAGETRAIL_FALLBACK_CATEGORY";
pub const ENV_EVENT_BUFFER: &str = "PAGETRAIL_EVENT_BUFFER";

/// Default development values used when environment variables are absent.
const DEFAULT_STORAGE_PATH: &str = "pagetrail-storage.json";
const DEFAULT_AUTO_CAPTURE: bool = true;
const DEFAULT_FALLBACK_CATEGORY: Category = Category::Other;
const DEFAULT_EVENT_BUFFER: usize = 64;

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    storage_path: PathBuf,
    auto_capture: bool,
    fallback_category: Category,
    event_buffer: usize,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(
        storage_path: impl Into<PathBuf>,
        auto_capture: bool,
        fallback_category: Category,
        event_buffer: usize,
    ) -> Self {
        Self {
            storage_path: storage_path.into(),
            auto_capture,
            fallback_category,
            event_buffer,
        }
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let storage_path = env::var(ENV_STORAGE_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_PATH));

        let auto_capture = match env::var(ENV_AUTO_CAPTURE) {
            Ok(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::InvalidValue {
                field: ENV_AUTO_CAPTURE,
                reason: format!("expected a boolean, got '{}'", raw),
            })?,
            Err(_) => DEFAULT_AUTO_CAPTURE,
        };

        let fallback_category = match env::var(ENV_FALLBACK_CATEGORY) {
            Ok(raw) => Category::from_str(&raw).map_err(|e| ConfigError::InvalidValue {
                field: ENV_FALLBACK_CATEGORY,
                reason: e.to_string(),
            })?,
            Err(_) => DEFAULT_FALLBACK_CATEGORY,
        };

        let event_buffer = match env::var(ENV_EVENT_BUFFER) {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field: ENV_EVENT_BUFFER,
                        reason: format!("expected a positive integer, got '{}'", raw),
                    });
                }
            },
            Err(_) => DEFAULT_EVENT_BUFFER,
        };

        Ok(Self {
            storage_path,
            auto_capture,
            fallback_category,
            event_buffer,
        })
    }

    /// JSON file backing the key-value store.
    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }
    /// Whether pages are captured when no preference has been stored yet.
    pub fn auto_capture(&self) -> bool {
        self.auto_capture
    }
    /// Category used when a capture message does not carry one.
    pub fn fallback_category(&self) -> Category {
        self.fallback_category
    }
    /// Capacity of the page-event channel.
    pub fn event_buffer(&self) -> usize {
        self.event_buffer
    }

    /// Development defaults (mirrors `from_env` with no env overrides).
    pub fn default() -> Self {
        Self::new(
            DEFAULT_STORAGE_PATH,
            DEFAULT_AUTO_CAPTURE,
            DEFAULT_FALLBACK_CATEGORY,
            DEFAULT_EVENT_BUFFER,
        )
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
