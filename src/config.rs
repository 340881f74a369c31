//! Startup configuration - window profiles

use std::str::FromStr;
use thiserror::Error;

use crate::view::{BASE_DOCUMENT, INDEX_DOCUMENT};

/// Environment variable that selects the window profile
pub const PROFILE_ENV: &str = "AQ_SHELL_PROFILE";

/// Environment variable that selects the log level
pub const LOG_ENV: &str = "AQ_SHELL_LOG";

/// Window title shown in the title bar
pub const APP_TITLE: &str = "Air Quality Analysis";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown window profile `{0}` (expected `templated` or `static`)")]
    UnknownProfile(String),
}

/// Compiled-in window profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Fixed 1000x500 window with an isolated templated form view
    #[default]
    Templated,
    /// Resizable 800x600 window with the static form view
    Static,
}

impl Profile {
    /// Select a profile from the raw environment value; absent or blank means default
    pub fn from_env_value(value: Option<&str>) -> Result<Self, ConfigError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(raw) => raw.parse(),
        }
    }

    /// Read the profile from `AQ_SHELL_PROFILE`
    pub fn from_env() -> Result<Self, ConfigError> {
        let value = std::env::var(PROFILE_ENV).ok();
        Self::from_env_value(value.as_deref())
    }

    pub fn window_config(self) -> WindowConfig {
        match self {
            Self::Templated => WindowConfig {
                width: 1000,
                height: 500,
                resizable: false,
                isolated: true,
                start_document: INDEX_DOCUMENT.to_string(),
                title: window_title(),
            },
            Self::Static => WindowConfig {
                width: 800,
                height: 600,
                resizable: true,
                isolated: false,
                start_document: BASE_DOCUMENT.to_string(),
                title: window_title(),
            },
        }
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "templated" => Ok(Self::Templated),
            "static" => Ok(Self::Static),
            _ => Err(ConfigError::UnknownProfile(s.to_string())),
        }
    }
}

/// Log level from the raw `AQ_SHELL_LOG` value; absent or unknown means INFO
pub fn log_level(value: Option<&str>) -> tracing::Level {
    value
        .and_then(|v| v.trim().parse::<tracing::Level>().ok())
        .unwrap_or(tracing::Level::INFO)
}

/// Fixed window configuration handed to the bootstrapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    /// Inner width in pixels
    pub width: u32,
    /// Inner height in pixels
    pub height: u32,
    pub resizable: bool,
    /// When set, the loaded view gets no host-level capabilities
    pub isolated: bool,
    /// Relative path of the first document to load
    pub start_document: String,
    pub title: String,
}

impl WindowConfig {
    /// Whether views in this window may use host-level capabilities
    pub fn host_access(&self) -> bool {
        !self.isolated
    }
}

fn window_title() -> String {
    format!("{} v{}", APP_TITLE, env!("CARGO_PKG_VERSION"))
}
