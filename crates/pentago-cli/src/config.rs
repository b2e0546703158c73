//! Start-up configuration read from the environment.

use pentago_core::Glyphs;
use thiserror::Error;

pub const BLACK_NAME_VAR: &str = "PENTAGO_BLACK";
pub const WHITE_NAME_VAR: &str = "PENTAGO_WHITE";
pub const GLYPHS_VAR: &str = "PENTAGO_GLYPHS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PENTAGO_GLYPHS must be 'unicode' or 'ascii', got '{0}'")]
    UnknownGlyphs(String),
}

/// Settings for a hot-seat session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub black_name: String,
    pub white_name: String,
    pub glyphs: Glyphs,
}

impl CliConfig {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through a variable lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let name = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let glyphs = match lookup(GLYPHS_VAR) {
            None => Glyphs::UNICODE,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "unicode" => Glyphs::UNICODE,
                "ascii" => Glyphs::ASCII,
                _ => return Err(ConfigError::UnknownGlyphs(value)),
            },
        };

        Ok(Self {
            black_name: name(BLACK_NAME_VAR, "Black"),
            white_name: name(WHITE_NAME_VAR, "White"),
            glyphs,
        })
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            black_name: "Black".to_string(),
            white_name: "White".to_string(),
            glyphs: Glyphs::UNICODE,
        }
    }
}
