//! Session Configuration
//!
//! Defaults, environment overrides and validation for a game session.

use thiserror::Error;

use crate::proof::commitment::MIN_KEY_BYTES;

/// Environment variable for the key size in bytes.
pub const ENV_KEY_BYTES: &str = "HMAC_RPS_KEY_BYTES";

/// Environment variable toggling the pre-round commitment line.
pub const ENV_ANNOUNCE: &str = "HMAC_RPS_ANNOUNCE";

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Size of every generated HMAC key, in bytes.
    pub key_bytes: usize,
    /// Print the computer's commitment before each prompt.
    pub announce_commitment: bool,
    /// Prompt text.
    pub prompt: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            key_bytes: MIN_KEY_BYTES,
            announce_commitment: true,
            prompt: "Enter your move: ".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Key below 256 bits.
    #[error("HMAC keys must be at least {min} bytes (got {got})")]
    KeyTooShort {
        /// Minimum key size.
        min: usize,
        /// Requested key size.
        got: usize,
    },

    /// Environment value could not be parsed.
    #[error("invalid value {value:?} for {var}")]
    InvalidEnv {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
    },
}

impl SessionConfig {
    /// Create config from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_KEY_BYTES) {
            config.key_bytes = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_KEY_BYTES,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(ENV_ANNOUNCE) {
            config.announce_commitment = match value.trim() {
                "1" | "true" => true,
                "0" | "false" => false,
                _ => return Err(ConfigError::InvalidEnv { var: ENV_ANNOUNCE, value }),
            };
        }

        config.validate()?;
        Ok(config)
    }

    /// Check invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.key_bytes < MIN_KEY_BYTES {
            return Err(ConfigError::KeyTooShort { min: MIN_KEY_BYTES, got: self.key_bytes });
        }
        Ok(())
    }
}
