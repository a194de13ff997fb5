//! Application configuration loading and validation.
//!
//! Settings come from a TOML file given on the command line. The JWT signing
//! secret is configuration-injected and loaded exactly once at process start;
//! there is no hardcoded fallback.

use serde::Deserialize;
use std::path::Path;

use crate::errors::AppError;

/// Minimum accepted length for the JWT signing secret, in bytes.
pub const MIN_JWT_SECRET_LEN: usize = 32;

/// Maximum accepted session token lifetime (365 days), in seconds.
pub const MAX_TOKEN_TTL_SECONDS: u64 = 31_536_000;

/// Main configuration structure for the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    pub security: SecurityConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Security configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Secret used to sign and verify session tokens. Required, no default.
    pub jwt_secret: String,
    /// Session token lifetime in seconds.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: u64,
    /// bcrypt cost factor for password hashing.
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format ("pretty" or "json").
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_token_ttl() -> u64 {
    3600 // 1 hour
}

fn default_bcrypt_cost() -> u32 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AppError::Config {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| AppError::Config {
            message: format!("Failed to parse config file '{}': {}", path.display(), e),
        })?;

        settings.validate()?;

        Ok(settings)
    }

    /// Validate the settings.
    fn validate(&self) -> Result<(), AppError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(AppError::Config {
                message: format!(
                    "Invalid log level '{}'. Valid levels: {:?}",
                    self.logging.level, valid_levels
                ),
            });
        }

        let valid_formats = ["pretty", "json"];
        if !valid_formats.contains(&self.logging.format.to_lowercase().as_str()) {
            return Err(AppError::Config {
                message: format!(
                    "Invalid log format '{}'. Valid formats: {:?}",
                    self.logging.format, valid_formats
                ),
            });
        }

        if self.security.jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(AppError::Config {
                message: format!(
                    "jwt_secret must be at least {} bytes, got {}",
                    MIN_JWT_SECRET_LEN,
                    self.security.jwt_secret.len()
                ),
            });
        }

        // Keeps expiry arithmetic on issued tokens safely inside i64 range.
        if !(1..=MAX_TOKEN_TTL_SECONDS).contains(&self.security.token_ttl_seconds) {
            return Err(AppError::Config {
                message: format!(
                    "token_ttl_seconds must be between 1 and {}, got {}",
                    MAX_TOKEN_TTL_SECONDS, self.security.token_ttl_seconds
                ),
            });
        }

        // bcrypt rejects costs outside this range at hash time; fail at load instead.
        if !(4..=31).contains(&self.security.bcrypt_cost) {
            return Err(AppError::Config {
                message: format!(
                    "bcrypt_cost must be between 4 and 31, got {}",
                    self.security.bcrypt_cost
                ),
            });
        }

        Ok(())
    }
}
