//! Configuration management for the contact form core.
//!
//! This module handles loading and validating the deep-link configuration from
//! environment variables: which WhatsApp account receives submissions and which
//! endpoint prefix the link is built on. The core never reads these itself;
//! the host loads a [`Config`] once and threads it into
//! [`build_deep_link_from_config`](crate::compose::build_deep_link_from_config).

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default deep-link endpoint when `WHATSAPP_BASE_ENDPOINT` is not set.
pub const DEFAULT_BASE_ENDPOINT: &str = "https://wa.me/";

/// Deep-link configuration for the contact form.
#[derive(Debug, Clone)]
pub struct Config {
    /// WhatsApp account that receives form submissions (digits only, with
    /// country code, e.g. "59899123456")
    pub recipient_id: String,

    /// URL prefix the deep link is built on (default: "https://wa.me/")
    pub base_endpoint: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `WHATSAPP_RECIPIENT_ID`: Destination account for submissions
    ///
    /// Optional environment variables:
    /// - `WHATSAPP_BASE_ENDPOINT`: Deep-link URL prefix (default: "https://wa.me/")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let recipient_id = env::var("WHATSAPP_RECIPIENT_ID")
            .map_err(|_| ConfigError::MissingVar("WHATSAPP_RECIPIENT_ID".to_string()))?;

        if recipient_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "WHATSAPP_RECIPIENT_ID".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let base_endpoint = env::var("WHATSAPP_BASE_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_BASE_ENDPOINT.to_string());

        if !base_endpoint.starts_with("http://") && !base_endpoint.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "WHATSAPP_BASE_ENDPOINT".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            recipient_id,
            base_endpoint,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            recipient_id: String::new(),
            base_endpoint: DEFAULT_BASE_ENDPOINT.to_string(),
            log_level: "error".to_string(),
        }
    }
}
