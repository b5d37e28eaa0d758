use std::{env, time::Duration};

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use stereotypos_contact::{ContactConfig, Messages, link};
use validator::ValidateEmail;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
    #[serde(default)]
    pub messages: Messages,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Root of the CMS serving `/api/contact-forms` and the content collections.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_base_url() -> String {
    "http://localhost:1337".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationConfig {
    #[serde(default = "default_display_ms")]
    pub display_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_ms: default_display_ms(),
        }
    }
}

impl NotificationConfig {
    pub fn display(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }
}

fn default_display_ms() -> u64 {
    5000
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (STEREOTYPOS__CONTACT__STRATEGY, etc.)
    /// 2. Config file specified by path, CONFIG_PATH, or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, defaults cover every key
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("STEREOTYPOS")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api.base_url.trim().is_empty() {
            return Err("API base_url must not be empty".to_string());
        }
        if self.api.timeout_secs == 0 {
            return Err("API timeout_secs must be greater than 0".to_string());
        }
        if self.notification.display_ms == 0 {
            return Err("Notification display_ms must be greater than 0".to_string());
        }
        if !self.contact.fallback_email.validate_email() {
            return Err(format!(
                "Invalid contact fallback_email: {}",
                self.contact.fallback_email
            ));
        }
        if !self.contact.choice_email.validate_email() {
            return Err(format!(
                "Invalid contact choice_email: {}",
                self.contact.choice_email
            ));
        }
        if link::phone_digits(&self.contact.whatsapp_phone).is_empty() {
            return Err("Contact whatsapp_phone must contain digits".to_string());
        }
        Ok(())
    }
}
