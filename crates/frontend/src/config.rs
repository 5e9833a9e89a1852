//! Application configuration.
//!
//! The defaults are embedded in the binary. Two compile-time environment
//! variables can override them:
//! - `INVENTORY_BACKEND_URL` replaces `api.base_url`
//! - `INVENTORY_LOG_LEVEL` replaces `logging.level`

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Empty means "same host as the page, on `port`".
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub page_size: usize,
    pub otp_digits: usize,
    pub resend_cooldown_secs: u32,
    pub toast_timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

fn default_port() -> u16 {
    8000
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 8000

[ui]
page_size = 10
otp_digits = 6
resend_cooldown_secs = 60
toast_timeout_ms = 4000

[logging]
level = "debug"
"#;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
                port: default_port(),
            },
            ui: UiConfig {
                page_size: 10,
                otp_digits: 6,
                resend_cooldown_secs: 60,
                toast_timeout_ms: 4000,
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn apply_overrides(&mut self, base_url: Option<&str>, log_level: Option<&str>) {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level.map(str::trim).filter(|l| !l.is_empty()) {
            self.logging.level = level.to_string();
        }
    }

    /// `None` when the configured level is not a valid `log` level.
    pub fn log_level(&self) -> Option<log::Level> {
        self.logging.level.parse().ok()
    }
}

/// Parse the embedded defaults and apply the build-time overrides.
pub fn load_config() -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
    config.apply_overrides(
        option_env!("INVENTORY_BACKEND_URL"),
        option_env!("INVENTORY_LOG_LEVEL"),
    );
    Ok(config)
}

/// The parse error is kept so it can be reported once logging is up.
pub struct LoadedConfig {
    pub config: AppConfig,
    pub load_error: Option<String>,
}

impl LoadedConfig {
    pub fn from_result(result: Result<AppConfig, toml::de::Error>) -> Self {
        match result {
            Ok(config) => Self {
                config,
                load_error: None,
            },
            Err(e) => Self {
                config: AppConfig::default(),
                load_error: Some(e.to_string()),
            },
        }
    }
}

pub static CONFIG: Lazy<LoadedConfig> = Lazy::new(|| LoadedConfig::from_result(load_config()));

pub fn config() -> &'static AppConfig {
    &CONFIG.config
}

/// Why the embedded config was rejected, if it was.
pub fn load_error() -> Option<&'static str> {
    CONFIG.load_error.as_deref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<AppConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.port, 8000);
        assert_eq!(config.ui.otp_digits, 6);
        assert_eq!(config.log_level(), Some(log::Level::Debug));
    }

    #[test]
    fn test_overrides() {
        let mut config = AppConfig::default();
        config.apply_overrides(Some("https://api.inventory.test/"), Some("warn"));
        assert_eq!(config.api.base_url, "https://api.inventory.test");
        assert_eq!(config.log_level(), Some(log::Level::Warn));

        config.apply_overrides(Some("  "), None);
        assert_eq!(config.api.base_url, "https://api.inventory.test");
    }

    #[test]
    fn test_bad_log_level() {
        let mut config = AppConfig::default();
        config.apply_overrides(None, Some("loud"));
        assert_eq!(config.log_level(), None);
    }

    #[test]
    fn test_broken_config_falls_back_with_error() {
        let loaded = LoadedConfig::from_result(toml::from_str::<AppConfig>("[api\nport = "));
        assert_eq!(loaded.config, AppConfig::default());
        assert!(loaded.load_error.is_some());

        let loaded = LoadedConfig::from_result(toml::from_str(DEFAULT_CONFIG));
        assert!(loaded.load_error.is_none());
    }
}
