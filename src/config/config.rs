use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::error::MenuError;

#[derive(Debug, Clone)]
pub struct Config {
    // Display
    pub currency: String,

    // Logging
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        let config = Self::from_lookup(|key| env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Builds a config from any key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            currency: lookup("MENU_CURRENCY").unwrap_or_else(|| "R".to_string()),
            log_dir: lookup("MENU_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_log_dir),
            log_level: lookup("RUST_LOG").unwrap_or_else(|| "menucard=info".to_string()),
        }
    }

    pub fn validate(&self) -> Result<(), MenuError> {
        if self.currency.trim().is_empty() {
            return Err(MenuError::InvalidConfig {
                reason: "MENU_CURRENCY cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

pub fn default_log_dir() -> PathBuf {
    env::temp_dir().join("menucard").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        let config = Config::default();
        assert_eq!(config.currency, "R");
        assert_eq!(config.log_level, "menucard=info");
        assert_eq!(config.log_dir, default_log_dir());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reads_overrides() {
        let vars: HashMap<&str, &str> = [
            ("MENU_CURRENCY", "$"),
            ("MENU_LOG_DIR", "/var/log/menucard"),
            ("RUST_LOG", "menucard=debug"),
        ]
        .into_iter()
        .collect();
        let config = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.currency, "$");
        assert_eq!(config.log_dir, PathBuf::from("/var/log/menucard"));
        assert_eq!(config.log_level, "menucard=debug");
    }

    #[test]
    fn empty_currency_is_invalid() {
        let config = Config::from_lookup(|k| (k == "MENU_CURRENCY").then(|| " ".to_string()));
        assert!(matches!(config.validate(), Err(MenuError::InvalidConfig { .. })));
    }
}
