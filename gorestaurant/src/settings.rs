use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::error::SettingsError;

const CONFIG_PATH_VAR: &str = "GORESTAURANT_CONFIG";
const ENV_PREFIX: &str = "GORESTAURANT";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub currency: CurrencyFormat,
    #[serde(default)]
    pub orders: OrderSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    gorestaurant_api::DEFAULT_BASE_URL.to_string()
}

/// How amounts are displayed. Defaults to Brazilian real (`R$ 1.234,56`).
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CurrencyFormat {
    pub currency_symbol: String,
    pub decimal_separator: String,
    pub group_separator: String,
    pub decimal_digits: u32,
    pub symbol_first: bool,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            currency_symbol: "R$".to_string(),
            decimal_separator: ",".to_string(),
            group_separator: ".".to_string(),
            decimal_digits: 2,
            symbol_first: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct OrderSettings {
    /// Go to the orders screen once the order request settles, even if it
    /// failed.
    #[serde(default = "default_navigate_on_failure")]
    pub navigate_on_failure: bool,
}

impl Default for OrderSettings {
    fn default() -> Self {
        Self {
            navigate_on_failure: default_navigate_on_failure(),
        }
    }
}

fn default_navigate_on_failure() -> bool {
    true
}

impl Settings {
    /// Load settings from the config file (`--config`, `$GORESTAURANT_CONFIG`
    /// or `config.toml`) and `GORESTAURANT__*` environment overrides.
    pub fn load(config_path: Option<&Path>) -> Result<Self, SettingsError> {
        let config_path = match config_path {
            Some(path) => path.to_string_lossy().into_owned(),
            None => std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "config.toml".to_string()),
        };

        let settings: Settings = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.api.base_url.is_empty() {
            return Err(SettingsError::Invalid("api.base_url is required".to_string()));
        }
        if !self.api.base_url.starts_with("http") {
            return Err(SettingsError::Invalid(
                "api.base_url must be a valid HTTP(S) URL".to_string(),
            ));
        }
        if self.currency.decimal_digits > 4 {
            return Err(SettingsError::Invalid(
                "currency.decimal_digits must be between 0 and 4".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.api.base_url, "http://localhost:3333");
        assert_eq!(settings.currency.currency_symbol, "R$");
        assert!(settings.orders.navigate_on_failure);
    }

    #[test]
    fn rejects_non_http_base_url() {
        let mut settings = Settings::default();
        settings.api.base_url = "localhost:3333".to_string();
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));

        settings.api.base_url = String::new();
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn partial_sections_fall_back_to_defaults() {
        let settings: Settings = Config::builder()
            .add_source(config::File::from_str(
                "[currency]\ncurrency_symbol = \"US$\"\n[orders]\nnavigate_on_failure = false\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.currency.currency_symbol, "US$");
        assert_eq!(settings.currency.decimal_separator, ",");
        assert!(!settings.orders.navigate_on_failure);
        assert_eq!(settings.api.base_url, "http://localhost:3333");
    }
}
