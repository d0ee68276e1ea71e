//! Main application configuration
//!
//! This module defines the configuration structures for the front desk,
//! including environment variable loading, TOML file loading and
//! validation.

use crate::error::FrontDeskError;
use crate::inventory::provider::{
    validate_seeds, ConfiguredRoomProvider, RoomProvider, StaticRoomProvider,
};
use crate::types::{RoomSeed, DEFAULT_CURRENCY};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub hotel: HotelSettings,
}

/// Process-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Hotel presentation and room list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelSettings {
    /// Name shown in the welcome banner
    pub name: String,
    /// Symbol printed in front of room prices
    pub currency_symbol: String,
    /// Rooms to seed; the built-in list is used when empty
    pub rooms: Vec<RoomSeed>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "front-desk".to_string(),
            // Logs go to stderr next to an interactive prompt
            log_level: "warn".to_string(),
        }
    }
}

impl Default for HotelSettings {
    fn default() -> Self {
        Self {
            name: "SyntecxHub".to_string(),
            currency_symbol: DEFAULT_CURRENCY.to_string(),
            rooms: Vec::new(),
        }
    }
}

/// Command-line overrides layered on top of a loaded configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub log_level: Option<String>,
    /// Forces the `debug` log level, taking precedence over `log_level`
    pub debug: bool,
    pub hotel_name: Option<String>,
    pub currency: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from a lookup function keyed by environment
    /// variable name
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Some(log_level) = lookup("LOG_LEVEL") {
            config.service.log_level = log_level;
        }
        if let Some(hotel_name) = lookup("HOTEL_NAME") {
            config.hotel.name = hotel_name;
        }
        if let Some(currency) = lookup("HOTEL_CURRENCY") {
            config.hotel.currency_symbol = currency;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file; missing fields take defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| {
                config_error(format!(
                    "Failed to read config file {}: {}",
                    path.display(),
                    e
                ))
            })?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| config_error(format!("Invalid config file: {}", e)))?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Apply command-line overrides and re-validate the result
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) -> Result<()> {
        if let Some(log_level) = overrides.log_level {
            self.service.log_level = log_level;
        }
        if overrides.debug {
            self.service.log_level = "debug".to_string();
        }
        if let Some(hotel_name) = overrides.hotel_name {
            self.hotel.name = hotel_name;
        }
        if let Some(currency) = overrides.currency {
            self.hotel.currency_symbol = currency;
        }

        validate_config(self)
    }

    /// Room provider matching the configured room list
    pub fn room_provider(&self) -> Result<Box<dyn RoomProvider>> {
        if self.hotel.rooms.is_empty() {
            Ok(Box::new(StaticRoomProvider::new()))
        } else {
            Ok(Box::new(ConfiguredRoomProvider::new(
                self.hotel.rooms.clone(),
            )?))
        }
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => {
            return Err(config_error(format!(
                "Invalid log level: {}",
                config.service.log_level
            )))
        }
    }

    if config.service.name.is_empty() {
        return Err(config_error("Service name cannot be empty"));
    }

    // Validate hotel settings
    if config.hotel.name.trim().is_empty() {
        return Err(config_error("Hotel name cannot be empty"));
    }
    if config.hotel.currency_symbol.is_empty() {
        return Err(config_error("Currency symbol cannot be empty"));
    }

    validate_seeds(&config.hotel.rooms)?;

    Ok(())
}

fn config_error(message: impl Into<String>) -> anyhow::Error {
    FrontDeskError::ConfigurationError {
        message: message.into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.service.name, "front-desk");
        assert_eq!(config.service.log_level, "warn");
        assert_eq!(config.hotel.name, "SyntecxHub");
        assert_eq!(config.hotel.currency_symbol, "₹");
        assert!(config.hotel.rooms.is_empty());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("LOG_LEVEL", "debug"),
            ("HOTEL_NAME", "Seaside"),
            ("HOTEL_CURRENCY", "$"),
        ]))
        .unwrap();

        assert_eq!(config.service.log_level, "debug");
        assert_eq!(config.hotel.name, "Seaside");
        assert_eq!(config.hotel.currency_symbol, "$");
        assert_eq!(config.service.name, "front-desk");
    }

    #[test]
    fn test_from_lookup_rejects_bad_log_level() {
        assert!(AppConfig::from_lookup(lookup_from(&[("LOG_LEVEL", "loud")])).is_err());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = AppConfig::from_toml_str(
            r#"
            [hotel]
            name = "Harbour View"
            "#,
        )
        .unwrap();

        assert_eq!(config.hotel.name, "Harbour View");
        assert_eq!(config.hotel.currency_symbol, "₹");
        assert_eq!(config.service.log_level, "warn");
    }

    #[test]
    fn test_from_toml_with_rooms() {
        let config = AppConfig::from_toml_str(
            r#"
            [service]
            log_level = "info"

            [[hotel.rooms]]
            id = 1
            room_type = "Suite"
            price = 4200.0

            [[hotel.rooms]]
            id = 2
            room_type = "Single"
            price = 650.5
            "#,
        )
        .unwrap();

        assert_eq!(config.hotel.rooms.len(), 2);
        assert_eq!(config.hotel.rooms[0], RoomSeed::new(1, "Suite", 4200.0));

        let seeds = config.room_provider().unwrap().seed_rooms().unwrap();
        assert_eq!(seeds, config.hotel.rooms);
    }

    #[test]
    fn test_from_toml_rejects_negative_price() {
        let result = AppConfig::from_toml_str(
            r#"
            [[hotel.rooms]]
            id = 1
            room_type = "Suite"
            price = -10.0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_default_room_provider_is_static() {
        let seeds = AppConfig::default()
            .room_provider()
            .unwrap()
            .seed_rooms()
            .unwrap();
        assert_eq!(seeds.len(), 6);
        assert_eq!(seeds[0], RoomSeed::new(101, "Single", 999.0));
    }

    #[test]
    fn test_validation() {
        let mut config = AppConfig::default();
        config.hotel.currency_symbol = String::new();
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.hotel.name = "  ".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.service.log_level = "INFO".to_string();
        assert!(validate_config(&config).is_ok());
    }

    fn is_configuration_error(err: &anyhow::Error) -> bool {
        matches!(
            err.downcast_ref::<FrontDeskError>(),
            Some(FrontDeskError::ConfigurationError { .. })
        )
    }

    #[test]
    fn test_from_file_missing() {
        let err = AppConfig::from_file("/nonexistent/front-desk.toml").unwrap_err();
        assert!(is_configuration_error(&err));
    }

    #[test]
    fn test_validation_errors_are_typed() {
        let mut config = AppConfig::default();
        config.service.log_level = "loud".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(is_configuration_error(&err));
        assert_eq!(err.to_string(), "Configuration error: Invalid log level: loud");

        let err = AppConfig::from_toml_str("[hotel\nname = 1").unwrap_err();
        assert!(is_configuration_error(&err));
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = AppConfig::default();
        config
            .apply_overrides(ConfigOverrides {
                log_level: Some("info".to_string()),
                debug: false,
                hotel_name: Some("Seaside".to_string()),
                currency: Some("$".to_string()),
            })
            .unwrap();

        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.hotel.name, "Seaside");
        assert_eq!(config.hotel.currency_symbol, "$");
    }

    #[test]
    fn test_debug_override_beats_log_level() {
        let mut config = AppConfig::default();
        config
            .apply_overrides(ConfigOverrides {
                log_level: Some("error".to_string()),
                debug: true,
                ..ConfigOverrides::default()
            })
            .unwrap();

        assert_eq!(config.service.log_level, "debug");
        assert_eq!(config.hotel.name, "SyntecxHub");
    }

    #[test]
    fn test_apply_overrides_revalidates() {
        let mut config = AppConfig::default();
        let err = config
            .apply_overrides(ConfigOverrides {
                currency: Some(String::new()),
                ..ConfigOverrides::default()
            })
            .unwrap_err();
        assert!(is_configuration_error(&err));

        let mut config = AppConfig::default();
        let result = config.apply_overrides(ConfigOverrides {
            log_level: Some("loud".to_string()),
            ..ConfigOverrides::default()
        });
        assert!(result.is_err());

        // A debug flag repairs a bad level before validation runs
        let mut config = AppConfig::default();
        let result = config.apply_overrides(ConfigOverrides {
            log_level: Some("loud".to_string()),
            debug: true,
            ..ConfigOverrides::default()
        });
        assert!(result.is_ok());
    }
}
