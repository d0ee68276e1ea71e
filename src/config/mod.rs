//! Configuration management for the front desk
//!
//! This module handles configuration loading from environment variables
//! and TOML files, validation, and default values.

pub mod app;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ConfigOverrides, HotelSettings, ServiceSettings};
