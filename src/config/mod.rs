//! Configuration module for vidgrab.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Platform and platform-selector definitions
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, InstagramConfig, OptionsConfig, YouTubeConfig};
pub use modes::{Platform, PlatformSelector};
pub use validation::validate_config;
