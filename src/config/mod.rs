//! Configuration module for facefusion-fs.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, TempConfig, TEMP_ROOT_NAME};
pub use validation::{validate_config, validate_temp_config};
