//! Configuration and file management for the storefront demo
//!
//! This crate provides:
//! - File path utilities for config and cache directories
//! - Configuration file loading (TOML)
//! - Startup preferences (StorefrontConfig)

pub mod config_file;
pub mod paths;
pub mod storefront_config;

pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir};
pub use storefront_config::StorefrontConfig;
