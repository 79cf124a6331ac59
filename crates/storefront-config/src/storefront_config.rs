//! Storefront configuration
//!
//! Startup preferences loaded from `.storefront.toml`.

use serde::{Deserialize, Serialize};

/// Startup preferences for the storefront
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Start with the dark theme enabled
    #[serde(default)]
    pub dark_mode: bool,

    /// Category selected on startup (e.g. "all", "devices")
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Symbol prepended to prices when they are displayed
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Fill the catalog with the built-in demo products on startup
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

fn default_category() -> String {
    "all".to_string()
}

fn default_currency_symbol() -> String {
    "€".to_string()
}

fn default_seed_demo_data() -> bool {
    true
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            default_category: default_category(),
            currency_symbol: default_currency_symbol(),
            seed_demo_data: default_seed_demo_data(),
        }
    }
}

impl StorefrontConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        match crate::load_config_file() {
            Some(content) => Self::parse(&content),
            None => {
                log::debug!("Using default storefront config");
                Self::default()
            }
        }
    }

    /// Parse config content, falling back to defaults if it is malformed
    pub fn parse(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => {
                log::info!("Loaded storefront config from file");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Self::default()
            }
        }
    }
}
