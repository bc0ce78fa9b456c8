//! # Terminal Configuration
//!
//! Environment-variable overrides with hard-coded defaults, read once at
//! startup.
//!
//! ## Knobs
//! - `OUTPOST_CATALOG` - path to the inventory CSV (default `data/catalog.csv`)
//! - `OUTPOST_SPELL_API` - base URL of the spell index
//! - `RUST_LOG` - log filter (handled by tracing-subscriber)

use std::env;
use std::path::PathBuf;

use outpost_grimoire::DEFAULT_API_BASE;

/// Default inventory sheet, relative to the working directory.
const DEFAULT_CATALOG_PATH: &str = "data/catalog.csv";

/// Startup configuration for the terminal.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where the inventory sheet lives.
    pub catalog_path: PathBuf,

    /// Base URL of the remote spell index.
    pub spell_api_base: String,
}

impl AppConfig {
    /// Reads configuration from the environment, falling back to the
    /// defaults above.
    pub fn from_env() -> Self {
        let catalog_path = env::var("OUTPOST_CATALOG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CATALOG_PATH));

        let spell_api_base =
            env::var("OUTPOST_SPELL_API").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        AppConfig {
            catalog_path,
            spell_api_base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        // Only meaningful when the vars are unset, which is the common
        // test environment.
        if env::var("OUTPOST_CATALOG").is_err() && env::var("OUTPOST_SPELL_API").is_err() {
            let config = AppConfig::from_env();
            assert_eq!(config.catalog_path, PathBuf::from("data/catalog.csv"));
            assert_eq!(config.spell_api_base, DEFAULT_API_BASE);
        }
    }
}
