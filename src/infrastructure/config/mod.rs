// ============================================================
// CONFIG LOADING
// ============================================================
// Layered import configuration: defaults <- TOML file <- environment

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;

use crate::domain::csv::ImportConfig;
use crate::domain::error::{ImportError, Result};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "td-import.toml";

/// Environment variable prefix, e.g. `TD_IMPORT_DELIMITER=";"`
pub const ENV_PREFIX: &str = "TD_IMPORT_";

/// Load the import configuration. An explicit file path overrides the
/// default file lookup; environment variables win over the file.
pub fn load_config(file: Option<&Path>) -> Result<ImportConfig> {
    let figment = Figment::from(Serialized::defaults(ImportConfig::default()));

    let figment = match file {
        Some(path) => figment.merge(Toml::file(path)),
        None => figment.merge(Toml::file(CONFIG_FILE)),
    };

    let config: ImportConfig = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .map_err(|e| ImportError::ConfigError(e.to_string()))?;

    config.validate().map_err(ImportError::ConfigError)?;
    Ok(config)
}
