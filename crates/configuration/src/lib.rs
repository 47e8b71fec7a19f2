use crate::error::ConfigError;
use std::path::PathBuf;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{is_valid_database_name, DatabaseSettings};

/// The environment prefix for the database settings (`DB_HOST`, `DB_PORT`, ...).
pub const ENV_PREFIX: &str = "DB";

/// The settings together with the `.env` file they were read from, if any.
///
/// Loading happens before logging is set up, so the caller reports
/// `env_file` once it can.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub settings: DatabaseSettings,
    pub env_file: Option<PathBuf>,
}

/// Loads the database settings from `.env` and the process environment.
///
/// This is the only place the application touches the environment. A missing
/// `.env` file is fine; variables may come from the real environment instead.
pub fn load_config() -> Result<LoadedConfig, ConfigError> {
    load_config_with_prefix(ENV_PREFIX)
}

/// Same as [`load_config`], reading `{prefix}_HOST`, `{prefix}_PORT` and so on.
pub fn load_config_with_prefix(prefix: &str) -> Result<LoadedConfig, ConfigError> {
    let env_file = load_env_file()?;
    let settings = DatabaseSettings::from_environment(config::Environment::with_prefix(prefix))?;
    Ok(LoadedConfig { settings, env_file })
}

/// Reads `.env` from the working directory or one of its parents into the
/// process environment. `Ok(None)` when there is no such file.
pub fn load_env_file() -> Result<Option<PathBuf>, ConfigError> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_file_is_optional() {
        // Whether or not a `.env` exists above the crate, loading must not fail.
        let found = load_env_file().unwrap();
        if let Some(path) = found {
            assert!(path.ends_with(".env"));
        }
    }
}
