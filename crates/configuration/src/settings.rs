use crate::error::ConfigError;
use serde::Deserialize;
use std::fmt;

/// MySQL's limit on schema name length.
const MAX_DATABASE_NAME_LEN: usize = 64;

/// Connection parameters for the market database.
#[derive(Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Host name or address of the MySQL server.
    pub host: String,
    /// TCP port of the MySQL server. Defaults to 3306.
    #[serde(default = "default_port")]
    pub port: u16,
    pub user: String,
    pub password: String,
    /// The schema to create (if absent) and use for the session.
    pub name: String,
}

fn default_port() -> u16 {
    3306
}

impl DatabaseSettings {
    /// Deserializes and validates the settings from an environment source.
    pub fn from_environment(source: config::Environment) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize::<DatabaseSettings>()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::ValidationError("database host must not be empty".to_string()));
        }
        if !is_valid_database_name(&self.name) {
            return Err(ConfigError::ValidationError(format!(
                "database name '{}' must be 1-{} ASCII letters, digits or underscores",
                self.name, MAX_DATABASE_NAME_LEN
            )));
        }
        Ok(())
    }
}

// The password stays out of logs and panic messages.
impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"********")
            .field("name", &self.name)
            .finish()
    }
}

/// The database name is spliced into `CREATE DATABASE` and `USE`, which take
/// no bound parameters, so only plain identifiers are allowed.
pub fn is_valid_database_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_DATABASE_NAME_LEN
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn environment(vars: &[(&str, &str)]) -> config::Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix("DB").source(Some(map))
    }

    #[test]
    fn reads_all_settings_from_prefixed_variables() {
        let settings = DatabaseSettings::from_environment(environment(&[
            ("DB_HOST", "db.local"),
            ("DB_PORT", "3307"),
            ("DB_USER", "market"),
            ("DB_PASSWORD", "007"),
            ("DB_NAME", "mercado"),
        ]))
        .unwrap();

        assert_eq!(settings.host, "db.local");
        assert_eq!(settings.port, 3307);
        assert_eq!(settings.user, "market");
        assert_eq!(settings.password, "007");
        assert_eq!(settings.name, "mercado");
    }

    #[test]
    fn port_defaults_to_mysql_standard() {
        let settings = DatabaseSettings::from_environment(environment(&[
            ("DB_HOST", "localhost"),
            ("DB_USER", "root"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "mercado"),
        ]))
        .unwrap();
        assert_eq!(settings.port, 3306);
    }

    #[test]
    fn missing_variables_fail_to_load() {
        let source = environment(&[("DB_HOST", "localhost")]);
        let err = DatabaseSettings::from_environment(source).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }

    #[test]
    fn database_name_must_be_an_identifier() {
        let err = DatabaseSettings::from_environment(environment(&[
            ("DB_HOST", "localhost"),
            ("DB_USER", "root"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "mercado; DROP DATABASE mysql"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));

        assert!(is_valid_database_name("market_2024"));
        assert!(!is_valid_database_name(""));
        assert!(!is_valid_database_name("my-db"));
        assert!(!is_valid_database_name(&"x".repeat(65)));
    }

    #[test]
    fn debug_output_hides_the_password() {
        let settings = DatabaseSettings {
            host: "localhost".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: "hunter2".to_string(),
            name: "mercado".to_string(),
        };
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("mercado"));
    }
}
