//! Database connection settings
//!
//! The crate never opens a connection itself. These settings are checked and
//! rendered into a DSN for the collaborator that runs the description query.

use super::ConfigError;
use std::collections::BTreeMap;
use std::fmt;

/// Keys every `[database]` section must define
pub const REQUIRED_KEYS: [&str; 6] = ["driver", "host", "db_name", "charset", "user", "password"];

#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub driver: String,
    pub host: String,
    pub db_name: String,
    pub charset: String,
    pub user: String,
    pub password: String,
}

impl DatabaseSettings {
    /// Build settings from a raw key/value section.
    ///
    /// Every key in [`REQUIRED_KEYS`] must be present; all missing keys are
    /// reported at once. Unknown keys are ignored.
    pub fn from_map(section: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        let missing: Vec<String> = REQUIRED_KEYS
            .iter()
            .filter(|key| !section.contains_key(**key))
            .map(|key| key.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingKeys(missing));
        }

        let get = |key: &str| section.get(key).cloned().unwrap_or_default();
        Ok(Self {
            driver: get("driver"),
            host: get("host"),
            db_name: get("db_name"),
            charset: get("charset"),
            user: get("user"),
            password: get("password"),
        })
    }

    /// Data source name in `driver:host=..;dbname=..;charset=..` form
    pub fn dsn(&self) -> String {
        format!(
            "{}:host={};dbname={};charset={}",
            self.driver, self.host, self.db_name, self.charset
        )
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("driver", &self.driver)
            .field("host", &self.host)
            .field("db_name", &self.db_name)
            .field("charset", &self.charset)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn complete() -> BTreeMap<String, String> {
        section(&[
            ("driver", "mysql"),
            ("host", "localhost"),
            ("db_name", "dealership"),
            ("charset", "utf8mb4"),
            ("user", "app"),
            ("password", "s3cret"),
        ])
    }

    #[test]
    fn test_from_map_and_dsn() {
        let settings = DatabaseSettings::from_map(&complete()).unwrap();
        assert_eq!(
            settings.dsn(),
            "mysql:host=localhost;dbname=dealership;charset=utf8mb4"
        );
    }

    #[test]
    fn test_missing_keys_are_all_reported() {
        let mut raw = complete();
        raw.remove("host");
        raw.remove("password");
        let err = DatabaseSettings::from_map(&raw).unwrap_err();
        match err {
            ConfigError::MissingKeys(keys) => assert_eq!(keys, vec!["host", "password"]),
            other => panic!("Expected MissingKeys, got {other:?}"),
        }
    }

    #[test]
    fn test_debug_redacts_password() {
        let settings = DatabaseSettings::from_map(&complete()).unwrap();
        let debug = format!("{settings:?}");
        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("<redacted>"));
    }
}
