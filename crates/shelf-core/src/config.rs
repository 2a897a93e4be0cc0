use serde::Deserialize;
use std::path::Path;

/// Default location of the fallback configuration file.
pub const CONFIG_FILE: &str = "local.toml";

const ENV_JWT_KEY: &str = "JWT_KEY";
const ENV_DB_USER: &str = "DBUser";
const ENV_DB_PASS: &str = "DBPass";
const ENV_DB_HOST: &str = "DBHost";
const ENV_DB_PORT: &str = "DBPort";
const ENV_DB_NAME: &str = "DBName";
const ENV_BIND: &str = "BIND_ADDR";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid database port {0:?}")]
    Port(String),
    #[error("jwt signing key is not configured")]
    MissingKey,
}

/// Process-wide settings: token secret, database coordinates, bind address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub jwt_key: String,
    pub db_user: String,
    pub db_pass: String,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub bind_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jwt_key: String::new(),
            db_user: String::from("postgres"),
            db_pass: String::new(),
            db_host: String::from("localhost"),
            db_port: 5432,
            db_name: String::from("bookshelf"),
            bind_addr: String::from("0.0.0.0:8000"),
        }
    }
}

impl Config {
    /// Environment variables win; the file is only read when none are set.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = match Self::from_lookup(|key| std::env::var(key).ok())? {
            Some(config) => config,
            None => Self::from_file(path)?,
        };
        config.checked()
    }

    /// Builds a config from a key lookup, or `None` if no known key is present.
    pub fn from_lookup<F>(lookup: F) -> Result<Option<Self>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut found = false;
        if let Some(val) = lookup(ENV_JWT_KEY) {
            config.jwt_key = val;
            found = true;
        }
        if let Some(val) = lookup(ENV_DB_USER) {
            config.db_user = val;
            found = true;
        }
        if let Some(val) = lookup(ENV_DB_PASS) {
            config.db_pass = val;
            found = true;
        }
        if let Some(val) = lookup(ENV_DB_HOST) {
            config.db_host = val;
            found = true;
        }
        if let Some(val) = lookup(ENV_DB_PORT) {
            config.db_port = val.trim().parse().map_err(|_| ConfigError::Port(val))?;
            found = true;
        }
        if let Some(val) = lookup(ENV_DB_NAME) {
            config.db_name = val;
            found = true;
        }
        if let Some(val) = lookup(ENV_BIND) {
            config.bind_addr = val;
            found = true;
        }
        Ok(found.then_some(config))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn checked(self) -> Result<Self, ConfigError> {
        if self.jwt_key.is_empty() {
            Err(ConfigError::MissingKey)
        } else {
            Ok(self)
        }
    }

    /// Connection string for `tokio_postgres::connect`.
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_user, self.db_pass, self.db_host, self.db_port, self.db_name
        )
    }
}
