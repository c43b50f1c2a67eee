use std::env;

use crate::{
    endpoint::StorageEndpoint,
    errors::{ConfigError, ConfigResult},
};

pub const ACCOUNT_VAR: &str = "AZURE_STORAGE_ACCOUNT";
pub const CONTAINER_VAR: &str = "AZURE_STORAGE_CONTAINER";
pub const SAS_TOKEN_VAR: &str = "AZURE_STORAGE_SAS_TOKEN";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageEndpoint,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Loads configuration from the process environment, after reading an
    /// optional `.env` file.
    ///
    /// # Errors
    ///
    /// See [`Config::from_lookup`].
    pub fn from_env() -> ConfigResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from `lookup`. Storage values have no
    /// defaults; the listener falls back to `0.0.0.0:3000`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when a storage variable is absent and
    /// [`ConfigError::InvalidPort`] when `PORT` is not a valid port number.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let storage = StorageEndpoint::new(
            required(ACCOUNT_VAR)?,
            required(CONTAINER_VAR)?,
            required(SAS_TOKEN_VAR)?,
        );

        let port = match lookup("PORT") {
            Some(port) => port.parse().map_err(|_| ConfigError::InvalidPort(port))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            storage,
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
            },
        })
    }
}
