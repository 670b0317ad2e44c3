use std::env;

use errors::Error;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_INDEX_LIMIT: i64 = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Most questions shown on the index page.
    pub index_limit: i64,
}

impl Config {
    pub fn from_env() -> Result<Config, Error> {
        Config::from_vars(|key| env::var(key).ok())
    }

    fn from_vars<F>(var: F) -> Result<Config, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = var("DATABASE_URL")
            .ok_or_else(|| Error::ConfigError("DATABASE_URL must be set".into()))?;

        let bind_address =
            var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let index_limit = match var("POLLS_INDEX_LIMIT") {
            Some(value) => value
                .parse::<i64>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or_else(|| {
                    Error::ConfigError(format!(
                        "POLLS_INDEX_LIMIT must be a positive integer, got {}",
                        value
                    ))
                })?,
            None => DEFAULT_INDEX_LIMIT,
        };

        Ok(Config {
            database_url,
            bind_address,
            index_limit,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: db::MEMORY_DATABASE.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            index_limit: DEFAULT_INDEX_LIMIT,
        }
    }
}
