use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::fetcher::FETCH_TIMEOUT;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub fetch_timeout: Duration,
    pub is_dev: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any variable source; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_port = match lookup("SERVER_PORT") {
            Some(value) => parse_number("SERVER_PORT", value)?,
            None => 8000,
        };

        let fetch_timeout = match lookup("FETCH_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(parse_number("FETCH_TIMEOUT_SECS", value)?),
            None => FETCH_TIMEOUT,
        };

        Ok(Config {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            server_port,
            fetch_timeout,
            is_dev: lookup("APP_ENV").as_deref() != Some("production"),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.server_addr(), "127.0.0.1:8000");
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
        assert!(config.is_dev);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_HOST", "0.0.0.0"),
            ("SERVER_PORT", "9000"),
            ("FETCH_TIMEOUT_SECS", "3"),
            ("APP_ENV", "production"),
        ]))
        .unwrap();
        assert_eq!(config.server_addr(), "0.0.0.0:9000");
        assert_eq!(config.fetch_timeout, Duration::from_secs(3));
        assert!(!config.is_dev);
    }

    #[test]
    fn rejects_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[("SERVER_PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                name: "SERVER_PORT",
                value: "eighty".into()
            }
        );
    }

    #[test]
    fn rejects_invalid_timeout() {
        let err = Config::from_lookup(lookup_from(&[("FETCH_TIMEOUT_SECS", "-1")])).unwrap_err();
        assert!(err.to_string().contains("FETCH_TIMEOUT_SECS"));
    }
}
