use crate::source::SourceTable;
use number_window::DEFAULT_WINDOW_SIZE;
use std::{env, net::SocketAddr, str::FromStr, time::Duration};
use thiserror::Error;

const DEFAULT_PORT: u16 = 9876;
const DEFAULT_FETCH_TIMEOUT_MS: u64 = 500;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 1000;
const DEFAULT_SOURCE_BASE_URL: &str = "http://20.244.56.144/evaluation-service";

/// Service configuration, read from the process environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub window_size: usize,
    /// Budget for a single upstream retrieval.
    pub fetch_timeout: Duration,
    /// Budget for a whole HTTP request.
    pub request_timeout: Duration,
    pub source_base_url: String,
    pub bearer_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup; unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bearer_token = lookup("BEARER_TOKEN")
            .filter(|t| !t.is_empty())
            .or_else(|| lookup("API_TOKEN").filter(|t| !t.is_empty()));

        Ok(Self {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            window_size: parse_or(&lookup, "WINDOW_SIZE", DEFAULT_WINDOW_SIZE)?,
            fetch_timeout: Duration::from_millis(parse_or(
                &lookup,
                "FETCH_TIMEOUT_MS",
                DEFAULT_FETCH_TIMEOUT_MS,
            )?),
            request_timeout: Duration::from_millis(parse_or(
                &lookup,
                "REQUEST_TIMEOUT_MS",
                DEFAULT_REQUEST_TIMEOUT_MS,
            )?),
            source_base_url: lookup("NUMBER_SOURCE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_SOURCE_BASE_URL.to_string()),
            bearer_token,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn source_table(&self) -> SourceTable {
        SourceTable::with_base_url(&self.source_base_url)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        }),
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for environment variable {key}")]
    InvalidValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceId;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 9876);
        assert_eq!(config.window_size, 10);
        assert_eq!(config.fetch_timeout, Duration::from_millis(500));
        assert_eq!(config.request_timeout, Duration::from_millis(1000));
        assert_eq!(config.bearer_token, None);
        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:9876");
        assert_eq!(
            config.source_table().endpoint(SourceId::Fibonacci),
            Some("http://20.244.56.144/evaluation-service/fibo")
        );
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("WINDOW_SIZE", " 25 "),
            ("FETCH_TIMEOUT_MS", "250"),
            ("NUMBER_SOURCE_BASE_URL", "http://localhost:3000"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.window_size, 25);
        assert_eq!(config.fetch_timeout, Duration::from_millis(250));
        assert_eq!(
            config.source_table().endpoint(SourceId::Even),
            Some("http://localhost:3000/even")
        );
    }

    #[test]
    fn test_token_fallback() {
        let config = config_from(&[("API_TOKEN", "fallback")]).unwrap();
        assert_eq!(config.bearer_token.as_deref(), Some("fallback"));

        let config = config_from(&[
            ("BEARER_TOKEN", "primary"),
            ("API_TOKEN", "fallback"),
        ])
        .unwrap();
        assert_eq!(config.bearer_token.as_deref(), Some("primary"));

        let config = config_from(&[("BEARER_TOKEN", ""), ("API_TOKEN", "fallback")]).unwrap();
        assert_eq!(config.bearer_token.as_deref(), Some("fallback"));
    }

    #[test]
    fn test_invalid_value() {
        let err = config_from(&[("WINDOW_SIZE", "ten")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value 'ten' for environment variable WINDOW_SIZE"
        );
        assert!(config_from(&[("PORT", "70000")]).is_err());
    }
}
