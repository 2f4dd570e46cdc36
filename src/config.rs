//! Host configuration parsed from environment variables.

use client::config::{ClientConfig, DEFAULT_API_BASE_URL};

pub const DEFAULT_PORT: u16 = 3000;

/// Errors produced while reading host configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub api_base_url: String,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PRIMES_API_BASE_URL`: base URL of the prime service, default
    ///   `http://localhost:8080`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let api_base_url = parse_api_base_url(std::env::var("PRIMES_API_BASE_URL").ok().as_deref());
        Ok(Self { port, api_base_url })
    }

    /// The slice of config handed to the Leptos app.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_base_url)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_api_base_url(raw: Option<&str>) -> String {
    match raw.map(|v| v.trim().trim_end_matches('/')) {
        None | Some("") => DEFAULT_API_BASE_URL.to_owned(),
        Some(url) => url.to_owned(),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
