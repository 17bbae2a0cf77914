// ABOUTME: Configuration loading and validation for the verdant server.
// ABOUTME: Reads listen host/port, agent timeout, and generator limits from environment variables.

use std::time::Duration;

use thiserror::Error;
use verdant_agents::GeneratorDefaults;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),

    #[error("VERDANT_AGENT_TIMEOUT_MS must be a positive integer: {0}")]
    InvalidTimeout(String),

    #[error("VERDANT_MAX_COUNT must be a non-negative integer: {0}")]
    InvalidMaxCount(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct VerdantConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on one tool execution or one whole workflow.
    pub agent_timeout: Duration,
    pub generator: GeneratorDefaults,
}

impl Default for VerdantConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3000,
            agent_timeout: Duration::from_millis(30_000),
            generator: GeneratorDefaults::default(),
        }
    }
}

impl VerdantConfig {
    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - HOST: interface or hostname to listen on (default: localhost)
    /// - PORT: TCP port (default: 3000)
    /// - VERDANT_AGENT_TIMEOUT_MS: per-request execution budget (default: 30000)
    /// - VERDANT_MAX_COUNT: largest collection the generator will build (default: 10000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through `lookup`.
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let host = get("HOST").unwrap_or(defaults.host);

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        let agent_timeout = match get("VERDANT_AGENT_TIMEOUT_MS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => defaults.agent_timeout,
        };

        let mut generator = defaults.generator;
        if let Some(raw) = get("VERDANT_MAX_COUNT") {
            generator.max_count = raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidMaxCount(raw))?;
        }

        Ok(Self {
            host,
            port,
            agent_timeout,
            generator,
        })
    }

    /// `host:port` string suitable for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
