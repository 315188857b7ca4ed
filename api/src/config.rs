use std::{env, net::SocketAddr};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_SHARE_BASE_URL: &str = "http://localhost:8000/post/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
}

/// Fixed for the life of the process. The share base is never derived from
/// a request's `Host` header.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub share_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Loads `.env` if present, then applies `PORT`. The share base stays
    /// at [`DEFAULT_SHARE_BASE_URL`].
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port))?;
        }
        Ok(config)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
