use std::env;

use crate::error::{Error, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4000;

/// Listener configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `HOST` and `PORT`. Unset or blank variables fall back to the defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match var("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => port,
                Err(_) => return Err(Error::Config { key: "PORT", value: raw }),
            },
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
