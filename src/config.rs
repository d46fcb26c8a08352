//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Build config from the environment.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    ///
    /// # Errors
    ///
    /// Returns `InvalidPort` when `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ServerError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { port })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| ServerError::InvalidPort(value.to_owned())),
    }
}
