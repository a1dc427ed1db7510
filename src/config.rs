//! Host configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidConfig`] when a variable is set but
    /// does not parse.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidConfig`] for unparseable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let port = parse_var(&lookup, "PORT", DEFAULT_PORT)?;
        let bind_addr = parse_var(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)?;
        Ok(Self { bind_addr, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ServerError> {
    match lookup(var) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map_err(|_| ServerError::InvalidConfig { var, value: raw })
        }
        _ => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
