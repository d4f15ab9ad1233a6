//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

use crate::error::HostError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Address the HTTP listener binds.
    pub addr: SocketAddr,
}

impl HostConfig {
    /// Build host config from the environment.
    ///
    /// Optional:
    /// - `PORT`: overrides the port of `site_addr`, binding all interfaces
    pub fn from_env(site_addr: SocketAddr) -> Result<Self, HostError> {
        Self::from_port(site_addr, std::env::var("PORT").ok().as_deref())
    }

    fn from_port(site_addr: SocketAddr, port: Option<&str>) -> Result<Self, HostError> {
        let Some(raw) = port.map(str::trim).filter(|p| !p.is_empty()) else {
            return Ok(Self { addr: site_addr });
        };
        let port: u16 = raw.parse().map_err(|_| HostError::ConfigParse(format!("invalid PORT: {raw}")))?;
        Ok(Self { addr: SocketAddr::from(([0, 0, 0, 0], port)) })
    }
}
