use std::net::SocketAddr;

use anyhow::Context;

/// Service configuration from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub upstream_base_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("BIND_ADDR must be a socket address")?;
        let upstream_base_url =
            std::env::var("UPSTREAM_BASE_URL").context("UPSTREAM_BASE_URL must be set")?;
        Ok(Self {
            bind_addr,
            upstream_base_url,
        })
    }
}
