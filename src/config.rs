//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid {var}: {value:?} ({reason})")]
    InvalidVar { var: &'static str, value: String, reason: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Overrides the Leptos `site_root` the bundle is served from.
    pub site_root: Option<PathBuf>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, site_root: None }
    }
}

impl HostConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `SITE_ROOT`: directory holding the compiled `pkg/` bundle
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let site_root = parse_site_root(lookup("SITE_ROOT").as_deref())?;
        Ok(Self { port, site_root })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, HostError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    raw.parse::<u16>().map_err(|e| HostError::InvalidVar {
        var: "PORT",
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

fn parse_site_root(raw: Option<&str>) -> Result<Option<PathBuf>, HostError> {
    match raw {
        None => Ok(None),
        Some(v) if v.trim().is_empty() => Err(HostError::InvalidVar {
            var: "SITE_ROOT",
            value: v.to_string(),
            reason: "must not be blank".into(),
        }),
        Some(v) => Ok(Some(PathBuf::from(v.trim()))),
    }
}
