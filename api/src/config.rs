use anyhow::{anyhow, Context, Result};
use reqwest::Url;
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:9999";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub upstream_url: Url,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    ///
    /// `main` loads `.env` before calling this, so values may come from there.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let upstream_url = lookup("UPSTREAM_URL")
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| anyhow!("UPSTREAM_URL environment variable not set"))?;
        let upstream_url = parse_upstream_url(&upstream_url)?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse()
            .with_context(|| format!("BIND_ADDR is not a valid socket address: {}", bind_addr))?;

        Ok(Self {
            upstream_url,
            bind_addr,
        })
    }
}

/// Accepts only absolute `http`/`https` URLs that name a host.
pub fn parse_upstream_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .with_context(|| format!("UPSTREAM_URL is not a valid URL: {}", raw))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(anyhow!("UPSTREAM_URL must use http or https, got {}", other)),
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(anyhow!("UPSTREAM_URL has no host: {}", raw));
    }

    Ok(url)
}
