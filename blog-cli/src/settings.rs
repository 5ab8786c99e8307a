use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use blog_client::ApiConfig;

pub(crate) const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) api_url: String,
    pub(crate) router_base: String,
    pub(crate) api_connect_timeout_secs: u64,
    pub(crate) api_timeout_secs: u64,
    pub(crate) log_level: String,
}

impl Settings {
    pub(crate) fn from_env() -> Result<Self> {
        let api_url = std::env::var("BLOG_API_URL")
            .map(|value| value.trim().to_string())
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let router_base = std::env::var("BLOG_ROUTER_BASE").unwrap_or_else(|_| "/".to_string());
        let api_connect_timeout_secs = parse_u64_env("BLOG_API_CONNECT_TIMEOUT_SECS", 5)?;
        let api_timeout_secs = parse_u64_env("BLOG_API_TIMEOUT_SECS", 15)?;
        let log_level = resolve_log_level(
            std::env::var("LOG_LEVEL").ok(),
            std::env::var("RUST_LOG").ok(),
        );

        Ok(Self {
            api_url,
            router_base,
            api_connect_timeout_secs,
            api_timeout_secs,
            log_level,
        })
    }

    /// `--server` из командной строки перекрывает `BLOG_API_URL`.
    pub(crate) fn with_server(mut self, server: Option<String>) -> Self {
        if let Some(server) = server {
            self.api_url = server;
        }
        self.api_url = normalize_server(std::mem::take(&mut self.api_url));
        self
    }

    pub(crate) fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_url.clone(),
            connect_timeout: Duration::from_secs(self.api_connect_timeout_secs),
            timeout: Duration::from_secs(self.api_timeout_secs),
        }
    }
}

pub(crate) fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

/// `LOG_LEVEL` важнее `RUST_LOG`; пустые значения пропускаются.
fn resolve_log_level(log_level: Option<String>, rust_log: Option<String>) -> String {
    [log_level, rust_log]
        .into_iter()
        .flatten()
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| "warn".to_string())
}

fn parse_u64_env(key: &str, default: u64) -> Result<u64> {
    let value = std::env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse::<u64>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == 0 {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}
