use std::time::Duration;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Simulated recognition latency.
    pub scan_delay_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = var("APP_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match var("APP_PORT") {
            Some(v) => v.parse::<u16>().with_context(|| format!("APP_PORT={v}"))?,
            None => 8080,
        };
        let scan_delay_ms = var("SCAN_DELAY_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(2000);
        Ok(Self {
            host,
            port,
            scan_delay_ms,
        })
    }

    pub fn scan_delay(&self) -> Duration {
        Duration::from_millis(self.scan_delay_ms)
    }
}
