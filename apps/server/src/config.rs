use anyhow::Context;
use std::{net::SocketAddr, path::PathBuf, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// CSV table replacing the bundled WHO 2006 dataset
    pub reference_path: Option<PathBuf>,
    /// JSON `GrowthConfig` overriding the engine defaults
    pub growth_config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            reference_path: None,
            growth_config_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("KT_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid KT_LISTEN_ADDR")?;
        let cors_allow = std::env::var("KT_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let request_timeout = parse_timeout_ms(
            &std::env::var("KT_REQUEST_TIMEOUT_MS").unwrap_or_else(|_| "30000".into()),
        )?;
        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout,
            reference_path: optional_path("KT_REFERENCE_PATH"),
            growth_config_path: optional_path("KT_GROWTH_CONFIG_PATH"),
        })
    }
}

fn optional_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn parse_timeout_ms(raw: &str) -> anyhow::Result<Duration> {
    let ms: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("Invalid KT_REQUEST_TIMEOUT_MS: {:?}", raw))?;
    Ok(Duration::from_millis(ms))
}
