use anyhow::Context;
use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    /// `None` keeps advisors in memory for the life of the process.
    pub db_path: Option<String>,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub default_page_size: u32,
    pub max_page_size: u32,
    /// `json` or `text`.
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            db_path: None,
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            default_page_size: 10,
            max_page_size: 100,
            log_format: "text".to_string(),
        }
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr = match std::env::var("ADVISOR_LISTEN_ADDR") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid ADVISOR_LISTEN_ADDR: {raw}"))?,
            Err(_) => defaults.listen_addr,
        };
        let db_path = std::env::var("ADVISOR_DB_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty());
        let cors_allow = std::env::var("ADVISOR_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = parse_or("ADVISOR_REQUEST_TIMEOUT_MS", 30000);
        let log_format = std::env::var("ADVISOR_LOG_FORMAT")
            .ok()
            .map(|f| f.trim().to_ascii_lowercase())
            .filter(|f| !f.is_empty())
            .unwrap_or(defaults.log_format);

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            default_page_size: parse_or("ADVISOR_DEFAULT_PAGE_SIZE", defaults.default_page_size),
            max_page_size: parse_or("ADVISOR_MAX_PAGE_SIZE", defaults.max_page_size),
            log_format,
        })
    }
}
