use serde::Deserialize;
use std::env;
use std::time::Duration;

pub use strike_catalog::PricingConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub booking: BookingEndpointConfig,
    pub session: SessionConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingEndpointConfig {
    pub endpoint: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl BookingEndpointConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_timeout_ms() -> u64 { 5000 }

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    Memory,
    Redis,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub backend: SessionBackend,
    pub ttl_seconds: u64,
    pub redis_url: Option<String>,
}

impl SessionConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Untracked local overrides
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `STRIKE_SERVER__PORT=8080` sets `server.port`
            .add_source(config::Environment::with_prefix("STRIKE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn parse(toml: &str) -> Result<Config, config::ConfigError> {
        config::Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_default_file_parses() {
        let config = parse(include_str!("../../config/default.toml")).unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.session.backend, SessionBackend::Memory);
        assert_eq!(config.session.ttl(), Duration::from_secs(3600));
        assert_eq!(config.booking.timeout(), Duration::from_millis(5000));
        assert_eq!(config.pricing, PricingConfig::default());
    }

    #[test]
    fn test_pricing_and_timeout_defaults() {
        let config = parse(
            r#"
            [server]
            port = 8080
            [booking]
            endpoint = "http://bookings.internal/booking"
            [session]
            backend = "redis"
            ttl_seconds = 60
            redis_url = "redis://cache:6379"
            "#,
        )
        .unwrap();

        assert_eq!(config.booking.timeout_ms, 5000);
        assert_eq!(config.pricing.per_person, 120);
        assert_eq!(config.session.backend, SessionBackend::Redis);
        assert_eq!(config.session.redis_url.as_deref(), Some("redis://cache:6379"));
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let result = parse(
            r#"
            [server]
            port = 8080
            [booking]
            endpoint = "http://x/booking"
            [session]
            backend = "cookie"
            ttl_seconds = 60
            "#,
        );
        assert!(result.is_err());
    }
}
