//! API configuration

use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Maximum connections in the database pool
    pub db_max_connections: u32,
    /// Log level
    pub log_level: String,
    /// Write the sample dataset before accepting traffic
    pub seed_on_startup: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "postgres://localhost/campaigns".to_string(),
            db_max_connections: 10,
            log_level: "info".to_string(),
            seed_on_startup: true,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    ///
    /// Unset fields keep their defaults. A plain `DATABASE_URL` overrides
    /// `API_DATABASE_URL`.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .set_override_option("database_url", std::env::var("DATABASE_URL").ok())?
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert!(config.seed_on_startup);
    }

    #[test]
    fn test_partial_source_keeps_defaults() {
        let config: ApiConfig = config::Config::builder()
            .set_override("port", 9090)
            .unwrap()
            .set_override("seed_on_startup", false)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.port, 9090);
        assert!(!config.seed_on_startup);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.log_level, "info");
    }
}
