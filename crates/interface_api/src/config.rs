//! API configuration

use std::time::Duration;

use serde::Deserialize;

use domain_claims::ClaimValidation;
use domain_policy::{ExpirationRules, PolicyError, SweepConfig};
use infra_db::DatabaseConfig;

/// API configuration
///
/// Every key can be set through an `API_`-prefixed environment variable,
/// e.g. `API_PORT=9090` or `API_CLAIM_VALIDATION=permissive`. Missing keys
/// take their default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Upper bound on pooled connections
    pub database_max_connections: u32,
    /// Connections kept open while idle
    pub database_min_connections: u32,
    /// How long a request waits for a pooled connection
    pub database_acquire_timeout_secs: u64,
    /// Log level
    pub log_level: String,
    /// Pause between expiration sweep cycles
    pub sweep_interval_secs: u64,
    /// How long after expiration a notice is still raised
    pub expiry_detection_window_secs: i64,
    /// Offset from midnight of the end date to the expiration moment
    pub expiry_notification_lag_secs: i64,
    /// Validation applied when filing claims
    pub claim_validation: ClaimValidation,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: infra_db::pool::DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: 10,
            database_min_connections: 2,
            database_acquire_timeout_secs: 30,
            log_level: "info".to_string(),
            sweep_interval_secs: 5,
            expiry_detection_window_secs: 3600,
            expiry_notification_lag_secs: 86_400,
            claim_validation: ClaimValidation::Strict,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the connection pool settings
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(&self.database_url)
            .max_connections(self.database_max_connections)
            .min_connections(self.database_min_connections)
            .acquire_timeout(Duration::from_secs(self.database_acquire_timeout_secs))
    }

    /// Builds the expiration sweep settings
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::InvalidConfiguration` for a zero interval, a
    /// negative lag or window, or a value too large to represent
    pub fn sweep_config(&self) -> Result<SweepConfig, PolicyError> {
        let rules = ExpirationRules::new(
            seconds("expiry_notification_lag_secs", self.expiry_notification_lag_secs)?,
            seconds("expiry_detection_window_secs", self.expiry_detection_window_secs)?,
        )?;
        SweepConfig::new(Duration::from_secs(self.sweep_interval_secs), rules)
    }
}

fn seconds(key: &str, value: i64) -> Result<chrono::Duration, PolicyError> {
    chrono::Duration::try_seconds(value)
        .ok_or_else(|| PolicyError::invalid_configuration(format!("{key} is out of range: {value}")))
}
