//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Role-resolution cache configuration.
    #[serde(default)]
    pub role_cache: RoleCacheConfig,
}

/// Role-resolution cache configuration.
///
/// Role lookups are safely cacheable per (user, account); memberships are
/// administered out-of-band, so the TTL bounds how long a revocation can
/// lag.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleCacheConfig {
    /// Maximum number of cached (user, account) entries.
    #[serde(default = "default_cache_capacity")]
    pub capacity: u64,
    /// Entry time-to-live in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,
}

fn default_cache_capacity() -> u64 {
    10_000
}

fn default_cache_ttl_secs() -> u64 {
    30
}

impl Default for RoleCacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("ARCA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
