use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    // Database
    pub database_url: String,
    pub db_max_connections: u32,

    // API settings
    pub api_host: String,
    pub api_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable has a hardcoded fallback, matching the embedded
    /// deployment where the service must come up on a bare machine with
    /// no `.env` present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a numeric variable is set to a
    /// value that does not parse; unset variables fall back silently.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        // DATABASE_URL wins when set; otherwise compose from parts
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("DB_PORT").unwrap_or_else(|_| "3306".to_string());
            let user = env::var("DB_USER").unwrap_or_else(|_| "root".to_string());
            let password = env::var("DB_PASSWORD").unwrap_or_default();
            let name = env::var("DB_NAME").unwrap_or_else(|_| "loadbank_db".to_string());
            format!("mysql://{user}:{password}@{host}:{port}/{name}")
        });

        Ok(Self {
            database_url,
            db_max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                env::var("DB_MAX_CONNECTIONS").ok(),
                10,
            )?,

            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_port: parse_or("API_PORT", env::var("API_PORT").ok(), 5000)?,
        })
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

/// Parse an optional raw variable value, falling back when it is unset.
/// A value that is present but unparseable is a configuration error, not
/// a silent fallback: a typoed port should be visible at startup.
pub fn parse_or<T: FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        Some(s) => s.parse().map_err(|_| ConfigError::Invalid(name)),
        None => Ok(default),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
