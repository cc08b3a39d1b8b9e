//! Connection pool configuration and setup.

use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::{info, warn};

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub connection_timeout: Duration,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
    /// Create the tables at startup if they are missing.
    pub bootstrap_schema: bool,
}

impl DatabaseConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 10,
            connection_timeout: Duration::from_secs(30),
            idle_timeout: Some(Duration::from_secs(600)), // 10 minutes
            max_lifetime: Some(Duration::from_secs(1800)), // 30 minutes
            bootstrap_schema: true,
        }
    }

    /// Read `DATABASE_URL`, `DATABASE_POOL_SIZE` and `DATABASE_BOOTSTRAP_SCHEMA`.
    ///
    /// Returns `None` when `DATABASE_URL` is unset or blank.
    pub fn from_env() -> Option<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())?;

        Some(Self::new(database_url).with_overrides(
            std::env::var("DATABASE_POOL_SIZE").ok().as_deref(),
            std::env::var("DATABASE_BOOTSTRAP_SCHEMA").ok().as_deref(),
        ))
    }

    /// Apply raw pool-size and bootstrap-flag values. Malformed values are
    /// logged and leave the default in place.
    pub fn with_overrides(mut self, pool_size: Option<&str>, bootstrap_schema: Option<&str>) -> Self {
        if let Some(raw) = pool_size {
            match raw.trim().parse::<u32>() {
                Ok(size) if size > 0 => self.max_connections = size,
                _ => warn!(
                    value = raw,
                    default = self.max_connections,
                    "Ignoring invalid DATABASE_POOL_SIZE"
                ),
            }
        }
        if let Some(raw) = bootstrap_schema {
            match parse_flag(raw) {
                Some(flag) => self.bootstrap_schema = flag,
                None => warn!(
                    value = raw,
                    default = self.bootstrap_schema,
                    "Ignoring invalid DATABASE_BOOTSTRAP_SCHEMA"
                ),
            }
        }
        self
    }

    /// Open the connection pool.
    pub async fn connect(&self) -> Result<PgPool, sqlx::Error> {
        info!(
            "Connecting to database: {}",
            mask_database_url(&self.database_url)
        );

        let mut pool_options = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.connection_timeout);

        if let Some(idle_timeout) = self.idle_timeout {
            pool_options = pool_options.idle_timeout(idle_timeout);
        }

        if let Some(max_lifetime) = self.max_lifetime {
            pool_options = pool_options.max_lifetime(max_lifetime);
        }

        let pool = pool_options
            .connect(&self.database_url)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                e
            })?;

        info!(
            max_connections = self.max_connections,
            "Database connection pool created successfully"
        );
        Ok(pool)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Mask sensitive information in database URL for logging
pub fn mask_database_url(url: &str) -> String {
    if let Ok(parsed) = url::Url::parse(url) {
        let mut masked = parsed.clone();
        if parsed.password().is_some() {
            let _ = masked.set_password(Some("***"));
        }
        masked.to_string()
    } else {
        // unparseable: keep only the ends
        let chars: Vec<char> = url.chars().collect();
        if chars.len() > 20 {
            let head: String = chars[..10].iter().collect();
            let tail: String = chars[chars.len() - 10..].iter().collect();
            format!("{head}***{tail}")
        } else {
            "***".to_string()
        }
    }
}
