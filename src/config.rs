//! Server configuration from the environment.

use std::{net::SocketAddr, path::PathBuf};

use anyhow::{Context, Result};
use disclosure_core::ReferenceData;
#[cfg(feature = "database")]
use disclosure_postgres::DatabaseConfig;
use tracing::info;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// YAML file replacing the built-in fallback sets.
    pub reference_data_path: Option<PathBuf>,
    /// `None` runs against an empty in-memory gateway.
    #[cfg(feature = "database")]
    pub database: Option<DatabaseConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            reference_data_path: None,
            #[cfg(feature = "database")]
            database: None,
        }
    }
}

impl ServerConfig {
    /// Read `DISCLOSURE_BIND_ADDR`, `REFERENCE_DATA_PATH` and the database
    /// variables.
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("DISCLOSURE_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("invalid DISCLOSURE_BIND_ADDR: {bind_addr}"))?;

        let reference_data_path = std::env::var("REFERENCE_DATA_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            reference_data_path,
            #[cfg(feature = "database")]
            database: DatabaseConfig::from_env(),
        })
    }

    pub fn load_reference_data(&self) -> Result<ReferenceData> {
        match &self.reference_data_path {
            Some(path) => {
                let data = ReferenceData::from_file(path).context("loading reference data")?;
                info!(
                    path = %path.display(),
                    companies = data.companies.len(),
                    disclosures = data.disclosures.len(),
                    "Loaded reference data"
                );
                Ok(data)
            }
            None => Ok(ReferenceData::builtin()),
        }
    }
}
