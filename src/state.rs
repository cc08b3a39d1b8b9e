//! Shared application state handed to every handler.

use std::sync::Arc;

use anyhow::Result;
use disclosure_core::{
    CompanyLookup, CompanyStore, DisclosureLookup, DisclosureStore, InMemoryStore, ReferenceData,
};
use tracing::warn;

use crate::{config::ServerConfig, middleware::HttpMetrics};

#[derive(Clone)]
pub struct AppState {
    pub companies: Arc<CompanyLookup>,
    pub disclosures: Arc<DisclosureLookup>,
    pub metrics: HttpMetrics,
}

impl AppState {
    pub fn new(
        company_store: Arc<dyn CompanyStore>,
        disclosure_store: Arc<dyn DisclosureStore>,
        reference: Arc<ReferenceData>,
    ) -> Result<Self> {
        Ok(Self {
            companies: Arc::new(CompanyLookup::new(company_store, reference.clone())),
            disclosures: Arc::new(DisclosureLookup::new(disclosure_store, reference)),
            metrics: HttpMetrics::new()?,
        })
    }

    /// State over a single in-memory store.
    pub fn in_memory(store: InMemoryStore, reference: ReferenceData) -> Result<Self> {
        let store = Arc::new(store);
        Self::new(store.clone(), store, Arc::new(reference))
    }
}

/// Wire the lookups to Postgres when configured, else to an empty
/// in-memory store so every read is answered from reference data.
pub async fn build_state(config: &ServerConfig) -> Result<AppState> {
    let reference = Arc::new(config.load_reference_data()?);

    #[cfg(feature = "database")]
    if let Some(db) = &config.database {
        let pool = db.connect().await?;
        if db.bootstrap_schema {
            disclosure_postgres::ensure_schema(&pool).await?;
            tracing::info!("Database schema ensured");
        }
        let stores = disclosure_postgres::PgStores::new(pool);
        return AppState::new(
            Arc::new(stores.companies),
            Arc::new(stores.disclosures),
            reference,
        );
    }

    warn!("DATABASE_URL not set; serving reference data only");
    let store = Arc::new(InMemoryStore::new());
    AppState::new(store.clone(), store, reference)
}
