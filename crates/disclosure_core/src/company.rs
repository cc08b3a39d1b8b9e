//! Company Lookup: persisted companies first, reference set second.

use std::sync::Arc;

use tracing::debug;

use crate::error::{LookupError, Result};
use crate::ports::CompanyStore;
use crate::reference::{position_id, ReferenceData};
use crate::types::Company;

pub struct CompanyLookup {
    store: Arc<dyn CompanyStore>,
    reference: Arc<ReferenceData>,
}

impl CompanyLookup {
    pub fn new(store: Arc<dyn CompanyStore>, reference: Arc<ReferenceData>) -> Self {
        Self { store, reference }
    }

    /// Companies whose name or code contains `query`.
    ///
    /// Persisted matches are returned in store order. Otherwise the reference
    /// set is filtered by the same rule, and each match keeps the id of its
    /// position in the *unfiltered* reference list, so the same company gets
    /// the same id from every query and from [`CompanyLookup::get_by_id`].
    pub async fn search_by_text(&self, query: &str) -> Result<Vec<Company>> {
        if query.is_empty() {
            return Err(LookupError::Validation(
                "search query must be at least 1 character".to_string(),
            ));
        }

        let persisted = self.store.search(query).await?;
        if !persisted.is_empty() {
            return Ok(persisted);
        }

        debug!(query, "no persisted company matched, searching reference set");
        Ok(self
            .reference
            .companies
            .iter()
            .enumerate()
            .filter(|(_, seed)| seed.matches_text(query))
            .map(|(index, seed)| seed.to_company(position_id(index)))
            .collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Company> {
        if let Some(company) = self.store.find_by_id(id).await? {
            return Ok(company);
        }

        self.reference
            .company_at(id)
            .ok_or_else(|| LookupError::NotFound("Company not found".to_string()))
    }
}
