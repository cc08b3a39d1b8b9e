//! Disclosure Lookup: newest-first disclosure listings with reference fallback.
//!
//! The gateway path always returns records sorted by `report_date`
//! descending. The two fallback paths differ:
//!
//! - per-company listings keep the reference set's declared order and number
//!   records by position within the *filtered* sequence;
//! - the latest feed sorts the filtered reference records newest first and
//!   numbers them by position in the *unfiltered* reference list.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::Result;
use crate::params::Limit;
use crate::ports::DisclosureStore;
use crate::reference::{position_id, DisclosureSeed, ReferenceData};
use crate::types::{Disclosure, DisclosureQuery};

pub struct DisclosureLookup {
    store: Arc<dyn DisclosureStore>,
    reference: Arc<ReferenceData>,
}

impl DisclosureLookup {
    pub fn new(store: Arc<dyn DisclosureStore>, reference: Arc<ReferenceData>) -> Self {
        Self { store, reference }
    }

    pub async fn list_by_company(&self, company_id: i64, limit: Limit) -> Result<Vec<Disclosure>> {
        let query = DisclosureQuery::for_company(company_id, limit);
        let persisted = self.store.find(&query).await?;
        if !persisted.is_empty() {
            return Ok(persisted);
        }

        debug!(company_id, "no persisted disclosures, using reference set");
        let filed_date = Utc::now();
        Ok(self
            .reference
            .disclosures
            .iter()
            .filter(|seed| seed.company_id == company_id)
            .take(query.limit)
            .enumerate()
            .map(|(index, seed)| seed.to_disclosure(position_id(index), filed_date))
            .collect())
    }

    /// Latest disclosures across all companies, or only those in `company_ids`.
    pub async fn list_latest(
        &self,
        company_ids: Option<Vec<i64>>,
        limit: Limit,
    ) -> Result<Vec<Disclosure>> {
        let query = DisclosureQuery::latest(company_ids, limit);
        let persisted = self.store.find(&query).await?;
        if !persisted.is_empty() {
            return Ok(persisted);
        }

        debug!(company_ids = ?query.company_ids, "no persisted disclosures, using reference set");
        Ok(self.latest_from_reference(&query, Utc::now()))
    }

    fn latest_from_reference(
        &self,
        query: &DisclosureQuery,
        filed_date: DateTime<Utc>,
    ) -> Vec<Disclosure> {
        let mut matched: Vec<(usize, &DisclosureSeed)> = self
            .reference
            .disclosures
            .iter()
            .enumerate()
            .filter(|(_, seed)| query.matches_company(seed.company_id))
            .collect();
        matched.sort_by(|(_, a), (_, b)| b.report_date.cmp(&a.report_date));

        matched
            .into_iter()
            .take(query.limit)
            .map(|(index, seed)| seed.to_disclosure(position_id(index), filed_date))
            .collect()
    }
}
