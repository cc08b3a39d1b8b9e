//! In-process gateway over plain vectors.
//!
//! Serves when no database is configured (every read then falls back to the
//! reference data) and as the test double for the lookups.

use async_trait::async_trait;

use crate::error::Result;
use crate::ports::{CompanyStore, DisclosureStore};
use crate::types::{Company, Disclosure, DisclosureQuery};

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    companies: Vec<Company>,
    disclosures: Vec<Disclosure>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_companies(mut self, companies: Vec<Company>) -> Self {
        self.companies = companies;
        self
    }

    pub fn with_disclosures(mut self, disclosures: Vec<Disclosure>) -> Self {
        self.disclosures = disclosures;
        self
    }
}

#[async_trait]
impl CompanyStore for InMemoryStore {
    async fn search(&self, text: &str) -> Result<Vec<Company>> {
        Ok(self
            .companies
            .iter()
            .filter(|c| c.matches_text(text))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Company>> {
        Ok(self.companies.iter().find(|c| c.id == id).cloned())
    }
}

#[async_trait]
impl DisclosureStore for InMemoryStore {
    async fn find(&self, query: &DisclosureQuery) -> Result<Vec<Disclosure>> {
        let mut matched: Vec<Disclosure> = self
            .disclosures
            .iter()
            .filter(|d| query.matches_company(d.company_id))
            .cloned()
            .collect();
        // stable: equal report dates keep insertion order
        matched.sort_by(|a, b| b.report_date.cmp(&a.report_date));
        matched.truncate(query.limit);
        Ok(matched)
    }
}
