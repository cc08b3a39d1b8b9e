//! Read-only gateway port traits.
//! Implemented by disclosure_postgres; lookups depend only on these traits.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Company, Disclosure, DisclosureQuery};

#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// Companies whose `name` or `code` contains `text` (case-sensitive),
    /// in store order.
    async fn search(&self, text: &str) -> Result<Vec<Company>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Company>>;
}

#[async_trait]
pub trait DisclosureStore: Send + Sync {
    /// Disclosures matching `query`, newest `report_date` first, at most
    /// `query.limit` of them.
    async fn find(&self, query: &DisclosureQuery) -> Result<Vec<Disclosure>>;
}
