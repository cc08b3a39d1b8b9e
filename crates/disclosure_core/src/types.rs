//! Entity shapes returned by the lookups and the typed gateway queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::params::Limit;

/// A listed company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    /// Exchange ticker, e.g. `005930`.
    pub code: String,
    pub name: String,
    /// Venue tag: KOSPI, KOSDAQ, KONEX.
    pub market: Option<String>,
    pub sector: Option<String>,
}

impl Company {
    /// Case-sensitive substring match on `name` or `code`.
    pub fn matches_text(&self, text: &str) -> bool {
        self.name.contains(text) || self.code.contains(text)
    }
}

/// A regulatory disclosure filed by a company.
///
/// `company_id` is not checked against any company at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disclosure {
    pub id: i64,
    pub company_id: i64,
    pub title: String,
    pub content: Option<String>,
    pub report_date: DateTime<Utc>,
    pub filed_date: DateTime<Utc>,
    pub url: Option<String>,
}

/// Gateway predicate for disclosure reads.
///
/// Results are always newest `report_date` first and capped at `limit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureQuery {
    /// `None` matches every company.
    pub company_ids: Option<Vec<i64>>,
    pub limit: usize,
}

impl DisclosureQuery {
    pub fn for_company(company_id: i64, limit: Limit) -> Self {
        Self {
            company_ids: Some(vec![company_id]),
            limit: limit.get(),
        }
    }

    pub fn latest(company_ids: Option<Vec<i64>>, limit: Limit) -> Self {
        Self {
            company_ids,
            limit: limit.get(),
        }
    }

    pub fn matches_company(&self, company_id: i64) -> bool {
        match &self.company_ids {
            Some(ids) => ids.contains(&company_id),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(code: &str, name: &str) -> Company {
        Company {
            id: 1,
            code: code.into(),
            name: name.into(),
            market: None,
            sector: None,
        }
    }

    #[test]
    fn matches_text_on_name_or_code() {
        let c = company("005930", "삼성전자");
        assert!(c.matches_text("삼성"));
        assert!(c.matches_text("0059"));
        assert!(!c.matches_text("LG"));
    }

    #[test]
    fn matches_text_is_case_sensitive() {
        let c = company("035420", "NAVER");
        assert!(c.matches_text("NAV"));
        assert!(!c.matches_text("naver"));
    }

    #[test]
    fn query_without_ids_matches_everything() {
        let q = DisclosureQuery::latest(None, Limit::LATEST_DEFAULT);
        assert!(q.matches_company(1));
        assert!(q.matches_company(9999));
        assert_eq!(q.limit, 20);
    }

    #[test]
    fn query_for_company_matches_only_that_company() {
        let q = DisclosureQuery::for_company(3, Limit::COMPANY_DEFAULT);
        assert!(q.matches_company(3));
        assert!(!q.matches_company(1));
        assert_eq!(q.limit, 10);
    }
}
