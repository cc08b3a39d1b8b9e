//! Row types decoded by sqlx and their conversion into core entities.
//!
//! Ids are selected as `int8` and timestamps as `timestamp` (no time zone,
//! stored in UTC), so these rows decode against tables created either by
//! [`crate::schema::ensure_schema`] or by an older ORM-managed schema.

use chrono::NaiveDateTime;
use disclosure_core::{Company, Disclosure};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PgCompanyRow {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub market: Option<String>,
    pub sector: Option<String>,
}

impl From<PgCompanyRow> for Company {
    fn from(row: PgCompanyRow) -> Self {
        Company {
            id: row.id,
            code: row.code,
            name: row.name,
            market: row.market,
            sector: row.sector,
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PgDisclosureRow {
    pub id: i64,
    pub company_id: i64,
    pub title: String,
    pub content: Option<String>,
    pub report_date: NaiveDateTime,
    pub filed_date: Option<NaiveDateTime>,
    pub url: Option<String>,
}

impl From<PgDisclosureRow> for Disclosure {
    fn from(row: PgDisclosureRow) -> Self {
        let report_date = row.report_date.and_utc();
        Disclosure {
            id: row.id,
            company_id: row.company_id,
            title: row.title,
            content: row.content,
            report_date,
            // legacy rows may predate the column default
            filed_date: row.filed_date.map_or(report_date, |d| d.and_utc()),
            url: row.url,
        }
    }
}
