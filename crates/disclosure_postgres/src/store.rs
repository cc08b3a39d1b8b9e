//! Postgres implementations of the disclosure_core gateway ports.
//!
//! Each adapter wraps a PgPool. All SQL is runtime-checked (sqlx::query_as).

use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

use disclosure_core::ports::{CompanyStore, DisclosureStore};
use disclosure_core::{Company, Disclosure, DisclosureQuery, LookupError, Result};

use crate::sqlx_types::{PgCompanyRow, PgDisclosureRow};

fn internal(err: sqlx::Error, what: &'static str) -> LookupError {
    LookupError::Internal(anyhow::Error::new(err).context(what))
}

// ── PgCompanyStore ────────────────────────────────────────────

pub struct PgCompanyStore {
    pool: PgPool,
}

impl PgCompanyStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyStore for PgCompanyStore {
    async fn search(&self, text: &str) -> Result<Vec<Company>> {
        // strpos keeps `%` and `_` in the query literal, unlike LIKE
        let rows = sqlx::query_as::<_, PgCompanyRow>(
            r#"
            SELECT id::int8 AS id, code, name, market, sector
            FROM companies
            WHERE strpos(name, $1) > 0 OR strpos(code, $1) > 0
            ORDER BY id
            "#,
        )
        .bind(text)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| internal(e, "failed to search companies"))?;

        Ok(rows.into_iter().map(Company::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Company>> {
        let row = sqlx::query_as::<_, PgCompanyRow>(
            r#"
            SELECT id::int8 AS id, code, name, market, sector
            FROM companies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| internal(e, "failed to load company by id"))?;

        Ok(row.map(Company::from))
    }
}

// ── PgDisclosureStore ─────────────────────────────────────────

pub struct PgDisclosureStore {
    pool: PgPool,
}

impl PgDisclosureStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DisclosureStore for PgDisclosureStore {
    async fn find(&self, query: &DisclosureQuery) -> Result<Vec<Disclosure>> {
        let limit = i64::try_from(query.limit)
            .context("disclosure limit does not fit in a SQL LIMIT")?;

        let rows = sqlx::query_as::<_, PgDisclosureRow>(
            r#"
            SELECT id::int8 AS id, company_id::int8 AS company_id, title, content,
                   report_date, filed_date, url
            FROM disclosures
            WHERE $1::int8[] IS NULL OR company_id = ANY($1)
            ORDER BY report_date DESC, id
            LIMIT $2
            "#,
        )
        .bind(query.company_ids.as_deref())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| internal(e, "failed to list disclosures"))?;

        Ok(rows.into_iter().map(Disclosure::from).collect())
    }
}

// ── PgStores ──────────────────────────────────────────────────

/// Both gateway adapters over one shared pool.
pub struct PgStores {
    pub companies: PgCompanyStore,
    pub disclosures: PgDisclosureStore,
}

impl PgStores {
    pub fn new(pool: PgPool) -> Self {
        Self {
            companies: PgCompanyStore::new(pool.clone()),
            disclosures: PgDisclosureStore::new(pool),
        }
    }
}
