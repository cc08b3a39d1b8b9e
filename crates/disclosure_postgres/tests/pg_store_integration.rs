//! Gateway integration tests against a real PostgreSQL database.
//!
//! Each test creates its own scratch schema and drops it afterwards.
//! Run with: DATABASE_URL="postgresql:///disclosures_test" cargo test -p disclosure_postgres --test pg_store_integration -- --ignored --nocapture

use chrono::{NaiveDate, NaiveDateTime};
use disclosure_core::ports::{CompanyStore, DisclosureStore};
use disclosure_core::{DisclosureQuery, Limit};
use disclosure_postgres::{ensure_schema, PgStores};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

struct TestDb {
    pool: PgPool,
    schema: String,
}

impl TestDb {
    async fn new() -> Self {
        let url = std::env::var("TEST_DATABASE_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .expect("DATABASE_URL must be set for integration tests");
        let schema = format!(
            "disclosure_test_{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        );

        let search_path = schema.clone();
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .after_connect(move |conn, _meta| {
                let search_path = search_path.clone();
                Box::pin(async move {
                    sqlx::query(&format!("SET search_path TO {search_path}"))
                        .execute(conn)
                        .await?;
                    Ok(())
                })
            })
            .connect(&url)
            .await
            .expect("failed to connect to test database");

        sqlx::query(&format!("CREATE SCHEMA {schema}"))
            .execute(&pool)
            .await
            .expect("failed to create scratch schema");
        ensure_schema(&pool).await.expect("failed to create tables");

        Self { pool, schema }
    }

    async fn insert_company(&self, code: &str, name: &str) -> i64 {
        sqlx::query_scalar::<_, i32>(
            "INSERT INTO companies (code, name, market) VALUES ($1, $2, 'KOSPI') RETURNING id",
        )
        .bind(code)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .expect("insert company")
        .into()
    }

    async fn insert_disclosure(&self, company_id: i64, title: &str, report_date: NaiveDateTime) {
        sqlx::query(
            "INSERT INTO disclosures (company_id, title, report_date) VALUES ($1::int4, $2, $3)",
        )
        .bind(company_id)
        .bind(title)
        .bind(report_date)
        .execute(&self.pool)
        .await
        .expect("insert disclosure");
    }

    async fn cleanup(self) {
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&self.pool)
            .await
            .ok();
    }
}

fn day(d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 2, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[tokio::test]
#[ignore] // requires DATABASE_URL
async fn company_search_matches_name_or_code_in_id_order() {
    let db = TestDb::new().await;
    let samsung = db.insert_company("005930", "삼성전자").await;
    db.insert_company("000660", "SK하이닉스").await;
    let sdi = db.insert_company("006400", "삼성SDI").await;

    let stores = PgStores::new(db.pool.clone());
    let by_name = stores.companies.search("삼성").await.unwrap();
    assert_eq!(by_name.iter().map(|c| c.id).collect::<Vec<_>>(), vec![samsung, sdi]);

    let by_code = stores.companies.search("0066").await.unwrap();
    assert_eq!(by_code.len(), 1);
    assert_eq!(by_code[0].name, "SK하이닉스");

    // LIKE wildcards are matched literally
    assert!(stores.companies.search("%").await.unwrap().is_empty());

    db.cleanup().await;
}

#[tokio::test]
#[ignore] // requires DATABASE_URL
async fn company_find_by_id_hits_and_misses() {
    let db = TestDb::new().await;
    let id = db.insert_company("035420", "NAVER").await;

    let stores = PgStores::new(db.pool.clone());
    let found = stores.companies.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found.code, "035420");
    assert_eq!(found.market.as_deref(), Some("KOSPI"));
    assert!(stores.companies.find_by_id(id + 1000).await.unwrap().is_none());

    db.cleanup().await;
}

#[tokio::test]
#[ignore] // requires DATABASE_URL
async fn disclosures_are_newest_first_filtered_and_limited() {
    let db = TestDb::new().await;
    let a = db.insert_company("005930", "삼성전자").await;
    let b = db.insert_company("373220", "LG에너지솔루션").await;
    let c = db.insert_company("000660", "SK하이닉스").await;
    db.insert_disclosure(a, "a-old", day(1)).await;
    db.insert_disclosure(a, "a-new", day(20)).await;
    db.insert_disclosure(b, "b-mid", day(10)).await;
    db.insert_disclosure(c, "c-newest", day(25)).await;

    let stores = PgStores::new(db.pool.clone());

    let for_a = stores
        .disclosures
        .find(&DisclosureQuery::for_company(a, Limit::COMPANY_DEFAULT))
        .await
        .unwrap();
    assert_eq!(
        for_a.iter().map(|d| d.title.as_str()).collect::<Vec<_>>(),
        vec!["a-new", "a-old"]
    );

    let latest = stores
        .disclosures
        .find(&DisclosureQuery::latest(Some(vec![a, b]), Limit::new(2).unwrap()))
        .await
        .unwrap();
    assert_eq!(
        latest.iter().map(|d| d.title.as_str()).collect::<Vec<_>>(),
        vec!["a-new", "b-mid"]
    );

    let all = stores
        .disclosures
        .find(&DisclosureQuery::latest(None, Limit::LATEST_DEFAULT))
        .await
        .unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].title, "c-newest");

    db.cleanup().await;
}
