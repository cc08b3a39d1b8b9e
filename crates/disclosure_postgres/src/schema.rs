//! Idempotent table bootstrap.
//!
//! Creates the tables and indexes when they do not exist. Existing tables are
//! left untouched; there are no migrations.

use sqlx::PgPool;
use tracing::info;

const CREATE_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS companies (
        id         SERIAL PRIMARY KEY,
        code       VARCHAR(20) NOT NULL UNIQUE,
        name       VARCHAR(100) NOT NULL,
        market     VARCHAR(20),
        sector     VARCHAR(50),
        created_at TIMESTAMP DEFAULT (now() AT TIME ZONE 'utc')
    )
    "#,
    r#"CREATE INDEX IF NOT EXISTS ix_companies_code ON companies (code)"#,
    r#"
    CREATE TABLE IF NOT EXISTS disclosures (
        id          SERIAL PRIMARY KEY,
        company_id  INTEGER NOT NULL REFERENCES companies (id),
        title       VARCHAR(200) NOT NULL,
        content     VARCHAR(1000),
        report_date TIMESTAMP NOT NULL,
        filed_date  TIMESTAMP DEFAULT (now() AT TIME ZONE 'utc'),
        url         VARCHAR(500)
    )
    "#,
    r#"CREATE INDEX IF NOT EXISTS ix_disclosures_company_report
       ON disclosures (company_id, report_date DESC)"#,
];

pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in CREATE_STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Database schema ensured (companies, disclosures)");
    Ok(())
}
