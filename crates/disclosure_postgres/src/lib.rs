//! disclosure_postgres: PostgreSQL gateway for the company and disclosure lookups.

pub mod config;
pub mod schema;
pub mod sqlx_types;
pub mod store;

pub use config::{mask_database_url, DatabaseConfig};
pub use schema::ensure_schema;
pub use store::{PgCompanyStore, PgDisclosureStore, PgStores};
