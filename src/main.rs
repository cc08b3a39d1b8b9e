//! disclosure_service: company and disclosure lookup server.
//!
//! Reads config from env vars (a `.env` file is honoured):
//!   DISCLOSURE_BIND_ADDR : listen address (default: 0.0.0.0:8000)
//!   DATABASE_URL : Postgres connection string (optional)
//!   DATABASE_POOL_SIZE : max pool connections (default: 10)
//!   DATABASE_BOOTSTRAP_SCHEMA : create missing tables at startup (default: true)
//!   REFERENCE_DATA_PATH : YAML file replacing the built-in fallback data

use anyhow::Context;
use disclosure_service::{build_router, build_state, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "disclosure_service=info,disclosure_postgres=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let state = build_state(&config).await?;
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("disclosure_service listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
