//! disclosure-service: REST front end for the company and disclosure lookups.
//!
//! The lookups themselves live in `disclosure_core`; this crate adds the
//! axum router, error mapping, request-id and metrics middleware, and
//! environment configuration.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use error::{AppError, ErrorResponse};
pub use router::build_router;
pub use state::{build_state, AppState};
