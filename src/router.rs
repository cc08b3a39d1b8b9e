//! Router construction for the disclosure service.

use axum::{middleware as axum_mw, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::{propagate_request_id, track_metrics};
use crate::state::AppState;

/// Build the full axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Companies
        .route(
            "/api/companies/search",
            get(handlers::companies::search_companies),
        )
        .route(
            "/api/companies/:company_id",
            get(handlers::companies::get_company),
        )
        // Disclosures
        .route(
            "/api/disclosures/company/:company_id",
            get(handlers::disclosures::list_company_disclosures),
        )
        .route(
            "/api/disclosures/latest",
            get(handlers::disclosures::list_latest_disclosures),
        );

    let service = Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        .route("/metrics", get(handlers::health::metrics));

    // Layers wrap outward: trace span, then request id, then metrics.
    service
        .merge(api)
        .layer(axum_mw::from_fn_with_state(
            state.metrics.clone(),
            track_metrics,
        ))
        .layer(axum_mw::from_fn(propagate_request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
