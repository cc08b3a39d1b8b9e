//! Company handlers.
//!
//! GET /api/companies/search?q=  substring search on name or code
//! GET /api/companies/:company_id  single company

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use disclosure_core::Company;
use serde::Deserialize;

use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

pub async fn search_companies(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Company>>, AppError> {
    let Query(params) = params?;
    let query = params.q.unwrap_or_default();
    let companies = state.companies.search_by_text(&query).await?;
    Ok(Json(companies))
}

pub async fn get_company(
    State(state): State<AppState>,
    company_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Company>, AppError> {
    let Path(company_id) = company_id?;
    let company = state.companies.get_by_id(company_id).await?;
    Ok(Json(company))
}
