//! Disclosure handlers.
//!
//! GET /api/disclosures/company/:company_id?limit=  one company, newest first
//! GET /api/disclosures/latest?company_ids=&limit=  across companies, newest first

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use disclosure_core::{parse_company_ids, Disclosure, Limit};
use serde::Deserialize;

use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct CompanyDisclosuresParams {
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct LatestParams {
    /// Comma-separated company ids.
    #[serde(default, alias = "companyIds")]
    pub company_ids: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
}

pub async fn list_company_disclosures(
    State(state): State<AppState>,
    company_id: Result<Path<i64>, PathRejection>,
    params: Result<Query<CompanyDisclosuresParams>, QueryRejection>,
) -> Result<Json<Vec<Disclosure>>, AppError> {
    let Path(company_id) = company_id?;
    let Query(params) = params?;
    let limit = Limit::resolve(params.limit, Limit::COMPANY_DEFAULT)?;
    let disclosures = state
        .disclosures
        .list_by_company(company_id, limit)
        .await?;
    Ok(Json(disclosures))
}

pub async fn list_latest_disclosures(
    State(state): State<AppState>,
    params: Result<Query<LatestParams>, QueryRejection>,
) -> Result<Json<Vec<Disclosure>>, AppError> {
    let Query(params) = params?;
    let company_ids = parse_company_ids(params.company_ids.as_deref())?;
    let limit = Limit::resolve(params.limit, Limit::LATEST_DEFAULT)?;
    let disclosures = state.disclosures.list_latest(company_ids, limit).await?;
    Ok(Json(disclosures))
}
