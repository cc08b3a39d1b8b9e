//! HTTP mapping for lookup failures.

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use disclosure_core::LookupError;
use serde::Serialize;

/// Response body for every error: `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct AppError(#[from] LookupError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self(LookupError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self(LookupError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self.0 {
            LookupError::NotFound(detail) | LookupError::Validation(detail) => detail,
            LookupError::Internal(err) => {
                tracing::error!(error = ?err, "Lookup failed");
                "Internal server error".to_string()
            }
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_lookup_error() {
        assert_eq!(
            AppError::from(LookupError::NotFound("Company not found".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(LookupError::Validation("limit".into())).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::from(LookupError::Internal(anyhow::anyhow!("down"))).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn internal_errors_do_not_leak_cause() {
        use http_body_util::BodyExt;

        let resp = AppError::from(LookupError::Internal(anyhow::anyhow!("password auth failed")))
            .into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], "Internal server error");
    }
}
