use thiserror::Error;

pub type Result<T> = std::result::Result<T, LookupError>;

/// Failure taxonomy shared by both lookup services.
///
/// Empty result sets are never errors; callers get an empty `Vec` instead.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    /// Gateway failure. Propagated as-is, never retried.
    #[error("internal: {0}")]
    Internal(#[from] anyhow::Error),
}

impl LookupError {
    pub fn http_status(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 422,
            Self::Internal(_) => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}
