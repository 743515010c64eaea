use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::features::regions::repositories::RepositoryError;
use crate::shared::constants::{MESSAGE_NOT_FOUND, MESSAGE_SOMETHING_WENT_WRONG};
use crate::shared::types::ErrorResponse;

/// Error kinds surfaced by every service operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AppError {
    /// The requested identifier does not exist
    #[error("data with given params not found")]
    DataNotFound,

    /// Any other storage failure (connectivity, malformed query, scan failure)
    #[error("repository error happened")]
    Repository,
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::QueryNotFound => AppError::DataNotFound,
            RepositoryError::Database(_) => AppError::Repository,
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DataNotFound => StatusCode::NOT_FOUND,
            AppError::Repository => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed client-facing message; internal error text is never exposed
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::DataNotFound => MESSAGE_NOT_FOUND,
            AppError::Repository => MESSAGE_SOMETHING_WENT_WRONG,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            message: self.public_message().to_string(),
        });

        (self.status_code(), body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
