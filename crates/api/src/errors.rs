use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hostscope_domain::DomainError;

use crate::dto::ApiResponse;

pub enum ApiError {
    Domain(DomainError),
    /// Request could not be parsed before reaching a use case.
    BadRequest(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    pub fn status_and_message(&self) -> (StatusCode, String) {
        let err = match self {
            ApiError::BadRequest(message) => return (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::Domain(err) => err,
        };

        match err {
            DomainError::InvalidDomainName(_) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),

            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),

            DomainError::LookupFailed { .. } => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),

            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(ApiResponse::<()>::failure(message))).into_response()
    }
}
