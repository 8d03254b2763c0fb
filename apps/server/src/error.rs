use advisor_core::errors::Error as CoreError;
use advisor_core::ErrorKind;
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ProblemDetails;

const PROBLEM_JSON: &str = "application/problem+json";
const DATABASE_DETAIL: &str = "A database error occurred. Please contact support.";
const UNEXPECTED_DETAIL: &str = "An unexpected error occurred. Please try again later.";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    /// The request could not be decoded (body, path or query).
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    fn problem(&self) -> (StatusCode, &'static str, String) {
        let core = match self {
            ApiError::BadRequest(reason) => {
                return (StatusCode::BAD_REQUEST, "Request Error", reason.clone())
            }
            ApiError::Core(e) => e,
        };
        match core.kind() {
            ErrorKind::NullInput => (StatusCode::BAD_REQUEST, "Request Error", core.to_string()),
            ErrorKind::Validation => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation Error",
                core.to_string(),
            ),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "Not Found", core.to_string()),
            ErrorKind::Storage => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Database Error",
                DATABASE_DETAIL.to_string(),
            ),
            ErrorKind::Unexpected => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                UNEXPECTED_DETAIL.to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, title, detail) = self.problem();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        }

        let body = Json(ProblemDetails {
            title: title.to_string(),
            status: status.as_u16(),
            detail,
        });
        let mut response = (status, body).into_response();
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON));
        response
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
