//! API error type and its JSON response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use database::services::course::CourseSaveError;
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

/// Error taxonomy of the API: validation and reference failures are 400,
/// missing rows are 404, rejected tokens are 401, everything else is a 500
/// that echoes the underlying message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    /// A field-level validation failure, rendered as `{field: [messages]}`.
    #[error("invalid {field}")]
    Validation {
        field: &'static str,
        messages: Vec<String>,
    },

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            messages: vec![message.into()],
        }
    }

    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            Self::Validation { field, messages } => {
                let mut map = serde_json::Map::new();
                map.insert(field.to_string(), json!(messages));
                serde_json::Value::Object(map)
            }
            other => json!({ "error": other.to_string() }),
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("request failed: {self}");
        }
        (status, Json(body)).into_response()
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<CourseSaveError> for ApiError {
    fn from(err: CourseSaveError) -> Self {
        match err {
            CourseSaveError::TermNotFound(_) | CourseSaveError::UserNotFound(_) => {
                Self::BadRequest(err.to_string())
            }
            CourseSaveError::Db(db) => Self::from(db),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_status_codes() {
        assert_eq!(
            ApiError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::validation("term_name", "empty").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Unauthorized("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn course_save_errors_map_to_bad_request() {
        let err = ApiError::from(CourseSaveError::TermNotFound(3));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Term not found");

        let err = ApiError::from(CourseSaveError::UserNotFound(9));
        assert_eq!(err.to_string(), "One or more users not found");
    }
}
