use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Handler outcome mapped to a transport status.
///
/// Store failure detail is logged at the call site and never echoed to the
/// caller; validation detail is, matching framework behavior.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No data available for the specified period")]
    NotFound,

    #[error("Invalid request: {detail}")]
    Validation { status: StatusCode, detail: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Server error: {0}")]
    Server(String),
}

impl From<reporting_db::DatabaseError> for ApiError {
    fn from(err: reporting_db::DatabaseError) -> Self {
        ApiError::Database(err.to_string())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation { status, .. } => *status,
            ApiError::Database(_) | ApiError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::NotFound => "No data available for the specified period".to_string(),
            ApiError::Validation { detail, .. } => detail.clone(),
            ApiError::Database(_) | ApiError::Server(_) => "Error processing request".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.detail() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn infrastructure_failures_map_to_500_with_generic_detail() {
        let err = ApiError::Database("connection refused to host db:5432".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        // internal detail must not leak to the caller
        assert_eq!(err.detail(), "Error processing request");
    }

    #[test]
    fn validation_keeps_framework_status_and_detail() {
        let err = ApiError::Validation {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: "invalid type: string \"abc\", expected f64".to_string(),
        };
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.detail().contains("expected f64"));
    }
}
