//! HTTP error mapping.
//!
//! Every failure leaves the API as `{"error": "<message>"}`. Bad input from
//! the client (body, path, or query) is a 422; anything the store does wrong
//! is a 500.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request did not match the expected shape or types.
    #[error("{0}")]
    Validation(String),
    /// The store failed or could not be reached.
    #[error("{0}")]
    Database(quicknotes_core::Error),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<quicknotes_core::Error> for ApiError {
    fn from(err: quicknotes_core::Error) -> Self {
        ApiError::Database(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Validation(msg) => {
                warn!(subsystem = "api", error = %msg, "Request validation failed");
            }
            ApiError::Database(err) => {
                error!(
                    subsystem = "api",
                    error = %err,
                    connectivity = err.is_connectivity(),
                    "Store operation failed"
                );
            }
        }

        let body = Json(serde_json::json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_is_unprocessable() {
        let err = ApiError::Validation("bad".to_string());
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "bad");
    }

    #[test]
    fn test_database_is_internal_error() {
        let err: ApiError = quicknotes_core::Error::Database(sqlx::Error::PoolTimedOut).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("Database error:"));
    }

    #[test]
    fn test_every_core_error_is_internal_error() {
        let err: ApiError = quicknotes_core::Error::Config("bad port".to_string()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Configuration error: bad port");
    }

    #[tokio::test]
    async fn test_response_body_shape() {
        let response = ApiError::Validation("text must be a string".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value, serde_json::json!({"error": "text must be a string"}));
    }
}
