//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::claims::LifecycleError;
use crate::models::ValidationError;
use crate::reporting::InvalidMonthKey;
use crate::store::StoreError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Invalid claim: {0}")]
    InvalidClaim(String),
    #[error("Invalid request: {0}")]
    InvalidInput(String),
    #[error("Conflict: {0}")]
    StatusFinal(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::NotFound(detail) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                detail.clone(),
            ),
            ApiError::Validation(detail) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION",
                detail.clone(),
            ),
            ApiError::InvalidClaim(detail) => (
                StatusCode::BAD_REQUEST,
                "INVALID_CLAIM",
                detail.clone(),
            ),
            ApiError::InvalidInput(detail) => (
                StatusCode::BAD_REQUEST,
                "INVALID_INPUT",
                detail.clone(),
            ),
            ApiError::StatusFinal(detail) => (
                StatusCode::CONFLICT,
                "STATUS_FINAL",
                detail.clone(),
            ),
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            StoreError::ClaimMissingId => ApiError::Internal(err.to_string()),
            StoreError::LockPoisoned => ApiError::Internal("lock poisoned".into()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<LifecycleError> for ApiError {
    fn from(err: LifecycleError) -> Self {
        match err {
            LifecycleError::InvalidClaim(reason) => ApiError::InvalidClaim(reason),
            LifecycleError::StatusFinal { .. } => ApiError::StatusFinal(err.to_string()),
            LifecycleError::UnsupportedTarget(_) => ApiError::InvalidInput(err.to_string()),
            LifecycleError::Store(e) => ApiError::from(e),
        }
    }
}

impl From<InvalidMonthKey> for ApiError {
    fn from(err: InvalidMonthKey) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use uuid::Uuid;

    use crate::models::ClaimStatus;

    #[tokio::test]
    async fn not_found_returns_404() {
        let response = ApiError::NotFound("patient not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "patient not found");
    }

    #[tokio::test]
    async fn validation_returns_400() {
        let response = ApiError::Validation("full_name must not be blank".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION");
    }

    #[tokio::test]
    async fn invalid_claim_returns_400() {
        let response = ApiError::InvalidClaim("claim has no line items".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "INVALID_CLAIM");
    }

    #[tokio::test]
    async fn status_final_returns_409() {
        let response = ApiError::StatusFinal("claim already accepted".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "STATUS_FINAL");
    }

    #[tokio::test]
    async fn internal_hides_detail_from_client() {
        let response = ApiError::Internal("lock poisoned".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "INTERNAL");
        assert_eq!(json["error"]["message"], "An internal error occurred");
    }

    #[tokio::test]
    async fn store_not_found_maps_to_404() {
        let err = StoreError::NotFound {
            entity: "patient",
            id: Uuid::new_v4(),
        };
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn lock_poisoned_maps_to_500() {
        let response = ApiError::from(StoreError::LockPoisoned).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn lifecycle_status_final_maps_to_409() {
        let err = LifecycleError::StatusFinal {
            id: Uuid::new_v4(),
            status: ClaimStatus::Accepted,
        };
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn lifecycle_unsupported_target_maps_to_400() {
        let err = LifecycleError::UnsupportedTarget(ClaimStatus::Active);
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn month_key_error_maps_to_400() {
        let err = InvalidMonthKey("2024-5".to_string());
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "INVALID_INPUT");
    }
}
