use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Every failure a tab can show inline
/// 
/// Nothing here is fatal: each variant becomes a JSON body the page renders
/// next to the form that triggered it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed form input
    #[error("{0}")]
    Validation(String),
    
    /// An integration is not configured or failed to initialise
    #[error("{0}")]
    NotConfigured(String),
    
    /// The external service call failed
    #[error("{0}")]
    Upstream(String),
    
    /// The request did not finish within the server timeout
    #[error("{0}")]
    Timeout(String),
    
    #[error("Internal server error")]
    Internal,
}

/// How the page should style an inline message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Warning,
    Error,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub kind: MessageKind,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
    
    pub fn kind(&self) -> MessageKind {
        match self {
            ApiError::Validation(_) => MessageKind::Warning,
            _ => MessageKind::Error,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(msg) => {
                tracing::debug!("Validation failed: {}", msg);
            }
            ApiError::NotConfigured(msg) => {
                tracing::warn!("Integration unavailable: {}", msg);
            }
            ApiError::Upstream(msg) => {
                tracing::error!("Upstream error: {}", msg);
            }
            ApiError::Timeout(msg) => {
                tracing::error!("Request timed out: {}", msg);
            }
            ApiError::Internal => {
                tracing::error!("Internal error: {}", self);
            }
        }
        
        let body = Json(ErrorBody {
            error: self.to_string(),
            kind: self.kind(),
        });
        
        (self.status(), body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(format!("Invalid request: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(format!("Invalid query: {}", rejection.body_text()))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    
    async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }
    
    #[tokio::test]
    async fn test_validation_is_warning() {
        let (status, body) = body_json(ApiError::Validation("Please fill in all fields.".into())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Please fill in all fields.");
        assert_eq!(body["kind"], "warning");
    }
    
    #[tokio::test]
    async fn test_timeout_is_error() {
        let (status, body) = body_json(ApiError::Timeout("too slow".into())).await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body["kind"], "error");
    }
    
    #[tokio::test]
    async fn test_internal_hides_details() {
        let (status, body) = body_json(ApiError::Internal).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }
}
