use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

pub const REQUEST_TIMED_OUT: &str =
    "The request took too long to complete. Please try again.";

/// Rewrite the bare 408 from the timeout layer into an error body
pub async fn timeout_as_json(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return ApiError::Timeout(REQUEST_TIMED_OUT.to_string()).into_response();
    }
    response
}
