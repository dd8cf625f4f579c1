use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::session::new_session_id;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub session_id: String,
}

/// Issue a session identifier
/// 
/// The page requests one on load and keeps it for the lifetime of the tab.
#[utoipa::path(
    post,
    path = "/api/session",
    responses(
        (status = 201, description = "Session issued", body = SessionResponse)
    ),
    tag = "session"
)]
pub async fn create_session() -> (StatusCode, Json<SessionResponse>) {
    let session_id = new_session_id();
    tracing::debug!("Issued session identifier");
    (StatusCode::CREATED, Json(SessionResponse { session_id }))
}
