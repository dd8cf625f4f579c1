use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::state::{AppState, Integration};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub services: BTreeMap<String, String>,
}

/// Health check endpoint
/// 
/// Returns the health status of the server and which integrations are usable
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Json<HealthResponse> {
    let mut services = BTreeMap::new();
    
    services.insert("chat".to_string(), configured(state.chat.is_ready()));
    services.insert("places".to_string(), configured(state.clinics.is_ready()));
    
    // Check the reminder store
    let store_status = match &state.reminders {
        Integration::Ready(store) => match store.ping().await {
            Ok(()) => "connected",
            Err(e) => {
                tracing::warn!("Reminder store ping failed: {}", e);
                "disconnected"
            }
        },
        Integration::Unavailable(_) => "not_configured",
    };
    services.insert("reminders".to_string(), store_status.to_string());
    
    let status = if services.values().all(|s| s == "configured" || s == "connected") {
        "healthy"
    } else {
        "degraded"
    };
    
    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        services,
    })
}

fn configured(ready: bool) -> String {
    if ready { "configured" } else { "not_configured" }.to_string()
}
