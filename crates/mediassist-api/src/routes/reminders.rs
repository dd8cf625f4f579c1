use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use mediassist_persist::{sort_by_time, NewReminder, PersistError, Reminder, ReminderStore};
use crate::{
    error::{ApiError, ApiResult, ErrorBody},
    extract::{AppJson, AppQuery},
    state::{AppState, Integration},
};

pub const INCOMPLETE_REMINDER: &str = "Please fill in all fields for the reminder.";
pub const MISSING_SESSION: &str = "Missing session identifier. Please reload the page.";

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddReminderRequest {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub medicine_name: String,
    #[serde(default)]
    pub dosage: String,
    /// Time of day as `HH:MM` (`HH:MM:SS` accepted, seconds dropped)
    #[serde(default)]
    pub time: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReminderResponse {
    pub reminder_id: String,
    pub medicine_name: String,
    pub dosage: String,
    /// `HH:MM`
    pub time: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddReminderResponse {
    pub reminder: ReminderResponse,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ListRemindersQuery {
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListRemindersResponse {
    pub reminders: Vec<ReminderResponse>,
}

/// Add a medicine reminder for the session
#[utoipa::path(
    post,
    path = "/api/reminders",
    request_body = AddReminderRequest,
    responses(
        (status = 201, description = "Reminder stored", body = AddReminderResponse),
        (status = 422, description = "Missing or invalid field", body = ErrorBody),
        (status = 502, description = "Storage failed", body = ErrorBody),
        (status = 503, description = "Store not configured", body = ErrorBody)
    ),
    tag = "reminders"
)]
pub async fn add_reminder(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<AddReminderRequest>,
) -> ApiResult<(StatusCode, Json<AddReminderResponse>)> {
    let new_reminder = NewReminder::from_form(
        &req.session_id,
        &req.medicine_name,
        &req.dosage,
        &req.time,
    )
    .map_err(validation_error)?;
    
    let store = reminder_store(&state, "Cannot add reminder.")?;
    
    let reminder = store
        .add_reminder(new_reminder)
        .await
        .map_err(|e| ApiError::Upstream(format!("Failed to add reminder: {}", e)))?;
    
    let message = format!(
        "Reminder for {} at {} added!",
        reminder.medicine_name, reminder.time
    );
    
    Ok((
        StatusCode::CREATED,
        Json(AddReminderResponse {
            reminder: reminder_to_response(reminder),
            message,
        }),
    ))
}

/// List the session's reminders, earliest time of day first
#[utoipa::path(
    get,
    path = "/api/reminders",
    params(
        ("session_id" = String, Query, description = "Session identifier issued by /api/session")
    ),
    responses(
        (status = 200, description = "Reminders sorted by time", body = ListRemindersResponse),
        (status = 422, description = "Missing session identifier", body = ErrorBody),
        (status = 502, description = "Storage failed", body = ErrorBody),
        (status = 503, description = "Store not configured", body = ErrorBody)
    ),
    tag = "reminders"
)]
pub async fn list_reminders(
    State(state): State<Arc<AppState>>,
    AppQuery(query): AppQuery<ListRemindersQuery>,
) -> ApiResult<Json<ListRemindersResponse>> {
    let session_id = query
        .session_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::Validation(MISSING_SESSION.to_string()))?;
    
    let store = reminder_store(&state, "Cannot retrieve reminders.")?;
    
    let mut reminders = store
        .list_reminders(session_id)
        .await
        .map_err(|e| ApiError::Upstream(format!("Error fetching reminders: {}", e)))?;
    
    sort_by_time(&mut reminders);
    
    Ok(Json(ListRemindersResponse {
        reminders: reminders.into_iter().map(reminder_to_response).collect(),
    }))
}

fn validation_error(err: PersistError) -> ApiError {
    match err {
        PersistError::MissingField("session_id") => ApiError::Validation(MISSING_SESSION.to_string()),
        PersistError::MissingField(_) => ApiError::Validation(INCOMPLETE_REMINDER.to_string()),
        PersistError::InvalidTime(raw) => {
            ApiError::Validation(format!("Invalid reminder time '{}'. Please use HH:MM.", raw))
        }
        other => {
            tracing::error!("Unexpected error building reminder: {}", other);
            ApiError::Internal
        }
    }
}

/// The configured store, or an error naming the blocked action and the startup reason
fn reminder_store<'a>(state: &'a AppState, action: &str) -> ApiResult<&'a Arc<dyn ReminderStore>> {
    match &state.reminders {
        Integration::Ready(store) => Ok(store),
        Integration::Unavailable(reason) => Err(ApiError::NotConfigured(format!(
            "Reminder store is not initialized. {} {}",
            action, reason
        ))),
    }
}

fn reminder_to_response(reminder: Reminder) -> ReminderResponse {
    ReminderResponse {
        reminder_id: reminder.id,
        medicine_name: reminder.medicine_name,
        dosage: reminder.dosage,
        time: reminder.time.to_string(),
        created_at: reminder.created_at,
    }
}
