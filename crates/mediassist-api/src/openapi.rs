use axum::Json;
use utoipa::OpenApi;

use crate::error::{ErrorBody, MessageKind};
use crate::routes::{
    chat::{self, HealthAdviceRequest, HealthAdviceResponse},
    clinics::{self, ClinicResponse, ClinicSearchRequest, ClinicSearchResponse},
    health::{self, HealthResponse},
    reminders::{self, AddReminderRequest, AddReminderResponse, ListRemindersResponse, ReminderResponse},
    session::{self, SessionResponse},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MediAssist API",
        description = "Health chat, medicine reminders and clinic search"
    ),
    paths(
        health::health_check,
        session::create_session,
        chat::get_health_advice,
        reminders::add_reminder,
        reminders::list_reminders,
        clinics::search_clinics,
    ),
    components(schemas(
        ErrorBody,
        MessageKind,
        HealthResponse,
        SessionResponse,
        HealthAdviceRequest,
        HealthAdviceResponse,
        AddReminderRequest,
        AddReminderResponse,
        ReminderResponse,
        ListRemindersResponse,
        ClinicSearchRequest,
        ClinicSearchResponse,
        ClinicResponse,
    )),
    tags(
        (name = "health", description = "Service status"),
        (name = "session", description = "Session identifiers"),
        (name = "chat", description = "AI health chat"),
        (name = "reminders", description = "Medicine reminders"),
        (name = "clinics", description = "Clinic search")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
