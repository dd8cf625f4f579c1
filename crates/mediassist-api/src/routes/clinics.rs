use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use mediassist_places::Clinic;
use crate::{
    error::{ApiError, ApiResult, ErrorBody},
    extract::AppJson,
    state::AppState,
};

pub const EMPTY_LOCATION: &str = "Please enter a city or pin code to search for clinics.";

#[derive(Debug, Deserialize, ToSchema)]
pub struct ClinicSearchRequest {
    /// City name or pin code
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClinicResponse {
    pub name: String,
    pub address: String,
    /// Rating as shown, `N/A` when unrated
    pub rating: String,
    pub link: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClinicSearchResponse {
    pub clinics: Vec<ClinicResponse>,
}

/// Search for clinics or hospitals near a location
#[utoipa::path(
    post,
    path = "/api/clinics",
    request_body = ClinicSearchRequest,
    responses(
        (status = 200, description = "Up to five clinics", body = ClinicSearchResponse),
        (status = 422, description = "Empty location", body = ErrorBody),
        (status = 502, description = "Places call failed", body = ErrorBody),
        (status = 503, description = "Places not configured", body = ErrorBody)
    ),
    tag = "clinics"
)]
pub async fn search_clinics(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<ClinicSearchRequest>,
) -> ApiResult<Json<ClinicSearchResponse>> {
    let location = req.location.trim();
    if location.is_empty() {
        return Err(ApiError::Validation(EMPTY_LOCATION.to_string()));
    }
    
    let search = state.clinics.get()?;
    
    let clinics = search
        .find_clinics(location)
        .await
        .map_err(|e| {
            ApiError::Upstream(format!(
                "Error searching for clinics: {:#}. Check your API key and network.",
                e
            ))
        })?;
    
    Ok(Json(ClinicSearchResponse {
        clinics: clinics.into_iter().map(clinic_to_response).collect(),
    }))
}

fn clinic_to_response(clinic: Clinic) -> ClinicResponse {
    ClinicResponse {
        name: clinic.name,
        address: clinic.address,
        rating: clinic.rating,
        link: clinic.link,
    }
}
