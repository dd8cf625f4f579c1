use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use mediassist_llm::{ChatOptions, ChatRequest, Content, Message};
use crate::{
    error::{ApiError, ApiResult, ErrorBody},
    extract::AppJson,
    state::AppState,
};

pub const EMPTY_SYMPTOMS: &str = "Please enter your symptoms to get advice.";

#[derive(Debug, Deserialize, ToSchema)]
pub struct HealthAdviceRequest {
    /// Free-text symptom description, any language
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthAdviceResponse {
    pub reply: String,
}

/// Ask the chat model for general guidance on described symptoms
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = HealthAdviceRequest,
    responses(
        (status = 200, description = "Model reply", body = HealthAdviceResponse),
        (status = 422, description = "Empty or malformed input", body = ErrorBody),
        (status = 502, description = "Model call failed", body = ErrorBody),
        (status = 503, description = "Model not configured", body = ErrorBody)
    ),
    tag = "chat"
)]
pub async fn get_health_advice(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<HealthAdviceRequest>,
) -> ApiResult<Json<HealthAdviceResponse>> {
    let message = Content::text(req.message);
    if message.is_blank() {
        return Err(ApiError::Validation(EMPTY_SYMPTOMS.to_string()));
    }
    
    let client = state.chat.get()?;
    let llm = &state.config.llm;
    
    let mut options = ChatOptions::new();
    if let Some(temperature) = llm.temperature {
        options = options.temperature(temperature);
    }
    if let Some(max_tokens) = llm.max_tokens {
        options = options.max_tokens(max_tokens);
    }
    if let Some(prompt) = &llm.system_prompt {
        options = options.system_instruction(prompt.clone());
    }
    
    // Fresh conversation per question
    let request = ChatRequest::new(llm.model.clone(), vec![Message::human(message)])
        .with_options(options);
    
    let response = client.chat(request).await.map_err(|e| {
        ApiError::Upstream(format!(
            "Error communicating with the AI model: {:#}. Please check your API key and network connection.",
            e
        ))
    })?;
    
    if let Some(usage) = &response.usage {
        tracing::debug!(
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "Chat completed"
        );
    }
    
    let reply = response.text().trim();
    if reply.is_empty() {
        return Err(ApiError::Upstream(
            "The AI model returned an empty response. Please try rephrasing your symptoms.".to_string(),
        ));
    }
    
    Ok(Json(HealthAdviceResponse {
        reply: reply.to_string(),
    }))
}
