// Gemini-specific client implementation

use crate::traits::{ChatClient, ChatOptions, ChatRequest, ChatResponse, TokenUsage};
use crate::types::Message;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Gemini client (HTTP direct, no SDK)
/// 
/// Talks to the `models/{model}:generateContent` endpoint:
/// - Auth header: `x-goog-api-key`
/// - System messages are folded into `systemInstruction`
/// - Assistant turns use the `model` role
#[derive(Debug)]
pub struct GeminiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl GeminiClient {
    /// Create new client with API key against the public endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }
    
    pub fn builder() -> GeminiClientBuilder {
        GeminiClientBuilder::default()
    }
    
    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
    
    /// Build generateContent request payload
    fn build_request(&self, messages: Vec<Message>, options: &ChatOptions) -> Result<Value> {
        let mut system_parts: Vec<Part> = options
            .system_instruction
            .iter()
            .map(|text| Part { text: Some(text.clone()) })
            .collect();
        let mut contents = Vec::with_capacity(messages.len());
        
        for message in messages {
            match message {
                Message::System { content } => {
                    system_parts.push(Part { text: Some(content.as_text().to_string()) });
                }
                Message::Human { content } => contents.push(GeminiContent {
                    role: Some("user".to_string()),
                    parts: vec![Part { text: Some(content.as_text().to_string()) }],
                }),
                Message::AI { content } => contents.push(GeminiContent {
                    role: Some("model".to_string()),
                    parts: vec![Part { text: Some(content.as_text().to_string()) }],
                }),
            }
        }
        
        if contents.is_empty() {
            anyhow::bail!("Gemini request needs at least one user message");
        }
        
        let mut request = serde_json::json!({
            "contents": contents,
        });
        let obj = request
            .as_object_mut()
            .context("Request payload is not an object")?;
        
        if !system_parts.is_empty() {
            obj.insert(
                "systemInstruction".to_string(),
                serde_json::to_value(GeminiContent { role: None, parts: system_parts })?,
            );
        }
        
        let mut generation_config = serde_json::Map::new();
        if let Some(temp) = options.temperature {
            generation_config.insert("temperature".to_string(), serde_json::json!(temp));
        }
        if let Some(max_tokens) = options.max_tokens {
            generation_config.insert("maxOutputTokens".to_string(), serde_json::json!(max_tokens));
        }
        if !generation_config.is_empty() {
            obj.insert("generationConfig".to_string(), Value::Object(generation_config));
        }
        
        Ok(request)
    }
}

/// Builder for GeminiClient
#[derive(Default)]
pub struct GeminiClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl GeminiClientBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
    
    /// Override the API base URL
    /// Example: "https://generativelanguage.googleapis.com/v1beta"
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
    
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
    
    pub fn build(self) -> Result<GeminiClient> {
        let api_key = self.api_key.context("API key is required")?;
        if api_key.trim().is_empty() {
            anyhow::bail!("API key is required");
        }
        
        let base_url = self
            .base_url
            .unwrap_or_else(|| GEMINI_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();
        
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut key_header = HeaderValue::from_str(&api_key).context("Invalid API key format")?;
        key_header.set_sensitive(true);
        headers.insert("x-goog-api-key", key_header);
        
        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .context("Failed to create HTTP client")?;
        
        Ok(GeminiClient {
            http_client,
            base_url,
        })
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

#[async_trait]
impl ChatClient for GeminiClient {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        let payload = self.build_request(request.messages, &request.options)?;
        
        tracing::debug!(model = %request.model, "Sending generateContent request");
        
        let response = self
            .http_client
            .post(self.endpoint(&request.model))
            .json(&payload)
            .send()
            .await
            .context("Failed to send request")?;
        
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API error ({}): {}", status, error_text);
        }
        
        let raw: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse response")?;
        
        // Convert to provider-agnostic response
        let Some(candidate) = raw.candidates.first() else {
            let reason = raw
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.clone())
                .unwrap_or_else(|| "unknown".to_string());
            anyhow::bail!("Gemini API returned no candidates (block reason: {})", reason);
        };
        
        let text: String = candidate
            .content
            .as_ref()
            .map(|c| c.parts.iter().filter_map(|p| p.text.as_deref()).collect())
            .unwrap_or_default();
        
        Ok(ChatResponse {
            content: (!text.is_empty()).then_some(text),
            usage: raw.usage_metadata.as_ref().map(|u| TokenUsage {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
                total_tokens: u.total_token_count,
            }),
            finish_reason: candidate.finish_reason.clone(),
            raw: serde_json::to_value(&raw)?,
        })
    }
}

// ============================================================================
// GEMINI-SPECIFIC WIRE TYPES
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(skip_serializing_if = "Option::is_none")]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(skip_serializing_if = "Option::is_none")]
    block_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}
