use mediassist_llm::{ChatClient, ChatOptions, ChatRequest, GeminiClient, Message};
use mockito::Matcher;
use serde_json::json;

const MODEL_PATH: &str = "/models/gemini-1.5-flash:generateContent";

fn client_for(server: &mockito::Server) -> GeminiClient {
    GeminiClient::builder()
        .api_key("test-key")
        .base_url(server.url())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_chat_returns_joined_candidate_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", MODEL_PATH)
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::PartialJson(json!({
            "contents": [{"role": "user", "parts": [{"text": "I have fever and headache."}]}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "Rest, "}, {"text": "and drink fluids."}]},
                    "finishReason": "STOP"
                }],
                "usageMetadata": {"promptTokenCount": 7, "candidatesTokenCount": 5, "totalTokenCount": 12}
            })
            .to_string(),
        )
        .create_async()
        .await;
    
    let request = ChatRequest::new("gemini-1.5-flash", vec![Message::human("I have fever and headache.")]);
    let response = client_for(&server).chat(request).await.unwrap();
    
    mock.assert_async().await;
    assert_eq!(response.text(), "Rest, and drink fluids.");
    assert_eq!(response.finish_reason.as_deref(), Some("STOP"));
    let usage = response.usage.unwrap();
    assert_eq!(usage.total_tokens, 12);
    assert_eq!(usage.input_tokens, 7);
}

#[tokio::test]
async fn test_chat_sends_generation_config() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", MODEL_PATH)
        .match_body(Matcher::PartialJson(json!({
            "generationConfig": {"maxOutputTokens": 64},
            "systemInstruction": {"parts": [{"text": "Be careful"}]}
        })))
        .with_status(200)
        .with_body(json!({"candidates": [{"content": {"parts": [{"text": "ok"}]}}]}).to_string())
        .create_async()
        .await;
    
    let request = ChatRequest::new("gemini-1.5-flash", vec![Message::human("hi")])
        .with_options(ChatOptions::new().max_tokens(64).system_instruction("Be careful"));
    let response = client_for(&server).chat(request).await.unwrap();
    
    mock.assert_async().await;
    assert_eq!(response.text(), "ok");
}

#[tokio::test]
async fn test_chat_http_error_includes_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", MODEL_PATH)
        .with_status(400)
        .with_body(r#"{"error":{"message":"API key not valid"}}"#)
        .create_async()
        .await;
    
    let request = ChatRequest::new("gemini-1.5-flash", vec![Message::human("hi")]);
    let err = client_for(&server).chat(request).await.unwrap_err();
    
    let msg = err.to_string();
    assert!(msg.contains("400"), "unexpected error: {}", msg);
    assert!(msg.contains("API key not valid"));
}

#[tokio::test]
async fn test_chat_blocked_prompt_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", MODEL_PATH)
        .with_status(200)
        .with_body(json!({"promptFeedback": {"blockReason": "SAFETY"}}).to_string())
        .create_async()
        .await;
    
    let request = ChatRequest::new("gemini-1.5-flash", vec![Message::human("hi")]);
    let err = client_for(&server).chat(request).await.unwrap_err();
    
    assert!(err.to_string().contains("SAFETY"));
}

#[tokio::test]
async fn test_chat_malformed_body_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", MODEL_PATH)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;
    
    let request = ChatRequest::new("gemini-1.5-flash", vec![Message::human("hi")]);
    let result = client_for(&server).chat(request).await;
    
    assert!(result.is_err());
}

#[test]
fn test_builder_requires_api_key() {
    let err = GeminiClient::builder().build().unwrap_err();
    assert!(err.to_string().contains("API key"));
}
