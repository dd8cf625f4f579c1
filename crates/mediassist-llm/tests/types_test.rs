use mediassist_llm::{Content, Message};

#[test]
fn test_content_text_creation() {
    let content = Content::text("Hello, world!");
    assert_eq!(content.as_text(), "Hello, world!");
}

#[test]
fn test_content_blank() {
    assert!(Content::text("   \n").is_blank());
    assert!(!Content::text("मुझे बुखार है").is_blank());
}

#[test]
fn test_message_roles() {
    assert_eq!(Message::system("You are helpful").role(), "system");
    assert_eq!(Message::human("Hello").role(), "user");
    assert_eq!(Message::ai("Hi there!").role(), "assistant");
}

#[test]
fn test_message_serialization_human() {
    let msg = Message::human("Hello");
    let json = serde_json::to_string(&msg).unwrap();
    assert!(json.contains("\"role\":\"user\""));
    assert!(json.contains("\"content\":\"Hello\""));
}

#[test]
fn test_message_deserialization() {
    let json = r#"{"role":"assistant","content":"Rest and drink fluids"}"#;
    let msg: Message = serde_json::from_str(json).unwrap();
    assert_eq!(msg, Message::ai("Rest and drink fluids"));
    assert_eq!(msg.content().as_text(), "Rest and drink fluids");
}
