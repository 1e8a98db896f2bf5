mod common;

use common::{full_config, ok_json, status, MockTransport};
use lookbook_core::service::description_service::{mentor_prompt, SYSTEM_PROMPT};
use lookbook_core::{
    normalize_mentor, DescriptionService, ExaClient, ExaConfig, HttpMethod, LookbookError,
    RawRecord,
};
use serde_json::json;

fn jane() -> lookbook_core::Mentor {
    normalize_mentor(&RawRecord::new(
        "m1",
        json!({"Name": "Jane Doe", "Role": "CTO", "Expertise": ["AI", "Cloud"]}),
    ))
}

#[test]
fn prompt_marks_missing_attributes_as_na() {
    let prompt = mentor_prompt(&jane());
    assert!(prompt.contains("Name: Jane Doe"));
    assert!(prompt.contains("Role: CTO"));
    assert!(prompt.contains("Company: N/A"));
    assert!(prompt.contains("Expertise: AI, Cloud"));
    assert!(prompt.contains("Industries: N/A"));
    assert!(prompt.contains("under 150 words"));
}

#[test]
fn description_request_uses_chat_completion_contract() {
    let transport = MockTransport::sequence(vec![ok_json(json!({
        "choices": [{"message": {"content": "Jane is a seasoned CTO."}}]
    }))]);
    let service = DescriptionService::new(ExaClient::new(full_config().exa, transport.clone()));

    let text = service.describe_mentor(&jane()).unwrap();
    assert_eq!(text, "Jane is a seasoned CTO.");

    let request = &transport.requests()[0];
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.url, "https://api.exa.ai/chat/completions");
    assert_eq!(request.bearer_token, "exa-key");
    let body = request.body.as_ref().unwrap();
    assert_eq!(body["model"], "exa-chat");
    assert_eq!(body["temperature"], 0.7);
    assert_eq!(body["max_tokens"], 300);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][0]["content"], SYSTEM_PROMPT);
    assert_eq!(body["messages"][1]["role"], "user");
}

#[test]
fn missing_api_key_sends_nothing() {
    let transport = MockTransport::sequence(vec![]);
    let service = DescriptionService::new(ExaClient::new(ExaConfig::default(), transport.clone()));

    let err = service.describe_mentor(&jane()).expect_err("no key");
    assert!(matches!(err, LookbookError::Configuration(_)));
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn error_status_and_malformed_answers_are_remote_errors() {
    let transport = MockTransport::sequence(vec![
        status(429, "Too Many Requests", r#"{"error":"rate limited"}"#),
        ok_json(json!({"choices": []})),
    ]);
    let service = DescriptionService::new(ExaClient::new(full_config().exa, transport));

    let limited = service.describe_mentor(&jane()).expect_err("429");
    assert_eq!(limited.status(), Some(429));

    let malformed = service.describe_mentor(&jane()).expect_err("no choices");
    assert_eq!(malformed.status(), None);
    assert!(malformed.to_string().contains("Invalid response format"));
}
