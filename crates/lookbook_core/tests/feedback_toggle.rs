mod common;

use common::{full_config, ok_json, status, MockTransport};
use lookbook_core::{
    AirtableFeedback, EntityKind, FeedbackKind, FeedbackToggle, HttpMethod, LookbookConfig,
    LookbookError,
};
use serde_json::{json, Map, Value};
use std::sync::{Arc, Mutex};

/// Single-record store that applies PATCH bodies to its field map.
fn record_store(initial: Value) -> Arc<MockTransport> {
    let fields = Arc::new(Mutex::new(initial));
    MockTransport::with_handler(move |request| {
        let mut current = fields.lock().unwrap();
        if request.method == HttpMethod::Patch {
            let patch = request.body.as_ref().unwrap()["fields"].as_object().unwrap();
            let target = current.as_object_mut().unwrap();
            for (key, value) in patch {
                target.insert(key.clone(), value.clone());
            }
        }
        ok_json(json!({"id": "recF1", "fields": current.clone()}))
    })
}

#[test]
fn toggling_twice_restores_the_original_state() {
    let transport = record_store(json!({"Name": "Jane Doe"}));
    let feedback =
        AirtableFeedback::for_kind(&full_config(), EntityKind::Founder, transport.clone()).unwrap();

    let first = feedback
        .toggle("recF1", "Acme Ventures", FeedbackKind::ThumbsUp)
        .unwrap();
    let second = feedback
        .toggle("recF1", "Acme Ventures", FeedbackKind::ThumbsUp)
        .unwrap();
    assert!(first);
    assert!(!second);

    let requests = transport.requests();
    let methods: Vec<HttpMethod> = requests.iter().map(|r| r.method).collect();
    assert_eq!(
        methods,
        vec![
            HttpMethod::Get,
            HttpMethod::Patch,
            HttpMethod::Get,
            HttpMethod::Patch
        ]
    );
    assert!(requests[0].url.ends_with("/appF/Founders/recF1"));
}

#[test]
fn patch_writes_only_the_feedback_field() {
    let transport = record_store(json!({"Name": "Jane Doe", "Acme thumbs neutral": true}));
    let feedback =
        AirtableFeedback::for_kind(&full_config(), EntityKind::Founder, transport.clone()).unwrap();

    let value = feedback
        .toggle("recF1", "Acme", FeedbackKind::ThumbsNeutral)
        .unwrap();
    assert!(!value);

    let patch = transport.requests()[1].body.clone().unwrap();
    let mut expected = Map::new();
    expected.insert("Acme thumbs neutral".to_string(), Value::Bool(false));
    assert_eq!(patch, json!({ "fields": expected }));
}

#[test]
fn non_boolean_field_values_count_as_false() {
    let transport = record_store(json!({"Acme thumbs up": "yes"}));
    let feedback =
        AirtableFeedback::for_kind(&full_config(), EntityKind::Founder, transport).unwrap();
    assert!(feedback
        .toggle("recF1", "Acme", FeedbackKind::ThumbsUp)
        .unwrap());
}

#[test]
fn failed_read_skips_the_write() {
    let transport = MockTransport::sequence(vec![status(
        404,
        "Not Found",
        r#"{"error":"NOT_FOUND"}"#,
    )]);
    let feedback =
        AirtableFeedback::for_kind(&full_config(), EntityKind::Founder, transport.clone()).unwrap();

    let err = feedback
        .toggle("recMissing", "Acme", FeedbackKind::ThumbsUp)
        .expect_err("missing record must fail");
    assert_eq!(err.status(), Some(404));
    assert_eq!(transport.request_count(), 1);
}

#[test]
fn failed_write_surfaces_status() {
    let transport = MockTransport::sequence(vec![
        ok_json(json!({"id": "recF1", "fields": {}})),
        status(422, "Unprocessable Entity", r#"{"error":{"type":"UNKNOWN_FIELD_NAME"}}"#),
    ]);
    let feedback =
        AirtableFeedback::for_kind(&full_config(), EntityKind::Founder, transport).unwrap();

    let err = feedback
        .toggle("recF1", "Acme", FeedbackKind::ThumbsUp)
        .expect_err("rejected patch must fail");
    assert_eq!(err.status(), Some(422));
}

#[test]
fn missing_credentials_are_rejected_up_front() {
    let transport = MockTransport::sequence(vec![]);
    let result = AirtableFeedback::for_kind(
        &LookbookConfig::default(),
        EntityKind::Founder,
        transport.clone(),
    );
    assert!(matches!(result, Err(LookbookError::Configuration(_))));
    assert_eq!(transport.request_count(), 0);
}
