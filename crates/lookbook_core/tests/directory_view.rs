mod common;

use common::{full_config, ok_json, records, status, MockTransport};
use lookbook_core::{
    DirectoryView, FounderRepository, LookbookConfig, MentorRepository, TransportError, ViewState,
};
use serde_json::json;

fn mentor_rows() -> serde_json::Value {
    records(vec![
        json!({"id": "m1", "fields": {
            "Name": "Jane Doe", "Role": "CTO", "Company": "Acme",
            "Expertise": ["AI", "Fundraising", "Hiring", "Sales"],
            "Industries": ["Fintech"], "Date": "2024-03-01",
            "lookbookTag": ["Operator"]
        }}),
        json!({"id": "m2", "fields": {
            "Name": "John Roe", "Expertise": ["AI"], "Date": "2024-01-10"
        }}),
    ])
}

#[test]
fn load_populates_entities_facets_and_cards() {
    let transport = MockTransport::sequence(vec![ok_json(mentor_rows())]);
    let mut view = DirectoryView::new(MentorRepository::mentors(&full_config(), transport));
    assert!(view.is_loading());

    assert!(matches!(view.load(), ViewState::Loaded(rows) if rows.len() == 2));
    assert_eq!(
        view.facets().all_tags,
        vec!["AI", "Fintech", "Fundraising", "Hiring", "Sales"]
    );
    assert_eq!(view.facets().available_dates, vec!["2024-03-01", "2024-01-10"]);

    let cards = view.cards();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].title, "Jane Doe");
    assert_eq!(cards[0].subtitle, "CTO at Acme");
    assert_eq!(cards[0].link, "/mentors/jane-doe");
    assert_eq!(cards[0].tags, vec!["AI", "Fundraising", "Hiring"]);
    assert_eq!(cards[0].extra_tag_count, 1);
    assert_eq!(cards[0].badges, vec!["Operator"]);
}

#[test]
fn filters_narrow_the_visible_list() {
    let transport = MockTransport::sequence(vec![ok_json(mentor_rows())]);
    let mut view = DirectoryView::new(MentorRepository::mentors(&full_config(), transport));
    view.load();

    view.filters_mut().toggle_tag("AI");
    assert_eq!(view.visible().len(), 2);
    view.filters_mut().toggle_tag("Fintech");
    assert_eq!(view.visible().len(), 1);
    view.filters_mut().clear();
    view.filters_mut().select_date(Some("2024-01-10".to_string()));
    let visible = view.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "m2");
}

#[test]
fn unauthorized_load_shows_failure_and_no_entities() {
    let transport = MockTransport::sequence(vec![status(
        401,
        "Unauthorized",
        r#"{"error":{"type":"AUTHENTICATION_REQUIRED"}}"#,
    )]);
    let mut view = DirectoryView::new(FounderRepository::founders(&full_config(), transport));
    view.load();

    let failure = view.failure().expect("failure state");
    assert_eq!(failure.status, Some(401));
    assert!(!failure.configuration);
    assert!(failure.message.starts_with("Failed to load founders."));
    assert!(view.entities().is_empty());
    assert!(view.visible().is_empty());
    assert!(!view.is_empty());
    assert!(view.facets().all_tags.is_empty());
}

#[test]
fn missing_configuration_is_a_failure_without_requests() {
    let transport = MockTransport::sequence(vec![]);
    let mut view = DirectoryView::new(MentorRepository::mentors(
        &LookbookConfig::default(),
        transport.clone(),
    ));
    view.load();

    let failure = view.failure().expect("failure state");
    assert!(failure.configuration);
    assert_eq!(failure.status, None);
    assert!(failure.message.contains("credentials not configured"));
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn refresh_replaces_stale_state_and_keeps_filters() {
    let transport = MockTransport::sequence(vec![
        ok_json(mentor_rows()),
        Err(TransportError::new("offline")),
        ok_json(records(vec![])),
    ]);
    let mut view = DirectoryView::new(MentorRepository::mentors(&full_config(), transport));

    view.load();
    view.filters_mut().toggle_tag("AI");
    assert_eq!(view.entities().len(), 2);

    view.refresh();
    assert!(view.failure().is_some());
    assert!(view.entities().is_empty());
    assert!(view.filters().selected_tags().contains("AI"));

    view.refresh();
    assert!(view.is_empty());
    assert!(view.failure().is_none());
    assert!(view.facets().available_dates.is_empty());
}
