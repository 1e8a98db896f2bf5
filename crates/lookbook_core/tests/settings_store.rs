use lookbook_core::{
    ConfigError, CredentialTriple, EntityKind, LookbookConfig, SettingsStore,
};

#[test]
fn missing_file_loads_as_empty_settings() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path().join("settings.json"));
    assert!(store.load().unwrap().credentials.is_empty());
}

#[test]
fn saved_triples_overlay_environment_values() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::new(dir.path().join("nested").join("settings.json"));

    store
        .save(
            EntityKind::Mentor,
            CredentialTriple::new(" patSaved ", "appSaved", "Mentors"),
        )
        .unwrap();
    store
        .save(
            EntityKind::Company,
            CredentialTriple::new("patCo", "appCo", "tblCo"),
        )
        .unwrap();

    let settings = store.load().unwrap();
    assert_eq!(settings.credentials.len(), 2);

    let config = LookbookConfig::from_lookup(|key| match key {
        "MENTOR_AIRTABLE_API_TOKEN" => Some("patEnv".to_string()),
        "FOUNDER_AIRTABLE_API_TOKEN" => Some("patFounder".to_string()),
        _ => None,
    })
    .with_settings(&settings);

    assert_eq!(config.mentor.token, "patSaved");
    assert_eq!(config.mentor.base_id, "appSaved");
    assert_eq!(config.company.table, "tblCo");
    assert_eq!(config.founder.token, "patFounder");
}

#[test]
fn save_rejects_incomplete_triples() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let store = SettingsStore::new(&path);

    let err = store
        .save(EntityKind::Founder, CredentialTriple::new("pat", "", "tbl"))
        .expect_err("base id is required");
    assert!(matches!(err, ConfigError::InvalidSetting(_)));
    assert!(!path.exists());
}

#[test]
fn malformed_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = SettingsStore::new(&path).load().expect_err("malformed");
    assert!(matches!(err, ConfigError::SettingsFormat { .. }));
}
