use medora_app::config::{MedoraConfig, load_config_from, save_config_to};
use medora_core::models::plan::RenderMode;

#[test]
fn save_then_load_keeps_settings() {
    let dir = tempfile::tempdir().unwrap();
    let config = MedoraConfig {
        config_version: 0,
        api_base_url: "https://medora.example".to_string(),
        default_mode: RenderMode::Narrative,
        created_at: "2026-03-01T12:00:00Z".parse().unwrap(),
    };

    save_config_to(dir.path(), &config).unwrap();
    let loaded = load_config_from(&dir.path().join("config.json")).unwrap();

    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.api_base_url, "https://medora.example");
    assert_eq!(loaded.default_mode, RenderMode::Narrative);
    assert_eq!(loaded.created_at, config.created_at);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn v0_config_is_migrated_to_bullet_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "api_base_url": "http://localhost:8080", "created_at": "2026-03-01T12:00:00Z" }"#,
    )
    .unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.default_mode, RenderMode::Bullet);
}

#[test]
fn newer_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "config_version": 99, "api_base_url": "x", "default_mode": "bullet", "created_at": "2026-03-01T12:00:00Z" }"#,
    )
    .unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_config_from(&dir.path().join("config.json")).is_err());
}

#[test]
fn oversized_version_is_not_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "config_version": 4294967297, "api_base_url": "x", "default_mode": "bullet", "created_at": "2026-03-01T12:00:00Z" }"#,
    )
    .unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}
