// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Beacon configuration system.

use beacon_config::diagnostic::ConfigError;
use beacon_config::model::{BeaconConfig, ProjectEntry};
use beacon_config::{
    load_and_validate_path, load_and_validate_str, load_config, load_config_from_str,
};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_beacon_config() {
    let toml = r#"
[service]
log_level = "debug"

[limits]
max_session_secs_in_past = 86400
max_secs_in_future = 120

[metrics]
enabled = true

[[projects]]
org_id = 1
project_id = 42
retention_days = 17

[[projects]]
org_id = 1
project_id = 43
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.service.log_level, "debug");
    assert_eq!(config.limits.max_session_secs_in_past, 86_400);
    assert_eq!(config.limits.max_secs_in_future, 120);
    assert!(config.metrics.enabled);
    assert_eq!(
        config.projects,
        vec![
            ProjectEntry {
                org_id: 1,
                project_id: 42,
                retention_days: Some(17),
            },
            ProjectEntry {
                org_id: 1,
                project_id: 43,
                retention_days: None,
            },
        ]
    );
    assert_eq!(config.projects[0].project_config().resolved_retention_days(), 17);
    assert_eq!(config.projects[1].project_config().resolved_retention_days(), 90);
}

/// Empty input yields every documented default.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_and_validate_str("").expect("defaults are valid");
    assert_eq!(config.service.log_level, "info");
    assert_eq!(config.limits.max_session_secs_in_past, 5 * 24 * 60 * 60);
    assert_eq!(config.limits.max_secs_in_future, 60);
    assert!(!config.metrics.enabled);
    assert!(config.projects.is_empty());
}

#[test]
fn default_struct_matches_empty_toml() {
    let from_toml = load_config_from_str("").unwrap();
    let default = BeaconConfig::default();
    assert_eq!(from_toml.service.log_level, default.service.log_level);
    assert_eq!(
        from_toml.limits.max_session_secs_in_past,
        default.limits.max_session_secs_in_past
    );
}

/// A typo'd key produces an UnknownKey diagnostic with a suggestion.
#[test]
fn unknown_key_gets_suggestion() {
    let toml = r#"
[limits]
max_secs_in_futur = 30
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key,
            suggestion,
            valid_keys,
            ..
        } => {
            assert_eq!(key, "max_secs_in_futur");
            assert_eq!(suggestion.as_deref(), Some("max_secs_in_future"));
            assert!(valid_keys.contains("max_session_secs_in_past"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn unknown_key_in_project_table_is_rejected() {
    let toml = r#"
[[projects]]
org_id = 1
project_id = 42
retention = 17
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::UnknownKey { suggestion: Some(s), .. } if s == "retention_days"
    )));
}

#[test]
fn missing_project_id_is_reported() {
    let toml = r#"
[[projects]]
org_id = 1
"#;

    let errors = load_and_validate_str(toml).expect_err("project_id is required");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::MissingKey { key } if key.contains("project_id")
    )));
}

#[test]
fn wrong_type_is_reported() {
    let toml = r#"
[metrics]
enabled = "yes"
"#;

    let errors = load_and_validate_str(toml).expect_err("enabled must be a bool");
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigError::InvalidType { key, .. } if key.contains("enabled"))));
}

#[test]
fn semantic_errors_surface_through_load() {
    let toml = r#"
[[projects]]
org_id = 1
project_id = 42
retention_days = 0
"#;

    let errors = load_and_validate_str(toml).expect_err("zero retention is invalid");
    assert!(matches!(
        &errors[0],
        ConfigError::Validation { message } if message.contains("retention_days")
    ));
}

#[test]
fn env_overrides_file_values() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "beacon.toml",
            r#"
[limits]
max_secs_in_future = 30

[service]
log_level = "warn"
"#,
        )?;
        jail.set_env("BEACON_LIMITS_MAX_SECS_IN_FUTURE", "90");
        jail.set_env("BEACON_METRICS_ENABLED", "true");

        let config = load_config()?;
        assert_eq!(config.limits.max_secs_in_future, 90);
        assert!(config.metrics.enabled);
        assert_eq!(config.service.log_level, "warn");
        Ok(())
    });
}

#[test]
fn explicit_path_is_loaded_and_validated() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
[[projects]]
org_id = 7
project_id = 8
retention_days = 30
"#,
        )?;

        let config = load_and_validate_path(&jail.directory().join("custom.toml"))
            .expect("file is valid");
        assert_eq!(config.projects.len(), 1);
        assert_eq!(config.projects[0].retention_days, Some(30));
        Ok(())
    });
}
