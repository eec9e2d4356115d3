// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as positive limits, known log levels, and a duplicate-free project table.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::BeaconConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &BeaconConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.service.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "service.log_level `{}` is not one of {}",
                config.service.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.limits.max_session_secs_in_past == 0 {
        errors.push(ConfigError::Validation {
            message: "limits.max_session_secs_in_past must be greater than 0".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for (i, project) in config.projects.iter().enumerate() {
        if !seen.insert((project.org_id, project.project_id)) {
            errors.push(ConfigError::Validation {
                message: format!(
                    "duplicate project {}/{} in [[projects]] array",
                    project.org_id, project.project_id
                ),
            });
        }

        if project.retention_days == Some(0) {
            errors.push(ConfigError::Validation {
                message: format!("projects[{i}].retention_days must be greater than 0"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectEntry;

    fn project(org_id: u64, project_id: u64, retention_days: Option<u16>) -> ProjectEntry {
        ProjectEntry {
            org_id,
            project_id,
            retention_days,
        }
    }

    fn has_error(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&BeaconConfig::default()).is_ok());
    }

    #[test]
    fn unknown_log_level_fails_validation() {
        let mut config = BeaconConfig::default();
        config.service.log_level = "verbose".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "service.log_level"));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = BeaconConfig::default();
        config.service.log_level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn zero_session_age_fails_validation() {
        let mut config = BeaconConfig::default();
        config.limits.max_session_secs_in_past = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "max_session_secs_in_past"));
    }

    #[test]
    fn zero_future_skew_is_allowed() {
        let mut config = BeaconConfig::default();
        config.limits.max_secs_in_future = 0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn duplicate_projects_fail_validation() {
        let mut config = BeaconConfig::default();
        config.projects = vec![project(1, 42, Some(17)), project(1, 42, None)];
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "duplicate project 1/42"));
    }

    #[test]
    fn same_project_id_in_other_org_is_fine() {
        let mut config = BeaconConfig::default();
        config.projects = vec![project(1, 42, None), project(2, 42, None)];
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn zero_retention_fails_validation() {
        let mut config = BeaconConfig::default();
        config.projects = vec![project(1, 42, Some(30)), project(1, 43, Some(0))];
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "projects[1].retention_days"));
    }

    #[test]
    fn collects_all_errors() {
        let mut config = BeaconConfig::default();
        config.service.log_level = "loud".to_string();
        config.limits.max_session_secs_in_past = 0;
        config.projects = vec![project(1, 1, Some(0))];
        assert_eq!(validate_config(&config).unwrap_err().len(), 3);
    }
}
