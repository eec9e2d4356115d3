// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Beacon ingestion service.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

use beacon_core::ProjectConfig;

/// Top-level Beacon configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BeaconConfig {
    /// Process-level settings.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Ingestion limits applied to every project.
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Prometheus metrics settings.
    #[serde(default)]
    pub metrics: MetricsConfig,

    /// Static per-project settings, one `[[projects]]` table each.
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
}

/// Process-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Ingestion limits that apply on top of each project's retention window.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    /// Sessions that started this many seconds (or more) before they were
    /// reported are dropped. Defaults to five days.
    #[serde(default = "default_max_session_secs_in_past")]
    pub max_session_secs_in_past: u64,

    /// Tolerated client clock skew into the future, in seconds.
    #[serde(default = "default_max_secs_in_future")]
    pub max_secs_in_future: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_session_secs_in_past: default_max_session_secs_in_past(),
            max_secs_in_future: default_max_secs_in_future(),
        }
    }
}

fn default_max_session_secs_in_past() -> u64 {
    5 * 24 * 60 * 60
}

fn default_max_secs_in_future() -> u64 {
    60
}

/// Prometheus metrics configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsConfig {
    /// Install the Prometheus recorder and render metrics on exit.
    #[serde(default)]
    pub enabled: bool,
}

/// One statically configured project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectEntry {
    pub org_id: u64,
    pub project_id: u64,

    /// Event retention in days. Omit to use the 90 day default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_days: Option<u16>,
}

impl ProjectEntry {
    /// The per-event project configuration this entry describes.
    pub fn project_config(&self) -> ProjectConfig {
        ProjectConfig {
            retention_days: self.retention_days,
        }
    }
}
