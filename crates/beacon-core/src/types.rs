// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types shared between the session core, the pipeline, and sinks.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Retention applied when a project does not configure one.
pub const DEFAULT_RETENTION_DAYS: u16 = 90;

/// Terminal or intermediate state reported by a session beacon.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SessionStatus {
    /// The session is alive and healthy.
    Ok,
    /// The session terminated normally.
    Exited,
    /// The session terminated with an unhandled error.
    Crashed,
    /// The session ended without a proper shutdown (e.g. killed by the OS).
    Abnormal,
}

/// Per-project settings consulted while processing one event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Event retention in days. `None` means the documented default applies.
    #[serde(default, rename = "eventRetention", alias = "retention_days")]
    pub retention_days: Option<u16>,
}

impl ProjectConfig {
    /// Creates a config with an explicit retention.
    pub fn with_retention(days: u16) -> Self {
        Self {
            retention_days: Some(days),
        }
    }

    /// The retention that governs accept/drop, falling back to the default.
    ///
    /// A zero retention is not a valid policy and resolves to the default too.
    pub fn resolved_retention_days(&self) -> u16 {
        self.retention_days
            .filter(|days| *days > 0)
            .unwrap_or(DEFAULT_RETENTION_DAYS)
    }
}

/// A normalized, policy-validated session update ready for the stream.
///
/// Field names are the wire contract with downstream consumers. `duration`
/// serializes as an explicit `null` when the client did not report one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalSessionRecord {
    pub org_id: u64,
    pub project_id: u64,
    pub session_id: String,
    pub distinct_id: String,
    #[serde(rename = "seq")]
    pub sequence: u64,
    /// Seconds since the Unix epoch.
    pub received: f64,
    /// Seconds since the Unix epoch.
    pub started: f64,
    pub duration: Option<f64>,
    pub status: SessionStatus,
    #[serde(rename = "errors")]
    pub error_count: u64,
    pub release: String,
    pub environment: String,
    pub retention_days: u16,
}
