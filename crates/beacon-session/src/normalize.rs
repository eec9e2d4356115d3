// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field normalization for raw session payloads.
//!
//! Each repair rule is a small pure function so it can be tested on its own.
//! [`normalize`] validates the required fields first and then composes the
//! rules into a [`NormalizedFields`] value. The input payload is never mutated.

use chrono::{DateTime, Utc};

use beacon_core::{SessionStatus, ValidationError};

use crate::payload::RawSessionPayload;

/// Payload fields after validation and repair, before identity and retention.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedFields {
    pub session_id: String,
    pub sequence: u64,
    pub received: DateTime<Utc>,
    pub started: DateTime<Utc>,
    pub duration: Option<f64>,
    pub status: SessionStatus,
    pub error_count: u64,
    pub release: String,
    pub environment: String,
}

/// Validates `raw` and derives its authoritative field values.
///
/// Fails on the first missing required field (`sid`, `status`, `release`,
/// `timestamp`, `started`, checked in that order), on an unparsable instant,
/// or on a negative duration.
pub fn normalize(raw: &RawSessionPayload) -> Result<NormalizedFields, ValidationError> {
    let session_id = required_text(raw.session_id.as_deref(), "sid")?;
    let status = raw.status.ok_or(ValidationError::MissingField("status"))?;
    let release = required_text(raw.attributes.release.as_deref(), "release")?;
    let received = raw
        .timestamp
        .as_ref()
        .ok_or(ValidationError::MissingField("timestamp"))?
        .parse("timestamp")?;
    let started = raw
        .started
        .as_ref()
        .ok_or(ValidationError::MissingField("started"))?
        .parse("started")?;

    Ok(NormalizedFields {
        session_id: session_id.to_owned(),
        sequence: normalize_sequence(raw.is_init.unwrap_or(false), raw.sequence),
        received,
        started,
        duration: normalize_duration(raw.duration_seconds)?,
        status,
        error_count: infer_crash_errors(status, raw.error_count.unwrap_or(0)),
        release: release.to_owned(),
        environment: normalize_environment(raw.attributes.environment.as_deref()),
    })
}

/// Every session restarts its counter at init, so an init beacon is always `0`.
pub fn normalize_sequence(is_init: bool, client_sequence: Option<u64>) -> u64 {
    if is_init {
        0
    } else {
        client_sequence.unwrap_or(0)
    }
}

/// Keeps an absent duration absent. Negative or non-finite values are invalid.
pub fn normalize_duration(duration: Option<f64>) -> Result<Option<f64>, ValidationError> {
    match duration {
        Some(secs) if !secs.is_finite() || secs < 0.0 => {
            Err(ValidationError::NegativeDuration(secs))
        }
        other => Ok(other),
    }
}

/// A crashed session has at least one error. Never lowers a reported count.
pub fn infer_crash_errors(status: SessionStatus, error_count: u64) -> u64 {
    if status == SessionStatus::Crashed && error_count == 0 {
        1
    } else {
        error_count
    }
}

/// Missing environment becomes the empty string.
pub fn normalize_environment(environment: Option<&str>) -> String {
    environment.unwrap_or_default().to_owned()
}

fn required_text<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ValidationError::MissingField(field)),
    }
}
