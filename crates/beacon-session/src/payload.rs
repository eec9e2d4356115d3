// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client-supplied session payload, as decoded from the wire.
//!
//! Every field is optional at this level so that a missing value becomes a
//! typed [`ValidationError`] during normalization instead of a decode failure.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use beacon_core::{SessionStatus, ValidationError};

/// Raw session update reported by a client SDK.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSessionPayload {
    #[serde(default, rename = "sid", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(default, rename = "did", skip_serializing_if = "Option::is_none")]
    pub distinct_device_id: Option<String>,

    #[serde(default, rename = "seq", skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u64>,

    #[serde(default, rename = "init", skip_serializing_if = "Option::is_none")]
    pub is_init: Option<bool>,

    /// Observation time per the client clock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<RawInstant>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started: Option<RawInstant>,

    #[serde(default, rename = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SessionStatus>,

    #[serde(default, rename = "errors", skip_serializing_if = "Option::is_none")]
    pub error_count: Option<u64>,

    #[serde(default, rename = "attrs")]
    pub attributes: SessionAttributes,
}

impl RawSessionPayload {
    /// Decodes a payload from its JSON wire form.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }
}

/// Release metadata attached to a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
}

/// An instant as clients send it: RFC 3339 text or epoch seconds.
///
/// Any other JSON value lands in `Invalid` so that it is rejected as a
/// malformed timestamp rather than failing the whole payload decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInstant {
    Seconds(f64),
    Text(String),
    Invalid(serde_json::Value),
}

impl RawInstant {
    /// Parses into an absolute UTC instant.
    ///
    /// Text without an offset is read as UTC. Epoch seconds are rounded to
    /// the nearest microsecond. `field` names the payload key in the
    /// resulting error.
    pub fn parse(&self, field: &'static str) -> Result<DateTime<Utc>, ValidationError> {
        let malformed = || ValidationError::MalformedTimestamp {
            field,
            value: self.to_string(),
        };

        match self {
            RawInstant::Seconds(secs) => {
                if !secs.is_finite() {
                    return Err(malformed());
                }
                let whole = secs.floor();
                let micros = ((secs - whole) * 1e6).round();
                let (whole, micros) = if micros >= 1e6 {
                    (whole + 1.0, 0.0)
                } else {
                    (whole, micros)
                };
                DateTime::from_timestamp(whole as i64, micros as u32 * 1_000)
                    .ok_or_else(malformed)
            }
            RawInstant::Text(text) => {
                let text = text.trim();
                if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
                    return Ok(dt.with_timezone(&Utc));
                }
                NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                    .map(|naive| naive.and_utc())
                    .map_err(|_| malformed())
            }
            RawInstant::Invalid(_) => Err(malformed()),
        }
    }
}

impl From<DateTime<Utc>> for RawInstant {
    fn from(dt: DateTime<Utc>) -> Self {
        RawInstant::Text(dt.to_rfc3339())
    }
}

impl std::fmt::Display for RawInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawInstant::Seconds(secs) => write!(f, "{secs}"),
            RawInstant::Text(text) => f.write_str(text),
            RawInstant::Invalid(value) => write!(f, "{value}"),
        }
    }
}
