// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fluent builder for raw session payloads.

use chrono::{DateTime, TimeDelta, Utc};

use beacon_core::SessionStatus;
use beacon_session::{RawInstant, RawSessionPayload, SessionAttributes};

/// Session id shared by the builder's default payloads.
pub const TEST_SESSION_ID: &str = "8333339f-5675-4f89-a9a0-1c935255ab58";

/// Builds [`RawSessionPayload`] values for tests.
///
/// Defaults to a healthy `ok` session for release `app@1.0.0` in
/// `production`, observed at `received` and started one hour earlier.
#[derive(Debug, Clone)]
pub struct PayloadBuilder {
    payload: RawSessionPayload,
}

impl PayloadBuilder {
    pub fn new(received: DateTime<Utc>) -> Self {
        Self {
            payload: RawSessionPayload {
                session_id: Some(TEST_SESSION_ID.into()),
                distinct_device_id: Some("foobarbaz".into()),
                sequence: None,
                is_init: None,
                timestamp: Some(received.into()),
                started: Some((received - TimeDelta::hours(1)).into()),
                duration_seconds: None,
                status: Some(SessionStatus::Ok),
                error_count: None,
                attributes: SessionAttributes {
                    release: Some("app@1.0.0".into()),
                    environment: Some("production".into()),
                },
            },
        }
    }

    pub fn session_id(mut self, sid: impl Into<String>) -> Self {
        self.payload.session_id = Some(sid.into());
        self
    }

    pub fn distinct_device_id(mut self, did: Option<&str>) -> Self {
        self.payload.distinct_device_id = did.map(str::to_owned);
        self
    }

    pub fn seq(mut self, seq: u64) -> Self {
        self.payload.sequence = Some(seq);
        self
    }

    pub fn init(mut self, init: bool) -> Self {
        self.payload.is_init = Some(init);
        self
    }

    pub fn started(mut self, started: DateTime<Utc>) -> Self {
        self.payload.started = Some(started.into());
        self
    }

    pub fn raw_timestamp(mut self, timestamp: RawInstant) -> Self {
        self.payload.timestamp = Some(timestamp);
        self
    }

    pub fn duration(mut self, secs: f64) -> Self {
        self.payload.duration_seconds = Some(secs);
        self
    }

    pub fn status(mut self, status: SessionStatus) -> Self {
        self.payload.status = Some(status);
        self
    }

    pub fn errors(mut self, errors: u64) -> Self {
        self.payload.error_count = Some(errors);
        self
    }

    pub fn release(mut self, release: Option<&str>) -> Self {
        self.payload.attributes.release = release.map(str::to_owned);
        self
    }

    pub fn environment(mut self, environment: Option<&str>) -> Self {
        self.payload.attributes.environment = environment.map(str::to_owned);
        self
    }

    /// Clears a field by its wire key, to build invalid payloads.
    pub fn without(mut self, key: &str) -> Self {
        match key {
            "sid" => self.payload.session_id = None,
            "status" => self.payload.status = None,
            "timestamp" => self.payload.timestamp = None,
            "started" => self.payload.started = None,
            "release" => self.payload.attributes.release = None,
            other => panic!("PayloadBuilder::without does not know `{other}`"),
        }
        self
    }

    pub fn build(self) -> RawSessionPayload {
        self.payload
    }

    /// The payload in its JSON wire form.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.payload).expect("payload serializes")
    }
}
