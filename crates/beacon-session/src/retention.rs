// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Accept/drop decisions based on event age.
//!
//! The project retention window is measured against the event's received
//! time. Two service-wide ingestion limits are applied alongside it: sessions
//! that started too long before they were reported, and events stamped too
//! far in the future.

use chrono::{DateTime, TimeDelta, Utc};
use strum::{Display, IntoStaticStr};

/// Default maximum age of a session's start relative to its received time.
pub const DEFAULT_MAX_SESSION_SECS_IN_PAST: u64 = 5 * 24 * 60 * 60;

/// Default tolerance for client clocks running ahead of ours.
pub const DEFAULT_MAX_SECS_IN_FUTURE: u64 = 60;

/// Why an event was dropped. Drops are routine and never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum DropReason {
    /// The received time is at or past the project's retention window.
    RetentionExpired,
    /// The session started at or past the session-age horizon.
    SessionTooOld,
    /// The received time lies beyond the allowed clock skew.
    InFuture,
}

impl DropReason {
    /// Metric/log label, e.g. `retention_expired`.
    pub fn as_label(self) -> &'static str {
        self.into()
    }
}

/// Outcome of retention evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retention {
    /// Keep the event; the resolved retention travels with the record.
    Accept { retention_days: u16 },
    Drop(DropReason),
}

impl Retention {
    pub fn is_accept(&self) -> bool {
        matches!(self, Retention::Accept { .. })
    }
}

/// The single boundary convention used by every age check.
///
/// An age exactly equal to the window counts as expired.
pub fn is_expired(age: TimeDelta, window: TimeDelta) -> bool {
    age >= window
}

/// Evaluates the project retention window for an event received at `received`.
pub fn evaluate(received: DateTime<Utc>, now: DateTime<Utc>, retention_days: u16) -> Retention {
    let age = now - received;
    if is_expired(age, TimeDelta::days(i64::from(retention_days))) {
        Retention::Drop(DropReason::RetentionExpired)
    } else {
        Retention::Accept { retention_days }
    }
}

/// Service-wide limits applied in addition to the project retention window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestLimits {
    /// Maximum distance between `started` and the received time.
    pub max_session_age: TimeDelta,
    /// Maximum distance the received time may lie ahead of `now`.
    pub max_future_skew: TimeDelta,
}

impl Default for IngestLimits {
    fn default() -> Self {
        Self::from_secs(DEFAULT_MAX_SESSION_SECS_IN_PAST, DEFAULT_MAX_SECS_IN_FUTURE)
    }
}

impl IngestLimits {
    /// Builds limits from second counts, saturating values too large for a `TimeDelta`.
    pub fn from_secs(max_session_secs_in_past: u64, max_secs_in_future: u64) -> Self {
        Self {
            max_session_age: delta_from_secs(max_session_secs_in_past),
            max_future_skew: delta_from_secs(max_secs_in_future),
        }
    }

    /// Runs every age check for one event.
    ///
    /// Clock skew is checked first, then session age, then the retention window.
    pub fn evaluate(
        &self,
        received: DateTime<Utc>,
        started: DateTime<Utc>,
        now: DateTime<Utc>,
        retention_days: u16,
    ) -> Retention {
        if received - now > self.max_future_skew {
            return Retention::Drop(DropReason::InFuture);
        }
        if is_expired(received - started, self.max_session_age) {
            return Retention::Drop(DropReason::SessionTooOld);
        }
        evaluate(received, now, retention_days)
    }
}

fn delta_from_secs(secs: u64) -> TimeDelta {
    i64::try_from(secs)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .unwrap_or(TimeDelta::MAX)
}
