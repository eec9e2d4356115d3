// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Metric registration and recording helpers.
//!
//! Uses the metrics-rs facade so any recorder (Prometheus, statsd, etc.)
//! can collect these metrics. Without an installed recorder every call is a no-op.

use metrics::describe_counter;

pub const SESSIONS_ACCEPTED: &str = "beacon_sessions_accepted_total";
pub const SESSIONS_DROPPED: &str = "beacon_sessions_dropped_total";
pub const SESSIONS_REJECTED: &str = "beacon_sessions_rejected_total";
pub const PUBLISH_FAILURES: &str = "beacon_publish_failures_total";

/// Register all Beacon metric descriptions.
///
/// Called once at startup after the recorder is installed.
pub fn register_metrics() {
    describe_counter!(SESSIONS_ACCEPTED, "Session updates accepted and published");
    describe_counter!(
        SESSIONS_DROPPED,
        "Session updates dropped by retention or ingestion limits"
    );
    describe_counter!(SESSIONS_REJECTED, "Session updates rejected as malformed");
    describe_counter!(PUBLISH_FAILURES, "Records the stream sink failed to accept");
}

/// Record an accepted session update.
pub fn record_accepted(project_id: u64) {
    metrics::counter!(SESSIONS_ACCEPTED, "project_id" => project_id.to_string()).increment(1);
}

/// Record a dropped session update.
pub fn record_dropped(reason: &'static str) {
    metrics::counter!(SESSIONS_DROPPED, "reason" => reason).increment(1);
}

/// Record a rejected session update.
pub fn record_rejected(kind: &'static str) {
    metrics::counter!(SESSIONS_REJECTED, "kind" => kind).increment(1);
}

/// Record a failed publish.
pub fn record_publish_failure() {
    metrics::counter!(PUBLISH_FAILURES).increment(1);
}
