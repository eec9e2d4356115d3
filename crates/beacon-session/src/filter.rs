// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session normalization and retention filter.
//!
//! One synchronous pass per payload: validate and normalize the fields,
//! derive the distinct id, evaluate retention against the normalized received
//! time, and assemble the canonical record only on accept. Nothing is
//! published from here and no state survives between calls.

use chrono::{DateTime, Utc};

use beacon_core::{CanonicalSessionRecord, ProjectConfig, ValidationError};

use crate::identity::derive_distinct_id;
use crate::normalize::{normalize, NormalizedFields};
use crate::payload::RawSessionPayload;
use crate::retention::{DropReason, IngestLimits, Retention};

/// Result of filtering one valid payload.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    Accepted(CanonicalSessionRecord),
    Dropped(DropReason),
}

impl FilterOutcome {
    /// The record to publish, if any.
    pub fn into_record(self) -> Option<CanonicalSessionRecord> {
        match self {
            FilterOutcome::Accepted(record) => Some(record),
            FilterOutcome::Dropped(_) => None,
        }
    }
}

/// Stateless session filter configured with the service ingestion limits.
///
/// Cheap to copy and safe to share across any number of worker tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionFilter {
    limits: IngestLimits,
}

impl SessionFilter {
    pub fn new(limits: IngestLimits) -> Self {
        Self { limits }
    }

    /// Filters one payload and reports why it was dropped, if it was.
    pub fn filter(
        &self,
        raw: &RawSessionPayload,
        org_id: u64,
        project_id: u64,
        config: &ProjectConfig,
        now: DateTime<Utc>,
    ) -> Result<FilterOutcome, ValidationError> {
        let fields = normalize(raw)?;
        let distinct_id = derive_distinct_id(raw.distinct_device_id.as_deref());
        let retention_days = config.resolved_retention_days();

        match self
            .limits
            .evaluate(fields.received, fields.started, now, retention_days)
        {
            Retention::Accept { retention_days } => Ok(FilterOutcome::Accepted(assemble(
                fields,
                distinct_id,
                org_id,
                project_id,
                retention_days,
            ))),
            Retention::Drop(reason) => Ok(FilterOutcome::Dropped(reason)),
        }
    }

    /// Returns the canonical record for an accepted payload, `None` for a drop.
    pub fn process(
        &self,
        raw: &RawSessionPayload,
        org_id: u64,
        project_id: u64,
        config: &ProjectConfig,
        now: DateTime<Utc>,
    ) -> Result<Option<CanonicalSessionRecord>, ValidationError> {
        self.filter(raw, org_id, project_id, config, now)
            .map(FilterOutcome::into_record)
    }
}

/// [`SessionFilter::process`] with the default ingestion limits.
pub fn process(
    raw: &RawSessionPayload,
    org_id: u64,
    project_id: u64,
    config: &ProjectConfig,
    now: DateTime<Utc>,
) -> Result<Option<CanonicalSessionRecord>, ValidationError> {
    SessionFilter::default().process(raw, org_id, project_id, config, now)
}

fn assemble(
    fields: NormalizedFields,
    distinct_id: String,
    org_id: u64,
    project_id: u64,
    retention_days: u16,
) -> CanonicalSessionRecord {
    CanonicalSessionRecord {
        org_id,
        project_id,
        session_id: fields.session_id,
        distinct_id,
        sequence: fields.sequence,
        received: epoch_seconds(fields.received),
        started: epoch_seconds(fields.started),
        duration: fields.duration,
        status: fields.status,
        error_count: fields.error_count,
        release: fields.release,
        environment: fields.environment,
        retention_days,
    }
}

/// Seconds since the Unix epoch, rounded to the nearest microsecond.
fn epoch_seconds(instant: DateTime<Utc>) -> f64 {
    let micros = instant.timestamp() as f64 * 1e6
        + (f64::from(instant.timestamp_subsec_nanos()) / 1e3).round();
    micros / 1e6
}
