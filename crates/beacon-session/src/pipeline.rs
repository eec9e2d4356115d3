// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ingest pipeline around the session filter.
//!
//! Resolves the project configuration, runs the filter, and publishes the
//! accepted record to the stream sink. Drops and rejections publish nothing.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use beacon_core::{
    BeaconError, ProjectConfig, ProjectConfigSource, StreamSink, ValidationError,
};

use crate::filter::{FilterOutcome, SessionFilter};
use crate::payload::RawSessionPayload;
use crate::retention::DropReason;

/// What happened to one ingested payload.
#[derive(Debug, Clone, PartialEq)]
pub enum IngestOutcome {
    /// A canonical record was handed to the sink.
    Published,
    /// Retention or ingestion limits dropped the event.
    Dropped(DropReason),
    /// The payload failed validation.
    Rejected(ValidationError),
}

/// Runs payloads through the session filter and publishes accepted records.
pub struct SessionPipeline {
    filter: SessionFilter,
    configs: Arc<dyn ProjectConfigSource>,
    sink: Arc<dyn StreamSink>,
}

impl SessionPipeline {
    pub fn new(
        filter: SessionFilter,
        configs: Arc<dyn ProjectConfigSource>,
        sink: Arc<dyn StreamSink>,
    ) -> Self {
        Self {
            filter,
            configs,
            sink,
        }
    }

    /// Ingests one decoded payload.
    ///
    /// Config lookup and publish failures are returned as errors; drops and
    /// validation failures are ordinary outcomes.
    pub async fn ingest(
        &self,
        org_id: u64,
        project_id: u64,
        raw: &RawSessionPayload,
        now: DateTime<Utc>,
    ) -> Result<IngestOutcome, BeaconError> {
        let config = self.configs.project_config(org_id, project_id).await?;

        let record = match self.filter.filter(raw, org_id, project_id, &config, now) {
            Ok(FilterOutcome::Accepted(record)) => record,
            Ok(FilterOutcome::Dropped(reason)) => {
                debug!(
                    org_id,
                    project_id,
                    session_id = raw.session_id.as_deref().unwrap_or_default(),
                    reason = reason.as_label(),
                    "session update dropped"
                );
                beacon_prometheus::record_dropped(reason.as_label());
                return Ok(IngestOutcome::Dropped(reason));
            }
            Err(err) => {
                debug!(
                    org_id,
                    project_id,
                    kind = err.kind(),
                    error = %err,
                    "session update rejected"
                );
                beacon_prometheus::record_rejected(err.kind());
                return Ok(IngestOutcome::Rejected(err));
            }
        };

        if let Err(err) = self.sink.publish(&record).await {
            warn!(
                org_id,
                project_id,
                session_id = %record.session_id,
                error = %err,
                "failed to publish session record"
            );
            beacon_prometheus::record_publish_failure();
            return Err(err);
        }

        debug!(
            org_id,
            project_id,
            session_id = %record.session_id,
            seq = record.sequence,
            status = %record.status,
            "session update published"
        );
        beacon_prometheus::record_accepted(project_id);
        Ok(IngestOutcome::Published)
    }

    /// Decodes a JSON payload and ingests it.
    pub async fn ingest_json(
        &self,
        org_id: u64,
        project_id: u64,
        payload: &str,
        now: DateTime<Utc>,
    ) -> Result<IngestOutcome, BeaconError> {
        let raw = RawSessionPayload::from_json(payload)?;
        self.ingest(org_id, project_id, &raw, now).await
    }

    /// Flushes the underlying sink.
    pub async fn flush(&self) -> Result<(), BeaconError> {
        self.sink.flush().await
    }
}

/// In-memory project table, e.g. built from the service configuration.
///
/// Projects without an entry resolve to the default configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticProjectConfigs {
    entries: HashMap<(u64, u64), ProjectConfig>,
}

impl StaticProjectConfigs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a project's configuration.
    pub fn insert(&mut self, org_id: u64, project_id: u64, config: ProjectConfig) {
        self.entries.insert((org_id, project_id), config);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(u64, u64, ProjectConfig)> for StaticProjectConfigs {
    fn from_iter<I: IntoIterator<Item = (u64, u64, ProjectConfig)>>(iter: I) -> Self {
        let mut configs = Self::new();
        for (org_id, project_id, config) in iter {
            configs.insert(org_id, project_id, config);
        }
        configs
    }
}

#[async_trait]
impl ProjectConfigSource for StaticProjectConfigs {
    async fn project_config(
        &self,
        org_id: u64,
        project_id: u64,
    ) -> Result<ProjectConfig, BeaconError> {
        Ok(self
            .entries
            .get(&(org_id, project_id))
            .copied()
            .unwrap_or_default())
    }
}
