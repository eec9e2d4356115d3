// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `beacon process` command implementation.
//!
//! Reads newline-delimited raw session payloads for one project, runs each
//! through the ingest pipeline, and writes accepted canonical records to
//! stdout as JSON lines. Logs go to stderr. Input is read with tokio's async
//! I/O.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use beacon_config::model::BeaconConfig;
use beacon_core::BeaconError;
use beacon_session::{
    IngestLimits, IngestOutcome, SessionFilter, SessionPipeline, StaticProjectConfigs,
};

use crate::sink::JsonLinesSink;

/// Counts of what happened to each input line.
///
/// `rejected` counts payloads that decoded but failed validation;
/// `undecodable` counts lines that were not a JSON payload at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub published: u64,
    pub dropped: u64,
    pub rejected: u64,
    pub undecodable: u64,
}

impl IngestSummary {
    pub fn total(&self) -> u64 {
        self.published + self.dropped + self.rejected + self.undecodable
    }
}

/// Builds the pipeline described by the service configuration.
pub fn build_pipeline(
    config: &BeaconConfig,
    sink: Arc<dyn beacon_core::StreamSink>,
) -> SessionPipeline {
    let limits = IngestLimits::from_secs(
        config.limits.max_session_secs_in_past,
        config.limits.max_secs_in_future,
    );
    let projects: StaticProjectConfigs = config
        .projects
        .iter()
        .map(|p| (p.org_id, p.project_id, p.project_config()))
        .collect();

    debug!(projects = projects.len(), ?limits, "session pipeline configured");
    SessionPipeline::new(SessionFilter::new(limits), Arc::new(projects), sink)
}

/// Feeds every line of `reader` through `pipeline`.
///
/// Blank lines are skipped. `now` fixes the evaluation clock; without it each
/// line is evaluated against the current wall clock. Undecodable lines are
/// counted and skipped; config lookup, sink, and I/O failures abort.
pub async fn ingest_lines<R: AsyncBufRead + Unpin>(
    pipeline: &SessionPipeline,
    reader: R,
    org_id: u64,
    project_id: u64,
    now: Option<DateTime<Utc>>,
) -> Result<IngestSummary, BeaconError> {
    let mut summary = IngestSummary::default();
    let mut lines = reader.lines();
    let mut line_number = 0usize;

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| BeaconError::Internal(format!("failed to read input: {e}")))?
    {
        line_number += 1;
        if line.trim().is_empty() {
            continue;
        }

        let now = now.unwrap_or_else(Utc::now);
        match pipeline.ingest_json(org_id, project_id, &line, now).await {
            Ok(IngestOutcome::Published) => summary.published += 1,
            Ok(IngestOutcome::Dropped(_)) => summary.dropped += 1,
            Ok(IngestOutcome::Rejected(_)) => summary.rejected += 1,
            Err(BeaconError::Decode(err)) => {
                warn!(line = line_number, error = %err, "skipping undecodable payload");
                beacon_prometheus::record_rejected("undecodable");
                summary.undecodable += 1;
            }
            Err(err) => return Err(err),
        }
    }

    pipeline.flush().await?;
    Ok(summary)
}

/// Runs the `beacon process` command against stdin or `input`.
pub async fn run_process(
    config: &BeaconConfig,
    org_id: u64,
    project_id: u64,
    input: Option<PathBuf>,
    now: Option<DateTime<Utc>>,
) -> Result<IngestSummary, BeaconError> {
    let sink = Arc::new(JsonLinesSink::new(std::io::stdout()));
    let pipeline = build_pipeline(config, sink);

    let summary = match input {
        Some(path) => {
            let file = tokio::fs::File::open(&path).await.map_err(|e| {
                BeaconError::Internal(format!("failed to open {}: {e}", path.display()))
            })?;
            ingest_lines(&pipeline, BufReader::new(file), org_id, project_id, now).await?
        }
        None => {
            let stdin = BufReader::new(tokio::io::stdin());
            ingest_lines(&pipeline, stdin, org_id, project_id, now).await?
        }
    };

    info!(
        org_id,
        project_id,
        total = summary.total(),
        published = summary.published,
        dropped = summary.dropped,
        rejected = summary.rejected,
        undecodable = summary.undecodable,
        "session input processed"
    );
    Ok(summary)
}
