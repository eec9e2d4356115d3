// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prometheus metrics for the Beacon session ingestion service.
//!
//! Uses the metrics-rs facade with the Prometheus exporter.
//! Metrics are rendered as Prometheus text format via [`PrometheusMetrics::render`].

pub mod recording;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use beacon_core::BeaconError;

pub use recording::{
    record_accepted, record_dropped, record_publish_failure, record_rejected, register_metrics,
};

/// Installed Prometheus recorder.
pub struct PrometheusMetrics {
    handle: PrometheusHandle,
}

impl PrometheusMetrics {
    /// Installs the Prometheus recorder globally.
    ///
    /// Only one recorder can be installed per process. Returns an error if a
    /// recorder is already installed.
    pub fn install() -> Result<Self, BeaconError> {
        let handle = PrometheusBuilder::new().install_recorder().map_err(|e| {
            BeaconError::Internal(format!("failed to install Prometheus recorder: {e}"))
        })?;

        recording::register_metrics();

        tracing::info!("prometheus metrics recorder installed");

        Ok(Self { handle })
    }

    /// Wraps an existing handle, e.g. from a recorder built for a test.
    pub fn from_handle(handle: PrometheusHandle) -> Self {
        Self { handle }
    }

    /// Render all collected metrics in Prometheus text format.
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_render_with_labels() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let metrics = PrometheusMetrics::from_handle(recorder.handle());

        metrics::with_local_recorder(&recorder, || {
            register_metrics();
            record_accepted(42);
            record_accepted(42);
            record_dropped("retention_expired");
            record_rejected("missing_field");
            record_publish_failure();
        });

        let output = metrics.render();
        assert!(output.contains("beacon_sessions_accepted_total{project_id=\"42\"} 2"));
        assert!(output.contains("beacon_sessions_dropped_total{reason=\"retention_expired\"} 1"));
        assert!(output.contains("beacon_sessions_rejected_total{kind=\"missing_field\"} 1"));
        assert!(output.contains("beacon_publish_failures_total 1"));
    }

    #[test]
    fn recording_without_recorder_is_noop() {
        record_accepted(1);
        record_dropped("in_future");
    }
}
