// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Newline-delimited JSON stream sink.

use std::io::Write;
use std::sync::Mutex;

use async_trait::async_trait;

use beacon_core::{BeaconError, CanonicalSessionRecord, StreamSink};

/// Writes one canonical record per line to any writer (stdout by default).
pub struct JsonLinesSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn with_writer<T>(
        &self,
        f: impl FnOnce(&mut W) -> std::io::Result<T>,
    ) -> Result<T, BeaconError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| BeaconError::Internal("json sink lock poisoned".into()))?;
        f(&mut *writer).map_err(|e| BeaconError::Sink {
            message: format!("failed to write record: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

#[async_trait]
impl<W: Write + Send> StreamSink for JsonLinesSink<W> {
    async fn publish(&self, record: &CanonicalSessionRecord) -> Result<(), BeaconError> {
        let mut line = serde_json::to_vec(record)
            .map_err(|e| BeaconError::Internal(format!("failed to encode record: {e}")))?;
        line.push(b'\n');
        self.with_writer(|w| w.write_all(&line))
    }

    async fn flush(&self) -> Result<(), BeaconError> {
        self.with_writer(|w| w.flush())
    }
}
