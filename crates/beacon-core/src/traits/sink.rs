// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Durable stream publish API.

use async_trait::async_trait;

use crate::error::BeaconError;
use crate::types::CanonicalSessionRecord;

/// Downstream stream that accepted session records are published to.
#[async_trait]
pub trait StreamSink: Send + Sync {
    /// Publishes one record. Implementations serialize it verbatim.
    async fn publish(&self, record: &CanonicalSessionRecord) -> Result<(), BeaconError>;

    /// Flushes buffered records, if the sink buffers at all.
    async fn flush(&self) -> Result<(), BeaconError> {
        Ok(())
    }
}
