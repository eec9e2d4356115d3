// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock stream sink for deterministic testing.
//!
//! `MockSink` implements `StreamSink` by capturing every published record for
//! assertion in tests. It can be switched into a failing mode to exercise
//! publish error paths.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use beacon_core::{BeaconError, CanonicalSessionRecord, StreamSink};

/// A stream sink that records what it was given.
#[derive(Clone, Default)]
pub struct MockSink {
    published: Arc<Mutex<Vec<CanonicalSessionRecord>>>,
    failing: Arc<AtomicBool>,
    flushes: Arc<AtomicUsize>,
}

impl MockSink {
    /// Create a new sink with no captured records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink that rejects every publish.
    pub fn failing() -> Self {
        let sink = Self::new();
        sink.set_failing(true);
        sink
    }

    /// Toggle failure mode.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Get all records that were published.
    pub async fn published(&self) -> Vec<CanonicalSessionRecord> {
        self.published.lock().await.clone()
    }

    /// Get the count of published records.
    pub async fn published_count(&self) -> usize {
        self.published.lock().await.len()
    }

    /// Remove and return the oldest published record.
    pub async fn pop_front(&self) -> Option<CanonicalSessionRecord> {
        let mut published = self.published.lock().await;
        if published.is_empty() {
            None
        } else {
            Some(published.remove(0))
        }
    }

    /// Number of times `flush()` was called.
    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StreamSink for MockSink {
    async fn publish(&self, record: &CanonicalSessionRecord) -> Result<(), BeaconError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(BeaconError::Sink {
                message: "mock sink is failing".into(),
                source: None,
            });
        }
        self.published.lock().await.push(record.clone());
        Ok(())
    }

    async fn flush(&self) -> Result<(), BeaconError> {
        self.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
