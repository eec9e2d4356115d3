// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Beacon integration tests.
//!
//! Provides mock collaborators and payload builders for fast,
//! deterministic, CI-runnable tests without external services.
//!
//! # Components
//!
//! - [`MockSink`] - Stream sink that captures published records
//! - [`MockConfigSource`] - Project config lookup with injectable failures
//! - [`PayloadBuilder`] - Fluent builder for raw session payloads

pub mod mock_config;
pub mod mock_sink;
pub mod payload;

pub use mock_config::MockConfigSource;
pub use mock_sink::MockSink;
pub use payload::PayloadBuilder;
