// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Beacon session ingestion service.
//!
//! This crate provides the error taxonomy, the wire types exchanged with the
//! stream, and the boundary traits for project configuration lookup and
//! publishing. The session core and the pipeline build on these.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{BeaconError, ValidationError};
pub use types::{CanonicalSessionRecord, ProjectConfig, SessionStatus, DEFAULT_RETENTION_DAYS};

pub use traits::{ProjectConfigSource, StreamSink};
