// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Beacon session ingestion service.

use thiserror::Error;

/// Why a single session payload was rejected before normalization.
///
/// Rejections are fatal to the one event only. The caller decides how to
/// report them and must not publish anything for the event.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field was absent (or empty, for string fields).
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// An instant field could not be parsed into an absolute time.
    #[error("malformed timestamp in `{field}`: {value}")]
    MalformedTimestamp { field: &'static str, value: String },

    /// `duration` was negative or not a finite number.
    #[error("invalid duration {0}")]
    NegativeDuration(f64),
}

impl ValidationError {
    /// Short, stable label used for metrics and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingField(_) => "missing_field",
            ValidationError::MalformedTimestamp { .. } => "malformed_timestamp",
            ValidationError::NegativeDuration(_) => "negative_duration",
        }
    }
}

/// The primary error type used across Beacon crates.
#[derive(Debug, Error)]
pub enum BeaconError {
    /// A session payload failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Project configuration could not be resolved for a tenant.
    #[error("project config lookup failed for {org_id}/{project_id}: {message}")]
    ConfigLookup {
        org_id: u64,
        project_id: u64,
        message: String,
    },

    /// The downstream stream sink refused or failed a publish.
    #[error("sink error: {message}")]
    Sink {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A payload could not be decoded from its wire form.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
