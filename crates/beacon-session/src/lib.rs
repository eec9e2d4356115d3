// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session normalization and retention filtering.
//!
//! Turns a raw client session beacon plus its project's configuration into
//! either a [`CanonicalSessionRecord`](beacon_core::CanonicalSessionRecord)
//! or a drop decision. The transform is pure and stateless per event:
//!
//! - [`identity`] derives pseudonymous distinct ids
//! - [`normalize`] validates and repairs fields
//! - [`retention`] decides accept/drop by event age
//! - [`filter`] composes the three into one pass
//! - [`pipeline`] resolves project config and publishes accepted records
//!
//! # Usage
//!
//! ```
//! use beacon_core::ProjectConfig;
//! use beacon_session::{process, RawSessionPayload};
//!
//! let raw = RawSessionPayload::from_json(r#"{
//!     "sid": "8333339f-5675-4f89-a9a0-1c935255ab58",
//!     "init": true,
//!     "seq": 42,
//!     "timestamp": "2026-10-19T12:00:00Z",
//!     "started": "2026-10-19T11:00:00Z",
//!     "status": "crashed",
//!     "attrs": {"release": "app@1.0.0"}
//! }"#).unwrap();
//! let now = "2026-10-19T12:00:05Z".parse().unwrap();
//!
//! let record = process(&raw, 1, 42, &ProjectConfig::default(), now)
//!     .expect("payload is valid")
//!     .expect("event is fresh");
//! assert_eq!(record.sequence, 0);
//! assert_eq!(record.error_count, 1);
//! assert_eq!(record.duration, None);
//! ```

pub mod filter;
pub mod identity;
pub mod normalize;
pub mod payload;
pub mod pipeline;
pub mod retention;

pub use filter::{process, FilterOutcome, SessionFilter};
pub use identity::derive_distinct_id;
pub use normalize::{normalize, NormalizedFields};
pub use payload::{RawInstant, RawSessionPayload, SessionAttributes};
pub use pipeline::{IngestOutcome, SessionPipeline, StaticProjectConfigs};
pub use retention::{DropReason, IngestLimits, Retention};
