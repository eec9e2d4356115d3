// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Boundary traits for the collaborators around the session core.
//!
//! Both use `#[async_trait]` for dynamic dispatch compatibility.

pub mod config_source;
pub mod sink;

pub use config_source::ProjectConfigSource;
pub use sink::StreamSink;
