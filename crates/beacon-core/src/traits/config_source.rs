// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Project configuration lookup.

use async_trait::async_trait;

use crate::error::BeaconError;
use crate::types::ProjectConfig;

/// Resolves the configuration that applies to a tenant's project.
///
/// Failing to resolve is the caller's concern; the session core only ever
/// receives an already-resolved [`ProjectConfig`].
#[async_trait]
pub trait ProjectConfigSource: Send + Sync {
    async fn project_config(
        &self,
        org_id: u64,
        project_id: u64,
    ) -> Result<ProjectConfig, BeaconError>;
}
