// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock project configuration source.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use beacon_core::{BeaconError, ProjectConfig, ProjectConfigSource};

/// Config source with per-project overrides and injectable lookup failures.
#[derive(Default)]
pub struct MockConfigSource {
    configs: RwLock<HashMap<(u64, u64), ProjectConfig>>,
    unresolvable: RwLock<HashSet<(u64, u64)>>,
}

impl MockConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a project's configuration.
    pub async fn set(&self, org_id: u64, project_id: u64, config: ProjectConfig) {
        self.configs
            .write()
            .await
            .insert((org_id, project_id), config);
    }

    /// Make lookups for a project fail.
    pub async fn make_unresolvable(&self, org_id: u64, project_id: u64) {
        self.unresolvable
            .write()
            .await
            .insert((org_id, project_id));
    }
}

#[async_trait]
impl ProjectConfigSource for MockConfigSource {
    async fn project_config(
        &self,
        org_id: u64,
        project_id: u64,
    ) -> Result<ProjectConfig, BeaconError> {
        if self.unresolvable.read().await.contains(&(org_id, project_id)) {
            return Err(BeaconError::ConfigLookup {
                org_id,
                project_id,
                message: "project is unresolvable in mock".into(),
            });
        }
        Ok(self
            .configs
            .read()
            .await
            .get(&(org_id, project_id))
            .copied()
            .unwrap_or_default())
    }
}
