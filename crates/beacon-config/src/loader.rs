// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./beacon.toml` > `~/.config/beacon/beacon.toml` > `/etc/beacon/beacon.toml`
//! with environment variable overrides via `BEACON_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::BeaconConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/beacon/beacon.toml";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "beacon.toml";

/// The user config file under the XDG config directory, if one can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("beacon").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/beacon/beacon.toml` (system-wide)
/// 3. `~/.config/beacon/beacon.toml` (user XDG config)
/// 4. `./beacon.toml` (local directory)
/// 5. `BEACON_*` environment variables
pub fn load_config() -> Result<BeaconConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<BeaconConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BeaconConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<BeaconConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BeaconConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(BeaconConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Environment variable provider mapping `BEACON_<SECTION>_<KEY>` to `section.key`.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `BEACON_LIMITS_MAX_SECS_IN_FUTURE` must map to
/// `limits.max_secs_in_future`, not `limits.max.secs.in.future`.
/// `[[projects]]` cannot be set from the environment.
fn env_provider() -> Env {
    Env::prefixed("BEACON_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("service_", "service.", 1)
            .replacen("limits_", "limits.", 1)
            .replacen("metrics_", "metrics.", 1);
        mapped.into()
    })
}
