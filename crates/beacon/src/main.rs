// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Beacon - session telemetry normalization and retention filtering.
//!
//! This is the binary entry point for the Beacon service.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod process;
mod sink;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use beacon_config::model::BeaconConfig;
use beacon_prometheus::PrometheusMetrics;

/// Beacon - session telemetry normalization and retention filtering.
#[derive(Parser, Debug)]
#[command(name = "beacon", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the XDG hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize newline-delimited session payloads and print accepted records.
    Process {
        /// Organization that owns the project.
        #[arg(long)]
        org_id: u64,
        /// Project the sessions were reported for.
        #[arg(long)]
        project_id: u64,
        /// Read payloads from this file instead of stdin.
        #[arg(long)]
        input: Option<PathBuf>,
        /// Evaluate retention as of this RFC 3339 instant instead of the wall clock.
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },
    /// Print the distinct id derived from a device id (nil UUID if omitted).
    DistinctId {
        did: Option<String>,
    },
    /// Load and validate configuration, then exit.
    CheckConfig,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            beacon_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Process {
            org_id,
            project_id,
            input,
            now,
        } => {
            init_tracing(&config.service.log_level);

            let metrics = if config.metrics.enabled {
                match PrometheusMetrics::install() {
                    Ok(metrics) => Some(metrics),
                    Err(e) => {
                        tracing::warn!(error = %e, "metrics disabled");
                        None
                    }
                }
            } else {
                None
            };

            let result = process::run_process(&config, org_id, project_id, input, now).await;

            if let Some(metrics) = metrics {
                eprint!("{}", metrics.render());
            }
            if let Err(e) = result {
                tracing::error!(error = %e, "processing aborted");
                std::process::exit(1);
            }
        }
        Commands::DistinctId { did } => {
            println!("{}", beacon_session::derive_distinct_id(did.as_deref()));
        }
        Commands::CheckConfig => {
            println!(
                "beacon: config ok (log_level={}, projects={}, metrics={})",
                config.service.log_level,
                config.projects.len(),
                config.metrics.enabled
            );
        }
    }
}

fn load_config(
    path: Option<&std::path::Path>,
) -> Result<BeaconConfig, Vec<beacon_config::ConfigError>> {
    match path {
        Some(path) => beacon_config::load_and_validate_path(path),
        None => beacon_config::load_and_validate(),
    }
}

/// Initializes the tracing subscriber on stderr with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("beacon={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        // Only jemalloc supports advancing the stats epoch.
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn cli_parses_process_arguments() {
        let cli = Cli::try_parse_from([
            "beacon",
            "process",
            "--org-id",
            "1",
            "--project-id",
            "42",
            "--now",
            "2026-10-19T12:00:00Z",
        ])
        .expect("arguments are valid");

        match cli.command {
            Commands::Process {
                org_id,
                project_id,
                input,
                now,
            } => {
                assert_eq!(org_id, 1);
                assert_eq!(project_id, 42);
                assert!(input.is_none());
                assert_eq!(now.unwrap().timestamp(), 1_792_411_200);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn cli_rejects_malformed_now() {
        assert!(Cli::try_parse_from([
            "beacon", "process", "--org-id", "1", "--project-id", "2", "--now", "later",
        ])
        .is_err());
    }

    #[test]
    fn explicit_config_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("beacon.toml");
        std::fs::write(
            &path,
            "[[projects]]\norg_id = 1\nproject_id = 42\nretention_days = 17\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).expect("config is valid");
        assert_eq!(config.projects[0].retention_days, Some(17));
    }
}
