#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
//! # Reacher Runtime
//!
//! Entry point for the reacher runtime binary.
//!
//! Runs a number of reacher episodes against the reference arm simulator and
//! logs a summary for each. A lightweight file watcher allows the JSON config
//! to be edited while the binary runs; changes take effect at the next
//! episode boundary.

mod app;
mod watcher;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use app::{PolicyKind, RunOptions};

/// Command line of the reacher runtime
#[derive(Debug, Parser)]
#[command(name = "reacher_main", about = "Run reacher episodes with a fixed policy")]
struct Cli {
    /// Number of episodes to run
    #[arg(long, default_value_t = 1)]
    episodes: u32,

    /// Seed for the episode generator; drawn from the OS when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Action selection
    #[arg(long, value_enum, default_value_t = PolicyArg::Random)]
    policy: PolicyArg,

    /// JSON file with `env` and `arm` sections
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reload the config file between episodes when it changes
    #[arg(long, requires = "config")]
    watch: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    Zero,
    Random,
}

impl From<PolicyArg> for PolicyKind {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Zero => PolicyKind::Zero,
            PolicyArg::Random => PolicyKind::Random,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let opts = RunOptions {
        episodes: cli.episodes,
        seed: cli.seed,
        policy: cli.policy.into(),
        config_path: cli.config,
        watch: cli.watch,
    };
    app::run(&opts)?;
    Ok(())
}
