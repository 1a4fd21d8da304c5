//! # Reacher Runtime Loop
//!
//! Builds the arm simulator and the reacher environment from an optional JSON
//! config file, then runs a number of episodes with a fixed policy and logs a
//! summary per episode.
//!
//! With `--watch` the config file is monitored through [`crate::watcher`].
//! Changes are applied between episodes, never in the middle of one; a config
//! that fails to parse or validate is logged and ignored.

use anyhow::{Context, Result};
use physics::{ArmParams, ArmSim};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use reacher::{run_episode, ActionSpace, EpisodeSummary, ReacherConfig, ReacherEnv, ACTION_SIZE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};

use crate::watcher;

/// Contents of the runtime config file. Both sections are optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    pub env: ReacherConfig,
    pub arm: ArmParams,
}

impl RuntimeConfig {
    /// Read, parse and validate a config file.
    ///
    /// # Errors
    ///
    /// Returns an error naming `path` if it cannot be read, is not valid JSON,
    /// or holds values the environment or simulator reject.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config
            .env
            .validate()
            .with_context(|| format!("validating env section of {}", path.display()))?;
        config
            .arm
            .validate()
            .with_context(|| format!("validating arm section of {}", path.display()))?;
        Ok(config)
    }
}

/// Action selection used by the run loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyKind {
    /// Always command zero torque
    Zero,
    /// Sample uniformly from the action space
    Random,
}

impl PolicyKind {
    fn act(self, space: &ActionSpace, rng: &mut dyn RngCore) -> Vec<f64> {
        match self {
            PolicyKind::Zero => vec![0.0; ACTION_SIZE],
            PolicyKind::Random => space.sample(rng),
        }
    }
}

/// Everything the run loop needs from the command line.
#[derive(Clone, Debug)]
pub struct RunOptions {
    pub episodes: u32,
    pub seed: Option<u64>,
    pub policy: PolicyKind,
    pub config_path: Option<PathBuf>,
    pub watch: bool,
}

/// Per-episode results of a run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub episodes: Vec<EpisodeSummary>,
}

impl RunReport {
    /// Fraction of episodes in which the goal was reached at least once.
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.episodes.is_empty() {
            return 0.0;
        }
        let reached = self.episodes.iter().filter(|s| s.reached).count();
        reached as f64 / self.episodes.len() as f64
    }
}

fn build_env(config: RuntimeConfig) -> Result<ReacherEnv<ArmSim>> {
    let sim = ArmSim::with_params(config.arm).context("building arm simulator")?;
    let env = ReacherEnv::with_config(sim, config.env).context("building reacher environment")?;
    Ok(env)
}

/// Apply a changed config file to `env`; a bad file leaves `env` untouched.
fn reload(env: &mut ReacherEnv<ArmSim>, path: &Path) {
    let applied = RuntimeConfig::load(path).and_then(|config| {
        let sim = ArmSim::with_params(config.arm)?;
        env.reconfigure(config.env)?;
        *env.simulator_mut() = sim;
        Ok(())
    });
    match applied {
        Ok(()) => tracing::info!("Reloaded config from {}", path.display()),
        Err(e) => tracing::warn!("Keeping previous config, reload failed: {e:#}"),
    }
}

/// Run the episode loop described by `opts`.
///
/// # Errors
///
/// Returns an error if the initial config cannot be loaded, the watcher
/// cannot be started, or an episode fails.
pub fn run(opts: &RunOptions) -> Result<RunReport> {
    let config = match &opts.config_path {
        Some(path) => RuntimeConfig::load(path)?,
        None => RuntimeConfig::default(),
    };
    let mut env = build_env(config)?;

    let (tx, rx) = mpsc::channel();
    let _config_watcher = match (&opts.config_path, opts.watch) {
        (Some(path), true) => Some(watcher::start(path, tx)?),
        (None, true) => {
            tracing::warn!("--watch has no effect without --config");
            None
        }
        _ => None,
    };

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    tracing::info!(
        "Starting {} episode(s) with {:?} policy...",
        opts.episodes,
        opts.policy
    );
    let mut report = RunReport::default();
    for episode in 1..=opts.episodes {
        if let Some(path) = pending_reload(&rx) {
            reload(&mut env, &path);
        }

        let space = env.action_space();
        let policy = opts.policy;
        let summary = run_episode(&mut env, |_, rng| policy.act(&space, rng), &mut rng)
            .with_context(|| format!("episode {episode}"))?;
        tracing::info!(
            "Episode {} finished: steps={} total_reward={:.4} successes={} final_distance={:.4}",
            episode,
            summary.steps,
            summary.total_reward,
            summary.successes,
            summary.final_distance
        );
        report.episodes.push(summary);
    }

    tracing::info!(
        "Run finished after {} episode(s), success rate {:.2}",
        report.episodes.len(),
        report.success_rate()
    );
    Ok(report)
}

/// Drain the change notifications, keeping only the latest path.
fn pending_reload(rx: &Receiver<PathBuf>) -> Option<PathBuf> {
    rx.try_iter().last()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(episodes: u32, policy: PolicyKind) -> RunOptions {
        RunOptions {
            episodes,
            seed: Some(7),
            policy,
            config_path: None,
            watch: false,
        }
    }

    #[test]
    fn zero_policy_runs_requested_episodes() {
        let report = run(&options(3, PolicyKind::Zero)).unwrap();
        assert_eq!(report.episodes.len(), 3);
        for summary in &report.episodes {
            assert_eq!(summary.steps, 100);
            assert_eq!(summary.total_reward, 0.0);
        }
        assert_eq!(report.success_rate(), 0.0);
    }

    #[test]
    fn seeded_random_runs_are_reproducible() {
        let a = run(&options(2, PolicyKind::Random)).unwrap();
        let b = run(&options(2, PolicyKind::Random)).unwrap();
        assert_eq!(a.episodes, b.episodes);
    }

    #[test]
    fn runtime_config_sections_are_optional() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{ "env": { "max_steps": 5 } }"#).unwrap();
        assert_eq!(config.env.max_steps, 5);
        assert_eq!(config.arm, ArmParams::default());
    }

    #[test]
    fn config_file_shapes_the_episode() {
        let path = std::env::temp_dir().join(format!("reacher-runtime-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "env": { "max_steps": 7 }, "arm": { "ctrl_limit": 2.0 } }"#)
            .unwrap();
        let mut opts = options(1, PolicyKind::Random);
        opts.config_path = Some(path.clone());
        let report = run(&opts);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(report.unwrap().episodes[0].steps, 7);
    }

    #[test]
    fn bad_reload_keeps_previous_config() {
        let path = std::env::temp_dir().join(format!("reacher-reload-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "env": { "max_steps": 0 } }"#).unwrap();
        let mut env = build_env(RuntimeConfig::default()).unwrap();
        reload(&mut env, &path);
        assert_eq!(env.config().max_steps, 100);

        std::fs::write(&path, r#"{ "env": { "max_steps": 12 } }"#).unwrap();
        reload(&mut env, &path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(env.config().max_steps, 12);
    }

    #[test]
    fn empty_report_has_zero_success_rate() {
        assert_eq!(RunReport::default().success_rate(), 0.0);
    }
}
