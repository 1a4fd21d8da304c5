use rand::RngCore;

use crate::env::Env;
use crate::error::ReacherError;

/// Totals for one finished episode.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EpisodeSummary {
    pub steps: u32,
    pub total_reward: f64,
    /// Number of steps that were flagged `is_success`
    pub successes: u32,
    pub final_distance: f64,
    /// Whether any step reached the goal
    pub reached: bool,
}

/// Reset `env` and step it with `policy` until it reports `done`.
///
/// The policy sees the latest observation and the shared generator.
///
/// # Errors
///
/// Stops at and returns the first environment error.
pub fn run_episode<E, P>(
    env: &mut E,
    mut policy: P,
    rng: &mut dyn RngCore,
) -> Result<EpisodeSummary, ReacherError>
where
    E: Env + ?Sized,
    P: FnMut(&[f64], &mut dyn RngCore) -> Vec<f64>,
{
    let mut obs = env.reset(&mut *rng)?;
    let mut summary = EpisodeSummary::default();
    loop {
        let action = policy(obs.as_slice(), &mut *rng);
        let t = env.step(&action)?;
        summary.steps += 1;
        summary.total_reward += t.reward;
        summary.final_distance = t.info.distance;
        if t.info.is_success {
            summary.successes += 1;
            summary.reached = true;
        }
        obs = t.observation;
        if t.done {
            return Ok(summary);
        }
    }
}
