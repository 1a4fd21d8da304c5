use rand::RngCore;

use crate::error::ReacherError;

/// Per-step diagnostics returned alongside the reward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepInfo {
    /// Tip was within the success threshold of the goal on this step
    pub is_success: bool,
    /// Euclidean distance from the tip to the goal
    pub distance: f64,
}

/// Result of a single environment step.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub observation: Vec<f64>,
    pub reward: f64,
    pub done: bool,
    pub info: StepInfo,
}

/// Reinforcement learning environment trait.
///
/// Gym-style contract a training harness drives: [`reset`] starts an episode
/// and returns the first observation, [`step`] applies one action and returns
/// the next observation together with the reward, the termination flag and
/// step diagnostics.
///
/// [`reset`]: Env::reset
/// [`step`]: Env::step
pub trait Env {
    /// Start a new episode, drawing any randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Implementations surface simulator failures.
    fn reset(&mut self, rng: &mut dyn RngCore) -> Result<Vec<f64>, ReacherError>;

    /// Advance the environment by one action.
    ///
    /// # Errors
    ///
    /// Implementations reject malformed actions and surface simulator
    /// failures.
    fn step(&mut self, action: &[f64]) -> Result<Transition, ReacherError>;

    /// Size of the observation vector.
    fn obs_size(&self) -> usize;

    /// Size of the action vector.
    fn action_size(&self) -> usize;
}
