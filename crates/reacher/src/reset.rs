//! Episode start randomization.
//!
//! The goal is stored in the tail of the position vector, so perturbing those
//! three entries moves the goal marker inside the simulator and defines the
//! goal the environment scores against in one go.

use rand::RngCore;
use rand_distr::{Distribution, Normal};

use crate::error::ReacherError;
use crate::state::{Goal, JointState, NUM_ARM_JOINTS};

/// Standard deviation of the per-axis goal perturbation.
pub const DEFAULT_GOAL_NOISE_STD: f64 = 0.1;

/// Initial state and goal for one episode.
#[derive(Clone, Debug, PartialEq)]
pub struct ResetSample {
    pub state: JointState,
    pub goal: Goal,
}

#[derive(Clone, Copy, Debug)]
pub struct ResetPolicy {
    goal_noise: Normal<f64>,
}

impl ResetPolicy {
    /// # Errors
    ///
    /// Returns [`ReacherError::Config`] if `goal_noise_std` is negative or not
    /// finite.
    pub fn new(goal_noise_std: f64) -> Result<Self, ReacherError> {
        if !(goal_noise_std.is_finite() && goal_noise_std >= 0.0) {
            return Err(ReacherError::Config(format!(
                "goal_noise_std must be finite and non-negative, got {goal_noise_std}"
            )));
        }
        let goal_noise = Normal::new(0.0, goal_noise_std)
            .map_err(|e| ReacherError::Config(format!("goal noise: {e}")))?;
        Ok(Self { goal_noise })
    }

    #[must_use]
    pub fn goal_noise_std(&self) -> f64 {
        self.goal_noise.std_dev()
    }

    /// Perturb the goal coordinates of `nominal` and zero the goal velocities.
    ///
    /// Arm joints are copied unchanged. The returned goal is exactly the tail
    /// of the returned position vector.
    pub fn sample(&self, nominal: &JointState, rng: &mut dyn RngCore) -> ResetSample {
        let mut state = nominal.clone();
        for q in &mut state.qpos_mut()[NUM_ARM_JOINTS..] {
            *q += self.goal_noise.sample(&mut *rng);
        }
        state.qvel_mut()[NUM_ARM_JOINTS..].fill(0.0);

        let goal = state.goal_coords();
        ResetSample { state, goal }
    }
}
