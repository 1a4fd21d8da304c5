//! # Reacher Episode
//!
//! [`ReacherEnv`] owns the goal and the step counter of one episode and turns
//! the simulator's raw joint state into observations, rewards and the
//! termination signal.
//!
//! The reward is sparse: a small penalty on the squared action plus a unit
//! bonus on every step the tip is within `success_threshold` of the goal.

use glam::DVec3;
use physics::ArmSim;
use rand::RngCore;
use tracing::{debug, info, warn};

use crate::config::ReacherConfig;
use crate::env::{Env, StepInfo, Transition};
use crate::error::ReacherError;
use crate::kinematics::end_effector;
use crate::reset::{ResetPolicy, ResetSample};
use crate::sim::Simulator;
use crate::space::ActionSpace;
use crate::state::{Goal, Observation, ACTION_SIZE, OBS_SIZE};

/// Lifecycle of an episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EpisodePhase {
    /// No episode has been started yet
    Created,
    Running,
    /// The step limit was reached; call `reset` to start over
    Done,
}

/// 7-DOF arm reaching for a randomly placed goal.
pub struct ReacherEnv<S: Simulator = ArmSim> {
    sim: S,
    config: ReacherConfig,
    reset_policy: ResetPolicy,
    goal: Option<Goal>,
    steps: u32,
    phase: EpisodePhase,
}

impl<S: Simulator> ReacherEnv<S> {
    /// Wrap `sim` with the default episode configuration.
    ///
    /// # Errors
    ///
    /// See [`ReacherEnv::with_config`].
    pub fn new(sim: S) -> Result<Self, ReacherError> {
        Self::with_config(sim, ReacherConfig::default())
    }

    /// # Errors
    ///
    /// Returns [`ReacherError::Config`] if `config` fails validation.
    pub fn with_config(sim: S, config: ReacherConfig) -> Result<Self, ReacherError> {
        config.validate()?;
        let reset_policy = ResetPolicy::new(config.goal_noise_std)?;
        Ok(Self {
            sim,
            config,
            reset_policy,
            goal: None,
            steps: 0,
            phase: EpisodePhase::Created,
        })
    }

    /// Replace the configuration. Intended for use between episodes; a
    /// running episode keeps its goal but is scored with the new values from
    /// the next step on.
    ///
    /// # Errors
    ///
    /// Returns [`ReacherError::Config`] if `config` fails validation; the
    /// current configuration is kept in that case.
    pub fn reconfigure(&mut self, config: ReacherConfig) -> Result<(), ReacherError> {
        config.validate()?;
        self.reset_policy = ResetPolicy::new(config.goal_noise_std)?;
        self.config = config;
        Ok(())
    }

    /// Start a new episode.
    ///
    /// Samples a goal around the simulator's nominal state, writes the
    /// perturbed state into the simulator and returns the first observation.
    ///
    /// # Errors
    ///
    /// Propagates simulator failures.
    pub fn reset(&mut self, rng: &mut dyn RngCore) -> Result<Observation, ReacherError> {
        let nominal = self.sim.nominal_initial_state()?;
        let ResetSample { state, goal } = self.reset_policy.sample(&nominal, rng);
        self.sim.set_state(&state)?;

        self.steps = 0;
        self.goal = Some(goal);
        self.phase = EpisodePhase::Running;
        info!("Episode reset, goal at ({:.4}, {:.4}, {:.4})", goal.x, goal.y, goal.z);

        Ok(self.sim.read_state()?.observation())
    }

    /// Apply `action` for `frame_skip` simulator substeps and score the
    /// resulting state.
    ///
    /// Stepping a finished episode is not rejected: the counter keeps
    /// counting and `done` stays raised.
    ///
    /// # Errors
    ///
    /// Returns [`ReacherError::ActionArity`] unless `action` has 7
    /// components and [`ReacherError::NotReset`] before the first
    /// [`reset`](Self::reset). Neither error touches the episode state.
    /// Simulator failures are propagated.
    pub fn step(&mut self, action: &[f64]) -> Result<Transition, ReacherError> {
        if action.len() != ACTION_SIZE {
            return Err(ReacherError::ActionArity {
                expected: ACTION_SIZE,
                got: action.len(),
            });
        }
        let goal = self.goal.ok_or(ReacherError::NotReset)?;
        if self.phase == EpisodePhase::Done {
            warn!("step called on a finished episode (step {})", self.steps + 1);
        }

        self.steps += 1;
        self.sim.advance(action, self.config.frame_skip)?;
        let state = self.sim.read_state()?;
        let observation = state.observation();

        let distance = end_effector(&state.arm_angles()).distance(goal);
        let is_success = distance <= self.config.success_threshold;
        let reward_ctrl = -self.config.ctrl_cost_weight * action.iter().map(|a| a * a).sum::<f64>();
        let reward = reward_ctrl + if is_success { self.config.success_bonus } else { 0.0 };

        let done = self.steps >= self.config.max_steps;
        if done {
            self.phase = EpisodePhase::Done;
        }
        debug!(
            step = self.steps,
            distance,
            reward,
            is_success,
            done,
            "reacher step"
        );

        Ok(Transition {
            observation,
            reward,
            done,
            info: StepInfo {
                is_success,
                distance,
            },
        })
    }

    #[must_use]
    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }

    /// Steps taken in the current episode.
    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Goal of the current episode, `None` before the first reset.
    #[must_use]
    pub fn goal(&self) -> Option<Goal> {
        self.goal
    }

    #[must_use]
    pub fn config(&self) -> &ReacherConfig {
        &self.config
    }

    /// Current tip position according to the simulator state.
    ///
    /// # Errors
    ///
    /// Propagates simulator failures.
    pub fn end_effector(&self) -> Result<DVec3, ReacherError> {
        Ok(end_effector(&self.sim.read_state()?.arm_angles()))
    }

    /// Observation of the current simulator state.
    ///
    /// # Errors
    ///
    /// Propagates simulator failures.
    pub fn observation(&self) -> Result<Observation, ReacherError> {
        Ok(self.sim.read_state()?.observation())
    }

    /// Action bounds; a unit box when the simulator declares no limit.
    #[must_use]
    pub fn action_space(&self) -> ActionSpace {
        ActionSpace::symmetric(ACTION_SIZE, self.sim.ctrl_limit().unwrap_or(1.0))
    }

    #[must_use]
    pub fn simulator(&self) -> &S {
        &self.sim
    }

    pub fn simulator_mut(&mut self) -> &mut S {
        &mut self.sim
    }
}

impl<S: Simulator> Env for ReacherEnv<S> {
    fn reset(&mut self, rng: &mut dyn RngCore) -> Result<Vec<f64>, ReacherError> {
        ReacherEnv::reset(self, rng)
    }

    fn step(&mut self, action: &[f64]) -> Result<Transition, ReacherError> {
        ReacherEnv::step(self, action)
    }

    fn obs_size(&self) -> usize {
        OBS_SIZE
    }

    fn action_size(&self) -> usize {
        ACTION_SIZE
    }
}
