//! # Arm Simulation Core
//!
//! [`ArmSim`] owns the arm's joint state and steps it forward with the
//! integrator. It is the reference simulator the reacher environment drives:
//! the environment only sets state, applies controls for a number of
//! substeps, and reads state back.

use crate::error::PhysicsError;
use crate::integrator::integrate_joints;
use crate::types::{ArmParams, ArmState, NUM_ACTUATORS, NUM_DOFS};

/// Joint-space arm simulation
pub struct ArmSim {
    params: ArmParams,
    state: ArmState,
    time: f64,
}

impl ArmSim {
    /// Create a simulation with default parameters, resting at the nominal
    /// state.
    #[must_use]
    pub fn new() -> Self {
        let params = ArmParams::default();
        let state = params.nominal_state();
        Self {
            params,
            state,
            time: 0.0,
        }
    }

    /// Create a simulation from explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` fails [`ArmParams::validate`].
    pub fn with_params(params: ArmParams) -> Result<Self, PhysicsError> {
        params.validate()?;
        let state = params.nominal_state();
        Ok(Self {
            params,
            state,
            time: 0.0,
        })
    }

    #[must_use]
    pub fn params(&self) -> &ArmParams {
        &self.params
    }

    #[must_use]
    pub fn state(&self) -> &ArmState {
        &self.state
    }

    /// Simulated time since construction or the last [`ArmSim::set_state`].
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[must_use]
    pub fn nominal_state(&self) -> ArmState {
        self.params.nominal_state()
    }

    /// Overwrite the joint state and reset the clock.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::StateDimension`] if either vector does not have
    /// `NUM_DOFS` entries; the current state is left untouched in that case.
    pub fn set_state(&mut self, qpos: &[f64], qvel: &[f64]) -> Result<(), PhysicsError> {
        check_len("qpos", qpos.len())?;
        check_len("qvel", qvel.len())?;
        self.state.qpos.copy_from_slice(qpos);
        self.state.qvel.copy_from_slice(qvel);
        self.time = 0.0;
        Ok(())
    }

    /// Advance the simulation by a single timestep under `ctrl`.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::ControlArity`] for a control vector that does
    /// not match the actuator count, and [`PhysicsError::NonFiniteState`] if
    /// integration diverges.
    pub fn step(&mut self, ctrl: &[f64]) -> Result<(), PhysicsError> {
        if ctrl.len() != NUM_ACTUATORS {
            return Err(PhysicsError::ControlArity {
                expected: NUM_ACTUATORS,
                got: ctrl.len(),
            });
        }
        integrate_joints(&mut self.state, ctrl, &self.params);
        self.time += self.params.timestep;
        if !self.state.is_finite() {
            tracing::error!("Arm state diverged at t = {}", self.time);
            return Err(PhysicsError::NonFiniteState);
        }
        Ok(())
    }

    /// Run `substeps` timesteps holding `ctrl` constant and return the
    /// resulting state.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`ArmSim::step`].
    pub fn run(&mut self, ctrl: &[f64], substeps: u32) -> Result<&ArmState, PhysicsError> {
        for _ in 0..substeps {
            self.step(ctrl)?;
        }
        Ok(&self.state)
    }
}

fn check_len(what: &'static str, got: usize) -> Result<(), PhysicsError> {
    if got == NUM_DOFS {
        Ok(())
    } else {
        Err(PhysicsError::StateDimension {
            what,
            expected: NUM_DOFS,
            got,
        })
    }
}

impl Default for ArmSim {
    fn default() -> Self {
        Self::new()
    }
}
