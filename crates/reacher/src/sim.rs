//! Simulator seam.
//!
//! The environment never integrates physics itself. It talks to a simulator
//! through [`Simulator`], which any backend can implement. The reference
//! backend is [`physics::ArmSim`].

use physics::ArmSim;

use crate::error::ReacherError;
use crate::state::JointState;

pub trait Simulator {
    /// Hold `action` for `substeps` integration steps.
    ///
    /// # Errors
    ///
    /// Implementations report integration failures or malformed controls.
    fn advance(&mut self, action: &[f64], substeps: u32) -> Result<(), ReacherError>;

    /// Current joint positions and velocities.
    ///
    /// # Errors
    ///
    /// Implementations report state they cannot express as a [`JointState`].
    fn read_state(&self) -> Result<JointState, ReacherError>;

    /// Overwrite the simulator's joint positions and velocities.
    ///
    /// # Errors
    ///
    /// Implementations may reject states they cannot represent.
    fn set_state(&mut self, state: &JointState) -> Result<(), ReacherError>;

    /// The configuration episodes start from before randomization.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Simulator::read_state`].
    fn nominal_initial_state(&self) -> Result<JointState, ReacherError>;

    /// Symmetric bound on each action component, if the backend has one.
    fn ctrl_limit(&self) -> Option<f64> {
        None
    }
}

impl Simulator for ArmSim {
    fn advance(&mut self, action: &[f64], substeps: u32) -> Result<(), ReacherError> {
        self.run(action, substeps)?;
        Ok(())
    }

    fn read_state(&self) -> Result<JointState, ReacherError> {
        let state = self.state();
        JointState::new(state.qpos.clone(), state.qvel.clone())
    }

    fn set_state(&mut self, state: &JointState) -> Result<(), ReacherError> {
        ArmSim::set_state(self, state.qpos(), state.qvel())?;
        Ok(())
    }

    fn nominal_initial_state(&self) -> Result<JointState, ReacherError> {
        let nominal = self.nominal_state();
        JointState::new(nominal.qpos, nominal.qvel)
    }

    fn ctrl_limit(&self) -> Option<f64> {
        Some(self.params().ctrl_limit)
    }
}
