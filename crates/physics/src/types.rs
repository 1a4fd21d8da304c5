use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;

/// Degrees of freedom in the arm model: 7 hinge joints plus 3 slide joints
/// that carry the goal marker.
pub const NUM_DOFS: usize = 10;

/// Number of actuated joints. Actuators drive the first `NUM_ACTUATORS` DOFs;
/// the remaining ones are passive.
pub const NUM_ACTUATORS: usize = 7;

/// Generalized coordinates of the arm.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArmState {
    pub qpos: Vec<f64>,
    pub qvel: Vec<f64>,
}

impl ArmState {
    /// All-zero state with `NUM_DOFS` entries.
    #[must_use]
    pub fn zeros() -> Self {
        Self {
            qpos: vec![0.0; NUM_DOFS],
            qvel: vec![0.0; NUM_DOFS],
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.qpos.iter().chain(&self.qvel).all(|v| v.is_finite())
    }
}

/// Model parameters for the joint-space integrator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArmParams {
    /// Integration step in seconds
    pub timestep: f64,
    /// Viscous damping per DOF
    pub damping: Vec<f64>,
    /// Effective inertia per DOF
    pub armature: Vec<f64>,
    /// Torque multiplier applied to every actuator
    pub gear: f64,
    /// Controls are clamped to `[-ctrl_limit, ctrl_limit]`
    pub ctrl_limit: f64,
    /// Initial joint positions the environment perturbs on reset
    pub nominal_qpos: Vec<f64>,
    /// Initial joint velocities
    pub nominal_qvel: Vec<f64>,
}

impl Default for ArmParams {
    fn default() -> Self {
        Self {
            timestep: 0.01,
            damping: vec![1.0; NUM_DOFS],
            armature: vec![1.0; NUM_DOFS],
            gear: 1.0,
            ctrl_limit: 20.0,
            nominal_qpos: vec![0.0; NUM_DOFS],
            nominal_qvel: vec![0.0; NUM_DOFS],
        }
    }
}

impl ArmParams {
    /// Checks dimensions and physical plausibility of the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::StateDimension`] for per-DOF vectors of the
    /// wrong length and [`PhysicsError::InvalidParams`] for non-positive
    /// timestep, inertia or control range.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        for (what, v) in [
            ("damping", &self.damping),
            ("armature", &self.armature),
            ("nominal_qpos", &self.nominal_qpos),
            ("nominal_qvel", &self.nominal_qvel),
        ] {
            if v.len() != NUM_DOFS {
                return Err(PhysicsError::StateDimension {
                    what,
                    expected: NUM_DOFS,
                    got: v.len(),
                });
            }
        }
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(PhysicsError::InvalidParams(format!(
                "timestep must be positive, got {}",
                self.timestep
            )));
        }
        if self.armature.iter().any(|&m| !(m.is_finite() && m > 0.0)) {
            return Err(PhysicsError::InvalidParams(
                "armature entries must be positive".into(),
            ));
        }
        if self.damping.iter().any(|&d| !(d.is_finite() && d >= 0.0)) {
            return Err(PhysicsError::InvalidParams(
                "damping entries must be non-negative".into(),
            ));
        }
        if !(self.ctrl_limit.is_finite() && self.ctrl_limit > 0.0) {
            return Err(PhysicsError::InvalidParams(format!(
                "ctrl_limit must be positive, got {}",
                self.ctrl_limit
            )));
        }
        if !self.gear.is_finite() {
            return Err(PhysicsError::InvalidParams("gear must be finite".into()));
        }
        Ok(())
    }

    /// The nominal state the environment starts each episode from.
    #[must_use]
    pub fn nominal_state(&self) -> ArmState {
        ArmState {
            qpos: self.nominal_qpos.clone(),
            qvel: self.nominal_qvel.clone(),
        }
    }
}
