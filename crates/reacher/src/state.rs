//! Joint-state layout shared by the environment and its simulator.
//!
//! Positions and velocities are 10-vectors: 7 arm joints followed by the 3
//! goal coordinates, which the simulator carries as passive slide joints.

use glam::DVec3;

use crate::error::ReacherError;

pub const NUM_ARM_JOINTS: usize = 7;
pub const NUM_GOAL_COORDS: usize = 3;
pub const NUM_QPOS: usize = NUM_ARM_JOINTS + NUM_GOAL_COORDS;
pub const NUM_QVEL: usize = NUM_ARM_JOINTS + NUM_GOAL_COORDS;
/// All positions plus the arm velocities.
pub const OBS_SIZE: usize = NUM_QPOS + NUM_QVEL - NUM_GOAL_COORDS;
pub const ACTION_SIZE: usize = NUM_ARM_JOINTS;

/// Goal position in workspace coordinates.
pub type Goal = DVec3;

/// Flat observation vector of `OBS_SIZE` scalars.
pub type Observation = Vec<f64>;

#[derive(Clone, Debug, PartialEq)]
pub struct JointState {
    qpos: Vec<f64>,
    qvel: Vec<f64>,
}

impl JointState {
    /// # Errors
    ///
    /// Returns [`ReacherError::StateDimension`] unless both vectors have
    /// exactly 10 entries.
    pub fn new(qpos: Vec<f64>, qvel: Vec<f64>) -> Result<Self, ReacherError> {
        if qpos.len() != NUM_QPOS {
            return Err(ReacherError::StateDimension {
                what: "qpos",
                expected: NUM_QPOS,
                got: qpos.len(),
            });
        }
        if qvel.len() != NUM_QVEL {
            return Err(ReacherError::StateDimension {
                what: "qvel",
                expected: NUM_QVEL,
                got: qvel.len(),
            });
        }
        Ok(Self { qpos, qvel })
    }

    #[must_use]
    pub fn qpos(&self) -> &[f64] {
        &self.qpos
    }

    #[must_use]
    pub fn qvel(&self) -> &[f64] {
        &self.qvel
    }

    pub(crate) fn qpos_mut(&mut self) -> &mut [f64] {
        &mut self.qpos
    }

    pub(crate) fn qvel_mut(&mut self) -> &mut [f64] {
        &mut self.qvel
    }

    /// Arm joint angles, i.e. the first 7 position entries.
    #[must_use]
    pub fn arm_angles(&self) -> [f64; NUM_ARM_JOINTS] {
        let mut theta = [0.0; NUM_ARM_JOINTS];
        theta.copy_from_slice(&self.qpos[..NUM_ARM_JOINTS]);
        theta
    }

    /// The goal coordinates encoded in the tail of the position vector.
    #[must_use]
    pub fn goal_coords(&self) -> Goal {
        let tail = &self.qpos[NUM_ARM_JOINTS..];
        DVec3::new(tail[0], tail[1], tail[2])
    }

    /// Concatenate all positions with the arm velocities.
    #[must_use]
    pub fn observation(&self) -> Observation {
        let mut obs = Vec::with_capacity(OBS_SIZE);
        obs.extend_from_slice(&self.qpos);
        obs.extend_from_slice(&self.qvel[..NUM_QVEL - NUM_GOAL_COORDS]);
        obs
    }
}
