//! # Forward Kinematics
//!
//! Closed-form end-effector position for the 7-DOF reacher arm.
//!
//! The arm is a 2-DOF shoulder (yaw θ1, pitch θ2) carrying an upper arm,
//! followed by two rigid links. Each link is described by a roll angle, which
//! turns the bending plane around the incoming axis, and a hinge angle, which
//! bends the link inside that plane:
//!
//! | link     | length  | roll | hinge |
//! |----------|---------|------|-------|
//! | forearm  | 0.321   | θ3   | θ4    |
//! | wrist    | 0.16828 | θ5   | θ6    |
//!
//! θ7 is a wrist roll about the final axis and does not move the tip, so it is
//! accepted but ignored.
//!
//! Every function here is pure; they can be called from any thread.

use glam::DVec3;

use crate::error::ReacherError;
use crate::state::NUM_ARM_JOINTS;

/// Horizontal offset of the upper arm from the yaw axis.
pub const SHOULDER_OFFSET: f64 = 0.1;
pub const UPPER_ARM_LENGTH: f64 = 0.4;
/// The shoulder sits this far below the world origin along y.
pub const SHOULDER_DROP: f64 = 0.188;
pub const FOREARM_LENGTH: f64 = 0.321;
pub const WRIST_LENGTH: f64 = 0.16828;

/// Below this norm the next perpendicular axis is considered degenerate and
/// the previous one is reused.
pub const DEGENERATE_AXIS_EPS: f64 = 1e-30;

/// Joint angles for one arm configuration, in radians.
pub type JointAngles = [f64; NUM_ARM_JOINTS];

/// Rotation frame carried down the chain: the current link axis and a unit
/// axis perpendicular to it.
#[derive(Clone, Copy, Debug)]
struct ChainFrame {
    axis: DVec3,
    perp: DVec3,
}

impl ChainFrame {
    /// Bend the frame by `hinge` inside the plane selected by `roll`.
    fn bend(self, hinge: f64, roll: f64) -> Self {
        let perp_all = self.axis.cross(self.perp);
        let (sin_h, cos_h) = hinge.sin_cos();
        let (sin_r, cos_r) = roll.sin_cos();

        let axis = cos_h * self.axis + sin_h * sin_r * self.perp - sin_h * cos_r * perp_all;

        let mut perp = axis.cross(self.axis);
        if perp.length() < DEGENERATE_AXIS_EPS {
            perp = self.perp;
        }
        let perp = perp / perp.length();

        Self { axis, perp }
    }
}

/// End-effector position for a single joint configuration.
#[must_use]
pub fn end_effector(theta: &JointAngles) -> DVec3 {
    let [t1, t2, t3, t4, t5, t6, _t7] = *theta;
    let (sin1, cos1) = t1.sin_cos();
    let (sin2, cos2) = t2.sin_cos();

    let mut frame = ChainFrame {
        axis: DVec3::new(cos2 * cos1, cos2 * sin1, -sin2),
        perp: DVec3::new(-sin1, cos1, 0.0),
    };
    let mut tip = DVec3::new(
        SHOULDER_OFFSET * cos1 + UPPER_ARM_LENGTH * cos1 * cos2,
        SHOULDER_OFFSET * sin1 + UPPER_ARM_LENGTH * sin1 * cos2 - SHOULDER_DROP,
        -UPPER_ARM_LENGTH * sin2,
    );

    for (length, hinge, roll) in [(FOREARM_LENGTH, t4, t3), (WRIST_LENGTH, t6, t5)] {
        frame = frame.bend(hinge, roll);
        tip += length * frame.axis;
    }
    tip
}

/// End-effector positions for `N` independent configurations (N×7 → N×3).
#[must_use]
pub fn end_effector_batch(thetas: &[JointAngles]) -> Vec<DVec3> {
    thetas.iter().map(end_effector).collect()
}

/// Like [`end_effector_batch`] for a row-major N×7 buffer.
///
/// # Errors
///
/// Returns [`ReacherError::BatchShape`] if `flat.len()` is not a multiple
/// of 7.
pub fn end_effector_rows(flat: &[f64]) -> Result<Vec<DVec3>, ReacherError> {
    if flat.len() % NUM_ARM_JOINTS != 0 {
        return Err(ReacherError::BatchShape { len: flat.len() });
    }
    Ok(flat
        .chunks_exact(NUM_ARM_JOINTS)
        .map(|row| {
            let mut theta = [0.0; NUM_ARM_JOINTS];
            theta.copy_from_slice(row);
            end_effector(&theta)
        })
        .collect())
}

/// End-effector position from a joint-position vector; only the leading 7
/// entries are read.
///
/// # Errors
///
/// Returns [`ReacherError::StateDimension`] if `qpos` has fewer than 7
/// entries.
pub fn end_effector_from_qpos(qpos: &[f64]) -> Result<DVec3, ReacherError> {
    let Some(head) = qpos.get(..NUM_ARM_JOINTS) else {
        return Err(ReacherError::StateDimension {
            what: "qpos",
            expected: NUM_ARM_JOINTS,
            got: qpos.len(),
        });
    };
    let mut theta = [0.0; NUM_ARM_JOINTS];
    theta.copy_from_slice(head);
    Ok(end_effector(&theta))
}
