//! # Joint Integration
//!
//! Semi-implicit Euler integration in joint space. Each DOF is an independent
//! damped rigid rotor (or slider): actuated DOFs receive the clamped control
//! torque scaled by the gear ratio, passive DOFs only feel damping.

use crate::types::{ArmParams, ArmState};

/// Torque produced by actuator `i` for the given control vector.
///
/// DOFs past the end of `ctrl` are passive and produce no torque.
#[must_use]
pub fn actuator_torque(ctrl: &[f64], i: usize, params: &ArmParams) -> f64 {
    ctrl.get(i).map_or(0.0, |&u| {
        params.gear * u.clamp(-params.ctrl_limit, params.ctrl_limit)
    })
}

/// Advance every DOF by one timestep.
pub fn integrate_joints(state: &mut ArmState, ctrl: &[f64], params: &ArmParams) {
    let dt = params.timestep;
    for (i, (q, qd)) in state.qpos.iter_mut().zip(state.qvel.iter_mut()).enumerate() {
        let torque = actuator_torque(ctrl, i, params);
        let qacc = (torque - params.damping[i] * *qd) / params.armature[i];

        // velocity first, then position with the updated velocity
        *qd += qacc * dt;
        *q += *qd * dt;
    }
}
