#![allow(dead_code)]

use reacher::{JointState, ReacherError, Simulator};

/// Simulator double that records every call the environment makes.
///
/// `advance` leaves the state untouched unless `arm_after_advance` is set, in
/// which case the arm joints jump to that configuration.
pub struct RecordingSim {
    pub nominal: JointState,
    pub state: JointState,
    pub set_calls: Vec<JointState>,
    pub advance_calls: Vec<(Vec<f64>, u32)>,
    pub arm_after_advance: Option<[f64; 7]>,
}

impl RecordingSim {
    pub fn new(nominal_qpos: Vec<f64>, nominal_qvel: Vec<f64>) -> Self {
        let nominal = JointState::new(nominal_qpos, nominal_qvel).unwrap();
        Self {
            state: nominal.clone(),
            nominal,
            set_calls: Vec::new(),
            advance_calls: Vec::new(),
            arm_after_advance: None,
        }
    }

    pub fn at_rest() -> Self {
        Self::new(vec![0.0; 10], vec![0.0; 10])
    }

    /// Nominal state whose goal coordinates sit at `goal`.
    pub fn with_goal(goal: [f64; 3]) -> Self {
        let mut qpos = vec![0.0; 10];
        qpos[7..].copy_from_slice(&goal);
        Self::new(qpos, vec![0.0; 10])
    }
}

impl Simulator for RecordingSim {
    fn advance(&mut self, action: &[f64], substeps: u32) -> Result<(), ReacherError> {
        self.advance_calls.push((action.to_vec(), substeps));
        if let Some(arm) = self.arm_after_advance {
            let mut qpos = self.state.qpos().to_vec();
            qpos[..7].copy_from_slice(&arm);
            self.state = JointState::new(qpos, self.state.qvel().to_vec())?;
        }
        Ok(())
    }

    fn read_state(&self) -> Result<JointState, ReacherError> {
        Ok(self.state.clone())
    }

    fn set_state(&mut self, state: &JointState) -> Result<(), ReacherError> {
        self.set_calls.push(state.clone());
        self.state = state.clone();
        Ok(())
    }

    fn nominal_initial_state(&self) -> Result<JointState, ReacherError> {
        Ok(self.nominal.clone())
    }
}
