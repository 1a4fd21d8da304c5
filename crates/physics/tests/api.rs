use physics::{ArmParams, ArmSim, PhysicsError, NUM_ACTUATORS, NUM_DOFS};

#[test]
fn new_sim_starts_at_nominal_state() {
    let sim = ArmSim::new();
    assert_eq!(sim.state().qpos.len(), NUM_DOFS);
    assert_eq!(sim.state().qvel.len(), NUM_DOFS);
    assert_eq!(sim.state(), &sim.nominal_state());
    assert_eq!(sim.time(), 0.0);
}

#[test]
fn set_state_overwrites_joints_and_clock() {
    let mut sim = ArmSim::new();
    sim.run(&[1.0; NUM_ACTUATORS], 3).unwrap();
    assert!(sim.time() > 0.0);

    let qpos: Vec<f64> = (0..NUM_DOFS).map(|i| i as f64 * 0.1).collect();
    let qvel = vec![0.5; NUM_DOFS];
    sim.set_state(&qpos, &qvel).unwrap();
    assert_eq!(sim.state().qpos, qpos);
    assert_eq!(sim.state().qvel, qvel);
    assert_eq!(sim.time(), 0.0);
}

#[test]
fn set_state_rejects_wrong_length() {
    let mut sim = ArmSim::new();
    let before = sim.state().clone();
    let err = sim.set_state(&[0.0; 7], &[0.0; NUM_DOFS]).unwrap_err();
    assert_eq!(
        err,
        PhysicsError::StateDimension {
            what: "qpos",
            expected: NUM_DOFS,
            got: 7
        }
    );
    assert_eq!(sim.state(), &before);
}

#[test]
fn control_arity_is_checked() {
    let mut sim = ArmSim::new();
    let err = sim.run(&[0.0; 3], 1).unwrap_err();
    assert_eq!(
        err,
        PhysicsError::ControlArity {
            expected: NUM_ACTUATORS,
            got: 3
        }
    );
}

#[test]
fn invalid_params_are_rejected() {
    let params = ArmParams {
        armature: vec![0.0; NUM_DOFS],
        ..ArmParams::default()
    };
    assert!(ArmSim::with_params(params).is_err());
}

#[test]
fn run_advances_clock_by_substeps() {
    let mut sim = ArmSim::new();
    sim.run(&[0.0; NUM_ACTUATORS], 2).unwrap();
    assert!((sim.time() - 2.0 * sim.params().timestep).abs() < 1e-12);
}

#[test]
fn params_load_from_partial_json() {
    let params: ArmParams = serde_json::from_str(r#"{ "timestep": 0.005, "ctrl_limit": 5.0 }"#).unwrap();
    assert_eq!(params.timestep, 0.005);
    assert_eq!(params.ctrl_limit, 5.0);
    assert_eq!(params.damping.len(), NUM_DOFS);
    assert!(params.validate().is_ok());
}
