#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Reacher Arm Physics
//!
//! A small joint-space simulator for the 7-DOF reacher arm.
//!
//! The arm is modelled directly in generalized coordinates: 7 actuated hinge
//! joints followed by 3 passive slide joints that carry the goal marker. Each
//! DOF is integrated independently with semi-implicit Euler and viscous
//! damping. There is no contact or collision handling; the crate exists so
//! the reacher environment has a concrete simulator to drive.
//!
//! ## Key Components
//!
//! -   **Parameters:** [`ArmParams`] holds the timestep, per-DOF damping and
//!     inertia, the control range and the nominal initial state. It can be
//!     loaded from JSON through `serde`.
//! -   **Simulation:** [`ArmSim`] owns the joint state and advances it with
//!     [`ArmSim::run`].
//!
//! ## Usage
//!
//! ```rust
//! use physics::{ArmSim, NUM_ACTUATORS};
//!
//! let mut sim = ArmSim::new();
//! let ctrl = [1.0; NUM_ACTUATORS];
//! let state = sim.run(&ctrl, 2)?;
//! assert!(state.qpos[0] > 0.0);
//! # Ok::<(), physics::PhysicsError>(())
//! ```

pub mod error;
pub mod integrator;
pub mod simulation;
pub mod types;

pub use error::PhysicsError;
pub use simulation::ArmSim;
pub use types::{ArmParams, ArmState, NUM_ACTUATORS, NUM_DOFS};
