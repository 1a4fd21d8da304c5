#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Reacher
//!
//! A 7-DOF arm reaching for a randomly placed 3-D goal.
//!
//! The crate turns raw joint state coming out of a simulator into the
//! quantities a learning loop consumes: an observation vector, a sparse
//! reward, a success flag and an episode-termination signal.
//!
//! ## Key Components
//!
//! -   **Kinematics:** [`kinematics::end_effector`] maps the 7 joint angles to
//!     the tip position in closed form, without an iterative solver. A
//!     batched variant handles N configurations at once.
//! -   **Episode:** [`ReacherEnv`] owns the goal and the step counter and
//!     produces `(observation, reward, done, info)` on every step.
//! -   **Reset policy:** [`ResetPolicy`] perturbs the nominal goal with
//!     Gaussian noise drawn from a caller-supplied generator, so episodes are
//!     reproducible under a fixed seed.
//! -   **Simulator seam:** the environment only talks to physics through the
//!     [`Simulator`] trait. [`physics::ArmSim`] implements it.
//!
//! ## Usage
//!
//! ```rust
//! use physics::ArmSim;
//! use rand::{rngs::StdRng, SeedableRng};
//! use reacher::ReacherEnv;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut env = ReacherEnv::new(ArmSim::new())?;
//! let obs = env.reset(&mut rng)?;
//! assert_eq!(obs.len(), 17);
//!
//! let t = env.step(&[0.0; 7])?;
//! assert!(!t.done);
//! # Ok::<(), reacher::ReacherError>(())
//! ```

pub mod config;
pub mod env;
pub mod episode;
pub mod error;
pub mod kinematics;
pub mod reset;
pub mod rollout;
pub mod sim;
pub mod space;
pub mod state;

pub use config::ReacherConfig;
pub use env::{Env, StepInfo, Transition};
pub use episode::{EpisodePhase, ReacherEnv};
pub use error::ReacherError;
pub use kinematics::{end_effector, end_effector_batch, JointAngles};
pub use reset::{ResetPolicy, ResetSample};
pub use rollout::{run_episode, EpisodeSummary};
pub use sim::Simulator;
pub use space::ActionSpace;
pub use state::{Goal, JointState, Observation, ACTION_SIZE, OBS_SIZE};
