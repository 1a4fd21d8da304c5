use physics::PhysicsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReacherError {
    #[error("action has {got} components, expected {expected}")]
    ActionArity { expected: usize, got: usize },
    #[error("{what} has {got} entries, expected {expected}")]
    StateDimension {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("joint-angle batch of length {len} is not a multiple of 7")]
    BatchShape { len: usize },
    #[error("step called before the first reset")]
    NotReset,
    #[error("simulator error: {0}")]
    Simulator(#[from] PhysicsError),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}
