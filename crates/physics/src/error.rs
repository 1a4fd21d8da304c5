use thiserror::Error;

/// Errors raised by the joint-space simulator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("control vector has {got} entries, expected {expected}")]
    ControlArity { expected: usize, got: usize },
    #[error("{what} has {got} entries, expected {expected}")]
    StateDimension {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("simulation state became non-finite")]
    NonFiniteState,
    #[error("invalid arm parameters: {0}")]
    InvalidParams(String),
}
