//! Error types for the simulator crate family.

use thiserror::Error;

/// Unified error type for simulator construction and operation validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// An operation's `name` discriminator did not match one of the four
    /// supported kinds (`U`, `CX`, `measure`, `reset`).
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// An operation of a recognized kind had a missing field or an
    /// out-of-range qubit/cbit index, or a `CX` with `control == target`.
    #[error("malformed operation: {0}")]
    MalformedOperation(String),

    /// `shots` was not a positive integer.
    #[error("shots must be positive, got {0}")]
    InvalidShots(usize),

    /// The circuit's qubit count is zero or exceeds the configured ceiling.
    #[error("invalid qubit count {0} (configured maximum is {1})")]
    InvalidQubitCount(usize, usize),

    /// A `SimulatorConfig` value was out of range.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for simulator construction.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    /// Creates a malformed-operation error with the given reason.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedOperation(msg.into())
    }

    /// Creates a configuration error with the given reason.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
