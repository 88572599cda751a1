//! # qsv_core
//!
//! Core types shared by the dense state-vector circuit simulator:
//!
//! - `Circuit`, `RawOperation`, `Operation`: the lowered-circuit data model
//!   and the loosely-typed-record-to-tagged-variant validation boundary.
//! - `SimError`: unified error types.
//! - `SimulatorConfig`: construction-time limits and defaults.
//! - `physics`: the `U(θ,φ,λ)` gate matrix and small matrix utilities.
//!
//! ## Example
//!
//! ```rust
//! use qsv_core::prelude::*;
//!
//! let mut circuit = Circuit::new(1, 1);
//! circuit.push(RawOperation {
//!     name: "U".to_string(),
//!     qubit: Some(0),
//!     control: None,
//!     target: None,
//!     cbit: None,
//!     theta: Some(std::f64::consts::PI),
//!     phi: Some(0.0),
//!     lambda: Some(std::f64::consts::PI),
//! });
//!
//! let op = Operation::from_raw(&circuit.operations[0], circuit.number_of_qubits, circuit.number_of_cbits).unwrap();
//! assert!(matches!(op, Operation::U { .. }));
//! ```

pub mod config;
pub mod error;
pub mod physics;
pub mod prelude;
pub mod types;

pub use config::SimulatorConfig;
pub use error::{Result, SimError};
pub use types::{Circuit, Operation, RawOperation};
