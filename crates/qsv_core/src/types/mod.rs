//! Core type definitions for the state-vector simulator.

mod circuit;
mod operation;

pub use circuit::Circuit;
pub use operation::{Operation, RawOperation};
