//! Circuit data structure: the lowered, lowered-already circuit the
//! external-interface adapter accepts.

use super::RawOperation;
use serde::{Deserialize, Serialize};

/// A lowered quantum circuit: read-only input to the simulator.
///
/// The parser/unroller that produces this from textual quantum assembly is
/// out of scope for this crate; `Circuit` only models the already-lowered
/// result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Circuit {
    /// Number of qubits, `n ≥ 1`.
    pub number_of_qubits: usize,
    /// Number of classical bits, `m ≥ 0`.
    pub number_of_cbits: usize,
    /// Redundant with `operations.len()`. If the two disagree,
    /// `operations.len()` is authoritative; the simulator logs the
    /// mismatch rather than rejecting it.
    #[serde(default)]
    pub number_of_operations: Option<usize>,
    /// Ordered sequence of operations. Order is significant and preserved
    /// exactly during execution.
    pub operations: Vec<RawOperation>,
}

impl Circuit {
    /// Creates a new, empty circuit over `number_of_qubits` qubits and
    /// `number_of_cbits` classical bits.
    pub fn new(number_of_qubits: usize, number_of_cbits: usize) -> Self {
        Self {
            number_of_qubits,
            number_of_cbits,
            number_of_operations: None,
            operations: Vec::new(),
        }
    }

    /// Appends an operation, keeping `number_of_operations` in sync.
    pub fn push(&mut self, op: RawOperation) {
        self.operations.push(op);
        self.number_of_operations = Some(self.operations.len());
    }

    /// `true` if a declared `number_of_operations` disagrees with the
    /// actual operation-list length.
    pub fn has_operation_count_mismatch(&self) -> bool {
        matches!(self.number_of_operations, Some(n) if n != self.operations.len())
    }
}
