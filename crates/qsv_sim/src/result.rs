//! Result record types produced by [`crate::Simulator::run`].

use qsv_core::physics::C64;
use std::collections::HashMap;

/// The `data` payload for a single-shot run (`shots == 1`).
#[derive(Debug, Clone, PartialEq)]
pub struct SingleShotData {
    /// The final amplitude vector, as it stood after the sole shot.
    pub quantum_state: Vec<C64>,
    /// The final classical register value.
    pub classical_state: u64,
}

/// The `data` payload for a multi-shot run (`shots > 1`).
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramData {
    /// Outcome-string to frequency map. Only non-zero counts are present;
    /// every key has length `number_of_cbits`; values sum to `shots`.
    pub counts: HashMap<String, u64>,
}

/// The outcome of [`crate::Simulator::run`].
#[derive(Debug, Clone, PartialEq)]
pub enum SimResult {
    /// `status: "DONE"`, single-shot payload.
    DoneSingle(SingleShotData),
    /// `status: "DONE"`, histogram payload.
    DoneHistogram(HistogramData),
    /// `status: "ERROR"`. No partial data is promised.
    Error,
}

impl SimResult {
    /// `true` if this result represents successful completion.
    pub fn is_done(&self) -> bool {
        !matches!(self, SimResult::Error)
    }

    /// The status string as it appears in the external contract.
    pub fn status(&self) -> &'static str {
        match self {
            SimResult::Error => "ERROR",
            _ => "DONE",
        }
    }
}
