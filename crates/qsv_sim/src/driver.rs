//! The shot-loop driver and the external-interface adapter.
//!
//! [`Simulator`] is the only component that reads a [`Circuit`]; every
//! other component (the kernels, the decision primitive, the random
//! source) only ever sees validated, strictly-typed values.

use crate::kernels;
use crate::result::{HistogramData, SimResult, SingleShotData};
use crate::rng::RandomSource;
use qsv_core::physics::{C64, ONE, ZERO};
use qsv_core::{Circuit, Operation, SimError, SimulatorConfig};
use std::collections::HashMap;

/// A dense state-vector circuit simulator.
///
/// Owns the random source exclusively; a [`Circuit`] passed to
/// [`Simulator::run`] is borrowed, never mutated, and not retained past
/// the call.
pub struct Simulator {
    shots: usize,
    config: SimulatorConfig,
    rng: RandomSource,
}

impl Simulator {
    /// Constructs a simulator for `shots` independent runs.
    ///
    /// `seed` fixes the random stream for reproducibility; if `None`, a
    /// fresh seed is drawn from OS entropy and retained (see
    /// [`Simulator::seed`]).
    ///
    /// Returns [`SimError::InvalidShots`] if `shots == 0` — invalid
    /// construction parameters are reported here, not from [`Simulator::run`].
    pub fn new(shots: usize, seed: Option<u64>, config: SimulatorConfig) -> Result<Self, SimError> {
        if shots == 0 {
            return Err(SimError::InvalidShots(shots));
        }
        let rng = match seed {
            Some(s) => RandomSource::from_seed(s),
            None => RandomSource::from_entropy(),
        };
        Ok(Self { shots, config, rng })
    }

    /// Constructs a simulator with the default [`SimulatorConfig`].
    pub fn with_defaults(shots: usize, seed: Option<u64>) -> Result<Self, SimError> {
        Self::new(shots, seed, SimulatorConfig::default())
    }

    /// The seed in use for this instance's random stream — the caller's
    /// seed if one was given, otherwise the seed drawn from entropy at
    /// construction.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The configured shot count.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Runs `circuit` for `self.shots` independent shots, dispatching each
    /// operation to its kernel in order, and assembles the final result.
    ///
    /// Shots are processed strictly sequentially against the single
    /// shared random stream, so a fixed `(circuit, shots, seed)` always
    /// produces a bit-identical result.
    #[tracing::instrument(skip(self, circuit), fields(shots = self.shots, qubits = circuit.number_of_qubits))]
    pub fn run(&mut self, circuit: &Circuit) -> SimResult {
        if circuit.number_of_qubits == 0 || circuit.number_of_qubits > self.config.max_qubits {
            tracing::error!(
                qubits = circuit.number_of_qubits,
                max = self.config.max_qubits,
                "circuit qubit count out of range"
            );
            return SimResult::Error;
        }

        if circuit.has_operation_count_mismatch() {
            tracing::warn!(
                declared = circuit.number_of_operations,
                actual = circuit.operations.len(),
                "number_of_operations disagrees with the operation list; using the list length"
            );
        }

        let ops = match validate_operations(circuit) {
            Ok(ops) => ops,
            Err(e) => {
                tracing::error!(error = %e, "operation validation failed");
                return SimResult::Error;
            }
        };

        let dim = 1usize << circuit.number_of_qubits;
        let mut outcomes: Vec<u64> = Vec::with_capacity(self.shots);
        let mut final_state: Option<(Vec<C64>, u64)> = None;

        for shot in 0..self.shots {
            tracing::trace!(shot, "starting shot");
            let mut psi = vec![ZERO; dim];
            psi[0] = ONE;
            let mut c: u64 = 0;

            for op in &ops {
                match *op {
                    Operation::U {
                        theta,
                        phi,
                        lambda,
                        qubit,
                    } => kernels::apply_u(&mut psi, qubit, theta, phi, lambda),
                    Operation::Cx { control, target } => {
                        kernels::apply_cx(&mut psi, control, target, circuit.number_of_qubits)
                    }
                    Operation::Measure { qubit, cbit } => {
                        c = kernels::measure(&mut psi, qubit, cbit, c, &mut self.rng)
                    }
                    Operation::Reset { qubit } => kernels::reset(&mut psi, qubit, &mut self.rng),
                }
            }

            outcomes.push(c);
            if self.shots == 1 {
                final_state = Some((psi, c));
            }
        }

        if self.shots == 1 {
            let (quantum_state, classical_state) = final_state.expect("single shot always runs");
            SimResult::DoneSingle(SingleShotData {
                quantum_state,
                classical_state,
            })
        } else {
            let mut counts: HashMap<String, u64> = HashMap::new();
            for c in outcomes {
                let key = format_register(c, circuit.number_of_cbits);
                *counts.entry(key).or_insert(0) += 1;
            }
            SimResult::DoneHistogram(HistogramData { counts })
        }
    }
}

/// Converts every [`qsv_core::RawOperation`] in `circuit` into a validated
/// [`Operation`], once, before the shot loop begins. An unknown or
/// malformed operation short-circuits with the first error encountered.
fn validate_operations(circuit: &Circuit) -> Result<Vec<Operation>, SimError> {
    circuit
        .operations
        .iter()
        .map(|raw| Operation::from_raw(raw, circuit.number_of_qubits, circuit.number_of_cbits))
        .collect()
}

/// Formats a classical register as a fixed-width binary string of length
/// `m`, most-significant bit first.
fn format_register(c: u64, m: usize) -> String {
    if m == 0 {
        return String::new();
    }
    format!("{:0>width$b}", c, width = m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qsv_core::RawOperation;
    use std::f64::consts::PI;

    fn op(name: &str) -> RawOperation {
        RawOperation {
            name: name.to_string(),
            qubit: None,
            control: None,
            target: None,
            cbit: None,
            theta: None,
            phi: None,
            lambda: None,
        }
    }

    #[test]
    fn test_new_rejects_zero_shots() {
        assert_eq!(
            Simulator::with_defaults(0, Some(1)).unwrap_err(),
            SimError::InvalidShots(0)
        );
    }

    #[test]
    fn test_format_register() {
        assert_eq!(format_register(0, 0), "");
        assert_eq!(format_register(0, 2), "00");
        assert_eq!(format_register(2, 2), "10");
        assert_eq!(format_register(1, 3), "001");
    }

    #[test]
    fn test_empty_circuit_single_shot() {
        let circuit = Circuit::new(3, 0);
        let mut sim = Simulator::with_defaults(1, Some(1)).unwrap();
        let result = sim.run(&circuit);
        match result {
            SimResult::DoneSingle(data) => {
                assert_eq!(data.classical_state, 0);
                assert_eq!(data.quantum_state.len(), 8);
                assert!((data.quantum_state[0] - ONE).norm() < 1e-9);
                for amp in &data.quantum_state[1..] {
                    assert!(amp.norm() < 1e-9);
                }
            }
            other => panic!("expected DoneSingle, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_operation_yields_error() {
        let mut circuit = Circuit::new(1, 1);
        circuit.push(op("FOO"));
        let mut sim = Simulator::with_defaults(1, Some(1)).unwrap();
        assert_eq!(sim.run(&circuit), SimResult::Error);
    }

    #[test]
    fn test_x_then_measure_is_deterministic() {
        let mut circuit = Circuit::new(1, 1);
        let mut u = op("U");
        u.qubit = Some(0);
        u.theta = Some(PI);
        u.phi = Some(0.0);
        u.lambda = Some(PI);
        circuit.push(u);
        let mut m = op("measure");
        m.qubit = Some(0);
        m.cbit = Some(0);
        circuit.push(m);

        let mut sim = Simulator::with_defaults(1024, Some(7)).unwrap();
        let result = sim.run(&circuit);
        match result {
            SimResult::DoneHistogram(data) => {
                assert_eq!(data.counts.get("1").copied(), Some(1024));
                assert_eq!(data.counts.len(), 1);
            }
            other => panic!("expected DoneHistogram, got {other:?}"),
        }
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let mut circuit = Circuit::new(1, 1);
        let mut u = op("U");
        u.qubit = Some(0);
        u.theta = Some(PI / 2.0);
        u.phi = Some(0.0);
        u.lambda = Some(PI);
        circuit.push(u);
        let mut m = op("measure");
        m.qubit = Some(0);
        m.cbit = Some(0);
        circuit.push(m);

        let mut sim_a = Simulator::with_defaults(500, Some(123)).unwrap();
        let mut sim_b = Simulator::with_defaults(500, Some(123)).unwrap();

        let a = sim_a.run(&circuit);
        let b = sim_b.run(&circuit);
        assert_eq!(a, b);
    }

    #[test]
    fn test_bell_state_correlation() {
        let mut circuit = Circuit::new(2, 2);
        let mut h = op("U");
        h.qubit = Some(0);
        h.theta = Some(PI / 2.0);
        h.phi = Some(0.0);
        h.lambda = Some(PI);
        circuit.push(h);

        let mut cx = op("CX");
        cx.control = Some(0);
        cx.target = Some(1);
        circuit.push(cx);

        let mut m0 = op("measure");
        m0.qubit = Some(0);
        m0.cbit = Some(0);
        circuit.push(m0);

        let mut m1 = op("measure");
        m1.qubit = Some(1);
        m1.cbit = Some(1);
        circuit.push(m1);

        let mut sim = Simulator::with_defaults(4000, Some(42)).unwrap();
        match sim.run(&circuit) {
            SimResult::DoneHistogram(data) => {
                let total: u64 = data.counts.values().sum();
                assert_eq!(total, 4000);
                for key in data.counts.keys() {
                    assert!(key == "00" || key == "11", "unexpected key {key}");
                }
            }
            other => panic!("expected DoneHistogram, got {other:?}"),
        }
    }

    #[test]
    fn test_reset_then_measure_basis_state() {
        let mut circuit = Circuit::new(2, 2);
        for q in 0..2 {
            let mut x = op("U");
            x.qubit = Some(q);
            x.theta = Some(PI);
            x.phi = Some(0.0);
            x.lambda = Some(PI);
            circuit.push(x);
        }
        let mut r = op("reset");
        r.qubit = Some(0);
        circuit.push(r);

        let mut m0 = op("measure");
        m0.qubit = Some(0);
        m0.cbit = Some(0);
        circuit.push(m0);
        let mut m1 = op("measure");
        m1.qubit = Some(1);
        m1.cbit = Some(1);
        circuit.push(m1);

        let mut sim = Simulator::with_defaults(1, Some(1)).unwrap();
        match sim.run(&circuit) {
            SimResult::DoneSingle(data) => {
                assert_eq!(data.classical_state, 2); // "10"
                assert!((data.quantum_state[2] - ONE).norm() < 1e-9);
            }
            other => panic!("expected DoneSingle, got {other:?}"),
        }
    }

    #[test]
    fn test_qubit_count_out_of_range() {
        let circuit = Circuit::new(0, 0);
        let mut sim = Simulator::with_defaults(1, Some(1)).unwrap();
        assert_eq!(sim.run(&circuit), SimResult::Error);
    }
}
