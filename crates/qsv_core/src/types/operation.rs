//! Circuit operation types: the loosely-typed external record and the
//! validated internal tagged variant it is converted into.

use crate::error::SimError;
use serde::{Deserialize, Serialize};

/// The external, loosely-typed representation of a single circuit
/// operation: a `name` discriminator plus every field any operation kind
/// might need, each optional. This is the "record keyed by a string name"
/// the lowered-circuit format hands to the adapter; every other component
/// of the simulator only ever sees [`Operation`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawOperation {
    /// Discriminator: one of `"U"`, `"CX"`, `"measure"`, `"reset"`.
    pub name: String,
    /// Target qubit for `U`, `measure`, `reset`.
    #[serde(default)]
    pub qubit: Option<usize>,
    /// Control qubit for `CX`.
    #[serde(default)]
    pub control: Option<usize>,
    /// Target qubit for `CX`.
    #[serde(default)]
    pub target: Option<usize>,
    /// Destination classical bit for `measure`.
    #[serde(default)]
    pub cbit: Option<usize>,
    /// `θ` angle for `U`, radians.
    #[serde(default)]
    pub theta: Option<f64>,
    /// `φ` angle for `U`, radians.
    #[serde(default)]
    pub phi: Option<f64>,
    /// `λ` angle for `U`, radians.
    #[serde(default)]
    pub lambda: Option<f64>,
}

/// The validated, strictly-typed circuit operation every kernel and the
/// shot driver dispatch on. Constructed only via [`Operation::from_raw`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    /// The parametric single-qubit unitary `U(θ,φ,λ)` on `qubit`.
    U {
        theta: f64,
        phi: f64,
        lambda: f64,
        qubit: usize,
    },
    /// Controlled-NOT: flip `target` iff `control` is `1`.
    Cx { control: usize, target: usize },
    /// Projective measurement of `qubit` into classical bit `cbit`.
    Measure { qubit: usize, cbit: usize },
    /// In-place reset of `qubit` to `|0⟩`.
    Reset { qubit: usize },
}

impl Operation {
    /// Validates a [`RawOperation`] against a circuit of `num_qubits`
    /// qubits and `num_cbits` classical bits, producing the strict
    /// variant the simulator dispatches on.
    ///
    /// Returns [`SimError::UnknownOperation`] if `raw.name` is not one of
    /// the four supported kinds, or [`SimError::MalformedOperation`] if a
    /// required field is missing or an index is out of range.
    pub fn from_raw(raw: &RawOperation, num_qubits: usize, num_cbits: usize) -> Result<Self, SimError> {
        let op = match raw.name.as_str() {
            "U" => {
                let qubit = require(raw.qubit, "U", "qubit")?;
                let theta = require(raw.theta, "U", "theta")?;
                let phi = require(raw.phi, "U", "phi")?;
                let lambda = require(raw.lambda, "U", "lambda")?;
                check_qubit(qubit, num_qubits)?;
                Operation::U {
                    theta,
                    phi,
                    lambda,
                    qubit,
                }
            }
            "CX" => {
                let control = require(raw.control, "CX", "control")?;
                let target = require(raw.target, "CX", "target")?;
                check_qubit(control, num_qubits)?;
                check_qubit(target, num_qubits)?;
                if control == target {
                    return Err(SimError::malformed("CX control and target must differ"));
                }
                Operation::Cx { control, target }
            }
            "measure" => {
                let qubit = require(raw.qubit, "measure", "qubit")?;
                let cbit = require(raw.cbit, "measure", "cbit")?;
                check_qubit(qubit, num_qubits)?;
                check_cbit(cbit, num_cbits)?;
                Operation::Measure { qubit, cbit }
            }
            "reset" => {
                let qubit = require(raw.qubit, "reset", "qubit")?;
                check_qubit(qubit, num_qubits)?;
                Operation::Reset { qubit }
            }
            other => return Err(SimError::UnknownOperation(other.to_string())),
        };
        Ok(op)
    }
}

fn require<T>(field: Option<T>, op_name: &str, field_name: &str) -> Result<T, SimError> {
    field.ok_or_else(|| SimError::malformed(format!("{op_name} is missing field `{field_name}`")))
}

fn check_qubit(q: usize, num_qubits: usize) -> Result<(), SimError> {
    if q >= num_qubits {
        Err(SimError::malformed(format!(
            "qubit index {q} out of range for {num_qubits} qubits"
        )))
    } else {
        Ok(())
    }
}

fn check_cbit(b: usize, num_cbits: usize) -> Result<(), SimError> {
    if b >= num_cbits {
        Err(SimError::malformed(format!(
            "classical bit index {b} out of range for {num_cbits} cbits"
        )))
    } else {
        Ok(())
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::U {
                theta,
                phi,
                lambda,
                qubit,
            } => write!(f, "U({theta:.4}, {phi:.4}, {lambda:.4}, {qubit})"),
            Operation::Cx { control, target } => write!(f, "CX({control}, {target})"),
            Operation::Measure { qubit, cbit } => write!(f, "measure({qubit} -> {cbit})"),
            Operation::Reset { qubit } => write!(f, "reset({qubit})"),
        }
    }
}
