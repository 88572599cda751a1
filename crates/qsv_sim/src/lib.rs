//! # qsv_sim
//!
//! Dense state-vector simulation of a single-kernel gate set: the
//! parametric single-qubit unitary `U(θ,φ,λ)`, `CX`, projective
//! measurement and reset.
//!
//! ## Modules
//! - **bits**: basis-index arithmetic shared by every kernel.
//! - **decision**: the Born-rule sampling primitive shared by measurement
//!   and reset.
//! - **kernels**: the in-place state mutators.
//! - **rng**: the seeded uniform random source.
//! - **result**: the result records returned by a run.
//! - **driver**: the shot loop and external-interface adapter.

mod bits;
mod decision;
pub mod driver;
pub mod kernels;
pub mod result;
pub mod rng;

pub use driver::Simulator;
pub use result::{HistogramData, SimResult, SingleShotData};
pub use rng::RandomSource;
