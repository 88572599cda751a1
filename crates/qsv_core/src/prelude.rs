//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```rust
//! use qsv_core::prelude::*;
//! ```

pub use crate::config::SimulatorConfig;
pub use crate::error::{Result, SimError};
pub use crate::physics::{u_matrix, Matrix2x2, C64};
pub use crate::types::{Circuit, Operation, RawOperation};
