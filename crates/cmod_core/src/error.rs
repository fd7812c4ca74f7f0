//! Error types for array evaluation and table sampling.
//!
//! The forward model itself has no failure mode: out-of-domain inputs surface
//! as NaN or infinite outputs. Errors only arise when arranging inputs.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Two input shapes cannot be broadcast against each other.
    #[error("operands could not be broadcast together with shapes {left:?} and {right:?}")]
    IncompatibleShapes { left: Vec<usize>, right: Vec<usize> },

    /// A sampling axis is malformed.
    #[error("invalid {axis} axis: {reason}")]
    InvalidAxis { axis: &'static str, reason: String },
}
