// src/error.rs
//! Errors reported by the checked (`try_*`) constructors and transforms.
//!
//! The unchecked operations never fail: degenerate input propagates as
//! NaN/Inf exactly like ordinary floating-point arithmetic.

use thiserror::Error;

/// Failures of the checked rigid-transform operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TransformError {
    /// The rotation axis (or vector being normalized) has no direction.
    #[error("degenerate axis: magnitude {magnitude} cannot be normalized")]
    DegenerateAxis { magnitude: f64 },

    /// The dual quaternion does not describe a rigid transform.
    #[error("non-unit transform: |q_real| = {real_norm}, orthogonality residual = {orthogonality}")]
    NonUnitTransform { real_norm: f64, orthogonality: f64 },
}

pub type Result<T> = std::result::Result<T, TransformError>;
