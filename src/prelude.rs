// src/prelude.rs
//! The “everything” import for dq_engine.
//!
//! Brings you the most commonly used types with one glob:
//! ```rust
//! use dq_engine::prelude::*;
//! ```

// core data types
pub use crate::dual_quaternion::{DualQuaternion, UNIT_TOLERANCE};
pub use crate::quaternion::Quaternion;
pub use crate::vector::{Rounded, Vec3};

// checked operations
pub use crate::error::TransformError;
