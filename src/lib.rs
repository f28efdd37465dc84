#![doc = include_str!("../README.md")]

pub mod error;
pub mod vector;
pub mod quaternion;
pub mod dual_quaternion;
pub mod prelude;

pub use error::{Result, TransformError};
pub use vector::{Vec3, Rounded};
pub use quaternion::Quaternion;
pub use dual_quaternion::{DualQuaternion, UNIT_TOLERANCE};
