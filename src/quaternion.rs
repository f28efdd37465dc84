// src/quaternion.rs
//! Quaternions `real + i·i + j·j + k·k` and the rotation/translation
//! factories used to assemble dual quaternions.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::Result;
use crate::vector::Vec3;

/// A quaternion with real part `real` and imaginary parts `i`, `j`, `k`.
///
/// Unit length is not enforced; [`Quaternion::create_rotation`] produces a
/// unit quaternion, nothing re-checks it afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quaternion {
    pub real: f64,
    pub i: f64,
    pub j: f64,
    pub k: f64,
}

impl Quaternion {
    /// The multiplicative identity `(1, 0, 0, 0)`.
    pub const IDENTITY: Quaternion = Quaternion { real: 1.0, i: 0.0, j: 0.0, k: 0.0 };

    pub const ZERO: Quaternion = Quaternion { real: 0.0, i: 0.0, j: 0.0, k: 0.0 };

    pub fn new(real: f64, i: f64, j: f64, k: f64) -> Self {
        Self { real, i, j, k }
    }

    /// Build from coefficients ordered `[real, i, j, k]`.
    pub fn from_components([real, i, j, k]: [f64; 4]) -> Self {
        Self { real, i, j, k }
    }

    /// Embed a vector as the pure quaternion `(0, v.x, v.y, v.z)`.
    pub fn from_vector(v: Vec3) -> Self {
        Self::new(0.0, v.x, v.y, v.z)
    }

    /// Unit quaternion rotating by `theta` radians about `axis`:
    /// `cos(θ/2) + sin(θ/2)·n` with `n = axis / |axis|`.
    ///
    /// `axis` must be non-zero, otherwise the imaginary part is NaN.
    pub fn create_rotation(axis: Vec3, theta: f64) -> Self {
        let n = axis.normalized();
        let (sin, cos) = (theta * 0.5).sin_cos();
        Self::new(cos, sin * n.x, sin * n.y, sin * n.z)
    }

    /// [`Quaternion::create_rotation`] that rejects a degenerate axis.
    pub fn try_create_rotation(axis: Vec3, theta: f64) -> Result<Self> {
        axis.try_normalized()?;
        Ok(Self::create_rotation(axis, theta))
    }

    /// Pure quaternion `(0, t/2)`.
    ///
    /// The half cancels the factor 2 applied when the translation is read
    /// back as `2·q_dual·q_real*`.
    pub fn create_translation(t: Vec3) -> Self {
        Self::new(0.0, t.x / 2.0, t.y / 2.0, t.z / 2.0)
    }

    pub fn sum(&self, other: &Self) -> Self {
        Self::new(
            self.real + other.real,
            self.i + other.i,
            self.j + other.j,
            self.k + other.k,
        )
    }

    pub fn difference(&self, other: &Self) -> Self {
        Self::new(
            self.real - other.real,
            self.i - other.i,
            self.j - other.j,
            self.k - other.k,
        )
    }

    /// Hamilton product `self · other`. Not commutative.
    #[inline(always)]
    pub fn product(&self, other: &Self) -> Self {
        let (a, b) = (self, other);
        Self {
            real: a.real * b.real - (a.i * b.i + a.j * b.j + a.k * b.k),
            i: a.real * b.i + b.real * a.i + a.j * b.k - a.k * b.j,
            j: a.real * b.j + b.real * a.j + a.k * b.i - a.i * b.k,
            k: a.real * b.k + b.real * a.k + a.i * b.j - a.j * b.i,
        }
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.real, -self.i, -self.j, -self.k)
    }

    pub fn magnitude(&self) -> f64 {
        (self.real * self.real + self.i * self.i + self.j * self.j + self.k * self.k).sqrt()
    }

    pub fn scaled(&self, s: f64) -> Self {
        Self::new(s * self.real, s * self.i, s * self.j, s * self.k)
    }

    /// Imaginary part as a vector; the real part is dropped.
    pub fn as_vector(&self) -> Vec3 {
        Vec3::new(self.i, self.j, self.k)
    }

    /// Coefficients ordered `[real, i, j, k]`.
    pub fn as_array(&self) -> [f64; 4] {
        [self.real, self.i, self.j, self.k]
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(c: [f64; 4]) -> Self { Quaternion::from_components(c) }
}

impl Add for Quaternion {
    type Output = Quaternion;
    fn add(self, rhs: Quaternion) -> Quaternion { self.sum(&rhs) }
}

impl Sub for Quaternion {
    type Output = Quaternion;
    fn sub(self, rhs: Quaternion) -> Quaternion { self.difference(&rhs) }
}

impl Mul for Quaternion {
    type Output = Quaternion;
    fn mul(self, rhs: Quaternion) -> Quaternion { self.product(&rhs) }
}

impl Mul<f64> for Quaternion {
    type Output = Quaternion;
    fn mul(self, rhs: f64) -> Quaternion { self.scaled(rhs) }
}

impl Neg for Quaternion {
    type Output = Quaternion;
    fn neg(self) -> Quaternion { self.scaled(-1.0) }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.real, self.i, self.j, self.k)
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> f64 { f64::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.as_array()
            .iter()
            .zip(other.as_array().iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f64 { f64::default_max_relative() }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.as_array()
            .iter()
            .zip(other.as_array().iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
