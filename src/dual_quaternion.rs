// src/dual_quaternion.rs
//! Dual quaternions `q_real + ε·q_dual` (ε² = 0) encoding a rigid-body
//! rotation followed by a translation.
//!
//! A *unit* dual quaternion has `|q_real| = 1` and
//! `q_real*·q_dual + q_dual*·q_real = 0`. [`DualQuaternion::from_transform`]
//! produces one for any non-zero axis; no other operation checks or restores
//! the property.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{Result, TransformError};
use crate::quaternion::Quaternion;
use crate::vector::Vec3;

/// Default tolerance of [`DualQuaternion::is_unit`] and the checked transform.
pub const UNIT_TOLERANCE: f64 = 1e-9;

/// A rigid transform as the pair `(q_real, q_dual)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DualQuaternion {
    /// Rotation part.
    pub q_real: Quaternion,
    /// `½·t·q_real` for a transform with translation `t`.
    pub q_dual: Quaternion,
}

impl DualQuaternion {
    /// The identity transform `(1, 0, 0, 0) + ε·(0, 0, 0, 0)`.
    pub const IDENTITY: DualQuaternion = DualQuaternion {
        q_real: Quaternion::IDENTITY,
        q_dual: Quaternion::ZERO,
    };

    pub fn new(q_real: Quaternion, q_dual: Quaternion) -> Self {
        Self { q_real, q_dual }
    }

    /// Build from two coefficient lists, each ordered `[real, i, j, k]`.
    pub fn from_components(real: [f64; 4], dual: [f64; 4]) -> Self {
        Self::new(Quaternion::from_components(real), Quaternion::from_components(dual))
    }

    /// Rotation by `theta` radians about `axis`, then translation by `translation`.
    ///
    /// `q_dual = qt · q_real` (not `q_real · qt`) so that the translation is
    /// applied after the rotation.
    pub fn from_transform(translation: Vec3, axis: Vec3, theta: f64) -> Self {
        let q_real = Quaternion::create_rotation(axis, theta);
        let qt = Quaternion::create_translation(translation);
        let dq = Self::new(q_real, qt.product(&q_real));
        log::trace!("from_transform(t = {translation}, axis = {axis}, θ = {theta}) = {dq}");
        dq
    }

    /// [`DualQuaternion::from_transform`] that rejects a degenerate axis.
    pub fn try_from_transform(translation: Vec3, axis: Vec3, theta: f64) -> Result<Self> {
        axis.try_normalized()?;
        Ok(Self::from_transform(translation, axis, theta))
    }

    /// Embed a point as `1 + ε·p`.
    pub fn from_vector(p: Vec3) -> Self {
        Self::new(Quaternion::IDENTITY, Quaternion::from_vector(p))
    }

    pub fn sum(&self, other: &Self) -> Self {
        Self::new(self.q_real.sum(&other.q_real), self.q_dual.sum(&other.q_dual))
    }

    pub fn difference(&self, other: &Self) -> Self {
        Self::new(
            self.q_real.difference(&other.q_real),
            self.q_dual.difference(&other.q_dual),
        )
    }

    /// `(a + εb)(c + εd) = ac + ε(ad + bc)`. Not commutative.
    #[inline(always)]
    pub fn product(&self, other: &Self) -> Self {
        let q_real = self.q_real.product(&other.q_real);
        let q_dual = self
            .q_real
            .product(&other.q_dual)
            .sum(&self.q_dual.product(&other.q_real));
        Self::new(q_real, q_dual)
    }

    /// Combined quaternion + dual conjugate: `q_real* - ε·q_dual*`.
    ///
    /// For a unit dual quaternion this is the inverse used by the sandwich
    /// product in [`DualQuaternion::apply_to_point`].
    pub fn conjugate(&self) -> Self {
        Self::new(self.q_real.conjugate(), self.q_dual.conjugate().scaled(-1.0))
    }

    pub fn scaled(&self, s: f64) -> Self {
        Self::new(self.q_real.scaled(s), self.q_dual.scaled(s))
    }

    /// `sqrt` of the real coefficient of `self · self*`.
    ///
    /// NaN if that coefficient is negative; 1 for a unit dual quaternion.
    pub fn magnitude(&self) -> f64 {
        self.product(&self.conjugate()).q_real.real.sqrt()
    }

    pub fn rotation_quaternion(&self) -> Quaternion {
        self.q_real
    }

    /// The rotation alone, with a zero dual part.
    pub fn rotation_dual_quaternion(&self) -> Self {
        Self::new(self.q_real, Quaternion::ZERO)
    }

    /// `2 · q_dual · q_real*`: the pure quaternion `(0, t)` of the translation.
    ///
    /// Only meaningful when `q_real` is a unit quaternion.
    pub fn translation_quaternion(&self) -> Quaternion {
        self.q_dual.product(&self.q_real.conjugate()).scaled(2.0)
    }

    /// `1 + ε·(0, t)`: the recovered translation next to an identity real part.
    ///
    /// The dual part holds `t`, not `t/2`, so applied as a transform this
    /// moves points by `2t`.
    pub fn translation_dual_quaternion(&self) -> Self {
        Self::new(Quaternion::IDENTITY, self.translation_quaternion())
    }

    pub fn translation(&self) -> Vec3 {
        self.translation_quaternion().as_vector()
    }

    /// Transform `point` by the sandwich product `q · (1 + ε·p) · q*`.
    ///
    /// `self` must be a unit dual quaternion; nothing is normalized here and a
    /// non-unit `self` silently yields a non-rigid result.
    pub fn apply_to_point(&self, point: Vec3) -> Vec3 {
        let p = Self::from_vector(point);
        let result = self.product(&p).product(&self.conjugate());
        result.q_dual.as_vector()
    }

    /// [`DualQuaternion::apply_to_point`] that first checks `self` with
    /// [`DualQuaternion::is_unit`] at [`UNIT_TOLERANCE`].
    pub fn try_apply_to_point(&self, point: Vec3) -> Result<Vec3> {
        let (real_norm, orthogonality) = self.unit_residuals();
        if !self.residuals_within(real_norm, orthogonality, UNIT_TOLERANCE) {
            log::warn!("refusing to apply non-unit transform {self}");
            return Err(TransformError::NonUnitTransform { real_norm, orthogonality });
        }
        Ok(self.apply_to_point(point))
    }

    /// `self` then `other`: applying the result equals applying `self` and
    /// then `other`. Same as `other.product(self)`.
    pub fn then(&self, other: &Self) -> Self {
        other.product(self)
    }

    /// Whether `|q_real| = 1` within `tolerance`, and the real/dual parts are
    /// orthogonal within `tolerance` relative to `max(|q_dual|, 1)`.
    pub fn is_unit(&self, tolerance: f64) -> bool {
        let (real_norm, orthogonality) = self.unit_residuals();
        self.residuals_within(real_norm, orthogonality, tolerance)
    }

    // (|q_real|, |q_real*·q_dual + q_dual*·q_real|)
    fn unit_residuals(&self) -> (f64, f64) {
        let orthogonality = self
            .q_real
            .conjugate()
            .product(&self.q_dual)
            .sum(&self.q_dual.conjugate().product(&self.q_real))
            .magnitude();
        (self.q_real.magnitude(), orthogonality)
    }

    // The orthogonality residual grows with |q_dual| ≈ |t|/2.
    fn residuals_within(&self, real_norm: f64, orthogonality: f64, tolerance: f64) -> bool {
        (real_norm - 1.0).abs() <= tolerance
            && orthogonality <= tolerance * self.q_dual.magnitude().max(1.0)
    }
}

impl Add for DualQuaternion {
    type Output = DualQuaternion;
    fn add(self, rhs: DualQuaternion) -> DualQuaternion { self.sum(&rhs) }
}

impl Sub for DualQuaternion {
    type Output = DualQuaternion;
    fn sub(self, rhs: DualQuaternion) -> DualQuaternion { self.difference(&rhs) }
}

impl Mul for DualQuaternion {
    type Output = DualQuaternion;
    fn mul(self, rhs: DualQuaternion) -> DualQuaternion { self.product(&rhs) }
}

impl Mul<f64> for DualQuaternion {
    type Output = DualQuaternion;
    fn mul(self, rhs: f64) -> DualQuaternion { self.scaled(rhs) }
}

impl Default for DualQuaternion {
    fn default() -> Self { Self::IDENTITY }
}

impl fmt::Display for DualQuaternion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} + {}ɛ", self.q_real, self.q_dual)
    }
}

impl AbsDiffEq for DualQuaternion {
    type Epsilon = f64;

    fn default_epsilon() -> f64 { f64::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.q_real.abs_diff_eq(&other.q_real, epsilon)
            && self.q_dual.abs_diff_eq(&other.q_dual, epsilon)
    }
}

impl RelativeEq for DualQuaternion {
    fn default_max_relative() -> f64 { f64::default_max_relative() }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.q_real.relative_eq(&other.q_real, epsilon, max_relative)
            && self.q_dual.relative_eq(&other.q_dual, epsilon, max_relative)
    }
}
