// src/vector.rs

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{Result, TransformError};

/// A 3-D Euclidean vector (a point or a direction).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self { Self { x, y, z } }

    pub fn sum(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
    pub fn difference(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
    /// Euclidean length; `hypot` keeps huge and tiny components from
    /// overflowing or underflowing the squares.
    pub fn magnitude(&self) -> f64 { self.x.hypot(self.y).hypot(self.z) }
    pub fn scale(&self, s: f64) -> Self { Self::new(self.x * s, self.y * s, self.z * s) }

    /// Unit vector in the direction of `self`.
    ///
    /// A zero vector has no direction: every component of the result is NaN.
    /// Use [`Vec3::try_normalized`] to reject it instead.
    pub fn normalized(&self) -> Self {
        let m = self.magnitude();
        Self::new(self.x / m, self.y / m, self.z / m)
    }

    /// Like [`Vec3::normalized`], but fails on a zero or non-finite magnitude.
    pub fn try_normalized(&self) -> Result<Self> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 || !magnitude.is_finite() {
            log::warn!("refusing to normalize {self}: magnitude {magnitude}");
            return Err(TransformError::DegenerateAxis { magnitude });
        }
        Ok(self.normalized())
    }

    /// Euclidean distance between two points; `Vec3::distance(&a, &b)`.
    pub fn distance(&self, other: &Self) -> f64 { self.difference(other).magnitude() }

    pub fn distance_from(&self, other: &Self) -> f64 { self.distance(other) }

    pub fn as_array(&self) -> [f64; 3] { [self.x, self.y, self.z] }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self { Vec3::new(x, y, z) }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 { self.sum(&rhs) }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 { self.difference(&rhs) }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f64) -> Vec3 { self.scale(rhs) }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 { self.scale(-1.0) }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Vector({}, {}, {})", self.x, self.y, self.z)
    }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 { f64::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vec3 {
    fn default_max_relative() -> f64 { f64::default_max_relative() }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

/// A tiny wrapper for printing a Vec3 rounded to `decimals` places.
pub struct Rounded<'a>(pub &'a Vec3, pub usize);

impl<'a> fmt::Display for Rounded<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Rounded(v, dec) = *self;
        write!(
            f,
            "Vector({x:.dec$}, {y:.dec$}, {z:.dec$})",
            x = v.x,
            y = v.y,
            z = v.z,
            dec = dec
        )
    }
}

impl<'a> Rounded<'a> {
    /// Wrap a `&Vec3` for pretty-printing with `decimals` digits.
    pub fn new(v: &'a Vec3, decimals: usize) -> Self {
        Rounded(v, decimals)
    }
}
