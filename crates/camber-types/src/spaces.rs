//! Tagged coordinate-space types.
//!
//! Three spaces exist: local (relative to the current workplane frame),
//! world (canonical Z-up), and kernel (the geometry kernel's Y-up
//! convention). Points and free vectors are distinct types because they
//! transform differently: points pick up the frame origin, vectors do not.
//! Crossing spaces is only possible through `Frame` and the convention
//! adapter in `convert`, so a value can never be run through the wrong
//! transform by accident.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

use crate::vec3::Vec3;

/// A point expressed in the current workplane's local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalPoint(pub Vec3);

/// A free vector (direction/normal) in local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalVector(pub Vec3);

/// A point in the canonical Z-up world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint(pub Vec3);

/// A free vector in the canonical Z-up world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldVector(pub Vec3);

/// A point in the kernel's native Y-up space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KernelPoint(pub Vec3);

/// A free vector in the kernel's native Y-up space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KernelVector(pub Vec3);

impl LocalPoint {
    pub const ORIGIN: Self = Self(Vec3::ZERO);

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vec3::new(x, y, z))
    }

    pub fn vec(&self) -> Vec3 {
        self.0
    }
}

impl LocalVector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vec3::new(x, y, z))
    }

    pub fn vec(&self) -> Vec3 {
        self.0
    }

    pub fn length(&self) -> f64 {
        self.0.length()
    }

    pub fn normalized(&self) -> Option<Self> {
        self.0.normalized().map(Self)
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0 * factor)
    }
}

impl WorldPoint {
    pub const ORIGIN: Self = Self(Vec3::ZERO);

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vec3::new(x, y, z))
    }

    pub fn vec(&self) -> Vec3 {
        self.0
    }
}

impl WorldVector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vec3::new(x, y, z))
    }

    pub fn vec(&self) -> Vec3 {
        self.0
    }

    pub fn length(&self) -> f64 {
        self.0.length()
    }

    pub fn normalized(&self) -> Option<Self> {
        self.0.normalized().map(Self)
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0 * factor)
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self(self.0.cross(&other.0))
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.0.dot(&other.0)
    }
}

impl KernelPoint {
    pub const ORIGIN: Self = Self(Vec3::ZERO);

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vec3::new(x, y, z))
    }

    pub fn vec(&self) -> Vec3 {
        self.0
    }

    pub fn to_array(&self) -> [f64; 3] {
        self.0.to_array()
    }
}

impl KernelVector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vec3::new(x, y, z))
    }

    pub fn vec(&self) -> Vec3 {
        self.0
    }

    pub fn length(&self) -> f64 {
        self.0.length()
    }

    pub fn normalized(&self) -> Option<Self> {
        self.0.normalized().map(Self)
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0 * factor)
    }

    pub fn to_array(&self) -> [f64; 3] {
        self.0.to_array()
    }
}

impl Add<WorldVector> for WorldPoint {
    type Output = WorldPoint;
    fn add(self, rhs: WorldVector) -> WorldPoint {
        WorldPoint(self.0 + rhs.0)
    }
}

impl Sub for WorldPoint {
    type Output = WorldVector;
    fn sub(self, rhs: WorldPoint) -> WorldVector {
        WorldVector(self.0 - rhs.0)
    }
}

impl Add<KernelVector> for KernelPoint {
    type Output = KernelPoint;
    fn add(self, rhs: KernelVector) -> KernelPoint {
        KernelPoint(self.0 + rhs.0)
    }
}

impl Sub for KernelPoint {
    type Output = KernelVector;
    fn sub(self, rhs: KernelPoint) -> KernelVector {
        KernelVector(self.0 - rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_minus_point_is_vector() {
        let a = WorldPoint::new(3.0, 2.0, 1.0);
        let b = WorldPoint::new(1.0, 1.0, 1.0);
        let v = a - b;
        assert!((v.vec().x - 2.0).abs() < 1e-12);
        assert!((v.vec().y - 1.0).abs() < 1e-12);
        assert!((v.vec().z).abs() < 1e-12);
    }

    #[test]
    fn test_point_plus_vector() {
        let p = KernelPoint::new(1.0, 0.0, 0.0) + KernelVector::new(0.0, 2.0, 0.0);
        assert!((p.vec().y - 2.0).abs() < 1e-12);
    }
}
