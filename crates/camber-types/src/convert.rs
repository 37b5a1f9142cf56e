//! Convention adapter between the user-facing Z-up world space and the
//! kernel's Y-up space.
//!
//! The mapping is a fixed axis permutation plus one sign flip:
//! world (x, y, z) -> kernel (x, z, -y), inverse (x, y, z) -> (x, -z, y).
//! Points and free vectors use the same linear map; vectors never pick up
//! an origin offset.

use serde::{Deserialize, Serialize};

use crate::frame::Frame;
use crate::spaces::{KernelPoint, KernelVector, WorldPoint, WorldVector};

impl WorldPoint {
    /// Remap into the kernel's Y-up space.
    pub fn to_kernel(&self) -> KernelPoint {
        let v = self.vec();
        KernelPoint::new(v.x, v.z, -v.y)
    }
}

impl KernelPoint {
    /// Remap back into the Z-up world space.
    pub fn to_world(&self) -> WorldPoint {
        let v = self.vec();
        WorldPoint::new(v.x, -v.z, v.y)
    }
}

impl WorldVector {
    /// Remap into the kernel's Y-up space (linear map only, no origin).
    pub fn to_kernel(&self) -> KernelVector {
        let v = self.vec();
        KernelVector::new(v.x, v.z, -v.y)
    }
}

impl KernelVector {
    /// Remap back into the Z-up world space.
    pub fn to_world(&self) -> WorldVector {
        let v = self.vec();
        WorldVector::new(v.x, -v.z, v.y)
    }
}

/// A working plane in kernel coordinates: what the kernel gets whenever a
/// builder hands it a plane rather than raw points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KernelPlane {
    pub origin: KernelPoint,
    pub x_axis: KernelVector,
    pub normal: KernelVector,
}

impl Frame {
    /// Convert this frame into the kernel's plane representation.
    pub fn kernel_plane(&self) -> KernelPlane {
        KernelPlane {
            origin: self.origin().to_kernel(),
            x_axis: self.x_axis().to_kernel(),
            normal: self.z_axis().to_kernel(),
        }
    }
}

impl KernelPlane {
    /// The plane's in-plane y axis, completing a right-handed triad.
    pub fn y_axis(&self) -> KernelVector {
        KernelVector(self.normal.vec().cross(&self.x_axis.vec()))
    }
}
