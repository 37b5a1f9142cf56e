use serde::{Deserialize, Serialize};

use crate::spaces::{LocalPoint, LocalVector, WorldPoint, WorldVector};
use crate::vec3::Vec3;

/// Cross products shorter than this (for unit inputs) mean the axes are
/// effectively parallel.
const PARALLEL_TOL: f64 = 1e-9;

/// Errors from frame construction and stack manipulation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FrameError {
    #[error("degenerate frame: {reason}")]
    DegenerateFrame { reason: String },

    #[error("cannot pop the world frame off the stack")]
    EmptyStack,
}

/// An orthonormal right-handed coordinate frame (workplane) in world space.
///
/// A frame's origin and axes are always expressed in world coordinates,
/// even when the frame is pushed inside another scoped frame — nesting
/// scopes does not compose transforms.
///
/// Immutable after construction; cheap to copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    origin: WorldPoint,
    x_axis: WorldVector,
    y_axis: WorldVector,
    z_axis: WorldVector,
}

impl Frame {
    /// Build a frame from an origin and two spanning axis directions.
    ///
    /// The x axis is kept, z is derived as `normalize(x × y)`, and y is
    /// re-derived as `z × x` so the triad is exactly orthonormal even when
    /// the inputs are slightly skewed. Zero-length or parallel inputs fail.
    pub fn new(
        origin: WorldPoint,
        x_axis: WorldVector,
        y_axis: WorldVector,
    ) -> Result<Self, FrameError> {
        let x = x_axis
            .vec()
            .normalized()
            .ok_or_else(|| FrameError::DegenerateFrame {
                reason: "x axis has zero length".to_string(),
            })?;
        let y_in = y_axis
            .vec()
            .normalized()
            .ok_or_else(|| FrameError::DegenerateFrame {
                reason: "y axis has zero length".to_string(),
            })?;

        let cross = x.cross(&y_in);
        if cross.length() < PARALLEL_TOL {
            return Err(FrameError::DegenerateFrame {
                reason: "x and y axes are parallel".to_string(),
            });
        }
        let z = cross.normalized().ok_or_else(|| FrameError::DegenerateFrame {
            reason: "x and y axes are parallel".to_string(),
        })?;
        let y = z.cross(&x);

        Ok(Self {
            origin,
            x_axis: WorldVector(x),
            y_axis: WorldVector(y),
            z_axis: WorldVector(z),
        })
    }

    /// The canonical Z-up world frame: origin at (0,0,0), identity axes.
    pub fn world() -> Self {
        Self {
            origin: WorldPoint::ORIGIN,
            x_axis: WorldVector(Vec3::X),
            y_axis: WorldVector(Vec3::Y),
            z_axis: WorldVector(Vec3::Z),
        }
    }

    /// Build a frame on a plane given only its normal.
    ///
    /// The in-plane basis is derived by crossing the normal with a
    /// reference vector: (1,0,0) unless the normal is nearly parallel to
    /// it (|dot| > 0.9), in which case (0,0,1) is used instead.
    pub fn from_origin_normal(origin: WorldPoint, normal: WorldVector) -> Result<Self, FrameError> {
        let n = normal
            .vec()
            .normalized()
            .ok_or_else(|| FrameError::DegenerateFrame {
                reason: "normal has zero length".to_string(),
            })?;

        let reference = if n.dot(&Vec3::X).abs() > 0.9 {
            Vec3::Z
        } else {
            Vec3::X
        };

        let x = reference
            .cross(&n)
            .normalized()
            .ok_or_else(|| FrameError::DegenerateFrame {
                reason: "normal is parallel to both reference vectors".to_string(),
            })?;
        let y = n.cross(&x);

        Ok(Self {
            origin,
            x_axis: WorldVector(x),
            y_axis: WorldVector(y),
            z_axis: WorldVector(n),
        })
    }

    pub fn origin(&self) -> WorldPoint {
        self.origin
    }

    pub fn x_axis(&self) -> WorldVector {
        self.x_axis
    }

    pub fn y_axis(&self) -> WorldVector {
        self.y_axis
    }

    /// The frame's normal.
    pub fn z_axis(&self) -> WorldVector {
        self.z_axis
    }

    /// Same axes, origin shifted by `offset`.
    pub fn translated(&self, offset: WorldVector) -> Self {
        Self {
            origin: self.origin + offset,
            ..*self
        }
    }

    /// Transform a point from this frame into world space.
    pub fn to_world(&self, p: LocalPoint) -> WorldPoint {
        let lp = p.vec();
        WorldPoint(
            self.origin.vec()
                + self.x_axis.vec() * lp.x
                + self.y_axis.vec() * lp.y
                + self.z_axis.vec() * lp.z,
        )
    }

    /// Transform a free vector from this frame into world space.
    ///
    /// Same linear combination as `to_world` but without the origin term;
    /// directions and normals must go through here, never `to_world`.
    pub fn to_world_vector(&self, v: LocalVector) -> WorldVector {
        let lv = v.vec();
        WorldVector(
            self.x_axis.vec() * lv.x + self.y_axis.vec() * lv.y + self.z_axis.vec() * lv.z,
        )
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::world()
    }
}
