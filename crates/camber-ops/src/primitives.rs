//! Primitive solid builders: box, cylinder, sphere.

use camber_kernel::{Kernel, ShapeKind};
use camber_types::{KernelPlane, LocalPoint};

use crate::session::Session;
use crate::shape::Shape;
use crate::types::OpError;

/// Tags stamped onto a box solid, one per face.
const BOX_FACE_TAGS: [&str; 6] = [
    "face:top",
    "face:bottom",
    "face:front",
    "face:back",
    "face:left",
    "face:right",
];

/// Create a box in the current workplane.
///
/// `centered` places the box symmetric about the workplane origin;
/// otherwise it sits in the positive octant with a corner at the origin.
/// The six faces are recorded as structural tags for later tag-based
/// selection.
pub fn make_box<K: Kernel>(
    session: &Session<K>,
    width: f64,
    height: f64,
    depth: f64,
    centered: bool,
) -> Result<Shape, OpError> {
    if width <= 0.0 || height <= 0.0 || depth <= 0.0 {
        return Err(OpError::invalid_parameter(
            "box dimensions must be positive",
        ));
    }
    let frame = session.frames().current();
    let center = if centered {
        LocalPoint::ORIGIN
    } else {
        LocalPoint::new(width / 2.0, height / 2.0, depth / 2.0)
    };
    let plane = KernelPlane {
        origin: frame.to_world(center).to_kernel(),
        x_axis: frame.x_axis().to_kernel(),
        normal: frame.z_axis().to_kernel(),
    };
    let handle = session.kernel().make_box(&plane, width, height, depth)?;
    let mut shape = Shape::new(ShapeKind::Solid, handle);
    for tag in BOX_FACE_TAGS {
        shape.add_tag(tag);
    }
    Ok(shape)
}

/// Create a cylinder centered on the current workplane origin, axis along
/// the workplane normal.
pub fn make_cylinder<K: Kernel>(session: &Session<K>, radius: f64, height: f64) -> Result<Shape, OpError> {
    if radius <= 0.0 {
        return Err(OpError::invalid_parameter(
            "cylinder radius must be positive",
        ));
    }
    if height <= 0.0 {
        return Err(OpError::invalid_parameter(
            "cylinder height must be positive",
        ));
    }
    let plane = session.current_plane();
    let handle = session.kernel().make_cylinder(&plane, radius, height)?;
    Ok(Shape::new(ShapeKind::Solid, handle))
}

/// Create a sphere centered on the current workplane origin.
pub fn make_sphere<K: Kernel>(session: &Session<K>, radius: f64) -> Result<Shape, OpError> {
    if radius <= 0.0 {
        return Err(OpError::invalid_parameter(
            "sphere radius must be positive",
        ));
    }
    let center = session.resolve_point(LocalPoint::ORIGIN);
    let handle = session.kernel().make_sphere(center, radius)?;
    Ok(Shape::new(ShapeKind::Solid, handle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_carries_face_tags() {
        let session = Session::with_mock();
        let shape = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
        assert_eq!(shape.kind(), ShapeKind::Solid);
        assert_eq!(shape.tags().len(), 6);
        assert!(shape.has_tag("face:top"));
        assert!(shape.has_tag("face:right"));
    }

    #[test]
    fn test_box_rejects_nonpositive_dimension() {
        let session = Session::with_mock();
        let result = make_box(&session, 1.0, 0.0, 1.0, true);
        assert!(matches!(result, Err(OpError::InvalidParameter { .. })));
    }

    #[test]
    fn test_cylinder_and_sphere_are_untagged_solids() {
        let session = Session::with_mock();
        let cylinder = make_cylinder(&session, 0.5, 2.0).unwrap();
        let sphere = make_sphere(&session, 1.0).unwrap();
        assert_eq!(cylinder.kind(), ShapeKind::Solid);
        assert_eq!(sphere.kind(), ShapeKind::Solid);
        assert!(cylinder.tags().is_empty());
        assert!(sphere.tags().is_empty());
    }

    #[test]
    fn test_cylinder_rejects_nonpositive_radius() {
        let session = Session::with_mock();
        let result = make_cylinder(&session, -1.0, 2.0);
        assert!(matches!(result, Err(OpError::InvalidParameter { .. })));
    }
}
