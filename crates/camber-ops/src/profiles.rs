//! Closed profile builders: the 2D sketch shapes later fed to extrude,
//! revolve, loft and sweep.

use std::f64::consts::PI;

use camber_kernel::{Kernel, KernelPoint, ShapeKind};
use camber_types::{KernelPlane, LocalPoint};

use crate::session::Session;
use crate::shape::Shape;
use crate::types::OpError;

/// How many segments approximate an ellipse outline.
const ELLIPSE_SIDES: usize = 32;

/// Create a rectangle wire in the current workplane, either centered on
/// the origin or anchored at it.
pub fn make_rectangle<K: Kernel>(
    session: &Session<K>,
    width: f64,
    height: f64,
    centered: bool,
) -> Result<Shape, OpError> {
    if width <= 0.0 || height <= 0.0 {
        return Err(OpError::invalid_parameter(
            "rectangle width and height must be positive",
        ));
    }
    let (x0, y0, x1, y1) = if centered {
        (-width / 2.0, -height / 2.0, width / 2.0, height / 2.0)
    } else {
        (0.0, 0.0, width, height)
    };
    let corners = [
        LocalPoint::new(x0, y0, 0.0),
        LocalPoint::new(x1, y0, 0.0),
        LocalPoint::new(x1, y1, 0.0),
        LocalPoint::new(x0, y1, 0.0),
    ];
    let kernel_points: Vec<KernelPoint> =
        corners.iter().map(|p| session.resolve_point(*p)).collect();
    let handle = session.kernel().make_polyline_wire(&kernel_points, true)?;
    Ok(Shape::new(ShapeKind::Wire, handle))
}

/// Create a circle wire of the given radius around a local center point.
pub fn make_circle<K: Kernel>(session: &Session<K>, radius: f64, center: LocalPoint) -> Result<Shape, OpError> {
    if radius <= 0.0 {
        return Err(OpError::invalid_parameter("circle radius must be positive"));
    }
    let frame = session.frames().current();
    let plane = KernelPlane {
        origin: frame.to_world(center).to_kernel(),
        x_axis: frame.x_axis().to_kernel(),
        normal: frame.z_axis().to_kernel(),
    };
    let handle = session.kernel().make_circle_wire(&plane, radius)?;
    Ok(Shape::new(ShapeKind::Wire, handle))
}

/// Create a triangle wire through three non-collinear local points.
pub fn make_triangle<K: Kernel>(
    session: &Session<K>,
    p1: LocalPoint,
    p2: LocalPoint,
    p3: LocalPoint,
) -> Result<Shape, OpError> {
    let ab = p2.vec() - p1.vec();
    let ac = p3.vec() - p1.vec();
    if ab.cross(&ac).length() < 1e-12 {
        return Err(OpError::invalid_parameter(
            "triangle points must not be collinear",
        ));
    }
    let kernel_points = [
        session.resolve_point(p1),
        session.resolve_point(p2),
        session.resolve_point(p3),
    ];
    let handle = session.kernel().make_polyline_wire(&kernel_points, true)?;
    Ok(Shape::new(ShapeKind::Wire, handle))
}

/// Create an ellipse outline around a local center, approximated as a
/// closed polyline. `rotation` turns the major axis within the plane.
pub fn make_ellipse<K: Kernel>(
    session: &Session<K>,
    center: LocalPoint,
    major_axis: f64,
    minor_axis: f64,
    rotation: f64,
) -> Result<Shape, OpError> {
    if major_axis <= 0.0 || minor_axis <= 0.0 {
        return Err(OpError::invalid_parameter(
            "ellipse axes must be positive",
        ));
    }
    let c = center.vec();
    let (sin_r, cos_r) = rotation.sin_cos();
    let mut kernel_points = Vec::with_capacity(ELLIPSE_SIDES);
    for i in 0..ELLIPSE_SIDES {
        let angle = 2.0 * PI * i as f64 / ELLIPSE_SIDES as f64;
        let u = (major_axis / 2.0) * angle.cos();
        let v = (minor_axis / 2.0) * angle.sin();
        let local = LocalPoint::new(
            c.x + u * cos_r - v * sin_r,
            c.y + u * sin_r + v * cos_r,
            c.z,
        );
        kernel_points.push(session.resolve_point(local));
    }
    let handle = session.kernel().make_polyline_wire(&kernel_points, true)?;
    Ok(Shape::new(ShapeKind::Wire, handle))
}

/// Create a trapezoidal thread cross-section, open side on the minor
/// radius, suitable for helical sweeping into a thread.
pub fn make_thread_profile<K: Kernel>(
    session: &Session<K>,
    minor_radius: f64,
    thread_depth: f64,
    thread_width: f64,
) -> Result<Shape, OpError> {
    if minor_radius <= 0.0 || thread_depth <= 0.0 || thread_width <= 0.0 {
        return Err(OpError::invalid_parameter(
            "thread radius, depth and width must be positive",
        ));
    }
    let corners = [
        LocalPoint::new(minor_radius, 0.0, 0.0),
        LocalPoint::new(minor_radius + thread_depth, thread_width / 2.0, 0.0),
        LocalPoint::new(minor_radius + thread_depth, thread_width, 0.0),
        LocalPoint::new(minor_radius, thread_width, 0.0),
    ];
    let kernel_points: Vec<KernelPoint> =
        corners.iter().map(|p| session.resolve_point(*p)).collect();
    let handle = session.kernel().make_polyline_wire(&kernel_points, true)?;
    Ok(Shape::new(ShapeKind::Wire, handle))
}

/// Turn a closed wire into a planar face.
pub fn make_face_from<K: Kernel>(session: &Session<K>, wire: &Shape) -> Result<Shape, OpError> {
    if wire.kind() != ShapeKind::Wire {
        return Err(OpError::unsupported("make_face_from", wire.kind()));
    }
    let handle = session.kernel().make_face(wire.handle())?;
    Ok(Shape::derived_single(ShapeKind::Face, handle, wire))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_rejects_nonpositive_sides() {
        let session = Session::with_mock();
        assert!(matches!(
            make_rectangle(&session, 0.0, 1.0, true),
            Err(OpError::InvalidParameter { .. })
        ));
        assert!(matches!(
            make_rectangle(&session, 1.0, -2.0, true),
            Err(OpError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_circle_is_wire() {
        let session = Session::with_mock();
        let shape = make_circle(&session, 1.5, LocalPoint::ORIGIN).unwrap();
        assert_eq!(shape.kind(), ShapeKind::Wire);
    }

    #[test]
    fn test_triangle_rejects_collinear_points() {
        let session = Session::with_mock();
        let result = make_triangle(
            &session,
            LocalPoint::new(0.0, 0.0, 0.0),
            LocalPoint::new(1.0, 0.0, 0.0),
            LocalPoint::new(2.0, 0.0, 0.0),
        );
        assert!(matches!(result, Err(OpError::InvalidParameter { .. })));
    }

    #[test]
    fn test_face_from_wire_copies_tags() {
        let session = Session::with_mock();
        let mut wire = make_rectangle(&session, 1.0, 1.0, true).unwrap();
        wire.add_tag("base-profile");
        let face = make_face_from(&session, &wire).unwrap();
        assert_eq!(face.kind(), ShapeKind::Face);
        assert!(face.has_tag("base-profile"));
    }

    #[test]
    fn test_face_from_rejects_non_wire() {
        let session = Session::with_mock();
        let vertex = crate::curves::make_point(&session, 0.0, 0.0, 0.0).unwrap();
        let result = make_face_from(&session, &vertex);
        assert!(matches!(result, Err(OpError::UnsupportedShape { .. })));
    }
}
