//! Affine transforms over the whole shape-kind hierarchy.
//!
//! Direction arguments resolve through the current frame as vectors,
//! origins as points — mixing the two is the classic workplane bug this
//! API's typed spaces exist to prevent.

use camber_kernel::{Kernel, ShapeKind};
use camber_types::{LocalPoint, LocalVector};
use tracing::debug;

use crate::session::Session;
use crate::shape::Shape;
use crate::types::OpError;

/// Translated copy of a shape; tags and metadata are copied unchanged.
pub fn translate<K: Kernel>(session: &Session<K>, shape: &Shape, vector: LocalVector) -> Result<Shape, OpError> {
    let offset = session.resolve_vector(vector);
    debug!(kind = %shape.kind(), "translate");
    let handle = session.kernel().translate(shape.handle(), offset)?;
    Ok(Shape::derived_single(shape.kind(), handle, shape))
}

/// Copy rotated by `angle` radians about `axis` through `origin`; tags
/// and metadata are copied unchanged.
pub fn rotate<K: Kernel>(
    session: &Session<K>,
    shape: &Shape,
    angle: f64,
    axis: LocalVector,
    origin: LocalPoint,
) -> Result<Shape, OpError> {
    if axis.length() < 1e-12 {
        return Err(OpError::invalid_parameter(
            "rotation axis must not be zero",
        ));
    }
    let kernel_axis = session.resolve_vector(axis);
    let kernel_origin = session.resolve_point(origin);
    debug!(kind = %shape.kind(), angle, "rotate");
    let handle = session
        .kernel()
        .rotate(shape.handle(), kernel_origin, kernel_axis, angle)?;
    Ok(Shape::derived_single(shape.kind(), handle, shape))
}

/// Reflect a solid across the plane through `plane_origin` with normal
/// `plane_normal`. Only solids mirror meaningfully; the result carries
/// the input's tags plus a `mirrored` marker.
pub fn mirror<K: Kernel>(
    session: &Session<K>,
    shape: &Shape,
    plane_origin: LocalPoint,
    plane_normal: LocalVector,
) -> Result<Shape, OpError> {
    if shape.kind() != ShapeKind::Solid {
        return Err(OpError::unsupported("mirror", shape.kind()));
    }
    if plane_normal.length() < 1e-12 {
        return Err(OpError::invalid_parameter(
            "mirror plane normal must not be zero",
        ));
    }
    let origin = session.resolve_point(plane_origin);
    let normal = session.resolve_vector(plane_normal);
    debug!("mirror");
    let handle = session.kernel().mirror(shape.handle(), origin, normal)?;
    let mut out = Shape::derived_single(ShapeKind::Solid, handle, shape);
    out.add_tag("mirrored");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::make_box;

    #[test]
    fn test_translate_copies_tags() {
        let session = Session::with_mock();
        let mut solid = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
        solid.add_tag("anchor");
        let moved = translate(&session, &solid, LocalVector::new(1.0, 0.0, 0.0)).unwrap();
        assert!(moved.has_tag("anchor"));
        assert_eq!(moved.tags(), solid.tags());
    }

    #[test]
    fn test_rotate_rejects_zero_axis() {
        let session = Session::with_mock();
        let solid = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
        let result = rotate(
            &session,
            &solid,
            1.0,
            LocalVector::new(0.0, 0.0, 0.0),
            LocalPoint::ORIGIN,
        );
        assert!(matches!(result, Err(OpError::InvalidParameter { .. })));
    }

    #[test]
    fn test_mirror_adds_marker_tag() {
        let session = Session::with_mock();
        let solid = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
        let mirrored = mirror(
            &session,
            &solid,
            LocalPoint::ORIGIN,
            LocalVector::new(1.0, 0.0, 0.0),
        )
        .unwrap();
        assert!(mirrored.has_tag("mirrored"));
        // Input tags survive alongside the marker.
        assert!(mirrored.has_tag("face:top"));
    }

    #[test]
    fn test_mirror_rejects_wire() {
        let session = Session::with_mock();
        let wire = crate::profiles::make_rectangle(&session, 1.0, 1.0, true).unwrap();
        let result = mirror(
            &session,
            &wire,
            LocalPoint::ORIGIN,
            LocalVector::new(1.0, 0.0, 0.0),
        );
        assert!(matches!(result, Err(OpError::UnsupportedShape { .. })));
    }

    #[test]
    fn test_mirror_rejects_zero_normal() {
        let session = Session::with_mock();
        let solid = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
        let result = mirror(
            &session,
            &solid,
            LocalPoint::ORIGIN,
            LocalVector::new(0.0, 0.0, 0.0),
        );
        assert!(matches!(result, Err(OpError::InvalidParameter { .. })));
    }
}
