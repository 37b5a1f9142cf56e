use camber_kernel::{Kernel, ShapeKind};
use camber_types::LocalPoint;
use tracing::debug;

use crate::session::Session;
use crate::shape::Shape;
use crate::types::OpError;

/// Revolve a closed profile (wire or face) around the axis through two
/// local points, by `angle` radians.
pub fn revolve<K: Kernel>(
    session: &Session<K>,
    profile: &Shape,
    axis_start: LocalPoint,
    axis_end: LocalPoint,
    angle: f64,
) -> Result<Shape, OpError> {
    if angle == 0.0 {
        return Err(OpError::invalid_parameter(
            "revolve angle must be non-zero",
        ));
    }
    if (axis_end.vec() - axis_start.vec()).length() < 1e-12 {
        return Err(OpError::invalid_parameter(
            "revolve axis points must be distinct",
        ));
    }
    let face_handle = match profile.kind() {
        ShapeKind::Face => profile.handle(),
        ShapeKind::Wire => session.kernel().make_face(profile.handle())?,
        other => return Err(OpError::unsupported("revolve", other)),
    };

    // Axis endpoints are point-like; their difference is the direction.
    let origin = session.resolve_point(axis_start);
    let direction = session.resolve_point(axis_end) - origin;
    debug!(angle, "revolve");
    let handle = session
        .kernel()
        .revolve_face(face_handle, origin, direction, angle)?;
    Ok(Shape::derived_single(ShapeKind::Solid, handle, profile))
}
