use camber_kernel::{Kernel, ShapeKind};
use tracing::debug;

use crate::session::Session;
use crate::shape::Shape;
use crate::types::OpError;

/// Extrude a closed profile (wire or face) along the current workplane
/// normal by `distance`. Negative distances extrude against the normal.
pub fn extrude<K: Kernel>(session: &Session<K>, profile: &Shape, distance: f64) -> Result<Shape, OpError> {
    if distance == 0.0 {
        return Err(OpError::invalid_parameter(
            "extrude distance must be non-zero",
        ));
    }
    let face_handle = match profile.kind() {
        ShapeKind::Face => profile.handle(),
        ShapeKind::Wire => session.kernel().make_face(profile.handle())?,
        other => return Err(OpError::unsupported("extrude", other)),
    };

    let direction = session.resolve_vector(camber_types::LocalVector::new(0.0, 0.0, 1.0));
    debug!(distance, "extrude");
    let handle = session
        .kernel()
        .extrude_face(face_handle, direction, distance)?;
    Ok(Shape::derived_single(ShapeKind::Solid, handle, profile))
}
