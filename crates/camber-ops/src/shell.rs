use camber_kernel::{Kernel, KernelId, ShapeKind};
use tracing::debug;

use crate::session::Session;
use crate::shape::Shape;
use crate::types::OpError;

/// Hollow a solid: remove the listed faces and thicken the remaining
/// boundary inward to `thickness` walls. An empty removal set produces a
/// closed hollow body.
pub fn shell<K: Kernel>(
    session: &Session<K>,
    solid: &Shape,
    faces_to_remove: &[KernelId],
    thickness: f64,
) -> Result<Shape, OpError> {
    if solid.kind() != ShapeKind::Solid {
        return Err(OpError::unsupported("shell", solid.kind()));
    }
    if thickness <= 0.0 {
        return Err(OpError::invalid_parameter(
            "shell thickness must be positive",
        ));
    }
    let boundary = session.kernel().list_faces(solid.handle())?;
    for face in faces_to_remove {
        if !boundary.contains(face) {
            return Err(OpError::invalid_parameter(format!(
                "face {:?} does not belong to the solid's boundary",
                face
            )));
        }
    }
    debug!(removed = faces_to_remove.len(), thickness, "shell");
    let handle = session
        .kernel()
        .shell(solid.handle(), faces_to_remove, thickness)?;
    Ok(Shape::derived_single(ShapeKind::Solid, handle, solid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::make_box;
    use crate::query::list_faces;

    #[test]
    fn test_shell_open_box() {
        let session = Session::with_mock();
        let solid = make_box(&session, 2.0, 2.0, 2.0, true).unwrap();
        let faces = list_faces(&session, &solid).unwrap();
        let hollowed = shell(&session, &solid, &faces[0..1], 0.1).unwrap();
        assert_eq!(hollowed.kind(), ShapeKind::Solid);
        assert_eq!(hollowed.tags(), solid.tags());
    }

    #[test]
    fn test_shell_rejects_nonpositive_thickness() {
        let session = Session::with_mock();
        let solid = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
        let result = shell(&session, &solid, &[], 0.0);
        assert!(matches!(result, Err(OpError::InvalidParameter { .. })));
    }

    #[test]
    fn test_shell_rejects_foreign_face() {
        let session = Session::with_mock();
        let solid = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
        let other = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
        let foreign = list_faces(&session, &other).unwrap();
        let result = shell(&session, &solid, &foreign[0..1], 0.1);
        assert!(matches!(result, Err(OpError::InvalidParameter { .. })));
    }
}
