use camber_kernel::{Kernel, KernelId, ShapeKind};
use tracing::debug;

use crate::session::Session;
use crate::shape::Shape;
use crate::types::OpError;

/// Round the given edges of a solid with `radius`.
///
/// The edge subset must be non-empty and every edge must belong to the
/// solid's boundary; both are checked before the kernel is called.
pub fn fillet<K: Kernel>(
    session: &Session<K>,
    solid: &Shape,
    edges: &[KernelId],
    radius: f64,
) -> Result<Shape, OpError> {
    if solid.kind() != ShapeKind::Solid {
        return Err(OpError::unsupported("fillet", solid.kind()));
    }
    if radius <= 0.0 {
        return Err(OpError::invalid_parameter("fillet radius must be positive"));
    }
    if edges.is_empty() {
        return Err(OpError::invalid_parameter(
            "fillet edge subset must not be empty",
        ));
    }
    let boundary = session.kernel().list_edges(solid.handle())?;
    for edge in edges {
        if !boundary.contains(edge) {
            return Err(OpError::invalid_parameter(format!(
                "edge {:?} does not belong to the solid's boundary",
                edge
            )));
        }
    }
    debug!(edges = edges.len(), radius, "fillet");
    let handle = session
        .kernel()
        .fillet_edges(solid.handle(), edges, radius)?;
    Ok(Shape::derived_single(ShapeKind::Solid, handle, solid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::make_box;
    use crate::query::list_edges;

    #[test]
    fn test_fillet_single_edge() {
        let session = Session::with_mock();
        let solid = make_box(&session, 2.0, 2.0, 2.0, true).unwrap();
        let edges = list_edges(&session, &solid).unwrap();
        let rounded = fillet(&session, &solid, &edges[0..1], 0.2).unwrap();
        assert_eq!(rounded.kind(), ShapeKind::Solid);
        assert_eq!(rounded.tags(), solid.tags());
    }

    #[test]
    fn test_fillet_rejects_empty_edge_set() {
        let session = Session::with_mock();
        let solid = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
        let result = fillet(&session, &solid, &[], 0.2);
        assert!(matches!(result, Err(OpError::InvalidParameter { .. })));
    }

    #[test]
    fn test_fillet_rejects_foreign_edge() {
        let session = Session::with_mock();
        let solid = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
        let other = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
        let foreign = list_edges(&session, &other).unwrap();
        let result = fillet(&session, &solid, &foreign[0..1], 0.2);
        assert!(matches!(result, Err(OpError::InvalidParameter { .. })));
    }

    #[test]
    fn test_fillet_rejects_nonpositive_radius() {
        let session = Session::with_mock();
        let solid = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
        let edges = list_edges(&session, &solid).unwrap();
        let result = fillet(&session, &solid, &edges[0..1], 0.0);
        assert!(matches!(result, Err(OpError::InvalidParameter { .. })));
    }
}
