use camber_kernel::{Kernel, KernelId, ShapeKind};
use tracing::debug;

use crate::session::Session;
use crate::shape::Shape;
use crate::types::OpError;

/// Bevel the given edges of a solid with a setback `distance`.
///
/// Same pre-conditions as fillet: non-empty subset, positive distance,
/// all edges on the solid's boundary.
pub fn chamfer<K: Kernel>(
    session: &Session<K>,
    solid: &Shape,
    edges: &[KernelId],
    distance: f64,
) -> Result<Shape, OpError> {
    if solid.kind() != ShapeKind::Solid {
        return Err(OpError::unsupported("chamfer", solid.kind()));
    }
    if distance <= 0.0 {
        return Err(OpError::invalid_parameter(
            "chamfer distance must be positive",
        ));
    }
    if edges.is_empty() {
        return Err(OpError::invalid_parameter(
            "chamfer edge subset must not be empty",
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
    debug!(edges = edges.len(), distance, "chamfer");
    let handle = session
        .kernel()
        .chamfer_edges(solid.handle(), edges, distance)?;
    Ok(Shape::derived_single(ShapeKind::Solid, handle, solid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::make_box;
    use crate::query::list_edges;

    #[test]
    fn test_chamfer_copies_tags() {
        let session = Session::with_mock();
        let mut solid = make_box(&session, 2.0, 2.0, 2.0, true).unwrap();
        solid.add_tag("bracket");
        let edges = list_edges(&session, &solid).unwrap();
        let beveled = chamfer(&session, &solid, &edges[0..3], 0.1).unwrap();
        assert!(beveled.has_tag("bracket"));
    }

    #[test]
    fn test_chamfer_rejects_nonpositive_distance() {
        let session = Session::with_mock();
        let solid = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
        let edges = list_edges(&session, &solid).unwrap();
        let result = chamfer(&session, &solid, &edges[0..1], -0.5);
        assert!(matches!(result, Err(OpError::InvalidParameter { .. })));
    }

    #[test]
    fn test_chamfer_rejects_empty_edge_set() {
        let session = Session::with_mock();
        let solid = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
        let result = chamfer(&session, &solid, &[], 0.1);
        assert!(matches!(result, Err(OpError::InvalidParameter { .. })));
    }
}
