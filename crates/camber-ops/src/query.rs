//! Read-only queries against the kernel: topology listings, volume,
//! tessellation, STEP text, compound extraction.

use camber_kernel::{Kernel, KernelId, RenderMesh, ShapeKind};

use crate::session::Session;
use crate::shape::Shape;
use crate::types::OpError;

/// Edge ids of a solid's boundary, for fillet/chamfer selection.
pub fn list_edges<K: Kernel>(session: &Session<K>, solid: &Shape) -> Result<Vec<KernelId>, OpError> {
    if solid.kind() != ShapeKind::Solid {
        return Err(OpError::unsupported("list_edges", solid.kind()));
    }
    Ok(session.kernel().list_edges(solid.handle())?)
}

/// Face ids of a solid's boundary, for shell selection.
pub fn list_faces<K: Kernel>(session: &Session<K>, solid: &Shape) -> Result<Vec<KernelId>, OpError> {
    if solid.kind() != ShapeKind::Solid {
        return Err(OpError::unsupported("list_faces", solid.kind()));
    }
    Ok(session.kernel().list_faces(solid.handle())?)
}

/// Enclosed volume of a solid, or the summed volume of a compound's
/// solid members.
pub fn volume<K: Kernel>(session: &Session<K>, shape: &Shape) -> Result<f64, OpError> {
    match shape.kind() {
        ShapeKind::Solid => Ok(session.kernel().volume(shape.handle())?),
        ShapeKind::Compound => {
            let members = compound_members(session, shape)?;
            let mut total = 0.0;
            for member in &members {
                if member.kind() == ShapeKind::Solid || member.kind() == ShapeKind::Compound {
                    total += volume(session, member)?;
                }
            }
            Ok(total)
        }
        other => Err(OpError::unsupported("volume", other)),
    }
}

/// The ordered members of a compound, each wrapped with the compound's
/// tags and metadata.
pub fn compound_members<K: Kernel>(session: &Session<K>, compound: &Shape) -> Result<Vec<Shape>, OpError> {
    if compound.kind() != ShapeKind::Compound {
        return Err(OpError::unsupported("compound_members", compound.kind()));
    }
    let handles = session.kernel().compound_members(compound.handle())?;
    let mut members = Vec::with_capacity(handles.len());
    for handle in handles {
        let kind = session.kernel().shape_kind(handle)?;
        members.push(Shape::derived_single(kind, handle, compound));
    }
    Ok(members)
}

/// Tessellate a solid into a triangle mesh at the given tolerance.
pub fn tessellate<K: Kernel>(session: &Session<K>, solid: &Shape, tolerance: f64) -> Result<RenderMesh, OpError> {
    if solid.kind() != ShapeKind::Solid {
        return Err(OpError::unsupported("tessellate", solid.kind()));
    }
    if tolerance <= 0.0 {
        return Err(OpError::invalid_parameter(
            "tessellation tolerance must be positive",
        ));
    }
    Ok(session.kernel().tessellate(solid.handle(), tolerance)?)
}

/// STEP (ISO 10303-21) text for a solid.
pub fn step_string<K: Kernel>(session: &Session<K>, solid: &Shape) -> Result<String, OpError> {
    if solid.kind() != ShapeKind::Solid {
        return Err(OpError::unsupported("step_string", solid.kind()));
    }
    Ok(session.kernel().step_string(solid.handle())?)
}
