//! Boolean combination of solids.
//!
//! Results are always normalized to a single solid. When the kernel
//! reports a multi-lump result the extra lumps are discarded — loudly,
//! via a warning, never silently.

use camber_kernel::{Kernel, ShapeKind};
use tracing::{debug, warn};

use crate::session::Session;
use crate::shape::Shape;
use crate::types::OpError;

fn require_solid(shape: &Shape, role: &str) -> Result<(), OpError> {
    if shape.kind() != ShapeKind::Solid {
        return Err(OpError::invalid_operand(format!(
            "{} operand must be a valid solid, found a {}",
            role,
            shape.kind()
        )));
    }
    Ok(())
}

fn surface_multi_lump<K: Kernel>(session: &Session<K>, operation: &str, handle: camber_kernel::ShapeHandle) {
    match session.kernel().solid_count(handle) {
        Ok(count) if count > 1 => {
            warn!(
                operation,
                discarded = count - 1,
                "boolean produced {} disjoint solids; keeping the first",
                count
            );
        }
        _ => {}
    }
}

/// Fuse two solids. Tags are united; metadata shallow-merged with the
/// second input winning on key collisions.
pub fn union<K: Kernel>(session: &Session<K>, a: &Shape, b: &Shape) -> Result<Shape, OpError> {
    require_solid(a, "first")?;
    require_solid(b, "second")?;
    debug!("boolean union");
    let handle = session.kernel().boolean_union(a.handle(), b.handle())?;
    surface_multi_lump(session, "union", handle);
    Ok(Shape::derived_union(ShapeKind::Solid, handle, a, b))
}

/// Subtract `tool` from `target`. The result keeps the target's tags and
/// metadata only.
pub fn cut<K: Kernel>(session: &Session<K>, target: &Shape, tool: &Shape) -> Result<Shape, OpError> {
    require_solid(target, "target")?;
    require_solid(tool, "tool")?;
    debug!("boolean cut");
    let handle = session
        .kernel()
        .boolean_subtract(target.handle(), tool.handle())?;
    surface_multi_lump(session, "cut", handle);
    Ok(Shape::derived_single(ShapeKind::Solid, handle, target))
}

/// Intersect two solids. Tags are intersected; metadata shallow-merged.
pub fn intersect<K: Kernel>(session: &Session<K>, a: &Shape, b: &Shape) -> Result<Shape, OpError> {
    require_solid(a, "first")?;
    require_solid(b, "second")?;
    debug!("boolean intersect");
    let handle = session.kernel().boolean_intersect(a.handle(), b.handle())?;
    surface_multi_lump(session, "intersect", handle);
    Ok(Shape::derived_intersection(ShapeKind::Solid, handle, a, b))
}
