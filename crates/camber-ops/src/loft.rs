use camber_kernel::{Kernel, ShapeHandle, ShapeKind};
use tracing::debug;

use crate::session::Session;
use crate::shape::Shape;
use crate::types::OpError;

/// Loft a solid through an ordered sequence of closed profile wires.
///
/// `ruled` connects successive sections with straight ruling instead of a
/// smooth interpolation. Tags and metadata are united across all
/// profiles.
pub fn loft<K: Kernel>(session: &Session<K>, profiles: &[Shape], ruled: bool) -> Result<Shape, OpError> {
    if profiles.len() < 2 {
        return Err(OpError::invalid_parameter(
            "loft needs at least 2 profiles",
        ));
    }
    for profile in profiles {
        if profile.kind() != ShapeKind::Wire {
            return Err(OpError::unsupported("loft", profile.kind()));
        }
    }

    let handles: Vec<ShapeHandle> = profiles.iter().map(|p| p.handle()).collect();
    debug!(sections = profiles.len(), ruled, "loft");
    let handle = session.kernel().loft(&handles, ruled)?;

    let sources: Vec<&Shape> = profiles.iter().collect();
    Ok(Shape::derived_from_all(ShapeKind::Solid, handle, &sources))
}
