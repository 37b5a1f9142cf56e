//! Pattern operations: repeated copies collected into a compound.

use camber_kernel::{Kernel, ShapeHandle, ShapeKind};
use camber_types::{LocalPoint, LocalVector};
use tracing::debug;

use crate::session::Session;
use crate::shape::Shape;
use crate::types::OpError;

/// `count` copies of a shape spaced `spacing` apart along `direction`,
/// the original included at offset zero. The compound carries the
/// original's tags plus a `pattern:linear` marker.
pub fn linear_pattern<K: Kernel>(
    session: &Session<K>,
    shape: &Shape,
    direction: LocalVector,
    count: u32,
    spacing: f64,
) -> Result<Shape, OpError> {
    if count < 1 {
        return Err(OpError::invalid_parameter(
            "pattern count must be at least 1",
        ));
    }
    if spacing <= 0.0 {
        return Err(OpError::invalid_parameter(
            "pattern spacing must be positive",
        ));
    }
    let unit = direction
        .normalized()
        .ok_or_else(|| OpError::invalid_parameter("pattern direction must not be zero"))?;

    debug!(count, spacing, "linear pattern");
    let offset = session.resolve_vector(unit);
    let mut members: Vec<ShapeHandle> = Vec::with_capacity(count as usize);
    let mut kernel = session.kernel();
    for i in 0..count {
        let step = offset.scaled(spacing * i as f64);
        members.push(kernel.translate(shape.handle(), step)?);
    }
    let handle = kernel.make_compound(&members)?;
    drop(kernel);

    let mut out = Shape::derived_single(ShapeKind::Compound, handle, shape);
    out.add_tag("pattern:linear");
    Ok(out)
}

/// `count` copies rotated about `axis` through `center`, stepping by
/// `total_angle / count` — a full-turn request leaves a uniform gap
/// instead of duplicating the first copy at the seam.
pub fn radial_pattern<K: Kernel>(
    session: &Session<K>,
    shape: &Shape,
    center: LocalPoint,
    axis: LocalVector,
    count: u32,
    total_angle: f64,
) -> Result<Shape, OpError> {
    if count < 1 {
        return Err(OpError::invalid_parameter(
            "pattern count must be at least 1",
        ));
    }
    if axis.length() < 1e-12 {
        return Err(OpError::invalid_parameter(
            "pattern axis must not be zero",
        ));
    }

    debug!(count, total_angle, "radial pattern");
    let kernel_center = session.resolve_point(center);
    let kernel_axis = session.resolve_vector(axis);
    let step = total_angle / count as f64;

    let mut members: Vec<ShapeHandle> = Vec::with_capacity(count as usize);
    let mut kernel = session.kernel();
    for i in 0..count {
        members.push(kernel.rotate(
            shape.handle(),
            kernel_center,
            kernel_axis,
            step * i as f64,
        )?);
    }
    let handle = kernel.make_compound(&members)?;
    drop(kernel);

    let mut out = Shape::derived_single(ShapeKind::Compound, handle, shape);
    out.add_tag("pattern:radial");
    Ok(out)
}

/// A 2D grid of copies spanned by two directions.
pub fn grid_pattern<K: Kernel>(
    session: &Session<K>,
    shape: &Shape,
    x_direction: LocalVector,
    y_direction: LocalVector,
    x_count: u32,
    y_count: u32,
    x_spacing: f64,
    y_spacing: f64,
) -> Result<Shape, OpError> {
    if x_count < 1 || y_count < 1 {
        return Err(OpError::invalid_parameter(
            "pattern counts must be at least 1",
        ));
    }
    if x_spacing <= 0.0 || y_spacing <= 0.0 {
        return Err(OpError::invalid_parameter(
            "pattern spacings must be positive",
        ));
    }
    let x_unit = x_direction
        .normalized()
        .ok_or_else(|| OpError::invalid_parameter("pattern x direction must not be zero"))?;
    let y_unit = y_direction
        .normalized()
        .ok_or_else(|| OpError::invalid_parameter("pattern y direction must not be zero"))?;

    debug!(x_count, y_count, "grid pattern");
    let x_offset = session.resolve_vector(x_unit);
    let y_offset = session.resolve_vector(y_unit);

    let mut members: Vec<ShapeHandle> = Vec::with_capacity((x_count * y_count) as usize);
    let mut kernel = session.kernel();
    for j in 0..y_count {
        for i in 0..x_count {
            let step = camber_types::KernelVector(
                x_offset.vec() * (x_spacing * i as f64) + y_offset.vec() * (y_spacing * j as f64),
            );
            members.push(kernel.translate(shape.handle(), step)?);
        }
    }
    let handle = kernel.make_compound(&members)?;
    drop(kernel);

    let mut out = Shape::derived_single(ShapeKind::Compound, handle, shape);
    out.add_tag("pattern:grid");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::make_box;

    #[test]
    fn test_linear_pattern_rejects_zero_count() {
        let session = Session::with_mock();
        let solid = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
        let result = linear_pattern(&session, &solid, LocalVector::new(1.0, 0.0, 0.0), 0, 1.0);
        assert!(matches!(result, Err(OpError::InvalidParameter { .. })));
    }

    #[test]
    fn test_linear_pattern_rejects_nonpositive_spacing() {
        let session = Session::with_mock();
        let solid = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
        let result = linear_pattern(&session, &solid, LocalVector::new(1.0, 0.0, 0.0), 3, 0.0);
        assert!(matches!(result, Err(OpError::InvalidParameter { .. })));
    }

    #[test]
    fn test_linear_pattern_marks_compound() {
        let session = Session::with_mock();
        let mut solid = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
        solid.add_tag("unit");
        let pattern =
            linear_pattern(&session, &solid, LocalVector::new(1.0, 0.0, 0.0), 3, 2.0).unwrap();
        assert_eq!(pattern.kind(), ShapeKind::Compound);
        assert!(pattern.has_tag("unit"));
        assert!(pattern.has_tag("pattern:linear"));
    }

    #[test]
    fn test_radial_pattern_marks_compound() {
        let session = Session::with_mock();
        let solid = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
        let pattern = radial_pattern(
            &session,
            &solid,
            LocalPoint::ORIGIN,
            LocalVector::new(0.0, 0.0, 1.0),
            4,
            std::f64::consts::TAU,
        )
        .unwrap();
        assert_eq!(pattern.kind(), ShapeKind::Compound);
        assert!(pattern.has_tag("pattern:radial"));
    }

    #[test]
    fn test_grid_pattern_member_count() {
        let session = Session::with_mock();
        let solid = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
        let pattern = grid_pattern(
            &session,
            &solid,
            LocalVector::new(1.0, 0.0, 0.0),
            LocalVector::new(0.0, 1.0, 0.0),
            3,
            2,
            1.5,
            1.5,
        )
        .unwrap();
        let members = crate::query::compound_members(&session, &pattern).unwrap();
        assert_eq!(members.len(), 6);
    }
}
