//! Curve builders: vertices, segments, arcs, splines, polylines, helices.
//!
//! Every builder follows the same shape: validate parameters, resolve the
//! session's current frame, run all point/vector arguments through the
//! local → world → kernel chain, delegate to the kernel, wrap the handle.

use std::f64::consts::PI;

use camber_kernel::{Kernel, KernelPoint, ShapeKind};
use camber_types::LocalPoint;

use crate::session::Session;
use crate::shape::Shape;
use crate::types::OpError;

fn ensure_distinct(points: &[LocalPoint], what: &str) -> Result<(), OpError> {
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if (points[i].vec() - points[j].vec()).length() < 1e-12 {
                return Err(OpError::invalid_parameter(format!(
                    "{} points must be distinct",
                    what
                )));
            }
        }
    }
    Ok(())
}

/// Create a vertex at the given local coordinates.
pub fn make_point<K: Kernel>(session: &Session<K>, x: f64, y: f64, z: f64) -> Result<Shape, OpError> {
    let p = session.resolve_point(LocalPoint::new(x, y, z));
    let handle = session.kernel().make_vertex(p)?;
    Ok(Shape::new(ShapeKind::Vertex, handle))
}

/// Create a straight edge between two local points.
pub fn make_segment<K: Kernel>(session: &Session<K>, p1: LocalPoint, p2: LocalPoint) -> Result<Shape, OpError> {
    ensure_distinct(&[p1, p2], "segment")?;
    let start = session.resolve_point(p1);
    let end = session.resolve_point(p2);
    let handle = session.kernel().make_line(start, end)?;
    Ok(Shape::new(ShapeKind::Edge, handle))
}

/// Create a circular arc through exactly three points: start, transit,
/// end.
pub fn make_three_point_arc<K: Kernel>(
    session: &Session<K>,
    p1: LocalPoint,
    p2: LocalPoint,
    p3: LocalPoint,
) -> Result<Shape, OpError> {
    ensure_distinct(&[p1, p2, p3], "arc")?;
    let start = session.resolve_point(p1);
    let transit = session.resolve_point(p2);
    let end = session.resolve_point(p3);
    let handle = session.kernel().make_arc(start, transit, end)?;
    Ok(Shape::new(ShapeKind::Edge, handle))
}

/// Create an arc of a circle around `center` in the current workplane,
/// from `start_angle` to `end_angle` (radians, measured from the plane's
/// x axis).
pub fn make_angle_arc<K: Kernel>(
    session: &Session<K>,
    center: LocalPoint,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> Result<Shape, OpError> {
    if radius <= 0.0 {
        return Err(OpError::invalid_parameter("arc radius must be positive"));
    }
    if (end_angle - start_angle).abs() < 1e-12 {
        return Err(OpError::invalid_parameter(
            "arc start and end angles must differ",
        ));
    }
    let c = center.vec();
    let at = |angle: f64| {
        LocalPoint::new(
            c.x + radius * angle.cos(),
            c.y + radius * angle.sin(),
            c.z,
        )
    };
    let mid_angle = (start_angle + end_angle) / 2.0;
    make_three_point_arc(session, at(start_angle), at(mid_angle), at(end_angle))
}

/// Create a smooth spline edge through at least two control points.
pub fn make_spline<K: Kernel>(session: &Session<K>, points: &[LocalPoint]) -> Result<Shape, OpError> {
    if points.len() < 2 {
        return Err(OpError::invalid_parameter(
            "spline needs at least 2 control points",
        ));
    }
    let kernel_points: Vec<KernelPoint> =
        points.iter().map(|p| session.resolve_point(*p)).collect();
    let handle = session.kernel().make_spline_edge(&kernel_points)?;
    Ok(Shape::new(ShapeKind::Edge, handle))
}

/// Create a polyline wire through at least two points.
pub fn make_polyline<K: Kernel>(
    session: &Session<K>,
    points: &[LocalPoint],
    closed: bool,
) -> Result<Shape, OpError> {
    if points.len() < 2 {
        return Err(OpError::invalid_parameter(
            "polyline needs at least 2 points",
        ));
    }
    let kernel_points: Vec<KernelPoint> =
        points.iter().map(|p| session.resolve_point(*p)).collect();
    let handle = session.kernel().make_polyline_wire(&kernel_points, closed)?;
    Ok(Shape::new(ShapeKind::Wire, handle))
}

/// Create a helical path wire rising along the current workplane normal.
///
/// `points_per_turn` is clamped to 6..=32; `smooth` selects a spline
/// through the samples instead of a polyline (slower, smoother).
pub fn make_helix<K: Kernel>(
    session: &Session<K>,
    radius: f64,
    pitch: f64,
    turns: f64,
    points_per_turn: u32,
    smooth: bool,
) -> Result<Shape, OpError> {
    if radius <= 0.0 {
        return Err(OpError::invalid_parameter("helix radius must be positive"));
    }
    if pitch <= 0.0 {
        return Err(OpError::invalid_parameter("helix pitch must be positive"));
    }
    if turns <= 0.0 {
        return Err(OpError::invalid_parameter("helix turn count must be positive"));
    }
    let points_per_turn = points_per_turn.clamp(6, 32);

    let samples = ((turns * points_per_turn as f64).ceil() as usize).max(2);
    let total_angle = turns * 2.0 * PI;
    let mut kernel_points = Vec::with_capacity(samples + 1);
    for i in 0..=samples {
        let t = total_angle * i as f64 / samples as f64;
        let local = LocalPoint::new(
            radius * t.cos(),
            radius * t.sin(),
            pitch * t / (2.0 * PI),
        );
        kernel_points.push(session.resolve_point(local));
    }

    let mut kernel = session.kernel();
    let handle = if smooth {
        let edge = kernel.make_spline_edge(&kernel_points)?;
        kernel.make_wire(&[edge])?
    } else {
        kernel.make_polyline_wire(&kernel_points, false)?
    };
    Ok(Shape::new(ShapeKind::Wire, handle))
}
