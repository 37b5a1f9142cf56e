use camber_types::{KernelPlane, KernelPoint, KernelVector};

use crate::types::*;

/// Core geometry kernel contract. All coordinates are in kernel space
/// (Y-up); the caller owns every local→world→kernel conversion.
///
/// Implemented by `TruckKernel` (wraps the real truck B-rep stack) and
/// `MockKernel` (deterministic test double). Operations a backend cannot
/// provide return `KernelError::NotSupported` rather than guessing.
pub trait Kernel {
    // ── Curves and profiles ────────────────────────────────────────────

    /// Create a standalone vertex.
    fn make_vertex(&mut self, point: KernelPoint) -> Result<ShapeHandle, KernelError>;

    /// Create a straight edge between two points.
    fn make_line(
        &mut self,
        start: KernelPoint,
        end: KernelPoint,
    ) -> Result<ShapeHandle, KernelError>;

    /// Create a circular arc through three points (start, transit, end).
    fn make_arc(
        &mut self,
        start: KernelPoint,
        transit: KernelPoint,
        end: KernelPoint,
    ) -> Result<ShapeHandle, KernelError>;

    /// Create a smooth spline edge through the given control points.
    fn make_spline_edge(&mut self, points: &[KernelPoint]) -> Result<ShapeHandle, KernelError>;

    /// Assemble edges into a wire. Edges must share endpoints in order.
    fn make_wire(&mut self, edges: &[ShapeHandle]) -> Result<ShapeHandle, KernelError>;

    /// Create a polyline wire through the given points, optionally closed.
    fn make_polyline_wire(
        &mut self,
        points: &[KernelPoint],
        closed: bool,
    ) -> Result<ShapeHandle, KernelError>;

    /// Create a full circle wire of the given radius on a plane.
    fn make_circle_wire(
        &mut self,
        plane: &KernelPlane,
        radius: f64,
    ) -> Result<ShapeHandle, KernelError>;

    /// Create a planar face bounded by a closed wire.
    fn make_face(&mut self, wire: ShapeHandle) -> Result<ShapeHandle, KernelError>;

    // ── Primitive solids ───────────────────────────────────────────────

    /// Box centered on the plane origin: width along the plane x axis,
    /// height along the plane y axis, depth along the normal.
    fn make_box(
        &mut self,
        plane: &KernelPlane,
        width: f64,
        height: f64,
        depth: f64,
    ) -> Result<ShapeHandle, KernelError>;

    /// Cylinder centered on the plane origin, axis along the normal.
    fn make_cylinder(
        &mut self,
        plane: &KernelPlane,
        radius: f64,
        height: f64,
    ) -> Result<ShapeHandle, KernelError>;

    /// Sphere centered at a point.
    fn make_sphere(&mut self, center: KernelPoint, radius: f64)
        -> Result<ShapeHandle, KernelError>;

    // ── Modeling operations ────────────────────────────────────────────

    /// Extrude a planar face along a direction by a distance.
    fn extrude_face(
        &mut self,
        face: ShapeHandle,
        direction: KernelVector,
        distance: f64,
    ) -> Result<ShapeHandle, KernelError>;

    /// Revolve a planar face around an axis.
    fn revolve_face(
        &mut self,
        face: ShapeHandle,
        axis_origin: KernelPoint,
        axis_direction: KernelVector,
        angle: f64,
    ) -> Result<ShapeHandle, KernelError>;

    /// Loft through an ordered sequence of closed wires.
    /// `ruled` selects straight ruling between sections instead of a
    /// smooth interpolation.
    fn loft(&mut self, wires: &[ShapeHandle], ruled: bool) -> Result<ShapeHandle, KernelError>;

    /// Sweep a profile face along a path wire. `is_frenet` tracks the
    /// path's Frenet frame instead of keeping a fixed up vector.
    fn sweep(
        &mut self,
        profile_face: ShapeHandle,
        path_wire: ShapeHandle,
        is_frenet: bool,
    ) -> Result<ShapeHandle, KernelError>;

    // ── Booleans ───────────────────────────────────────────────────────

    fn boolean_union(
        &mut self,
        a: ShapeHandle,
        b: ShapeHandle,
    ) -> Result<ShapeHandle, KernelError>;

    fn boolean_subtract(
        &mut self,
        a: ShapeHandle,
        b: ShapeHandle,
    ) -> Result<ShapeHandle, KernelError>;

    fn boolean_intersect(
        &mut self,
        a: ShapeHandle,
        b: ShapeHandle,
    ) -> Result<ShapeHandle, KernelError>;

    // ── Feature operations ─────────────────────────────────────────────

    /// Round the given edges of a solid with a radius.
    fn fillet_edges(
        &mut self,
        solid: ShapeHandle,
        edges: &[KernelId],
        radius: f64,
    ) -> Result<ShapeHandle, KernelError>;

    /// Bevel the given edges of a solid with a setback distance.
    fn chamfer_edges(
        &mut self,
        solid: ShapeHandle,
        edges: &[KernelId],
        distance: f64,
    ) -> Result<ShapeHandle, KernelError>;

    /// Hollow a solid, removing the listed faces and leaving walls of the
    /// given thickness.
    fn shell(
        &mut self,
        solid: ShapeHandle,
        faces_to_remove: &[KernelId],
        thickness: f64,
    ) -> Result<ShapeHandle, KernelError>;

    // ── Affine transforms ──────────────────────────────────────────────

    /// Translated copy of any shape.
    fn translate(
        &mut self,
        shape: ShapeHandle,
        offset: KernelVector,
    ) -> Result<ShapeHandle, KernelError>;

    /// Copy rotated by `angle` radians about the axis through `origin`.
    fn rotate(
        &mut self,
        shape: ShapeHandle,
        origin: KernelPoint,
        axis: KernelVector,
        angle: f64,
    ) -> Result<ShapeHandle, KernelError>;

    /// Copy reflected across the plane through `plane_origin` with unit
    /// normal `plane_normal`.
    fn mirror(
        &mut self,
        shape: ShapeHandle,
        plane_origin: KernelPoint,
        plane_normal: KernelVector,
    ) -> Result<ShapeHandle, KernelError>;

    // ── Aggregation ────────────────────────────────────────────────────

    /// Collect shapes into an ordered compound.
    fn make_compound(&mut self, members: &[ShapeHandle]) -> Result<ShapeHandle, KernelError>;

    /// The ordered members of a compound.
    fn compound_members(&self, compound: ShapeHandle) -> Result<Vec<ShapeHandle>, KernelError>;

    // ── Introspection ──────────────────────────────────────────────────

    fn shape_kind(&self, shape: ShapeHandle) -> Result<ShapeKind, KernelError>;

    /// Edge ids of a solid's boundary.
    fn list_edges(&mut self, solid: ShapeHandle) -> Result<Vec<KernelId>, KernelError>;

    /// Face ids of a solid's boundary.
    fn list_faces(&mut self, solid: ShapeHandle) -> Result<Vec<KernelId>, KernelError>;

    /// How many disjoint solid lumps a boolean result contains. Callers
    /// use this to surface the "first solid wins" normalization.
    fn solid_count(&self, solid: ShapeHandle) -> Result<usize, KernelError>;

    /// Enclosed volume of a solid.
    fn volume(&mut self, solid: ShapeHandle) -> Result<f64, KernelError>;

    // ── Export ─────────────────────────────────────────────────────────

    /// Tessellate a solid into a triangle mesh at the given tolerance.
    fn tessellate(
        &mut self,
        solid: ShapeHandle,
        tolerance: f64,
    ) -> Result<RenderMesh, KernelError>;

    /// Serialize a solid as STEP (ISO 10303-21) text.
    fn step_string(&mut self, solid: ShapeHandle) -> Result<String, KernelError>;
}
