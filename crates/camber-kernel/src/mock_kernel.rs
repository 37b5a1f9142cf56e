//! MockKernel — deterministic test double implementing `Kernel`.
//!
//! Tracks analytic volumes (box w·h·d, cylinder πr²h, extrude area·depth,
//! union a+b, ...) and a reference anchor point that follows every affine
//! transform, so operation-level tests can observe placement without a
//! real B-rep evaluator. Solids get synthetic box-style topology with
//! predictable entity counts.

use std::collections::HashMap;
use std::f64::consts::PI;

use camber_types::{KernelPlane, KernelPoint, KernelVector, Vec3};

use crate::traits::Kernel;
use crate::types::*;

#[derive(Debug, Clone)]
struct MockEntity {
    kind: ShapeKind,
    /// Reference point in kernel space; follows affine transforms.
    anchor: Vec3,
    /// Enclosed volume (solids only).
    volume: f64,
    /// Profile area (wires and faces; synthetic 1.0 when not computable).
    area: f64,
    /// Curve length (edges and wires).
    length: f64,
    /// Disjoint lump count reported by `solid_count`.
    lumps: usize,
    edges: Vec<KernelId>,
    faces: Vec<KernelId>,
    members: Vec<ShapeHandle>,
}

impl MockEntity {
    fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            anchor: Vec3::ZERO,
            volume: 0.0,
            area: 1.0,
            length: 0.0,
            lumps: 1,
            edges: Vec::new(),
            faces: Vec::new(),
            members: Vec::new(),
        }
    }
}

/// Deterministic test double for the geometry kernel.
pub struct MockKernel {
    next_handle: u64,
    next_id: u64,
    entities: HashMap<u64, MockEntity>,
    /// Lump count stamped onto boolean results; tests raise it to exercise
    /// the multi-solid normalization path.
    boolean_lumps: usize,
}

impl MockKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            next_id: 1,
            entities: HashMap::new(),
            boolean_lumps: 1,
        }
    }

    /// Make subsequent boolean results report `n` disjoint lumps.
    pub fn set_boolean_lumps(&mut self, n: usize) {
        self.boolean_lumps = n;
    }

    /// Test-double introspection: the tracked anchor of a shape, in
    /// kernel coordinates.
    pub fn anchor(&self, shape: ShapeHandle) -> Option<[f64; 3]> {
        self.entities.get(&shape.id()).map(|e| e.anchor.to_array())
    }

    fn alloc_handle(&mut self) -> ShapeHandle {
        let h = ShapeHandle(self.next_handle);
        self.next_handle += 1;
        h
    }

    fn alloc_id(&mut self) -> KernelId {
        let id = KernelId(self.next_id);
        self.next_id += 1;
        id
    }

    fn store(&mut self, entity: MockEntity) -> ShapeHandle {
        let handle = self.alloc_handle();
        self.entities.insert(handle.id(), entity);
        handle
    }

    fn fetch(&self, handle: ShapeHandle) -> Result<&MockEntity, KernelError> {
        self.entities
            .get(&handle.id())
            .ok_or(KernelError::EntityNotFound { handle })
    }

    fn fetch_kind(
        &self,
        handle: ShapeHandle,
        expected: ShapeKind,
    ) -> Result<&MockEntity, KernelError> {
        let entity = self.fetch(handle)?;
        if entity.kind != expected {
            return Err(KernelError::WrongKind {
                expected,
                actual: entity.kind,
            });
        }
        Ok(entity)
    }

    /// Synthetic box-style boundary: 12 edges, 6 faces.
    fn box_topo(&mut self) -> (Vec<KernelId>, Vec<KernelId>) {
        let edges = (0..12).map(|_| self.alloc_id()).collect();
        let faces = (0..6).map(|_| self.alloc_id()).collect();
        (edges, faces)
    }

    fn solid_entity(&mut self, anchor: Vec3, volume: f64) -> MockEntity {
        let (edges, faces) = self.box_topo();
        MockEntity {
            anchor,
            volume,
            edges,
            faces,
            ..MockEntity::new(ShapeKind::Solid)
        }
    }

    /// Copy an entity, re-allocating sub-entity ids like a real kernel
    /// producing new topology.
    fn reissued(&mut self, source: &MockEntity) -> MockEntity {
        let mut out = source.clone();
        out.edges = source.edges.iter().map(|_| self.alloc_id()).collect();
        out.faces = source.faces.iter().map(|_| self.alloc_id()).collect();
        out
    }

    fn transformed(
        &mut self,
        shape: ShapeHandle,
        f: &dyn Fn(Vec3) -> Vec3,
    ) -> Result<ShapeHandle, KernelError> {
        let source = self.fetch(shape)?.clone();
        if source.kind == ShapeKind::Compound {
            let mut members = Vec::with_capacity(source.members.len());
            for member in &source.members {
                members.push(self.transformed(*member, f)?);
            }
            let mut out = self.reissued(&source);
            out.anchor = f(source.anchor);
            out.members = members;
            return Ok(self.store(out));
        }
        let mut out = self.reissued(&source);
        out.anchor = f(source.anchor);
        Ok(self.store(out))
    }
}

impl Default for MockKernel {
    fn default() -> Self {
        Self::new()
    }
}

/// Rotate `p` by `angle` radians about the axis (unit `axis` through
/// `origin`), Rodrigues' formula.
fn rotate_about(p: Vec3, origin: Vec3, axis: Vec3, angle: f64) -> Vec3 {
    let v = p - origin;
    let (sin, cos) = angle.sin_cos();
    let rotated = v * cos + axis.cross(&v) * sin + axis * (axis.dot(&v) * (1.0 - cos));
    origin + rotated
}

/// Reflect `p` across the plane through `origin` with unit normal `n`.
fn reflect_across(p: Vec3, origin: Vec3, n: Vec3) -> Vec3 {
    let v = p - origin;
    origin + v - n * (2.0 * v.dot(&n))
}

/// Polygon area via Newell's method; zero for fewer than 3 points.
fn polygon_area(points: &[Vec3]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = Vec3::ZERO;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        sum = sum + a.cross(&b);
    }
    sum.length() / 2.0
}

fn polyline_length(points: &[Vec3], closed: bool) -> f64 {
    let mut total = 0.0;
    for pair in points.windows(2) {
        total += (pair[1] - pair[0]).length();
    }
    if closed && points.len() > 2 {
        total += (points[0] - points[points.len() - 1]).length();
    }
    total
}

fn centroid(points: &[Vec3]) -> Vec3 {
    if points.is_empty() {
        return Vec3::ZERO;
    }
    let mut sum = Vec3::ZERO;
    for p in points {
        sum = sum + *p;
    }
    sum / points.len() as f64
}

impl Kernel for MockKernel {
    fn make_vertex(&mut self, point: KernelPoint) -> Result<ShapeHandle, KernelError> {
        let mut e = MockEntity::new(ShapeKind::Vertex);
        e.anchor = point.vec();
        Ok(self.store(e))
    }

    fn make_line(
        &mut self,
        start: KernelPoint,
        end: KernelPoint,
    ) -> Result<ShapeHandle, KernelError> {
        let mut e = MockEntity::new(ShapeKind::Edge);
        e.anchor = (start.vec() + end.vec()) / 2.0;
        e.length = (end.vec() - start.vec()).length();
        Ok(self.store(e))
    }

    fn make_arc(
        &mut self,
        start: KernelPoint,
        transit: KernelPoint,
        end: KernelPoint,
    ) -> Result<ShapeHandle, KernelError> {
        let mut e = MockEntity::new(ShapeKind::Edge);
        e.anchor = transit.vec();
        e.length = (transit.vec() - start.vec()).length() + (end.vec() - transit.vec()).length();
        Ok(self.store(e))
    }

    fn make_spline_edge(&mut self, points: &[KernelPoint]) -> Result<ShapeHandle, KernelError> {
        if points.len() < 2 {
            return Err(KernelError::OperationFailed {
                operation: "make_spline_edge".to_string(),
                reason: "spline needs at least 2 control points".to_string(),
            });
        }
        let pts: Vec<Vec3> = points.iter().map(|p| p.vec()).collect();
        let mut e = MockEntity::new(ShapeKind::Edge);
        e.anchor = centroid(&pts);
        e.length = polyline_length(&pts, false);
        Ok(self.store(e))
    }

    fn make_wire(&mut self, edges: &[ShapeHandle]) -> Result<ShapeHandle, KernelError> {
        let mut anchors = Vec::with_capacity(edges.len());
        let mut length = 0.0;
        for handle in edges {
            let edge = self.fetch_kind(*handle, ShapeKind::Edge)?;
            anchors.push(edge.anchor);
            length += edge.length;
        }
        let mut e = MockEntity::new(ShapeKind::Wire);
        e.anchor = centroid(&anchors);
        e.length = length;
        Ok(self.store(e))
    }

    fn make_polyline_wire(
        &mut self,
        points: &[KernelPoint],
        closed: bool,
    ) -> Result<ShapeHandle, KernelError> {
        if points.len() < 2 {
            return Err(KernelError::OperationFailed {
                operation: "make_polyline_wire".to_string(),
                reason: "polyline needs at least 2 points".to_string(),
            });
        }
        let pts: Vec<Vec3> = points.iter().map(|p| p.vec()).collect();
        let mut e = MockEntity::new(ShapeKind::Wire);
        e.anchor = centroid(&pts);
        e.length = polyline_length(&pts, closed);
        e.area = if closed { polygon_area(&pts) } else { 0.0 };
        Ok(self.store(e))
    }

    fn make_circle_wire(
        &mut self,
        plane: &KernelPlane,
        radius: f64,
    ) -> Result<ShapeHandle, KernelError> {
        let mut e = MockEntity::new(ShapeKind::Wire);
        e.anchor = plane.origin.vec();
        e.length = 2.0 * PI * radius;
        e.area = PI * radius * radius;
        Ok(self.store(e))
    }

    fn make_face(&mut self, wire: ShapeHandle) -> Result<ShapeHandle, KernelError> {
        let source = self.fetch_kind(wire, ShapeKind::Wire)?.clone();
        let mut e = MockEntity::new(ShapeKind::Face);
        e.anchor = source.anchor;
        e.area = if source.area > 0.0 { source.area } else { 1.0 };
        Ok(self.store(e))
    }

    fn make_box(
        &mut self,
        plane: &KernelPlane,
        width: f64,
        height: f64,
        depth: f64,
    ) -> Result<ShapeHandle, KernelError> {
        let entity = self.solid_entity(plane.origin.vec(), width * height * depth);
        Ok(self.store(entity))
    }

    fn make_cylinder(
        &mut self,
        plane: &KernelPlane,
        radius: f64,
        height: f64,
    ) -> Result<ShapeHandle, KernelError> {
        let entity = self.solid_entity(plane.origin.vec(), PI * radius * radius * height);
        Ok(self.store(entity))
    }

    fn make_sphere(
        &mut self,
        center: KernelPoint,
        radius: f64,
    ) -> Result<ShapeHandle, KernelError> {
        let entity = self.solid_entity(center.vec(), 4.0 / 3.0 * PI * radius.powi(3));
        Ok(self.store(entity))
    }

    fn extrude_face(
        &mut self,
        face: ShapeHandle,
        direction: KernelVector,
        distance: f64,
    ) -> Result<ShapeHandle, KernelError> {
        let source = self.fetch_kind(face, ShapeKind::Face)?.clone();
        let dir = direction
            .vec()
            .normalized()
            .ok_or_else(|| KernelError::OperationFailed {
                operation: "extrude_face".to_string(),
                reason: "extrude direction has zero length".to_string(),
            })?;
        let anchor = source.anchor + dir * (distance / 2.0);
        let entity = self.solid_entity(anchor, source.area * distance.abs());
        Ok(self.store(entity))
    }

    fn revolve_face(
        &mut self,
        face: ShapeHandle,
        axis_origin: KernelPoint,
        axis_direction: KernelVector,
        angle: f64,
    ) -> Result<ShapeHandle, KernelError> {
        let source = self.fetch_kind(face, ShapeKind::Face)?.clone();
        if axis_direction.length() < 1e-12 {
            return Err(KernelError::OperationFailed {
                operation: "revolve_face".to_string(),
                reason: "revolve axis has zero length".to_string(),
            });
        }
        let _ = axis_origin;
        // Synthetic volume: profile area swept through the angle.
        let entity = self.solid_entity(source.anchor, source.area * angle.abs());
        Ok(self.store(entity))
    }

    fn loft(&mut self, wires: &[ShapeHandle], _ruled: bool) -> Result<ShapeHandle, KernelError> {
        let mut anchors = Vec::with_capacity(wires.len());
        let mut area_sum = 0.0;
        for handle in wires {
            let wire = self.fetch_kind(*handle, ShapeKind::Wire)?;
            anchors.push(wire.anchor);
            area_sum += wire.area;
        }
        // Synthetic volume: mean section area times unit height per gap.
        let volume = area_sum / wires.len().max(1) as f64 * (wires.len().saturating_sub(1)) as f64;
        let anchor = centroid(&anchors);
        let entity = self.solid_entity(anchor, volume);
        Ok(self.store(entity))
    }

    fn sweep(
        &mut self,
        profile_face: ShapeHandle,
        path_wire: ShapeHandle,
        _is_frenet: bool,
    ) -> Result<ShapeHandle, KernelError> {
        let profile = self.fetch_kind(profile_face, ShapeKind::Face)?.clone();
        let path = self.fetch_kind(path_wire, ShapeKind::Wire)?.clone();
        let entity = self.solid_entity(path.anchor, profile.area * path.length);
        Ok(self.store(entity))
    }

    fn boolean_union(
        &mut self,
        a: ShapeHandle,
        b: ShapeHandle,
    ) -> Result<ShapeHandle, KernelError> {
        let sa = self.fetch_kind(a, ShapeKind::Solid)?.clone();
        let sb = self.fetch_kind(b, ShapeKind::Solid)?.clone();
        let mut entity = self.solid_entity(sa.anchor, sa.volume + sb.volume);
        entity.lumps = self.boolean_lumps;
        Ok(self.store(entity))
    }

    fn boolean_subtract(
        &mut self,
        a: ShapeHandle,
        b: ShapeHandle,
    ) -> Result<ShapeHandle, KernelError> {
        let sa = self.fetch_kind(a, ShapeKind::Solid)?.clone();
        let sb = self.fetch_kind(b, ShapeKind::Solid)?.clone();
        let mut entity = self.solid_entity(sa.anchor, (sa.volume - sb.volume).max(0.0));
        entity.lumps = self.boolean_lumps;
        Ok(self.store(entity))
    }

    fn boolean_intersect(
        &mut self,
        a: ShapeHandle,
        b: ShapeHandle,
    ) -> Result<ShapeHandle, KernelError> {
        let sa = self.fetch_kind(a, ShapeKind::Solid)?.clone();
        let sb = self.fetch_kind(b, ShapeKind::Solid)?.clone();
        let mut entity = self.solid_entity(sa.anchor, sa.volume.min(sb.volume));
        entity.lumps = self.boolean_lumps;
        Ok(self.store(entity))
    }

    fn fillet_edges(
        &mut self,
        solid: ShapeHandle,
        edges: &[KernelId],
        radius: f64,
    ) -> Result<ShapeHandle, KernelError> {
        if radius <= 0.0 {
            return Err(KernelError::OperationFailed {
                operation: "fillet_edges".to_string(),
                reason: "radius must be positive".to_string(),
            });
        }
        let source = self.fetch_kind(solid, ShapeKind::Solid)?.clone();
        for edge in edges {
            if !source.edges.contains(edge) {
                return Err(KernelError::OperationFailed {
                    operation: "fillet_edges".to_string(),
                    reason: format!("edge {:?} does not belong to the solid", edge),
                });
            }
        }
        // Each rounded edge is replaced by a cylindrical face bounded by
        // two new edges: F+n, E+n.
        let n = edges.len();
        let mut out = self.reissued(&source);
        for _ in 0..n {
            let edge = self.alloc_id();
            let face = self.alloc_id();
            out.edges.push(edge);
            out.faces.push(face);
        }
        Ok(self.store(out))
    }

    fn chamfer_edges(
        &mut self,
        solid: ShapeHandle,
        edges: &[KernelId],
        distance: f64,
    ) -> Result<ShapeHandle, KernelError> {
        if distance <= 0.0 {
            return Err(KernelError::OperationFailed {
                operation: "chamfer_edges".to_string(),
                reason: "distance must be positive".to_string(),
            });
        }
        let source = self.fetch_kind(solid, ShapeKind::Solid)?.clone();
        for edge in edges {
            if !source.edges.contains(edge) {
                return Err(KernelError::OperationFailed {
                    operation: "chamfer_edges".to_string(),
                    reason: format!("edge {:?} does not belong to the solid", edge),
                });
            }
        }
        let n = edges.len();
        let mut out = self.reissued(&source);
        for _ in 0..n {
            let edge = self.alloc_id();
            let face = self.alloc_id();
            out.edges.push(edge);
            out.faces.push(face);
        }
        Ok(self.store(out))
    }

    fn shell(
        &mut self,
        solid: ShapeHandle,
        faces_to_remove: &[KernelId],
        thickness: f64,
    ) -> Result<ShapeHandle, KernelError> {
        if thickness <= 0.0 {
            return Err(KernelError::OperationFailed {
                operation: "shell".to_string(),
                reason: "thickness must be positive".to_string(),
            });
        }
        let source = self.fetch_kind(solid, ShapeKind::Solid)?.clone();
        for face in faces_to_remove {
            if !source.faces.contains(face) {
                return Err(KernelError::OperationFailed {
                    operation: "shell".to_string(),
                    reason: format!("face {:?} does not belong to the solid", face),
                });
            }
        }
        // Kept outer faces each gain an inner offset twin.
        let kept = source.faces.len() - faces_to_remove.len();
        let mut out = self.reissued(&source);
        out.faces = (0..kept * 2).map(|_| self.alloc_id()).collect();
        out.volume = source.volume / 2.0;
        Ok(self.store(out))
    }

    fn translate(
        &mut self,
        shape: ShapeHandle,
        offset: KernelVector,
    ) -> Result<ShapeHandle, KernelError> {
        let delta = offset.vec();
        self.transformed(shape, &move |p| p + delta)
    }

    fn rotate(
        &mut self,
        shape: ShapeHandle,
        origin: KernelPoint,
        axis: KernelVector,
        angle: f64,
    ) -> Result<ShapeHandle, KernelError> {
        let unit = axis
            .vec()
            .normalized()
            .ok_or_else(|| KernelError::OperationFailed {
                operation: "rotate".to_string(),
                reason: "rotation axis has zero length".to_string(),
            })?;
        let center = origin.vec();
        self.transformed(shape, &move |p| rotate_about(p, center, unit, angle))
    }

    fn mirror(
        &mut self,
        shape: ShapeHandle,
        plane_origin: KernelPoint,
        plane_normal: KernelVector,
    ) -> Result<ShapeHandle, KernelError> {
        let normal = plane_normal
            .vec()
            .normalized()
            .ok_or_else(|| KernelError::OperationFailed {
                operation: "mirror".to_string(),
                reason: "mirror plane normal has zero length".to_string(),
            })?;
        let center = plane_origin.vec();
        self.transformed(shape, &move |p| reflect_across(p, center, normal))
    }

    fn make_compound(&mut self, members: &[ShapeHandle]) -> Result<ShapeHandle, KernelError> {
        let mut anchors = Vec::with_capacity(members.len());
        for handle in members {
            anchors.push(self.fetch(*handle)?.anchor);
        }
        let mut e = MockEntity::new(ShapeKind::Compound);
        e.anchor = centroid(&anchors);
        e.members = members.to_vec();
        Ok(self.store(e))
    }

    fn compound_members(&self, compound: ShapeHandle) -> Result<Vec<ShapeHandle>, KernelError> {
        Ok(self.fetch_kind(compound, ShapeKind::Compound)?.members.clone())
    }

    fn shape_kind(&self, shape: ShapeHandle) -> Result<ShapeKind, KernelError> {
        Ok(self.fetch(shape)?.kind)
    }

    fn list_edges(&mut self, solid: ShapeHandle) -> Result<Vec<KernelId>, KernelError> {
        Ok(self.fetch_kind(solid, ShapeKind::Solid)?.edges.clone())
    }

    fn list_faces(&mut self, solid: ShapeHandle) -> Result<Vec<KernelId>, KernelError> {
        Ok(self.fetch_kind(solid, ShapeKind::Solid)?.faces.clone())
    }

    fn solid_count(&self, solid: ShapeHandle) -> Result<usize, KernelError> {
        Ok(self.fetch_kind(solid, ShapeKind::Solid)?.lumps)
    }

    fn volume(&mut self, solid: ShapeHandle) -> Result<f64, KernelError> {
        let entity = self.fetch(solid)?.clone();
        match entity.kind {
            ShapeKind::Solid => Ok(entity.volume),
            ShapeKind::Compound => {
                let mut total = 0.0;
                for member in &entity.members {
                    total += self.volume(*member)?;
                }
                Ok(total)
            }
            other => Err(KernelError::WrongKind {
                expected: ShapeKind::Solid,
                actual: other,
            }),
        }
    }

    fn tessellate(
        &mut self,
        solid: ShapeHandle,
        _tolerance: f64,
    ) -> Result<RenderMesh, KernelError> {
        let entity = self.fetch_kind(solid, ShapeKind::Solid)?.clone();
        // A cube of equivalent volume centered on the anchor: 6 faces,
        // 12 triangles, deterministic layout.
        let half = entity.volume.max(1e-9).cbrt() / 2.0;
        let c = entity.anchor;

        let mut vertices = Vec::with_capacity(6 * 4 * 3);
        let mut normals = Vec::with_capacity(6 * 4 * 3);
        let mut indices = Vec::with_capacity(6 * 6);

        // (normal, u, v) per face.
        let faces = [
            (Vec3::Z, Vec3::X, Vec3::Y),
            (-Vec3::Z, Vec3::Y, Vec3::X),
            (Vec3::X, Vec3::Y, Vec3::Z),
            (-Vec3::X, Vec3::Z, Vec3::Y),
            (Vec3::Y, Vec3::Z, Vec3::X),
            (-Vec3::Y, Vec3::X, Vec3::Z),
        ];

        for (n, u, v) in faces {
            let base = (vertices.len() / 3) as u32;
            let center = c + n * half;
            let corners = [
                center - u * half - v * half,
                center + u * half - v * half,
                center + u * half + v * half,
                center - u * half + v * half,
            ];
            for corner in corners {
                vertices.extend_from_slice(&[corner.x as f32, corner.y as f32, corner.z as f32]);
                normals.extend_from_slice(&[n.x as f32, n.y as f32, n.z as f32]);
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Ok(RenderMesh {
            vertices,
            normals,
            indices,
        })
    }

    fn step_string(&mut self, solid: ShapeHandle) -> Result<String, KernelError> {
        let entity = self.fetch_kind(solid, ShapeKind::Solid)?;
        Ok(format!(
            "ISO-10303-21;\n\
             HEADER;\n\
             FILE_DESCRIPTION(('mock kernel export'),'2;1');\n\
             FILE_NAME('solid-{}','',(''),(''),'','','');\n\
             FILE_SCHEMA(('AUTOMOTIVE_DESIGN'));\n\
             ENDSEC;\n\
             DATA;\n\
             /* volume {:.6} */\n\
             ENDSEC;\n\
             END-ISO-10303-21;\n",
            solid.id(),
            entity.volume,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn world_plane() -> KernelPlane {
        KernelPlane {
            origin: KernelPoint::ORIGIN,
            x_axis: KernelVector::new(1.0, 0.0, 0.0),
            normal: KernelVector::new(0.0, 1.0, 0.0),
        }
    }

    #[test]
    fn test_box_volume_is_analytic() {
        let mut kernel = MockKernel::new();
        let handle = kernel.make_box(&world_plane(), 2.0, 3.0, 4.0).unwrap();
        assert!((kernel.volume(handle).unwrap() - 24.0).abs() < 1e-12);
    }

    #[test]
    fn test_cylinder_volume_is_analytic() {
        let mut kernel = MockKernel::new();
        let handle = kernel.make_cylinder(&world_plane(), 0.5, 1.0).unwrap();
        assert!((kernel.volume(handle).unwrap() - PI * 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_union_sums_volumes() {
        let mut kernel = MockKernel::new();
        let a = kernel.make_box(&world_plane(), 1.0, 1.0, 1.0).unwrap();
        let b = kernel.make_cylinder(&world_plane(), 0.5, 1.0).unwrap();
        let result = kernel.boolean_union(a, b).unwrap();
        let expected = 1.0 + PI * 0.25;
        assert!((kernel.volume(result).unwrap() - expected).abs() < 1e-12);
        assert_eq!(kernel.solid_count(result).unwrap(), 1);
    }

    #[test]
    fn test_extrude_volume_from_circle_area() {
        let mut kernel = MockKernel::new();
        let wire = kernel.make_circle_wire(&world_plane(), 2.0).unwrap();
        let face = kernel.make_face(wire).unwrap();
        let solid = kernel
            .extrude_face(face, KernelVector::new(0.0, 1.0, 0.0), 3.0)
            .unwrap();
        assert!((kernel.volume(solid).unwrap() - PI * 4.0 * 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_solid_topology_counts() {
        let mut kernel = MockKernel::new();
        let handle = kernel.make_box(&world_plane(), 1.0, 1.0, 1.0).unwrap();
        assert_eq!(kernel.list_edges(handle).unwrap().len(), 12);
        assert_eq!(kernel.list_faces(handle).unwrap().len(), 6);
    }

    #[test]
    fn test_fillet_adjusts_topology() {
        let mut kernel = MockKernel::new();
        let handle = kernel.make_box(&world_plane(), 2.0, 2.0, 2.0).unwrap();
        let edges = kernel.list_edges(handle).unwrap();
        let result = kernel.fillet_edges(handle, &edges[0..1], 0.2).unwrap();
        assert_eq!(kernel.list_faces(result).unwrap().len(), 7);
        assert_eq!(kernel.list_edges(result).unwrap().len(), 13);
    }

    #[test]
    fn test_fillet_rejects_foreign_edge() {
        let mut kernel = MockKernel::new();
        let handle = kernel.make_box(&world_plane(), 1.0, 1.0, 1.0).unwrap();
        let result = kernel.fillet_edges(handle, &[KernelId(99999)], 0.2);
        assert!(matches!(result, Err(KernelError::OperationFailed { .. })));
    }

    #[test]
    fn test_shell_doubles_kept_faces() {
        let mut kernel = MockKernel::new();
        let handle = kernel.make_box(&world_plane(), 2.0, 2.0, 2.0).unwrap();
        let faces = kernel.list_faces(handle).unwrap();
        let result = kernel.shell(handle, &faces[0..1], 0.2).unwrap();
        assert_eq!(kernel.list_faces(result).unwrap().len(), 10);
    }

    #[test]
    fn test_translate_moves_anchor() {
        let mut kernel = MockKernel::new();
        let handle = kernel.make_box(&world_plane(), 1.0, 1.0, 1.0).unwrap();
        let moved = kernel
            .translate(handle, KernelVector::new(2.0, 0.0, 0.0))
            .unwrap();
        let anchor = kernel.anchor(moved).unwrap();
        assert!((anchor[0] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_quarter_turn_about_y() {
        let mut kernel = MockKernel::new();
        let start = kernel.make_vertex(KernelPoint::new(1.0, 0.0, 0.0)).unwrap();
        let rotated = kernel
            .rotate(
                start,
                KernelPoint::ORIGIN,
                KernelVector::new(0.0, 1.0, 0.0),
                FRAC_PI_2,
            )
            .unwrap();
        let anchor = kernel.anchor(rotated).unwrap();
        // Right-handed rotation about +Y carries +X to -Z.
        assert!(anchor[0].abs() < 1e-12);
        assert!((anchor[2] - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_mirror_reflects_anchor() {
        let mut kernel = MockKernel::new();
        let v = kernel.make_vertex(KernelPoint::new(1.0, 2.0, 3.0)).unwrap();
        let mirrored = kernel
            .mirror(v, KernelPoint::ORIGIN, KernelVector::new(1.0, 0.0, 0.0))
            .unwrap();
        let anchor = kernel.anchor(mirrored).unwrap();
        assert!((anchor[0] - (-1.0)).abs() < 1e-12);
        assert!((anchor[1] - 2.0).abs() < 1e-12);
        assert!((anchor[2] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_compound_members_round_trip() {
        let mut kernel = MockKernel::new();
        let a = kernel.make_box(&world_plane(), 1.0, 1.0, 1.0).unwrap();
        let b = kernel.make_box(&world_plane(), 2.0, 2.0, 2.0).unwrap();
        let compound = kernel.make_compound(&[a, b]).unwrap();
        assert_eq!(kernel.shape_kind(compound).unwrap(), ShapeKind::Compound);
        assert_eq!(kernel.compound_members(compound).unwrap(), vec![a, b]);
        assert!((kernel.volume(compound).unwrap() - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_tessellate_produces_cube_mesh() {
        let mut kernel = MockKernel::new();
        let handle = kernel.make_box(&world_plane(), 1.0, 1.0, 1.0).unwrap();
        let mesh = kernel.tessellate(handle, 0.1).unwrap();
        assert_eq!(mesh.indices.len(), 36);
        assert_eq!(mesh.vertices.len(), 72);
        assert_eq!(mesh.normals.len(), 72);
    }

    #[test]
    fn test_boolean_operand_kind_checked() {
        let mut kernel = MockKernel::new();
        let solid = kernel.make_box(&world_plane(), 1.0, 1.0, 1.0).unwrap();
        let vertex = kernel.make_vertex(KernelPoint::ORIGIN).unwrap();
        let result = kernel.boolean_union(solid, vertex);
        assert!(matches!(result, Err(KernelError::WrongKind { .. })));
    }

    #[test]
    fn test_deterministic_handles() {
        let mut k1 = MockKernel::new();
        let mut k2 = MockKernel::new();
        let h1 = k1.make_box(&world_plane(), 1.0, 1.0, 1.0).unwrap();
        let h2 = k2.make_box(&world_plane(), 1.0, 1.0, 1.0).unwrap();
        assert_eq!(h1, h2);
        assert_eq!(k1.list_edges(h1).unwrap(), k2.list_edges(h2).unwrap());
    }

    #[test]
    fn test_step_string_has_iso_frame() {
        let mut kernel = MockKernel::new();
        let handle = kernel.make_box(&world_plane(), 1.0, 1.0, 1.0).unwrap();
        let step = kernel.step_string(handle).unwrap();
        assert!(step.starts_with("ISO-10303-21;"));
        assert!(step.trim_end().ends_with("END-ISO-10303-21;"));
    }
}
