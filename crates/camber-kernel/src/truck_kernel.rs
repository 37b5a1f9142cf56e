//! TruckKernel — real geometry kernel wrapping truck's API.
//!
//! Everything truck's sweep-based modeling supports is implemented here;
//! fillet/chamfer/shell, loft and path sweeps are not provided by the
//! truck stack and return `KernelError::NotSupported`.

use std::collections::HashMap;
use std::f64::consts::PI;

use camber_types::{KernelPlane, KernelPoint, KernelVector};

// Import truck types selectively to avoid shadowing std::result::Result
use truck_modeling::builder;
use truck_modeling::topology::{Edge, Face, Solid, Vertex, Wire};
use truck_modeling::{InnerSpace, Matrix4, Point3, Rad, Vector3};

use crate::tessellation;
use crate::traits::Kernel;
use crate::types::*;

#[derive(Debug, Clone)]
enum TruckEntity {
    Vertex(Vertex),
    Edge(Edge),
    Wire(Wire),
    Face(Face),
    Solid(Solid),
    Compound(Vec<ShapeHandle>),
}

impl TruckEntity {
    fn kind(&self) -> ShapeKind {
        match self {
            TruckEntity::Vertex(_) => ShapeKind::Vertex,
            TruckEntity::Edge(_) => ShapeKind::Edge,
            TruckEntity::Wire(_) => ShapeKind::Wire,
            TruckEntity::Face(_) => ShapeKind::Face,
            TruckEntity::Solid(_) => ShapeKind::Solid,
            TruckEntity::Compound(_) => ShapeKind::Compound,
        }
    }
}

fn point3(p: KernelPoint) -> Point3 {
    let v = p.vec();
    Point3::new(v.x, v.y, v.z)
}

fn vector3(v: KernelVector) -> Vector3 {
    let v = v.vec();
    Vector3::new(v.x, v.y, v.z)
}

/// Real geometry kernel backed by the truck B-rep stack.
pub struct TruckKernel {
    next_handle: u64,
    next_id: u64,
    entities: HashMap<u64, TruckEntity>,
    /// Cached (edges, faces) id lists per solid handle.
    topo_cache: HashMap<u64, (Vec<KernelId>, Vec<KernelId>)>,
}

impl TruckKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            next_id: 1,
            entities: HashMap::new(),
            topo_cache: HashMap::new(),
        }
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

    fn store(&mut self, entity: TruckEntity) -> ShapeHandle {
        let handle = self.alloc_handle();
        self.entities.insert(handle.id(), entity);
        handle
    }

    fn fetch(&self, handle: ShapeHandle) -> Result<&TruckEntity, KernelError> {
        self.entities
            .get(&handle.id())
            .ok_or(KernelError::EntityNotFound { handle })
    }

    fn fetch_solid(&self, handle: ShapeHandle) -> Result<&Solid, KernelError> {
        match self.fetch(handle)? {
            TruckEntity::Solid(s) => Ok(s),
            other => Err(KernelError::WrongKind {
                expected: ShapeKind::Solid,
                actual: other.kind(),
            }),
        }
    }

    fn fetch_wire(&self, handle: ShapeHandle) -> Result<&Wire, KernelError> {
        match self.fetch(handle)? {
            TruckEntity::Wire(w) => Ok(w),
            other => Err(KernelError::WrongKind {
                expected: ShapeKind::Wire,
                actual: other.kind(),
            }),
        }
    }

    fn fetch_face(&self, handle: ShapeHandle) -> Result<&Face, KernelError> {
        match self.fetch(handle)? {
            TruckEntity::Face(f) => Ok(f),
            other => Err(KernelError::WrongKind {
                expected: ShapeKind::Face,
                actual: other.kind(),
            }),
        }
    }

    fn ensure_topo(&mut self, handle: ShapeHandle) -> Result<(), KernelError> {
        if self.topo_cache.contains_key(&handle.id()) {
            return Ok(());
        }
        let solid = self.fetch_solid(handle)?.clone();

        let mut seen = std::collections::HashSet::new();
        let mut edge_count = 0usize;
        let mut face_count = 0usize;
        for shell in solid.boundaries().iter() {
            for edge in shell.edge_iter() {
                // Each edge appears in two faces; count it once.
                if seen.insert(edge.id()) {
                    edge_count += 1;
                }
            }
            face_count += shell.face_iter().count();
        }

        let edges = (0..edge_count).map(|_| self.alloc_id()).collect();
        let faces = (0..face_count).map(|_| self.alloc_id()).collect();
        self.topo_cache.insert(handle.id(), (edges, faces));
        Ok(())
    }

    fn translated_entity(entity: &TruckEntity, delta: Vector3) -> TruckEntity {
        match entity {
            TruckEntity::Vertex(v) => TruckEntity::Vertex(builder::translated(v, delta)),
            TruckEntity::Edge(e) => TruckEntity::Edge(builder::translated(e, delta)),
            TruckEntity::Wire(w) => TruckEntity::Wire(builder::translated(w, delta)),
            TruckEntity::Face(f) => TruckEntity::Face(builder::translated(f, delta)),
            TruckEntity::Solid(s) => TruckEntity::Solid(builder::translated(s, delta)),
            TruckEntity::Compound(_) => unreachable!("compounds are transformed member-wise"),
        }
    }

    fn rotated_entity(
        entity: &TruckEntity,
        origin: Point3,
        axis: Vector3,
        angle: f64,
    ) -> TruckEntity {
        let angle = Rad(angle);
        match entity {
            TruckEntity::Vertex(v) => TruckEntity::Vertex(builder::rotated(v, origin, axis, angle)),
            TruckEntity::Edge(e) => TruckEntity::Edge(builder::rotated(e, origin, axis, angle)),
            TruckEntity::Wire(w) => TruckEntity::Wire(builder::rotated(w, origin, axis, angle)),
            TruckEntity::Face(f) => TruckEntity::Face(builder::rotated(f, origin, axis, angle)),
            TruckEntity::Solid(s) => TruckEntity::Solid(builder::rotated(s, origin, axis, angle)),
            TruckEntity::Compound(_) => unreachable!("compounds are transformed member-wise"),
        }
    }

    fn transformed_entity(entity: &TruckEntity, mat: Matrix4) -> TruckEntity {
        match entity {
            TruckEntity::Vertex(v) => TruckEntity::Vertex(builder::transformed(v, mat)),
            TruckEntity::Edge(e) => TruckEntity::Edge(builder::transformed(e, mat)),
            TruckEntity::Wire(w) => TruckEntity::Wire(builder::transformed(w, mat)),
            TruckEntity::Face(f) => TruckEntity::Face(builder::transformed(f, mat)),
            TruckEntity::Solid(s) => TruckEntity::Solid(builder::transformed(s, mat)),
            TruckEntity::Compound(_) => unreachable!("compounds are transformed member-wise"),
        }
    }
}

impl Default for TruckKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for TruckKernel {
    fn make_vertex(&mut self, point: KernelPoint) -> Result<ShapeHandle, KernelError> {
        let v = builder::vertex(point3(point));
        Ok(self.store(TruckEntity::Vertex(v)))
    }

    fn make_line(
        &mut self,
        start: KernelPoint,
        end: KernelPoint,
    ) -> Result<ShapeHandle, KernelError> {
        let v0 = builder::vertex(point3(start));
        let v1 = builder::vertex(point3(end));
        let edge = builder::line(&v0, &v1);
        Ok(self.store(TruckEntity::Edge(edge)))
    }

    fn make_arc(
        &mut self,
        start: KernelPoint,
        transit: KernelPoint,
        end: KernelPoint,
    ) -> Result<ShapeHandle, KernelError> {
        let v0 = builder::vertex(point3(start));
        let v1 = builder::vertex(point3(end));
        let edge = builder::circle_arc(&v0, &v1, point3(transit));
        Ok(self.store(TruckEntity::Edge(edge)))
    }

    fn make_spline_edge(&mut self, points: &[KernelPoint]) -> Result<ShapeHandle, KernelError> {
        if points.len() < 2 {
            return Err(KernelError::OperationFailed {
                operation: "make_spline_edge".to_string(),
                reason: "spline needs at least 2 control points".to_string(),
            });
        }
        let v0 = builder::vertex(point3(points[0]));
        let v1 = builder::vertex(point3(points[points.len() - 1]));
        let interior: Vec<Point3> = points[1..points.len() - 1]
            .iter()
            .map(|p| point3(*p))
            .collect();
        let edge = builder::bezier(&v0, &v1, interior);
        Ok(self.store(TruckEntity::Edge(edge)))
    }

    fn make_wire(&mut self, edges: &[ShapeHandle]) -> Result<ShapeHandle, KernelError> {
        let mut wire_edges: Vec<Edge> = Vec::with_capacity(edges.len());
        for handle in edges {
            match self.fetch(*handle)? {
                TruckEntity::Edge(e) => wire_edges.push(e.clone()),
                other => {
                    return Err(KernelError::WrongKind {
                        expected: ShapeKind::Edge,
                        actual: other.kind(),
                    })
                }
            }
        }
        let wire = Wire::from_iter(wire_edges);
        Ok(self.store(TruckEntity::Wire(wire)))
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
        // Shared vertices so consecutive edges glue into a valid wire.
        let vertices: Vec<Vertex> = points.iter().map(|p| builder::vertex(point3(*p))).collect();
        let n = vertices.len();
        let mut edges: Vec<Edge> = Vec::new();
        let segments = if closed { n } else { n - 1 };
        for i in 0..segments {
            let j = (i + 1) % n;
            edges.push(builder::line(&vertices[i], &vertices[j]));
        }
        let wire = Wire::from_iter(edges);
        Ok(self.store(TruckEntity::Wire(wire)))
    }

    fn make_circle_wire(
        &mut self,
        plane: &KernelPlane,
        radius: f64,
    ) -> Result<ShapeHandle, KernelError> {
        let origin = point3(plane.origin);
        let x_axis = vector3(plane.x_axis).normalize();
        let normal = vector3(plane.normal).normalize();

        let start = builder::vertex(origin + x_axis * radius);
        let wire = builder::rsweep(&start, origin, normal, Rad(2.0 * PI));
        Ok(self.store(TruckEntity::Wire(wire)))
    }

    fn make_face(&mut self, wire: ShapeHandle) -> Result<ShapeHandle, KernelError> {
        let wire = self.fetch_wire(wire)?.clone();
        let face =
            builder::try_attach_plane(&[wire]).map_err(|e| KernelError::OperationFailed {
                operation: "make_face".to_string(),
                reason: format!("failed to attach plane: {}", e),
            })?;
        Ok(self.store(TruckEntity::Face(face)))
    }

    fn make_box(
        &mut self,
        plane: &KernelPlane,
        width: f64,
        height: f64,
        depth: f64,
    ) -> Result<ShapeHandle, KernelError> {
        let origin = point3(plane.origin);
        let x_axis = vector3(plane.x_axis).normalize();
        let normal = vector3(plane.normal).normalize();
        let y_axis = normal.cross(x_axis);

        // Centered on the plane origin; built by successive sweeps like
        // every other truck primitive.
        let corner =
            origin - x_axis * (width / 2.0) - y_axis * (height / 2.0) - normal * (depth / 2.0);
        let v = builder::vertex(corner);
        let edge = builder::tsweep(&v, x_axis * width);
        let face = builder::tsweep(&edge, y_axis * height);
        let solid = builder::tsweep(&face, normal * depth);
        Ok(self.store(TruckEntity::Solid(solid)))
    }

    fn make_cylinder(
        &mut self,
        plane: &KernelPlane,
        radius: f64,
        height: f64,
    ) -> Result<ShapeHandle, KernelError> {
        let origin = point3(plane.origin);
        let x_axis = vector3(plane.x_axis).normalize();
        let normal = vector3(plane.normal).normalize();

        let base_center = origin - normal * (height / 2.0);
        let start = builder::vertex(base_center + x_axis * radius);
        let wire = builder::rsweep(&start, base_center, normal, Rad(2.0 * PI));
        let face =
            builder::try_attach_plane(&[wire]).map_err(|e| KernelError::OperationFailed {
                operation: "make_cylinder".to_string(),
                reason: format!("failed to create circular face: {}", e),
            })?;
        let solid = builder::tsweep(&face, normal * height);
        Ok(self.store(TruckEntity::Solid(solid)))
    }

    fn make_sphere(
        &mut self,
        center: KernelPoint,
        radius: f64,
    ) -> Result<ShapeHandle, KernelError> {
        // Semicircle arc in the XZ plane closed with a diameter line,
        // revolved a full turn around Z.
        let v_right = builder::vertex(Point3::new(radius, 0.0, 0.0));
        let arc_wire = builder::rsweep(
            &v_right,
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Rad(PI),
        );

        let v_left = builder::vertex(Point3::new(-radius, 0.0, 0.0));
        let line_edge: Edge = builder::tsweep(&v_left, Vector3::new(2.0 * radius, 0.0, 0.0));

        let mut edges: Vec<Edge> = Vec::new();
        for edge in arc_wire.edge_iter() {
            edges.push(edge.clone());
        }
        edges.push(line_edge);
        let closed_wire = Wire::from_iter(edges);

        let face = builder::try_attach_plane(&[closed_wire]).map_err(|e| {
            KernelError::OperationFailed {
                operation: "make_sphere".to_string(),
                reason: format!("failed to create semicircle face: {}", e),
            }
        })?;
        let solid = builder::rsweep(
            &face,
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Rad(2.0 * PI),
        );
        let c = point3(center);
        let solid = builder::translated(&solid, Vector3::new(c.x, c.y, c.z));
        Ok(self.store(TruckEntity::Solid(solid)))
    }

    fn extrude_face(
        &mut self,
        face: ShapeHandle,
        direction: KernelVector,
        distance: f64,
    ) -> Result<ShapeHandle, KernelError> {
        let truck_face = self.fetch_face(face)?.clone();
        let dir = vector3(direction);
        if dir.magnitude() < 1e-12 {
            return Err(KernelError::OperationFailed {
                operation: "extrude_face".to_string(),
                reason: "extrude direction has zero length".to_string(),
            });
        }
        let solid = builder::tsweep(&truck_face, dir.normalize() * distance);
        Ok(self.store(TruckEntity::Solid(solid)))
    }

    fn revolve_face(
        &mut self,
        face: ShapeHandle,
        axis_origin: KernelPoint,
        axis_direction: KernelVector,
        angle: f64,
    ) -> Result<ShapeHandle, KernelError> {
        let truck_face = self.fetch_face(face)?.clone();
        let axis = vector3(axis_direction);
        if axis.magnitude() < 1e-12 {
            return Err(KernelError::OperationFailed {
                operation: "revolve_face".to_string(),
                reason: "revolve axis has zero length".to_string(),
            });
        }
        let solid = builder::rsweep(
            &truck_face,
            point3(axis_origin),
            axis.normalize(),
            Rad(angle),
        );
        Ok(self.store(TruckEntity::Solid(solid)))
    }

    fn loft(&mut self, _wires: &[ShapeHandle], _ruled: bool) -> Result<ShapeHandle, KernelError> {
        Err(KernelError::NotSupported {
            operation: "loft".to_string(),
        })
    }

    fn sweep(
        &mut self,
        _profile_face: ShapeHandle,
        _path_wire: ShapeHandle,
        _is_frenet: bool,
    ) -> Result<ShapeHandle, KernelError> {
        Err(KernelError::NotSupported {
            operation: "sweep".to_string(),
        })
    }

    fn boolean_union(
        &mut self,
        a: ShapeHandle,
        b: ShapeHandle,
    ) -> Result<ShapeHandle, KernelError> {
        let solid_a = self.fetch_solid(a)?.clone();
        let solid_b = self.fetch_solid(b)?.clone();
        let result = truck_shapeops::or(&solid_a, &solid_b, 0.05).ok_or_else(|| {
            KernelError::OperationFailed {
                operation: "boolean_union".to_string(),
                reason: "truck or() returned None".to_string(),
            }
        })?;
        Ok(self.store(TruckEntity::Solid(result)))
    }

    fn boolean_subtract(
        &mut self,
        a: ShapeHandle,
        b: ShapeHandle,
    ) -> Result<ShapeHandle, KernelError> {
        let solid_a = self.fetch_solid(a)?.clone();
        let mut solid_b = self.fetch_solid(b)?.clone();

        // Subtraction = A ∩ ¬B. not() mutates in place.
        solid_b.not();
        let result = truck_shapeops::and(&solid_a, &solid_b, 0.05).ok_or_else(|| {
            KernelError::OperationFailed {
                operation: "boolean_subtract".to_string(),
                reason: "truck and() returned None for subtraction".to_string(),
            }
        })?;
        Ok(self.store(TruckEntity::Solid(result)))
    }

    fn boolean_intersect(
        &mut self,
        a: ShapeHandle,
        b: ShapeHandle,
    ) -> Result<ShapeHandle, KernelError> {
        let solid_a = self.fetch_solid(a)?.clone();
        let solid_b = self.fetch_solid(b)?.clone();
        let result = truck_shapeops::and(&solid_a, &solid_b, 0.05).ok_or_else(|| {
            KernelError::OperationFailed {
                operation: "boolean_intersect".to_string(),
                reason: "truck and() returned None".to_string(),
            }
        })?;
        Ok(self.store(TruckEntity::Solid(result)))
    }

    fn fillet_edges(
        &mut self,
        _solid: ShapeHandle,
        _edges: &[KernelId],
        _radius: f64,
    ) -> Result<ShapeHandle, KernelError> {
        Err(KernelError::NotSupported {
            operation: "fillet_edges".to_string(),
        })
    }

    fn chamfer_edges(
        &mut self,
        _solid: ShapeHandle,
        _edges: &[KernelId],
        _distance: f64,
    ) -> Result<ShapeHandle, KernelError> {
        Err(KernelError::NotSupported {
            operation: "chamfer_edges".to_string(),
        })
    }

    fn shell(
        &mut self,
        _solid: ShapeHandle,
        _faces_to_remove: &[KernelId],
        _thickness: f64,
    ) -> Result<ShapeHandle, KernelError> {
        Err(KernelError::NotSupported {
            operation: "shell".to_string(),
        })
    }

    fn translate(
        &mut self,
        shape: ShapeHandle,
        offset: KernelVector,
    ) -> Result<ShapeHandle, KernelError> {
        let entity = self.fetch(shape)?.clone();
        if let TruckEntity::Compound(members) = &entity {
            let mut moved = Vec::with_capacity(members.len());
            for member in members {
                moved.push(self.translate(*member, offset)?);
            }
            return Ok(self.store(TruckEntity::Compound(moved)));
        }
        let moved = Self::translated_entity(&entity, vector3(offset));
        Ok(self.store(moved))
    }

    fn rotate(
        &mut self,
        shape: ShapeHandle,
        origin: KernelPoint,
        axis: KernelVector,
        angle: f64,
    ) -> Result<ShapeHandle, KernelError> {
        let unit = vector3(axis);
        if unit.magnitude() < 1e-12 {
            return Err(KernelError::OperationFailed {
                operation: "rotate".to_string(),
                reason: "rotation axis has zero length".to_string(),
            });
        }
        let entity = self.fetch(shape)?.clone();
        if let TruckEntity::Compound(members) = &entity {
            let mut rotated = Vec::with_capacity(members.len());
            for member in members {
                rotated.push(self.rotate(*member, origin, axis, angle)?);
            }
            return Ok(self.store(TruckEntity::Compound(rotated)));
        }
        let rotated = Self::rotated_entity(&entity, point3(origin), unit.normalize(), angle);
        Ok(self.store(rotated))
    }

    fn mirror(
        &mut self,
        shape: ShapeHandle,
        plane_origin: KernelPoint,
        plane_normal: KernelVector,
    ) -> Result<ShapeHandle, KernelError> {
        let n = vector3(plane_normal);
        if n.magnitude() < 1e-12 {
            return Err(KernelError::OperationFailed {
                operation: "mirror".to_string(),
                reason: "mirror plane normal has zero length".to_string(),
            });
        }
        let n = n.normalize();
        let o = point3(plane_origin);

        // Householder reflection R = I - 2nnᵀ with translation so the
        // plane through `o` is fixed: x' = R(x - o) + o.
        let (a, b, c) = (n.x, n.y, n.z);
        let r00 = 1.0 - 2.0 * a * a;
        let r11 = 1.0 - 2.0 * b * b;
        let r22 = 1.0 - 2.0 * c * c;
        let r01 = -2.0 * a * b;
        let r02 = -2.0 * a * c;
        let r12 = -2.0 * b * c;
        let tx = o.x - (r00 * o.x + r01 * o.y + r02 * o.z);
        let ty = o.y - (r01 * o.x + r11 * o.y + r12 * o.z);
        let tz = o.z - (r02 * o.x + r12 * o.y + r22 * o.z);

        #[rustfmt::skip]
        let mat = Matrix4::new(
            r00, r01, r02, 0.0,
            r01, r11, r12, 0.0,
            r02, r12, r22, 0.0,
            tx,  ty,  tz,  1.0,
        );

        let entity = self.fetch(shape)?.clone();
        if let TruckEntity::Compound(members) = &entity {
            let mut mirrored = Vec::with_capacity(members.len());
            for member in members {
                mirrored.push(self.mirror(*member, plane_origin, plane_normal)?);
            }
            return Ok(self.store(TruckEntity::Compound(mirrored)));
        }
        let mirrored = Self::transformed_entity(&entity, mat);
        Ok(self.store(mirrored))
    }

    fn make_compound(&mut self, members: &[ShapeHandle]) -> Result<ShapeHandle, KernelError> {
        for handle in members {
            self.fetch(*handle)?;
        }
        Ok(self.store(TruckEntity::Compound(members.to_vec())))
    }

    fn compound_members(&self, compound: ShapeHandle) -> Result<Vec<ShapeHandle>, KernelError> {
        match self.fetch(compound)? {
            TruckEntity::Compound(members) => Ok(members.clone()),
            other => Err(KernelError::WrongKind {
                expected: ShapeKind::Compound,
                actual: other.kind(),
            }),
        }
    }

    fn shape_kind(&self, shape: ShapeHandle) -> Result<ShapeKind, KernelError> {
        Ok(self.fetch(shape)?.kind())
    }

    fn list_edges(&mut self, solid: ShapeHandle) -> Result<Vec<KernelId>, KernelError> {
        self.ensure_topo(solid)?;
        Ok(self.topo_cache[&solid.id()].0.clone())
    }

    fn list_faces(&mut self, solid: ShapeHandle) -> Result<Vec<KernelId>, KernelError> {
        self.ensure_topo(solid)?;
        Ok(self.topo_cache[&solid.id()].1.clone())
    }

    fn solid_count(&self, solid: ShapeHandle) -> Result<usize, KernelError> {
        // Boundary shells as a proxy for disjoint lumps.
        Ok(self.fetch_solid(solid)?.boundaries().len())
    }

    fn volume(&mut self, solid: ShapeHandle) -> Result<f64, KernelError> {
        let mesh = self.tessellate(solid, 0.01)?;
        Ok(tessellation::mesh_volume(&mesh))
    }

    fn tessellate(
        &mut self,
        solid: ShapeHandle,
        tolerance: f64,
    ) -> Result<RenderMesh, KernelError> {
        let truck_solid = self.fetch_solid(solid)?;
        tessellation::tessellate_solid(truck_solid, tolerance)
    }

    fn step_string(&mut self, solid: ShapeHandle) -> Result<String, KernelError> {
        use truck_stepio::out::{CompleteStepDisplay, StepHeaderDescriptor, StepModel};

        let truck_solid = self.fetch_solid(solid)?;
        let boundaries = truck_solid.boundaries();
        let shell = boundaries.first().ok_or_else(|| KernelError::ExportFailed {
            reason: "solid has no boundary shell".to_string(),
        })?;
        let compressed = shell.compress();
        let step_string = CompleteStepDisplay::new(
            StepModel::from(&compressed),
            StepHeaderDescriptor {
                organization_system: "camber".to_owned(),
                ..Default::default()
            },
        )
        .to_string();
        Ok(step_string)
    }
}
