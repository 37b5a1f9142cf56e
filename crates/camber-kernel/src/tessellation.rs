//! Tessellation wrapper over truck-meshalgo.

use truck_meshalgo::prelude::*;
use truck_meshalgo::tessellation::{MeshableShape, MeshedShape};

use crate::types::{KernelError, RenderMesh};

type TruckSolid = truck_modeling::Solid;

/// Tessellate a truck Solid into a flat triangle mesh.
pub fn tessellate_solid(
    solid: &TruckSolid,
    tolerance: f64,
) -> std::result::Result<RenderMesh, KernelError> {
    let meshed = solid.triangulation(tolerance);
    let mesh = meshed.to_polygon();

    let positions = mesh.positions();
    let normals = mesh.normals();
    let tri_faces = mesh.tri_faces();

    if tri_faces.is_empty() {
        return Err(KernelError::TessellationFailed {
            reason: "triangulation produced no triangles".to_string(),
        });
    }

    let mut vertices = Vec::with_capacity(positions.len() * 3);
    let mut norms = Vec::with_capacity(normals.len() * 3);
    let mut indices = Vec::new();

    for pos in positions {
        vertices.push(pos[0] as f32);
        vertices.push(pos[1] as f32);
        vertices.push(pos[2] as f32);
    }

    if normals.is_empty() {
        // Meshes without stored normals still need a parallel array.
        norms.resize(vertices.len(), 0.0);
    } else {
        for norm in normals {
            norms.push(norm[0] as f32);
            norms.push(norm[1] as f32);
            norms.push(norm[2] as f32);
        }
    }

    for tri in tri_faces {
        for v in tri.iter() {
            indices.push(v.pos as u32);
        }
    }

    Ok(RenderMesh {
        vertices,
        normals: norms,
        indices,
    })
}

/// Signed volume of a closed, consistently oriented triangle mesh via the
/// divergence theorem.
pub fn mesh_volume(mesh: &RenderMesh) -> f64 {
    let mut total = 0.0;
    for t in 0..mesh.triangle_count() {
        let i0 = mesh.indices[t * 3] as usize;
        let i1 = mesh.indices[t * 3 + 1] as usize;
        let i2 = mesh.indices[t * 3 + 2] as usize;

        let v0 = [
            mesh.vertices[i0 * 3] as f64,
            mesh.vertices[i0 * 3 + 1] as f64,
            mesh.vertices[i0 * 3 + 2] as f64,
        ];
        let v1 = [
            mesh.vertices[i1 * 3] as f64,
            mesh.vertices[i1 * 3 + 1] as f64,
            mesh.vertices[i1 * 3 + 2] as f64,
        ];
        let v2 = [
            mesh.vertices[i2 * 3] as f64,
            mesh.vertices[i2 * 3 + 1] as f64,
            mesh.vertices[i2 * 3 + 2] as f64,
        ];

        // v0 · (v1 × v2)
        let cx = v1[1] * v2[2] - v1[2] * v2[1];
        let cy = v1[2] * v2[0] - v1[0] * v2[2];
        let cz = v1[0] * v2[1] - v1[1] * v2[0];
        total += v0[0] * cx + v0[1] * cy + v0[2] * cz;
    }
    total.abs() / 6.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_volume_unit_cube() {
        // Hand-built unit cube mesh centered at the origin.
        let h = 0.5f32;
        let corners: [[f32; 3]; 8] = [
            [-h, -h, -h],
            [h, -h, -h],
            [h, h, -h],
            [-h, h, -h],
            [-h, -h, h],
            [h, -h, h],
            [h, h, h],
            [-h, h, h],
        ];
        let mut vertices = Vec::new();
        for c in corners {
            vertices.extend_from_slice(&c);
        }
        // Outward-oriented quads split into triangles.
        let quads: [[u32; 4]; 6] = [
            [0, 3, 2, 1], // bottom
            [4, 5, 6, 7], // top
            [0, 1, 5, 4], // front
            [2, 3, 7, 6], // back
            [0, 4, 7, 3], // left
            [1, 2, 6, 5], // right
        ];
        let mut indices = Vec::new();
        for q in quads {
            indices.extend_from_slice(&[q[0], q[1], q[2], q[0], q[2], q[3]]);
        }
        let mesh = RenderMesh {
            normals: vec![0.0; vertices.len()],
            vertices,
            indices,
        };
        assert!((mesh_volume(&mesh) - 1.0).abs() < 1e-6);
    }
}
