//! Binary STL export.

use std::fs;
use std::path::Path;

use camber_kernel::{Kernel, RenderMesh, ShapeKind};
use camber_ops::{compound_members, tessellate, OpError, Session, Shape};
use tracing::{debug, warn};

use crate::types::ExportError;

/// STL export options.
#[derive(Debug, Clone, Copy)]
pub struct StlOptions {
    /// Tessellation tolerance handed to the kernel.
    pub tolerance: f64,
}

impl Default for StlOptions {
    fn default() -> Self {
        Self { tolerance: 0.1 }
    }
}

/// Convert a `RenderMesh` to binary STL format.
///
/// Binary STL layout:
/// - 80 bytes: header
/// - 4 bytes: u32 LE triangle count
/// - Per triangle (50 bytes each):
///   - 12 bytes: normal vector (3 × f32 LE)
///   - 36 bytes: 3 vertices (3 × 3 × f32 LE)
///   - 2 bytes: attribute byte count (0u16)
pub fn render_mesh_to_stl(meshes: &[RenderMesh]) -> Vec<u8> {
    let tri_count: usize = meshes.iter().map(|m| m.triangle_count()).sum();
    let size = 84 + tri_count * 50;
    let mut buf = Vec::with_capacity(size);

    // 80-byte header
    let header = b"Camber STL Export";
    buf.extend_from_slice(header);
    buf.extend_from_slice(&[0u8; 80 - 17]); // zero-pad to 80 bytes

    // Triangle count (u32 LE)
    buf.extend_from_slice(&(tri_count as u32).to_le_bytes());

    for mesh in meshes {
        for t in 0..mesh.triangle_count() {
            let i0 = mesh.indices[t * 3] as usize;
            let i1 = mesh.indices[t * 3 + 1] as usize;
            let i2 = mesh.indices[t * 3 + 2] as usize;

            let v0 = [
                mesh.vertices[i0 * 3],
                mesh.vertices[i0 * 3 + 1],
                mesh.vertices[i0 * 3 + 2],
            ];
            let v1 = [
                mesh.vertices[i1 * 3],
                mesh.vertices[i1 * 3 + 1],
                mesh.vertices[i1 * 3 + 2],
            ];
            let v2 = [
                mesh.vertices[i2 * 3],
                mesh.vertices[i2 * 3 + 1],
                mesh.vertices[i2 * 3 + 2],
            ];

            // Recompute the facet normal from the winding; stored vertex
            // normals are interpolated and unsuitable for flat facets.
            let e1 = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
            let e2 = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];
            let nx = e1[1] * e2[2] - e1[2] * e2[1];
            let ny = e1[2] * e2[0] - e1[0] * e2[2];
            let nz = e1[0] * e2[1] - e1[1] * e2[0];
            let len = (nx * nx + ny * ny + nz * nz).sqrt();
            let normal = if len > 1e-12 {
                [nx / len, ny / len, nz / len]
            } else {
                [0.0, 0.0, 0.0]
            };

            for c in &normal {
                buf.extend_from_slice(&c.to_le_bytes());
            }
            for v in &[v0, v1, v2] {
                for c in v {
                    buf.extend_from_slice(&c.to_le_bytes());
                }
            }
            buf.extend_from_slice(&0u16.to_le_bytes());
        }
    }

    buf
}

/// Collect the solid shapes reachable from `shape`, descending into
/// compounds.
fn collect_solids<K: Kernel>(
    session: &Session<K>,
    shape: &Shape,
    out: &mut Vec<Shape>,
) -> Result<(), OpError> {
    match shape.kind() {
        ShapeKind::Solid => {
            out.push(shape.clone());
            Ok(())
        }
        ShapeKind::Compound => {
            for member in compound_members(session, shape)? {
                collect_solids(session, &member, out)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn prepare_destination(path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    if path.exists() {
        warn!(path = %path.display(), "overwriting existing export file");
    }
    Ok(())
}

/// Export shapes as a single binary STL file.
///
/// Accepts one shape or an ordered list; compounds contribute every
/// solid member. The destination directory is created if missing.
pub fn export_stl<K: Kernel>(
    session: &Session<K>,
    shapes: &[&Shape],
    path: impl AsRef<Path>,
    options: StlOptions,
) -> Result<(), ExportError> {
    let path = path.as_ref();

    let mut solids = Vec::new();
    for shape in shapes {
        collect_solids(session, shape, &mut solids)?;
    }
    if solids.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let mut meshes = Vec::with_capacity(solids.len());
    for solid in &solids {
        meshes.push(tessellate(session, solid, options.tolerance)?);
    }

    prepare_destination(path)?;
    debug!(path = %path.display(), solids = solids.len(), "writing STL");
    fs::write(path, render_mesh_to_stl(&meshes))?;
    Ok(())
}
