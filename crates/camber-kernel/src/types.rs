use serde::{Deserialize, Serialize};

// Re-export the kernel-space coordinate types from camber-types
pub use camber_types::{KernelPlane, KernelPoint, KernelVector};

/// Opaque handle to a shape stored in the geometry kernel.
/// NEVER persisted. Valid only for the kernel session that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeHandle(pub(crate) u64);

impl ShapeHandle {
    pub(crate) fn id(&self) -> u64 {
        self.0
    }
}

/// Transient identifier for a sub-entity (edge or face) of a stored shape.
/// Stable within a single kernel session but NOT across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KernelId(pub u64);

/// Topological kind of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Vertex,
    Edge,
    Wire,
    Face,
    Shell,
    Solid,
    Compound,
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ShapeKind::Vertex => "Vertex",
            ShapeKind::Edge => "Edge",
            ShapeKind::Wire => "Wire",
            ShapeKind::Face => "Face",
            ShapeKind::Shell => "Shell",
            ShapeKind::Solid => "Solid",
            ShapeKind::Compound => "Compound",
        };
        f.write_str(name)
    }
}

/// Errors from kernel operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KernelError {
    #[error("{operation} failed: {reason}")]
    OperationFailed { operation: String, reason: String },

    #[error("entity not found: {handle:?}")]
    EntityNotFound { handle: ShapeHandle },

    #[error("expected a {expected}, found a {actual}")]
    WrongKind {
        expected: ShapeKind,
        actual: ShapeKind,
    },

    #[error("operation not supported by this kernel: {operation}")]
    NotSupported { operation: String },

    #[error("tessellation failed: {reason}")]
    TessellationFailed { reason: String },

    #[error("export failed: {reason}")]
    ExportFailed { reason: String },
}

/// Tessellated triangle mesh, ready for STL output or rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderMesh {
    /// Flat array of vertex positions [x0, y0, z0, x1, y1, z1, ...].
    pub vertices: Vec<f32>,
    /// Flat array of vertex normals, parallel to `vertices`.
    pub normals: Vec<f32>,
    /// Triangle indices into the vertex array.
    pub indices: Vec<u32>,
}

impl RenderMesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
