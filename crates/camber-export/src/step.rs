//! STEP (ISO 10303-21) export.

use std::fs;
use std::path::Path;

use camber_kernel::{Kernel, ShapeKind};
use camber_ops::{compound_members, step_string, Session, Shape};
use tracing::{debug, warn};

use crate::types::ExportError;

fn collect_solids<K: Kernel>(
    session: &Session<K>,
    shape: &Shape,
    out: &mut Vec<Shape>,
) -> Result<(), ExportError> {
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

/// Export a solid as a STEP file.
///
/// Accepts one shape or an ordered list, but the serializer takes exactly
/// one solid per file — pass a union when several bodies are wanted. The
/// destination directory is created if missing.
pub fn export_step<K: Kernel>(
    session: &Session<K>,
    shapes: &[&Shape],
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let path = path.as_ref();

    let mut solids = Vec::new();
    for shape in shapes {
        collect_solids(session, shape, &mut solids)?;
    }
    match solids.len() {
        0 => return Err(ExportError::NothingToExport),
        1 => {}
        count => return Err(ExportError::MultipleSolids { count }),
    }

    let text = step_string(session, &solids[0])?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    if path.exists() {
        warn!(path = %path.display(), "overwriting existing export file");
    }
    debug!(path = %path.display(), "writing STEP");
    fs::write(path, text)?;
    Ok(())
}
