use camber_kernel::{Kernel, ShapeKind};
use camber_types::LocalVector;
use tracing::debug;

use crate::curves::make_helix;
use crate::session::Session;
use crate::shape::Shape;
use crate::transform::translate;
use crate::types::OpError;

/// Sweep a closed profile along a path.
///
/// `is_frenet` orients the cross-section by tracking the path's Frenet
/// frame; needed for high-curvature/torsion paths (helices) where a
/// fixed up vector would visibly twist the section. Tags and metadata
/// are united across profile and path.
pub fn sweep<K: Kernel>(
    session: &Session<K>,
    profile: &Shape,
    path: &Shape,
    is_frenet: bool,
) -> Result<Shape, OpError> {
    let profile_face = match profile.kind() {
        ShapeKind::Face => profile.handle(),
        ShapeKind::Wire => session.kernel().make_face(profile.handle())?,
        other => return Err(OpError::unsupported("sweep profile", other)),
    };
    let path_wire = match path.kind() {
        ShapeKind::Wire => path.handle(),
        ShapeKind::Edge => session.kernel().make_wire(&[path.handle()])?,
        other => return Err(OpError::unsupported("sweep path", other)),
    };

    debug!(is_frenet, "sweep");
    let handle = session.kernel().sweep(profile_face, path_wire, is_frenet)?;
    Ok(Shape::derived_from_all(
        ShapeKind::Solid,
        handle,
        &[profile, path],
    ))
}

/// Sweep a profile along a helix of the given radius, pitch and turns.
///
/// The profile is shifted out to the helix start before sweeping, and the
/// sweep always tracks the Frenet frame — a fixed-up sweep twists badly
/// on helical paths.
pub fn helical_sweep<K: Kernel>(
    session: &Session<K>,
    profile: &Shape,
    coil_radius: f64,
    pitch: f64,
    turns: f64,
    points_per_turn: u32,
    smooth: bool,
) -> Result<Shape, OpError> {
    if coil_radius <= 0.0 {
        return Err(OpError::invalid_parameter(
            "helical sweep radius must be positive",
        ));
    }
    let path = make_helix(session, coil_radius, pitch, turns, points_per_turn, smooth)?;
    let start_offset = LocalVector::new(coil_radius, 0.0, 0.0);
    let positioned = translate(session, profile, start_offset)?;
    sweep(session, &positioned, &path, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::{make_circle, make_thread_profile};
    use crate::query::volume;
    use camber_types::LocalPoint;

    #[test]
    fn test_sweep_unites_tags() {
        let session = Session::with_mock();
        let mut profile = make_circle(&session, 0.25, LocalPoint::ORIGIN).unwrap();
        profile.add_tag("section");
        let mut path = crate::curves::make_segment(
            &session,
            LocalPoint::new(0.0, 0.0, 0.0),
            LocalPoint::new(0.0, 0.0, 5.0),
        )
        .unwrap();
        path.add_tag("rail");

        let solid = sweep(&session, &profile, &path, false).unwrap();
        assert_eq!(solid.kind(), ShapeKind::Solid);
        assert!(solid.has_tag("section"));
        assert!(solid.has_tag("rail"));
    }

    #[test]
    fn test_sweep_volume_tracks_path_length() {
        let session = Session::with_mock();
        let profile = make_circle(&session, 0.5, LocalPoint::ORIGIN).unwrap();
        let path = crate::curves::make_segment(
            &session,
            LocalPoint::new(0.0, 0.0, 0.0),
            LocalPoint::new(0.0, 0.0, 4.0),
        )
        .unwrap();
        let solid = sweep(&session, &profile, &path, false).unwrap();
        let expected = std::f64::consts::PI * 0.25 * 4.0;
        assert!((volume(&session, &solid).unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_sweep_rejects_solid_path() {
        let session = Session::with_mock();
        let profile = make_circle(&session, 0.5, LocalPoint::ORIGIN).unwrap();
        let not_a_path = crate::primitives::make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
        let result = sweep(&session, &profile, &not_a_path, false);
        assert!(matches!(result, Err(OpError::UnsupportedShape { .. })));
    }

    #[test]
    fn test_helical_sweep_produces_solid() {
        let session = Session::with_mock();
        let profile = make_thread_profile(&session, 0.4, 0.1, 0.2).unwrap();
        let solid = helical_sweep(&session, &profile, 0.5, 0.25, 3.0, 8, true).unwrap();
        assert_eq!(solid.kind(), ShapeKind::Solid);
    }
}
