//! Operation-level integration tests against the deterministic mock
//! kernel: frame scoping, transform discipline, tag propagation, pattern
//! placement, and the box-plus-cylinder end-to-end scenario.

use std::f64::consts::{FRAC_PI_2, PI};

use camber_kernel::Kernel;
use camber_ops::{
    cut, intersect, linear_pattern, make_box, make_cylinder, radial_pattern, select_by_tag, union,
    volume, Session,
};
use camber_types::{Frame, KernelPoint, LocalPoint, LocalVector, WorldPoint, WorldVector};

fn lifted_frame(z: f64) -> Frame {
    Frame::world().translated(WorldVector::new(0.0, 0.0, z))
}

/// Mock anchors live in kernel space; map them back to user space for
/// assertions.
fn anchor_in_user_space(session: &Session<camber_kernel::MockKernel>, shape: &camber_ops::Shape) -> WorldPoint {
    let a = session
        .kernel()
        .anchor(shape.handle())
        .expect("mock tracks every shape");
    KernelPoint::new(a[0], a[1], a[2]).to_world()
}

// ── Frame scoping through builders ─────────────────────────────────────

#[test]
fn builder_follows_scoped_frame() {
    let session = Session::with_mock();

    let at_origin = make_cylinder(&session, 0.5, 1.0).unwrap();
    let origin_anchor = anchor_in_user_space(&session, &at_origin);
    assert!(origin_anchor.vec().length() < 1e-12);

    let lifted = {
        let _guard = session.scoped_frame(lifted_frame(2.0));
        make_cylinder(&session, 0.5, 1.0).unwrap()
    };
    let lifted_anchor = anchor_in_user_space(&session, &lifted);
    assert!((lifted_anchor.vec().z - 2.0).abs() < 1e-12);

    // Scope exited: the next build is back at the world origin.
    assert_eq!(session.frames().depth(), 1);
    let back = make_cylinder(&session, 0.5, 1.0).unwrap();
    assert!(anchor_in_user_space(&session, &back).vec().length() < 1e-12);
}

#[test]
fn translate_direction_ignores_frame_origin() {
    let session = Session::with_mock();

    // Build and translate inside a frame far from the origin; the offset
    // must be exactly the local vector, unaffected by the frame origin.
    let _guard = session.scoped_frame(lifted_frame(10.0));
    let solid = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
    let moved = camber_ops::translate(&session, &solid, LocalVector::new(3.0, 0.0, 0.0)).unwrap();

    let before = anchor_in_user_space(&session, &solid);
    let after = anchor_in_user_space(&session, &moved);
    let delta = after.vec() - before.vec();
    assert!((delta.x - 3.0).abs() < 1e-12);
    assert!(delta.y.abs() < 1e-12);
    assert!(delta.z.abs() < 1e-12);
}

// ── Pattern placement ──────────────────────────────────────────────────

#[test]
fn linear_pattern_offsets_are_multiples_of_spacing() {
    let session = Session::with_mock();
    let solid = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
    let pattern =
        linear_pattern(&session, &solid, LocalVector::new(1.0, 0.0, 0.0), 3, 2.0).unwrap();

    let members = camber_ops::compound_members(&session, &pattern).unwrap();
    assert_eq!(members.len(), 3);
    for (i, member) in members.iter().enumerate() {
        let anchor = anchor_in_user_space(&session, member);
        assert!(
            (anchor.vec().x - 2.0 * i as f64).abs() < 1e-12,
            "copy {} should sit at x={}, found {}",
            i,
            2.0 * i as f64,
            anchor.vec().x
        );
    }
}

#[test]
fn radial_pattern_steps_by_total_angle_over_count() {
    let session = Session::with_mock();

    // Build the seed off-center so rotation shows up in its anchor.
    let seed = {
        let _guard = session.scoped_frame(
            Frame::world().translated(WorldVector::new(1.0, 0.0, 0.0)),
        );
        make_box(&session, 0.2, 0.2, 0.2, true).unwrap()
    };

    let pattern = radial_pattern(
        &session,
        &seed,
        LocalPoint::ORIGIN,
        LocalVector::new(0.0, 0.0, 1.0),
        4,
        2.0 * PI,
    )
    .unwrap();

    let members = camber_ops::compound_members(&session, &pattern).unwrap();
    assert_eq!(members.len(), 4);

    // Step is total/count, so a full turn gives {0, π/2, π, 3π/2} — the
    // start position is NOT duplicated at the seam.
    for (i, member) in members.iter().enumerate() {
        let anchor = anchor_in_user_space(&session, member).vec();
        let angle = anchor.y.atan2(anchor.x).rem_euclid(2.0 * PI);
        let expected = (FRAC_PI_2 * i as f64).rem_euclid(2.0 * PI);
        assert!(
            (angle - expected).abs() < 1e-9,
            "copy {} should sit at angle {}, found {}",
            i,
            expected,
            angle
        );
        assert!((anchor.length() - 1.0).abs() < 1e-9, "radius preserved");
    }
}

// ── Tag propagation across a modeling sequence ─────────────────────────

#[test]
fn union_tags_follow_set_union() {
    let session = Session::with_mock();
    let mut a = make_cylinder(&session, 1.0, 1.0).unwrap();
    a.add_tag("boss");
    let mut b = make_cylinder(&session, 1.0, 1.0).unwrap();
    b.add_tag("rib");

    let fused = union(&session, &a, &b).unwrap();
    let expected: std::collections::BTreeSet<String> =
        a.tags().union(b.tags()).cloned().collect();
    assert_eq!(fused.tags(), &expected);
}

#[test]
fn selection_by_tag_after_operations() {
    let session = Session::with_mock();
    let mut plate = make_box(&session, 4.0, 4.0, 1.0, true).unwrap();
    plate.add_tag("plate");
    let boss = make_cylinder(&session, 0.5, 2.0).unwrap();

    let fused = union(&session, &plate, &boss).unwrap();
    let trimmed = cut(&session, &fused, &make_cylinder(&session, 0.25, 3.0).unwrap()).unwrap();

    let shapes = vec![plate, boss, fused, trimmed];
    let tagged = select_by_tag(&shapes, "plate");
    // The original, the union and the cut all carry the tag.
    assert_eq!(tagged.len(), 3);
}

#[test]
fn intersect_keeps_only_shared_tags() {
    let session = Session::with_mock();
    let mut a = make_box(&session, 2.0, 2.0, 2.0, true).unwrap();
    a.add_tag("zone");
    let mut b = make_cylinder(&session, 1.0, 2.0).unwrap();
    b.add_tag("zone");
    b.add_tag("tool");

    let common = intersect(&session, &a, &b).unwrap();
    assert!(common.has_tag("zone"));
    assert!(!common.has_tag("tool"));
    // Box face tags are not shared with the cylinder, so they vanish.
    assert!(!common.has_tag("face:top"));
}

// ── Multi-solid boolean normalization ──────────────────────────────────

#[test]
fn boolean_normalizes_multi_lump_results_to_one_solid() {
    let session = Session::with_mock();
    session.kernel().set_boolean_lumps(2);

    let a = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();
    let b = {
        let _guard = session.scoped_frame(lifted_frame(10.0));
        make_box(&session, 1.0, 1.0, 1.0, true).unwrap()
    };

    // Disjoint operands: the kernel reports two lumps, the operation
    // still hands back exactly one solid shape.
    let fused = union(&session, &a, &b).unwrap();
    assert_eq!(fused.kind(), camber_kernel::ShapeKind::Solid);
    assert_eq!(session.kernel().solid_count(fused.handle()).unwrap(), 2);
}

// ── End-to-end scenario ────────────────────────────────────────────────

#[test]
fn box_plus_cylinder_in_scoped_frame() {
    let session = Session::with_mock();

    // Unit box centered at the world origin.
    let base = make_box(&session, 1.0, 1.0, 1.0, true).unwrap();

    // Cylinder r=0.5 h=1 built inside a frame lifted to (0,0,1).
    let frame_before = session.frames().current();
    let boss = {
        let _guard = session.scoped_frame(lifted_frame(1.0));
        make_cylinder(&session, 0.5, 1.0).unwrap()
    };
    assert_eq!(session.frames().current(), frame_before);

    // The cylinder really was placed in the lifted frame.
    let boss_anchor = anchor_in_user_space(&session, &boss);
    assert!((boss_anchor.vec().z - 1.0).abs() < 1e-12);

    let fused = union(&session, &base, &boss).unwrap();
    assert_eq!(fused.kind(), camber_kernel::ShapeKind::Solid);

    let expected_volume = 1.0 + PI * 0.25 * 1.0;
    assert!((volume(&session, &fused).unwrap() - expected_volume).abs() < 1e-9);

    // Tag set is the union of both inputs': the box's auto face tags and
    // nothing from the untagged cylinder.
    let expected: std::collections::BTreeSet<String> =
        base.tags().union(boss.tags()).cloned().collect();
    assert_eq!(fused.tags(), &expected);
    assert!(fused.has_tag("face:top"));
}
