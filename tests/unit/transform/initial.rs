use super::*;

fn hd() -> Viewport {
    Viewport::new(1920.0, 1080.0).unwrap()
}

fn cell_centered_at(x: f64, y: f64, size: f64) -> Rect {
    Rect::new(x - size / 2.0, y - size / 2.0, x + size / 2.0, y + size / 2.0)
}

fn assert_rel(actual: f64, expected: f64) {
    let tol = 1e-6 * expected.abs().max(1e-9);
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected}"
    );
}

#[test]
fn centered_cell_has_no_rotation_or_depth() {
    let cell = cell_centered_at(960.0, 540.0, 100.0);
    assert_eq!(distance_factor(cell, hd()), 0.0);
    let p = compute_initial_transform(cell, hd(), TransformParams::GRID_ENTRANCE);
    assert!(p.rotate_x.abs() < 1e-12);
    assert!(p.rotate_y.abs() < 1e-12);
    assert!(p.z.abs() < 1e-12);
}

#[test]
fn top_left_cell_matches_closed_form() {
    let vp = hd();
    let cell = Rect::new(0.0, 0.0, 100.0, 100.0);
    let params = TransformParams::GRID_ENTRANCE;

    let dx: f64 = 960.0 - 50.0;
    let dy: f64 = 540.0 - 50.0;
    let dist = (dx * dx + dy * dy).sqrt();
    let factor = dist / (960.0f64 * 960.0 + 540.0 * 540.0).sqrt();
    assert_rel(distance_factor(cell, vp), factor);

    let tx = 900.0 * dx / dist;
    let ty = 900.0 * dy / dist;

    let p = compute_initial_transform(cell, vp, params);
    assert_rel(p.x, -tx * 0.8);
    assert_rel(p.y, -ty * 0.8);
    assert_rel(p.z, -3000.0 * factor * 0.8);
    assert_rel(p.rotate_x, -(ty / 900.0) * -160.0 * factor * 1.5);
    assert_rel(p.rotate_y, (tx / 900.0) * -160.0 * factor * 1.5);
}

#[test]
fn quadrant_signs_mirror_around_center() {
    let vp = hd();
    let params = TransformParams::default();
    let tl = compute_initial_transform(cell_centered_at(200.0, 100.0, 50.0), vp, params);
    let br = compute_initial_transform(cell_centered_at(1720.0, 980.0, 50.0), vp, params);

    assert!(tl.x < 0.0 && tl.y < 0.0);
    assert!(tl.rotate_y > 0.0 && tl.rotate_x < 0.0);
    assert!(br.x > 0.0 && br.y > 0.0);
    assert!(br.rotate_y < 0.0 && br.rotate_x > 0.0);

    assert!((tl.x + br.x).abs() < 1e-9);
    assert!((tl.rotate_x + br.rotate_x).abs() < 1e-9);
    assert!((tl.z - br.z).abs() < 1e-9);
}

#[test]
fn rotation_scales_linearly_with_max_rotation() {
    let vp = hd();
    let cell = cell_centered_at(300.0, 800.0, 80.0);
    let base = TransformParams::default();
    let a = compute_initial_transform(cell, vp, base);
    for k in [0.5, 2.0, 3.0] {
        let b = compute_initial_transform(
            cell,
            vp,
            TransformParams {
                max_rotation: base.max_rotation * k,
                ..base
            },
        );
        assert!((b.rotate_x - a.rotate_x * k).abs() < 1e-9);
        assert!((b.rotate_y - a.rotate_y * k).abs() < 1e-9);
        assert_eq!(b.x, a.x);
        assert_eq!(b.z, a.z);
    }
}

#[test]
fn depth_grows_with_distance_from_center() {
    let vp = hd();
    let params = TransformParams::GRID_ENTRANCE;
    let mut last = 0.0f64;
    for step in 0..=10 {
        let t = f64::from(step) / 10.0;
        let cell = cell_centered_at(960.0 - 900.0 * t, 540.0 - 500.0 * t, 40.0);
        let p = compute_initial_transform(cell, vp, params);
        let tilt = p.rotate_x.abs() + p.rotate_y.abs();
        assert!(p.z.abs() + 1e-9 >= last);
        assert!(tilt.is_finite());
        last = p.z.abs();
    }
}

#[test]
fn distance_factor_is_unclamped_outside_viewport() {
    let vp = hd();
    let far = cell_centered_at(-1000.0, -1000.0, 10.0);
    assert!(distance_factor(far, vp) > 1.0);
}

#[test]
fn zero_offset_distance_yields_non_finite_rotation() {
    let vp = hd();
    let p = compute_initial_transform(
        cell_centered_at(10.0, 10.0, 10.0),
        vp,
        TransformParams {
            offset_distance: 0.0,
            ..TransformParams::default()
        },
    );
    assert!(!p.is_finite());
}

#[test]
fn fallback_pose_matches_grid_preset_quadrants() {
    let dims = GridDims::new(9, 4);
    let params = TransformParams::GRID_ENTRANCE;

    let tl = fallback_pose(0, 0, dims, params);
    assert_eq!(
        tl,
        Pose {
            x: -900.0,
            y: -600.0,
            z: -3000.0,
            rotate_x: 160.0,
            rotate_y: -160.0,
        }
    );

    let br = fallback_pose(8, 3, dims, params);
    assert_eq!(
        br,
        Pose {
            x: 900.0,
            y: 600.0,
            z: -3000.0,
            rotate_x: -160.0,
            rotate_y: 160.0,
        }
    );

    // Column 4 of 9 is right of floor(9/2).
    assert_eq!(fallback_pose(4, 0, dims, params).x, 900.0);
    assert_eq!(fallback_pose(3, 0, dims, params).x, -900.0);
}
