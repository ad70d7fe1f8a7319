use super::*;

#[test]
fn progress_saturates_at_both_ends() {
    // Parent fully scrolled into place.
    assert_eq!(scroll_progress(-200.0, 1000.0, 800.0), 0.0);
    // Bottom edge half a viewport below.
    assert!((scroll_progress(0.0, 1200.0, 800.0) - 0.5).abs() < 1e-12);
    // Far below.
    assert_eq!(scroll_progress(3000.0, 1000.0, 800.0), 1.0);
    assert_eq!(scroll_progress(0.0, 1000.0, 0.0), 0.0);
}

#[test]
fn scrub_interpolates_pose_opacity_and_scale() {
    let initial = Pose {
        x: -900.0,
        y: 600.0,
        z: -3000.0,
        rotate_x: -40.0,
        rotate_y: 80.0,
    };
    assert_eq!(scrub(initial, 0.0), TilePose::REST);

    let full = scrub(initial, 1.0);
    assert_eq!(full.pose, initial);
    assert!((full.opacity - 0.2).abs() < 1e-12);
    assert!((full.scale - 0.4).abs() < 1e-12);

    let half = scrub(initial, 0.5);
    assert_eq!(half.pose.z, -1500.0);
    assert_eq!(scrub(initial, 4.0), full);
}
