use super::*;
use crate::foundation::core::Pose;

fn entrance() -> TilePose {
    TilePose::entrance(Pose {
        x: -900.0,
        y: -600.0,
        z: -3000.0,
        rotate_x: 160.0,
        rotate_y: -160.0,
    })
}

#[test]
fn holds_initial_pose_during_delay() {
    let tw = PoseTween::new(
        entrance(),
        TilePose::REST,
        Spring::default(),
        Duration::from_millis(450),
    );
    assert_eq!(tw.sample(Duration::ZERO), entrance());
    assert_eq!(tw.sample(Duration::from_millis(450)), entrance());
    assert_ne!(tw.sample(Duration::from_millis(500)), entrance());
}

#[test]
fn lands_exactly_on_target_once_settled() {
    let tw = PoseTween::new(
        entrance(),
        TilePose::REST,
        Spring::default(),
        Duration::from_millis(300),
    );
    let end = tw.total_duration();
    assert!(end > Duration::from_millis(300));
    assert!(tw.is_settled(end));
    assert!(!tw.is_settled(end - Duration::from_millis(100)));
    assert_eq!(tw.sample(end), TilePose::REST);
}

#[test]
fn channels_progress_together() {
    let tw = PoseTween::new(entrance(), TilePose::REST, Spring::default(), Duration::ZERO);
    let mid = tw.sample(Duration::from_millis(400));
    let p = Spring::default().progress(0.4);
    assert!((mid.opacity - p).abs() < 1e-12);
    assert!((mid.scale - (0.4 + 0.6 * p)).abs() < 1e-12);
    assert!((mid.pose.x - (-900.0 * (1.0 - p))).abs() < 1e-9);
    assert!((mid.pose.rotate_y - (-160.0 * (1.0 - p))).abs() < 1e-9);
}

#[test]
fn serializes_delay_as_seconds() {
    let tw = PoseTween::new(
        entrance(),
        TilePose::REST,
        Spring::default(),
        Duration::from_millis(1500),
    );
    let v = serde_json::to_value(tw).unwrap();
    assert_eq!(v["delay"], serde_json::json!(1.5));
}
