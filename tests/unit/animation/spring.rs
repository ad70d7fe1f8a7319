use super::*;

#[test]
fn default_spring_is_the_grid_entrance_spring() {
    let s = Spring::default();
    assert_eq!((s.stiffness, s.damping, s.mass), (60.0, 18.0, 1.0));
    let zeta = 18.0 / (2.0 * 60.0f64.sqrt());
    assert!((s.damping_ratio() - zeta).abs() < 1e-12);
    assert!(s.damping_ratio() > 1.0);
}

#[test]
fn progress_starts_at_zero_and_converges() {
    for s in [
        Spring::default(),
        Spring::new(100.0, 20.0, 1.0).unwrap(),
        Spring::new(170.0, 8.0, 1.0).unwrap(),
    ] {
        assert_eq!(s.progress(0.0), 0.0);
        assert_eq!(s.progress(-1.0), 0.0);
        assert!((s.progress(20.0) - 1.0).abs() < 1e-6, "{s:?}");
    }
}

#[test]
fn overdamped_and_critical_never_overshoot() {
    let critical = Spring::new(100.0, 20.0, 1.0).unwrap();
    assert!((critical.damping_ratio() - 1.0).abs() < 1e-9);
    for s in [Spring::default(), critical] {
        let mut last = 0.0;
        for i in 0..=600 {
            let v = s.progress(f64::from(i) / 100.0);
            assert!(v <= 1.0 + 1e-12);
            assert!(v + 1e-12 >= last);
            last = v;
        }
    }
}

#[test]
fn underdamped_overshoots() {
    let s = Spring::new(170.0, 8.0, 1.0).unwrap();
    assert!(s.damping_ratio() < 1.0);
    let peak = (0..300)
        .map(|i| s.progress(f64::from(i) / 100.0))
        .fold(0.0, f64::max);
    assert!(peak > 1.05);
}

#[test]
fn settle_time_bounds_the_tail() {
    let s = Spring::default();
    let settle = s.settle_time(REST_DELTA);
    assert!(settle > 1.0 && settle < 3.0, "settle={settle}");
    assert!((1.0 - s.progress(settle)).abs() < REST_DELTA);
    assert!((1.0 - s.progress(settle - 0.05)).abs() >= REST_DELTA);
}

#[test]
fn stiffer_springs_settle_sooner() {
    let soft = Spring::new(60.0, 18.0, 1.0).unwrap();
    let stiff = Spring::new(400.0, 40.0, 1.0).unwrap();
    assert!(stiff.settle_time(REST_DELTA) < soft.settle_time(REST_DELTA));
}

#[test]
fn invalid_parameters_are_rejected() {
    assert!(Spring::new(0.0, 18.0, 1.0).is_err());
    assert!(Spring::new(60.0, -1.0, 1.0).is_err());
    assert!(Spring::new(60.0, 18.0, 0.0).is_err());
    assert!(Spring::new(f64::NAN, 18.0, 1.0).is_err());
}

#[test]
fn mass_defaults_when_omitted_in_json() {
    let s: Spring = serde_json::from_str(r#"{"stiffness": 60, "damping": 18}"#).unwrap();
    assert_eq!(s, Spring::default());
}
