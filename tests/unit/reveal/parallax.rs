use super::*;

#[test]
fn crossing_progress_spans_enter_to_leave() {
    assert_eq!(viewport_crossing_progress(800.0, 400.0, 800.0), 0.0);
    assert_eq!(viewport_crossing_progress(-400.0, 400.0, 800.0), 1.0);
    assert!((viewport_crossing_progress(200.0, 400.0, 800.0) - 0.5).abs() < 1e-12);
    assert_eq!(viewport_crossing_progress(2000.0, 400.0, 800.0), 0.0);
}

#[test]
fn default_power_moves_a_quarter_each_way() {
    let p = Parallax::default();
    assert_eq!(p.range_percent(), 25.0);
    assert_eq!(p.translate_y_percent(0.0), -25.0);
    assert_eq!(p.translate_y_percent(0.5), 0.0);
    assert_eq!(p.translate_y_percent(1.0), 25.0);
}

#[test]
fn unit_power_disables_parallax() {
    let p = Parallax {
        power: 1.0,
        ..Parallax::default()
    };
    assert_eq!(p.translate_y_percent(0.3), 0.0);
}
