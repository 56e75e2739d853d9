use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn normalize_degrees_360_wraps_values() {
    assert_eq!(normalize_degrees_360(0.0), 0.0);
    assert_eq!(normalize_degrees_360(360.0), 0.0);
    assert_eq!(normalize_degrees_360(370.0), 10.0);
    assert_eq!(normalize_degrees_360(-10.0), 350.0);
}

#[test]
fn angular_delta_is_symmetric_and_bounded() {
    assert_eq!(angular_delta_deg(10.0, 350.0), 20.0);
    assert_eq!(angular_delta_deg(350.0, 10.0), 20.0);
    assert_eq!(angular_delta_deg(0.0, 180.0), 180.0);
    assert_eq!(angular_delta_deg(45.0, 45.0), 0.0);
}

#[test]
fn polar_point_follows_screen_axes() {
    let east = polar_point(STAGE_CENTER, 10.0, 0.0);
    assert!(close(east.x, 60.0) && close(east.y, 50.0));

    let south = polar_point(STAGE_CENTER, 10.0, 90.0);
    assert!(close(south.x, 50.0) && close(south.y, 60.0));
}

#[test]
fn snap_angle_wraps_full_turn_to_zero() {
    assert_eq!(snap_angle(330.0, 72.0), 0.0);
    assert_eq!(snap_angle(354.0, 72.0), 0.0);
    assert_eq!(snap_angle(100.0, 72.0), 72.0);
    assert_eq!(snap_angle(110.0, 72.0), 144.0);
}

#[test]
fn snap_angle_rejects_degenerate_step() {
    assert_eq!(snap_angle(370.0, 0.0), 10.0);
}

#[test]
fn css_position_renders_percentages() {
    assert_eq!(Point::new(12.5, 80.0).css_position(), "left: 12.50%; top: 80.00%;");
}
