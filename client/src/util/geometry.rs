//! Percent-space stage geometry and angle math shared by the tab diagrams.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point on a diagram stage, in percent of the stage width/height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// CSS `left`/`top` declarations placing an element at this point.
    #[must_use]
    pub fn css_position(self) -> String {
        format!("left: {:.2}%; top: {:.2}%;", self.x, self.y)
    }
}

/// Middle of every stage.
pub const STAGE_CENTER: Point = Point::new(50.0, 50.0);

pub fn normalize_degrees_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Shortest unsigned distance between two headings, in `[0, 180]`.
pub fn angular_delta_deg(a: f64, b: f64) -> f64 {
    let delta = (a - b).abs().rem_euclid(360.0);
    delta.min(360.0 - delta)
}

/// Point at `radius` percent from `center` along `angle_deg` (0° = east,
/// clockwise because screen y grows downward).
pub fn polar_point(center: Point, radius: f64, angle_deg: f64) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(center.x + rad.cos() * radius, center.y + rad.sin() * radius)
}

/// Round `angle_deg` to the nearest multiple of `step_deg`, wrapped into `[0, 360)`.
pub fn snap_angle(angle_deg: f64, step_deg: f64) -> f64 {
    if step_deg <= 0.0 || !step_deg.is_finite() {
        return normalize_degrees_360(angle_deg);
    }
    normalize_degrees_360((angle_deg / step_deg).round() * step_deg)
}
