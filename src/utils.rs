use crate::types::Position;
use std::f64::consts::PI;

/// Linear interpolation between two f64 values
pub fn lerp(start: f64, end: f64, alpha: f64) -> f64 {
    start + (end - start) * alpha
}

/// Linear interpolation between two Position values
pub fn lerp_position(start: Position, end: Position, alpha: f64) -> Position {
    Position {
        x: lerp(start.x, end.x, alpha),
        y: lerp(start.y, end.y, alpha),
    }
}

/// Angular interpolation along the shortest arc.
/// Takes degrees, returns degrees in [0, 360)
pub fn angle_lerp(start_deg: f64, end_deg: f64, alpha: f64) -> f64 {
    let start_rad = start_deg.to_radians();
    let end_rad = end_deg.to_radians();

    // Wrap the difference into (-PI, PI]
    let mut diff = end_rad - start_rad;
    while diff <= -PI {
        diff += 2.0 * PI;
    }
    while diff > PI {
        diff -= 2.0 * PI;
    }

    (start_rad + diff * alpha).to_degrees().rem_euclid(360.0)
}

/// Heading of a velocity vector in degrees, measured the screen-space way (y down).
pub fn heading_degrees(vx: f64, vy: f64) -> f64 {
    vy.atan2(vx).to_degrees()
}
