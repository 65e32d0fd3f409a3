//! Projectile flight integration.
//!
//! Flights are integrated eagerly with a fixed-step Euler scheme and handed out as
//! a finite, read-only sequence of samples. Nothing here holds state between calls.

use crate::config::*;
use crate::types::{Position, Screen, TrajectoryPoint};
use crate::utils::heading_degrees;

/// The sampled flight of one projectile, in firing order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    /// Wraps samples produced elsewhere, e.g. a replayed flight.
    pub fn from_points(points: Vec<TrajectoryPoint>) -> Self {
        Trajectory { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TrajectoryPoint> {
        self.points.get(index)
    }

    pub fn last(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectoryPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectoryPoint;
    type IntoIter = std::slice::Iter<'a, TrajectoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Integrates a shot fired from `start`.
///
/// `angle_deg` is measured from the horizontal towards the shooter's enemy: the opponent
/// fires leftward, so its effective angle is mirrored to `180 - angle_deg`. Inputs are not
/// clamped.
///
/// Sampling stops once the projectile leaves the screen or the point cap is reached. The
/// first off-screen sample is kept as the final point so callers can see where the shot
/// left; every earlier sample lies on screen. A start outside the screen yields an empty
/// trajectory.
pub fn integrate(
    screen: &Screen,
    start: Position,
    angle_deg: f64,
    speed: f64,
    wind: f64,
    fired_by_opponent: bool,
    preview: bool,
) -> Trajectory {
    let effective_angle = if fired_by_opponent {
        180.0 - angle_deg
    } else {
        angle_deg
    };
    let angle_rad = effective_angle.to_radians();

    // Negative vertical speed climbs: y grows downward
    let launch_vy = -speed * angle_rad.sin();
    let mut vx = speed * angle_rad.cos();

    let (time_step, max_points) = if preview {
        (PREVIEW_TIME_STEP, PREVIEW_MAX_POINTS)
    } else {
        (FLIGHT_TIME_STEP, FLIGHT_MAX_POINTS)
    };

    let mut points = Vec::with_capacity(max_points);
    let mut position = start;
    let mut t = 0.0;

    while screen.contains(position) && points.len() < max_points {
        vx += wind * WIND_DRIFT;
        let vy = launch_vy + GRAVITY * t;

        position.x += vx * time_step;
        position.y += vy * time_step;

        points.push(TrajectoryPoint {
            position,
            rotation: heading_degrees(vx, vy) + ROTATION_OFFSET_DEG,
        });
        t += time_step;
    }

    crate::debug_trajectory!(
        "Integrated {} points from ({:.1}, {:.1}) angle {:.1} speed {:.1} wind {:.2}{}",
        points.len(),
        start.x,
        start.y,
        effective_angle,
        speed,
        wind,
        if preview { " (preview)" } else { "" }
    );

    Trajectory { points }
}
