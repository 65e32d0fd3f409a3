use crate::collision::{HitResult, resolve_hit};
use crate::terrain::Terrain;
use crate::trajectory::{Trajectory, integrate};
use crate::types::{Combatants, PlayerId, Position, Screen, TrajectoryPoint};
use crate::utils::{angle_lerp, lerp_position};

/// Result of advancing a shot by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShotOutcome {
    InFlight,
    HitCombatant { target: PlayerId },
    HitTerrain { building_index: usize, point: Position },
    /// Every sample was tested without a hit: the projectile left the screen or ran out
    /// of flight time.
    OutOfBounds,
}

impl ShotOutcome {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, ShotOutcome::InFlight)
    }
}

impl From<HitResult> for ShotOutcome {
    fn from(hit: HitResult) -> Self {
        match hit {
            HitResult::Miss => ShotOutcome::InFlight,
            HitResult::Combatant { target } => ShotOutcome::HitCombatant { target },
            HitResult::Terrain {
                building_index,
                point,
            } => ShotOutcome::HitTerrain {
                building_index,
                point,
            },
        }
    }
}

/// One projectile in flight. The trajectory is computed up front and walked one sample
/// per tick; the cursor only moves forward.
#[derive(Debug, Clone)]
pub struct Shot {
    owner: PlayerId,
    start: Position,
    trajectory: Trajectory,
    current_index: usize, // Next sample to occupy
    outcome: Option<ShotOutcome>,
}

impl Shot {
    pub fn new(owner: PlayerId, start: Position, trajectory: Trajectory) -> Self {
        Shot {
            owner,
            start,
            trajectory,
            current_index: 0,
            outcome: None,
        }
    }

    /// Launches a full-resolution shot from `start`.
    pub fn fire(
        screen: &Screen,
        owner: PlayerId,
        start: Position,
        angle: f64,
        speed: f64,
        wind: f64,
    ) -> Self {
        let trajectory = integrate(
            screen,
            start,
            angle,
            speed,
            wind,
            owner == PlayerId::Opponent,
            false,
        );
        crate::debug_shot!(
            "{} fires angle {:.1} speed {:.1}: {} samples",
            owner,
            angle,
            speed,
            trajectory.len()
        );
        Shot::new(owner, start, trajectory)
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_resolved(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<ShotOutcome> {
        self.outcome
    }

    /// Sample the projectile currently occupies, if it has moved yet.
    pub fn current_point(&self) -> Option<&TrajectoryPoint> {
        self.current_index
            .checked_sub(1)
            .and_then(|index| self.trajectory.get(index))
    }

    /// Moves onto the next sample and tests it.
    ///
    /// A miss on the final sample resolves the shot as [`ShotOutcome::OutOfBounds`] in the
    /// same call. Once resolved, further calls return the same outcome without moving.
    pub fn step(&mut self, combatants: &Combatants, terrain: &Terrain) -> ShotOutcome {
        if let Some(outcome) = self.outcome {
            return outcome;
        }

        let Some(point) = self.trajectory.get(self.current_index) else {
            return self.spend();
        };
        let position = point.position;
        self.current_index += 1;

        let outcome = ShotOutcome::from(resolve_hit(position, self.owner, combatants, terrain));
        if outcome.is_resolved() {
            self.outcome = Some(outcome);
            return outcome;
        }
        if self.current_index == self.trajectory.len() {
            return self.spend();
        }
        outcome
    }

    fn spend(&mut self) -> ShotOutcome {
        crate::debug_shot!(
            "{} shot spent after {} samples",
            self.owner,
            self.current_index
        );
        self.outcome = Some(ShotOutcome::OutOfBounds);
        ShotOutcome::OutOfBounds
    }

    /// Render state between the previous and current samples; `alpha` runs from 0 (previous)
    /// to 1 (current). Before the first step the projectile sits at its launch point.
    pub fn render_sample(&self, alpha: f64) -> Option<TrajectoryPoint> {
        let current = *self.current_point()?;
        let previous = match self.current_index {
            0 | 1 => TrajectoryPoint {
                position: self.start,
                rotation: current.rotation,
            },
            index => *self.trajectory.get(index - 2)?,
        };
        Some(TrajectoryPoint {
            position: lerp_position(previous.position, current.position, alpha),
            rotation: angle_lerp(previous.rotation, current.rotation, alpha),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::Building;
    use assert_approx_eq::assert_approx_eq;

    fn screen() -> Screen {
        Screen::new(400.0, 800.0).unwrap()
    }

    fn combatants() -> Combatants {
        Combatants {
            human: Position::new(40.0, 600.0),
            opponent: Position::new(360.0, 500.0),
        }
    }

    fn skyline() -> Terrain {
        Terrain::new(vec![
            Building::new(0.0, 600.0, 80.0, 200.0, "#059669"),
            Building::new(80.0, 650.0, 80.0, 150.0, "#DC2626"),
            Building::new(160.0, 550.0, 80.0, 250.0, "#2563EB"),
            Building::new(240.0, 700.0, 80.0, 100.0, "#D97706"),
            Building::new(320.0, 500.0, 80.0, 300.0, "#4F46E5"),
        ])
    }

    fn run(shot: &mut Shot) -> (ShotOutcome, usize) {
        let mut ticks = 0;
        loop {
            ticks += 1;
            let outcome = shot.step(&combatants(), &skyline());
            if outcome.is_resolved() {
                return (outcome, ticks);
            }
        }
    }

    // Hand-built flights through the test skyline
    fn line(points: &[(f64, f64)]) -> Trajectory {
        Trajectory::from_points(
            points
                .iter()
                .map(|&(x, y)| TrajectoryPoint {
                    position: Position::new(x, y),
                    rotation: 90.0,
                })
                .collect(),
        )
    }

    #[test]
    fn test_cursor_advances_and_hits_opponent() {
        let mut shot = Shot::new(
            PlayerId::Human,
            Position::new(40.0, 600.0),
            line(&[(100.0, 300.0), (200.0, 300.0), (300.0, 400.0), (360.0, 495.0)]),
        );
        assert!(shot.current_point().is_none());
        assert_eq!(shot.step(&combatants(), &skyline()), ShotOutcome::InFlight);
        assert_eq!(shot.current_index(), 1);
        assert_eq!(shot.current_point().unwrap().position, Position::new(100.0, 300.0));

        let (outcome, ticks) = run(&mut shot);
        assert_eq!(
            outcome,
            ShotOutcome::HitCombatant {
                target: PlayerId::Opponent
            }
        );
        assert_eq!(ticks, 3);
        assert!(shot.is_resolved());
        assert_eq!(shot.outcome(), Some(outcome));

        // Stepping a resolved shot is a no-op
        assert_eq!(shot.step(&combatants(), &skyline()), outcome);
        assert_eq!(shot.current_index(), 4);
    }

    #[test]
    fn test_terrain_hit_stops_flight() {
        let mut shot = Shot::new(
            PlayerId::Opponent,
            Position::new(360.0, 500.0),
            line(&[(300.0, 450.0), (250.0, 600.0), (200.0, 700.0), (100.0, 500.0)]),
        );
        let (outcome, ticks) = run(&mut shot);
        assert_eq!(
            outcome,
            ShotOutcome::HitTerrain {
                building_index: 2,
                point: Position::new(200.0, 700.0)
            }
        );
        assert_eq!(ticks, 3);
    }

    #[test]
    fn test_miss_resolves_on_last_sample() {
        let mut shot = Shot::new(
            PlayerId::Human,
            Position::new(40.0, 600.0),
            line(&[(100.0, 300.0), (200.0, 200.0), (420.0, 100.0)]),
        );
        assert_eq!(shot.step(&combatants(), &skyline()), ShotOutcome::InFlight);
        assert_eq!(shot.step(&combatants(), &skyline()), ShotOutcome::InFlight);
        assert!(!shot.is_resolved());

        // Missing with the last sample resolves on the same tick
        assert_eq!(shot.step(&combatants(), &skyline()), ShotOutcome::OutOfBounds);
        assert!(shot.is_resolved());
        assert_eq!(shot.current_index(), shot.trajectory().len());
        assert_eq!(shot.outcome(), Some(ShotOutcome::OutOfBounds));
    }

    #[test]
    fn test_empty_trajectory_resolves_immediately() {
        let start = Position::new(-5.0, 10.0);
        let mut shot = Shot::fire(&screen(), PlayerId::Human, start, 45.0, 50.0, 0.0);
        assert!(shot.trajectory().is_empty());
        assert_eq!(shot.outcome(), None);
        assert_eq!(shot.step(&combatants(), &skyline()), ShotOutcome::OutOfBounds);
    }

    #[test]
    fn test_fired_shot_travels_toward_enemy() {
        let human_start = Position::new(40.0, 600.0);
        let opponent_start = Position::new(360.0, 500.0);
        let human = Shot::fire(&screen(), PlayerId::Human, human_start, 45.0, 50.0, 0.0);
        let opponent = Shot::fire(&screen(), PlayerId::Opponent, opponent_start, 45.0, 50.0, 0.0);
        assert!(human.trajectory().get(0).unwrap().position.x > 40.0);
        assert!(opponent.trajectory().get(0).unwrap().position.x < 360.0);
        assert_eq!(opponent.owner(), PlayerId::Opponent);
    }

    #[test]
    fn test_render_sample_interpolates() {
        let mut shot = Shot::new(
            PlayerId::Human,
            Position::new(0.0, 400.0),
            line(&[(10.0, 390.0), (20.0, 370.0)]),
        );
        assert!(shot.render_sample(0.5).is_none());

        shot.step(&combatants(), &skyline());
        let first = shot.render_sample(0.5).unwrap();
        assert_approx_eq!(first.position.x, 5.0);
        assert_approx_eq!(first.position.y, 395.0);

        shot.step(&combatants(), &skyline());
        let second = shot.render_sample(0.25).unwrap();
        assert_approx_eq!(second.position.x, 12.5);
        assert_approx_eq!(second.position.y, 385.0);
        assert_approx_eq!(second.rotation, 90.0);
    }
}
