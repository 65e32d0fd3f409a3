//! Per-sample hit testing against the enemy combatant and the skyline.

use crate::config::HITBOX_HALF_EXTENT;
use crate::terrain::Terrain;
use crate::types::{Combatants, PlayerId, Position};

/// What a hit test struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    None,
    Combatant,
    Terrain,
}

/// Outcome of testing one trajectory sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitResult {
    Miss,
    Combatant { target: PlayerId },
    Terrain { building_index: usize, point: Position },
}

impl HitResult {
    pub fn is_hit(&self) -> bool {
        !matches!(self, HitResult::Miss)
    }

    pub fn kind(&self) -> HitKind {
        match self {
            HitResult::Miss => HitKind::None,
            HitResult::Combatant { .. } => HitKind::Combatant,
            HitResult::Terrain { .. } => HitKind::Terrain,
        }
    }

    pub fn building_index(&self) -> Option<usize> {
        match self {
            HitResult::Terrain { building_index, .. } => Some(*building_index),
            _ => None,
        }
    }

    /// Impact point; only terrain hits carry one.
    pub fn point(&self) -> Option<Position> {
        match self {
            HitResult::Terrain { point, .. } => Some(*point),
            _ => None,
        }
    }
}

/// Axis-aligned hitbox test, edges inclusive.
pub fn in_hitbox(center: Position, point: Position) -> bool {
    point.x >= center.x - HITBOX_HALF_EXTENT
        && point.x <= center.x + HITBOX_HALF_EXTENT
        && point.y >= center.y - HITBOX_HALF_EXTENT
        && point.y <= center.y + HITBOX_HALF_EXTENT
}

/// Tests `point` for a shot fired by `shooter`.
///
/// The enemy hitbox is checked first and wins outright. Otherwise every building is
/// scanned; when bounds overlap, the last matching building in scan order is reported.
pub fn resolve_hit(
    point: Position,
    shooter: PlayerId,
    combatants: &Combatants,
    terrain: &Terrain,
) -> HitResult {
    let target = shooter.other();
    if in_hitbox(combatants.position_of(target), point) {
        crate::debug_collision!(
            "Shot by {} hit {} at ({:.1}, {:.1})",
            shooter,
            target,
            point.x,
            point.y
        );
        return HitResult::Combatant { target };
    }

    let mut result = HitResult::Miss;
    for (index, building) in terrain.buildings().iter().enumerate() {
        // No early exit: a later overlapping building overrides an earlier one
        if building.contains(point) {
            result = HitResult::Terrain {
                building_index: index,
                point,
            };
        }
    }

    if let HitResult::Terrain { building_index, .. } = result {
        crate::debug_collision!(
            "Shot by {} hit building {} at ({:.1}, {:.1})",
            shooter,
            building_index,
            point.x,
            point.y
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::Building;

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

    #[test]
    fn test_miss_in_open_sky() {
        let result = resolve_hit(
            Position::new(200.0, 100.0),
            PlayerId::Human,
            &combatants(),
            &skyline(),
        );
        assert_eq!(result, HitResult::Miss);
        assert!(!result.is_hit());
        assert_eq!(result.kind(), HitKind::None);
        assert_eq!(result.building_index(), None);
        assert_eq!(result.point(), None);
    }

    #[test]
    fn test_combatant_takes_precedence_over_terrain() {
        // Inside the opponent's hitbox and inside building 4 at once
        let point = Position::new(365.0, 510.0);
        assert!(skyline().get(4).unwrap().contains(point));
        let result = resolve_hit(point, PlayerId::Human, &combatants(), &skyline());
        assert_eq!(
            result,
            HitResult::Combatant {
                target: PlayerId::Opponent
            }
        );
        assert_eq!(result.kind(), HitKind::Combatant);
        assert_eq!(result.point(), None);
    }

    #[test]
    fn test_shooter_cannot_hit_itself() {
        // Human standing on building 0: its own hitbox is ignored, the roof still counts
        let point = Position::new(40.0, 605.0);
        let result = resolve_hit(point, PlayerId::Human, &combatants(), &skyline());
        assert_eq!(result.kind(), HitKind::Terrain);
        assert_eq!(result.building_index(), Some(0));

        let result = resolve_hit(point, PlayerId::Opponent, &combatants(), &skyline());
        assert_eq!(result.kind(), HitKind::Combatant);
    }

    #[test]
    fn test_hitbox_edges_inclusive() {
        let center = Position::new(100.0, 100.0);
        assert!(in_hitbox(center, Position::new(115.0, 85.0)));
        assert!(in_hitbox(center, Position::new(85.0, 115.0)));
        assert!(!in_hitbox(center, Position::new(115.01, 100.0)));
    }

    #[test]
    fn test_terrain_hit_reports_index_and_point() {
        let point = Position::new(200.0, 700.0);
        let result = resolve_hit(point, PlayerId::Opponent, &combatants(), &skyline());
        assert_eq!(
            result,
            HitResult::Terrain {
                building_index: 2,
                point
            }
        );
        assert!(result.is_hit());
        assert_eq!(result.point(), Some(point));
    }

    #[test]
    fn test_shared_edge_reports_last_building() {
        // x = 80 is the right edge of building 0 and the left edge of building 1
        let point = Position::new(80.0, 700.0);
        let result = resolve_hit(point, PlayerId::Opponent, &combatants(), &skyline());
        assert_eq!(result.building_index(), Some(1));
    }

    #[test]
    fn test_overlapping_buildings_last_match_wins() {
        let terrain = Terrain::new(vec![
            Building::new(0.0, 400.0, 200.0, 400.0, "#059669"),
            Building::new(100.0, 500.0, 200.0, 300.0, "#DC2626"),
        ]);
        let result = resolve_hit(
            Position::new(150.0, 600.0),
            PlayerId::Human,
            &combatants(),
            &terrain,
        );
        assert_eq!(result.building_index(), Some(1));
    }
}
