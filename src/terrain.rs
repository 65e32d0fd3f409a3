use crate::error::SimError;
use crate::types::Position;

/// A destructible building. Occupies `[x, x + width]` horizontally and from its top edge
/// `y` down to the bottom of the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
    pub damaged: bool,
    damage_positions: Vec<Position>, // Building-local, origin at top-left
}

impl Building {
    pub fn new(x: f64, y: f64, width: f64, height: f64, color: &'static str) -> Self {
        Building {
            x,
            y,
            width,
            height,
            color,
            damaged: false,
            damage_positions: Vec::new(),
        }
    }

    pub fn origin(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Impact marks in building-local coordinates, in the order they landed.
    pub fn damage_positions(&self) -> &[Position] {
        &self.damage_positions
    }

    /// Inclusive bounds test against the building's rectangle.
    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Rooftop spot where a combatant stands: centered on the top edge.
    pub fn roof_center(&self) -> Position {
        Position::new(self.x + self.width / 2.0, self.y)
    }

    // Damage is decoration only: the shape never changes
    fn record_impact(&mut self, world_point: Position) -> Position {
        let local = world_point.relative_to(self.origin());
        self.damage_positions.push(local);
        self.damaged = true;
        local
    }
}

/// The skyline: buildings tiled left to right in placement order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Terrain {
    buildings: Vec<Building>,
}

impl Terrain {
    pub fn new(buildings: Vec<Building>) -> Self {
        Terrain { buildings }
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Building> {
        self.buildings.get(index)
    }

    /// Marks an impact on building `building_index` at `world_point`.
    ///
    /// The point is stored in the building's local frame and appended to its damage list;
    /// earlier marks are never removed.
    pub fn apply_damage(
        &mut self,
        building_index: usize,
        world_point: Position,
    ) -> Result<&Building, SimError> {
        let len = self.buildings.len();
        let building = self
            .buildings
            .get_mut(building_index)
            .ok_or(SimError::BuildingOutOfRange {
                index: building_index,
                len,
            })?;

        let local = building.record_impact(world_point);
        crate::debug_terrain!(
            "Building {} hit at local ({:.1}, {:.1}), {} marks",
            building_index,
            local.x,
            local.y,
            building.damage_positions.len()
        );
        Ok(building)
    }
}

/// Value-returning form of [`Terrain::apply_damage`].
pub fn apply_damage(
    mut terrain: Terrain,
    building_index: usize,
    world_point: Position,
) -> Result<Terrain, SimError> {
    terrain.apply_damage(building_index, world_point)?;
    Ok(terrain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn skyline() -> Terrain {
        Terrain::new(vec![
            Building::new(0.0, 600.0, 80.0, 200.0, "#059669"),
            Building::new(80.0, 500.0, 80.0, 300.0, "#DC2626"),
        ])
    }

    #[test]
    fn test_damage_accumulates_in_call_order() {
        let mut terrain = skyline();
        terrain.apply_damage(1, Position::new(100.0, 520.0)).unwrap();
        terrain.apply_damage(1, Position::new(150.0, 610.0)).unwrap();

        let building = terrain.get(1).unwrap();
        assert!(building.damaged);
        assert_eq!(
            building.damage_positions(),
            &[Position::new(20.0, 20.0), Position::new(70.0, 110.0)]
        );
        // Shape and color untouched
        assert_approx_eq!(building.width, 80.0);
        assert_approx_eq!(building.height, 300.0);
        assert_eq!(building.color, "#DC2626");

        // Neighbour untouched
        assert!(!terrain.get(0).unwrap().damaged);
        assert!(terrain.get(0).unwrap().damage_positions().is_empty());
    }

    #[test]
    fn test_damage_out_of_range() {
        let mut terrain = skyline();
        assert_eq!(
            terrain.apply_damage(2, Position::new(10.0, 10.0)).unwrap_err(),
            SimError::BuildingOutOfRange { index: 2, len: 2 }
        );
        assert_eq!(terrain, skyline());
    }

    #[test]
    fn test_value_form_returns_updated_terrain() {
        let terrain = apply_damage(skyline(), 0, Position::new(40.0, 650.0)).unwrap();
        assert_eq!(
            terrain.get(0).unwrap().damage_positions(),
            &[Position::new(40.0, 50.0)]
        );
    }

    #[test]
    fn test_contains_is_inclusive() {
        let building = Building::new(80.0, 500.0, 80.0, 300.0, "#DC2626");
        assert!(building.contains(Position::new(80.0, 500.0)));
        assert!(building.contains(Position::new(160.0, 800.0)));
        assert!(!building.contains(Position::new(120.0, 499.9)));
        assert!(!building.contains(Position::new(160.1, 600.0)));
    }

    #[test]
    fn test_roof_center() {
        let roof = Building::new(80.0, 500.0, 80.0, 300.0, "#DC2626").roof_center();
        assert_eq!(roof, Position::new(120.0, 500.0));
    }
}
