use crate::config::*;
use crate::error::SimError;
use crate::terrain::{Building, Terrain};
use crate::types::{Combatants, Screen};
use rand::Rng;

/// Everything a round starts from.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub terrain: Terrain,
    pub combatants: Combatants,
    pub wind: f64,
}

/// Number of buildings for a level, capped at [`MAX_BUILDINGS`].
pub fn building_count(level: u32) -> u32 {
    (MIN_BUILDINGS + level / 2).min(MAX_BUILDINGS)
}

/// Tallest building the level may roll, in screen units.
pub fn max_building_height(level: u32, screen: &Screen) -> f64 {
    (screen.height * BASE_HEIGHT_RATIO + level as f64 * screen.height * HEIGHT_RATIO_PER_LEVEL)
        .min(screen.height * MAX_HEIGHT_RATIO)
}

/// Largest wind magnitude the level may roll.
pub fn wind_cap(level: u32) -> f64 {
    (BASE_WIND_CAP + level as f64 * WIND_CAP_PER_LEVEL).min(MAX_WIND_CAP)
}

/// Builds a fresh skyline, places both combatants and rolls the wind.
///
/// Every call redraws the whole layout; nothing from an earlier level (damage included)
/// carries over. `level` is 1-based.
pub fn generate<R: Rng + ?Sized>(
    level: u32,
    screen: &Screen,
    rng: &mut R,
) -> Result<Level, SimError> {
    if level == 0 {
        return Err(SimError::InvalidLevel);
    }
    screen.validate()?;

    let count = building_count(level);
    let max_height = max_building_height(level, screen);
    let min_height = screen.height * MIN_HEIGHT_RATIO;
    let cap = wind_cap(level);

    let wind = (rng.r#gen::<f64>() * 2.0 - 1.0) * cap;

    let width = screen.width / count as f64;
    let buildings: Vec<Building> = (0..count as usize)
        .map(|i| {
            let height = min_height.max(rng.r#gen::<f64>() * max_height);
            Building::new(
                i as f64 * width,
                screen.height - height,
                width,
                height,
                BUILDING_COLORS[i % BUILDING_COLORS.len()],
            )
        })
        .collect();

    // Human somewhere in the left third, opponent mirrored in the right third
    let third = count as f64 / 3.0;
    let human_index = (rng.r#gen::<f64>() * third).floor() as usize;
    let opponent_index = count as usize - 1 - (rng.r#gen::<f64>() * third).floor() as usize;

    let combatants = Combatants {
        human: buildings[human_index].roof_center(),
        opponent: buildings[opponent_index].roof_center(),
    };

    log::info!(
        "Level {} generated: {} buildings, wind {:.2}, human on {}, opponent on {}",
        level,
        count,
        wind,
        human_index,
        opponent_index
    );
    crate::debug_level!(
        "Level {} max height {:.1}, wind cap {:.2}",
        level,
        max_height,
        cap
    );

    Ok(Level {
        terrain: Terrain::new(buildings),
        combatants,
        wind,
    })
}
