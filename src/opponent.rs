//! Closed-form aiming for the scripted opponent.
//!
//! This is not a ballistic inversion. It produces plausible-looking aim: a base guess from
//! the geometry and wind, blurred by noise that shrinks with difficulty and level.

use crate::config::*;
use crate::types::{Combatants, PlayerId, Position};
use rand::Rng;

/// An angle/speed pair ready to hand to the integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiringSolution {
    pub angle: f64,
    pub speed: f64,
}

/// What the opponent gets to look at before firing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AimContext {
    pub combatants: Option<Combatants>,
    pub wind: f64,
    pub level: Option<u32>,
}

/// Difficulty the opponent plays at on a given level.
pub fn difficulty_for_level(level: u32) -> f64 {
    (BASE_DIFFICULTY + level as f64 * DIFFICULTY_PER_LEVEL).min(MAX_DIFFICULTY)
}

// Uniform draw in [-spread/2, spread/2)
fn noise<R: Rng + ?Sized>(rng: &mut R, spread: f64) -> f64 {
    rng.r#gen::<f64>() * spread - spread / 2.0
}

/// Picks the opponent's next shot.
///
/// `difficulty` runs from 0 (wild) to 1 (no noise). Without combatant geometry the
/// opponent falls back to a noisy 45/60 lob.
pub fn decide<R: Rng + ?Sized>(
    context: &AimContext,
    difficulty: f64,
    rng: &mut R,
) -> FiringSolution {
    let solution = match context.combatants {
        Some(combatants) => aim(
            combatants.opponent,
            combatants.human,
            context.wind,
            context.level,
            difficulty,
            rng,
        ),
        None => fallback(difficulty, rng),
    };
    crate::debug_opponent!(
        "Opponent aims angle {:.1} speed {:.1} (difficulty {:.2})",
        solution.angle,
        solution.speed,
        difficulty
    );
    solution
}

/// Geometry-based aim from `shooter` at `target`, usable for either side.
///
/// The angle is expressed the way the integrator expects it for the shooter, so the
/// elevation term uses `shooter.y - target.y`.
pub fn aim<R: Rng + ?Sized>(
    shooter: Position,
    target: Position,
    wind: f64,
    level: Option<u32>,
    difficulty: f64,
    rng: &mut R,
) -> FiringSolution {
    let dx = (shooter.x - target.x).abs();
    let dy = shooter.y - target.y;

    let mut angle = AIM_BASE_ANGLE;
    // Vertically aligned combatants would divide by zero
    if dx != 0.0 && dy != 0.0 {
        angle += dy / dx * AIM_ELEVATION_GAIN;
    }
    angle += wind * AIM_WIND_GAIN;
    let mut speed = dx.sqrt() * AIM_SPEED_GAIN;

    let level = level.unwrap_or(1) as f64;
    let spread = (1.0 - difficulty) / (1.0 + AIM_LEVEL_FOCUS * level);
    angle += noise(rng, AIM_ANGLE_SPREAD) * spread;
    speed += noise(rng, AIM_SPEED_SPREAD) * spread;

    FiringSolution {
        angle: angle.clamp(MIN_ANGLE, MAX_ANGLE),
        speed: speed.clamp(MIN_OPPONENT_SPEED, MAX_SPEED),
    }
}

fn fallback<R: Rng + ?Sized>(difficulty: f64, rng: &mut R) -> FiringSolution {
    let randomness = 1.0 - difficulty;
    let angle = FALLBACK_ANGLE + noise(rng, FALLBACK_SPREAD) * randomness;
    let speed = FALLBACK_SPEED + noise(rng, FALLBACK_SPREAD) * randomness;
    FiringSolution {
        angle: angle.clamp(MIN_ANGLE, MAX_ANGLE),
        speed: speed.clamp(MIN_INPUT_SPEED, MAX_SPEED),
    }
}

/// Aim for whichever side `shooter` is, at its enemy.
pub fn aim_for<R: Rng + ?Sized>(
    shooter: PlayerId,
    combatants: &Combatants,
    wind: f64,
    level: u32,
    difficulty: f64,
    rng: &mut R,
) -> FiringSolution {
    // Wind helps the side firing with it, so its sign flips for the leftward shooter
    let wind = match shooter {
        PlayerId::Opponent => wind,
        PlayerId::Human => -wind,
    };
    aim(
        combatants.position_of(shooter),
        combatants.target_of(shooter),
        wind,
        Some(level),
        difficulty,
        rng,
    )
}
