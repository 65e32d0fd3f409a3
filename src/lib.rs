//! Skyline Duel: projectile simulation and opponent aiming for a turn-based artillery duel.
//!
//! The core (`trajectory`, `collision`, `terrain`, `level`, `opponent`) is made of pure
//! functions over explicit inputs. `shot` walks one flight tick by tick and `game`
//! owns the round state a front end would otherwise keep.

pub mod collision;
pub mod config;
pub mod error;
pub mod game;
pub mod level;
pub mod logging;
pub mod opponent;
pub mod shot;
pub mod terrain;
pub mod trajectory;
pub mod types;
pub mod utils;

pub use collision::{HitKind, HitResult, resolve_hit};
pub use error::{MatchError, SimError};
pub use game::{Match, Phase, Score};
pub use level::{Level, generate};
pub use opponent::{AimContext, FiringSolution, decide};
pub use shot::{Shot, ShotOutcome};
pub use terrain::{Building, Terrain, apply_damage};
pub use trajectory::{Trajectory, integrate};
pub use types::{Combatants, PlayerId, Position, Screen, TrajectoryPoint};
