use crate::error::MatchError;
use crate::level::{self, Level};
use crate::opponent::{self, AimContext, FiringSolution};
use crate::shot::{Shot, ShotOutcome};
use crate::terrain::Terrain;
use crate::trajectory::{self, Trajectory};
use crate::types::{Combatants, PlayerId, Screen};
use log::info;
use rand::Rng;

/// Round phase. Hits and misses are reported by [`Match::tick`]; a combatant hit ends
/// the round, anything else hands the turn over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingInput(PlayerId),
    ShotInFlight,
    RoundOver { winner: PlayerId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub human: u32,
    pub opponent: u32,
}

impl Score {
    fn credit(&mut self, player: PlayerId) {
        match player {
            PlayerId::Human => self.human += 1,
            PlayerId::Opponent => self.opponent += 1,
        }
    }
}

/// The Match struct owns round state and applies what the simulation reports
#[derive(Debug, Clone)]
pub struct Match {
    screen: Screen,
    level: u32,
    terrain: Terrain,
    combatants: Combatants,
    wind: f64,
    score: Score,
    turn: PlayerId,
    phase: Phase,
    shot: Option<Shot>,
    turns_taken: u32,
}

impl Match {
    /// Starts a match on level 1 with the human to move.
    pub fn new<R: Rng + ?Sized>(screen: Screen, rng: &mut R) -> Result<Self, MatchError> {
        Self::starting_at(screen, 1, rng)
    }

    pub fn starting_at<R: Rng + ?Sized>(
        screen: Screen,
        level: u32,
        rng: &mut R,
    ) -> Result<Self, MatchError> {
        let Level {
            terrain,
            combatants,
            wind,
        } = level::generate(level, &screen, rng)?;
        Ok(Match {
            screen,
            level,
            terrain,
            combatants,
            wind,
            score: Score::default(),
            turn: PlayerId::Human,
            phase: Phase::AwaitingInput(PlayerId::Human),
            shot: None,
            turns_taken: 0,
        })
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn combatants(&self) -> &Combatants {
        &self.combatants
    }

    pub fn wind(&self) -> f64 {
        self.wind
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn shot(&self) -> Option<&Shot> {
        self.shot.as_ref()
    }

    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }

    /// Coarse aiming preview from the human's rooftop.
    pub fn preview(&self, angle: f64, speed: f64) -> Trajectory {
        trajectory::integrate(
            &self.screen,
            self.combatants.human,
            angle,
            speed,
            self.wind,
            false,
            true,
        )
    }

    /// What the opponent would fire right now, at this level's difficulty.
    pub fn opponent_decision<R: Rng + ?Sized>(&self, rng: &mut R) -> FiringSolution {
        let context = AimContext {
            combatants: Some(self.combatants),
            wind: self.wind,
            level: Some(self.level),
        };
        opponent::decide(&context, opponent::difficulty_for_level(self.level), rng)
    }

    /// Fires for whoever's turn it is.
    pub fn fire(&mut self, angle: f64, speed: f64) -> Result<&Shot, MatchError> {
        match self.phase {
            Phase::ShotInFlight => return Err(MatchError::ShotInFlight),
            Phase::RoundOver { .. } => return Err(MatchError::RoundOver),
            Phase::AwaitingInput(_) => {}
        }

        self.turns_taken += 1;
        info!(
            "Level {} Turn {}: {} fires angle {:.1} speed {:.1}",
            self.level, self.turns_taken, self.turn, angle, speed
        );
        let shot = Shot::fire(
            &self.screen,
            self.turn,
            self.combatants.position_of(self.turn),
            angle,
            speed,
            self.wind,
        );
        self.phase = Phase::ShotInFlight;
        Ok(self.shot.insert(shot))
    }

    /// Advances the shot in flight by one sample and applies the result.
    pub fn tick(&mut self) -> Result<ShotOutcome, MatchError> {
        let shot = self.shot.as_mut().ok_or(MatchError::NoShotInFlight)?;
        let outcome = shot.step(&self.combatants, &self.terrain);
        let owner = shot.owner();

        match outcome {
            ShotOutcome::InFlight => return Ok(outcome),
            ShotOutcome::HitCombatant { target } => {
                self.score.credit(owner);
                self.phase = Phase::RoundOver { winner: owner };
                info!(
                    "Level {} Turn {}: {} hit {} (score {}-{})",
                    self.level,
                    self.turns_taken,
                    owner,
                    target,
                    self.score.human,
                    self.score.opponent
                );
            }
            ShotOutcome::HitTerrain {
                building_index,
                point,
            } => {
                self.terrain.apply_damage(building_index, point)?;
                info!(
                    "Level {} Turn {}: {} hit building {} at ({:.1}, {:.1})",
                    self.level, self.turns_taken, owner, building_index, point.x, point.y
                );
                self.pass_turn(owner);
            }
            ShotOutcome::OutOfBounds => {
                info!(
                    "Level {} Turn {}: {} missed",
                    self.level, self.turns_taken, owner
                );
                self.pass_turn(owner);
            }
        }

        self.shot = None;
        Ok(outcome)
    }

    fn pass_turn(&mut self, owner: PlayerId) {
        self.turn = owner.other();
        self.phase = Phase::AwaitingInput(self.turn);
    }

    /// Drops any shot in flight and gives the move back to the human. The layout, damage
    /// and score are kept.
    pub fn reset_round(&mut self) {
        if self.shot.take().is_some() {
            crate::debug_match!("Level {}: shot discarded", self.level);
        }
        self.turn = PlayerId::Human;
        self.phase = Phase::AwaitingInput(PlayerId::Human);
    }

    /// Moves on to the next level with a fresh layout.
    pub fn advance_level<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), MatchError> {
        self.load_level(self.level + 1, rng)
    }

    /// Replays the current level with a fresh layout.
    pub fn retry_level<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), MatchError> {
        self.load_level(self.level, rng)
    }

    fn load_level<R: Rng + ?Sized>(&mut self, level: u32, rng: &mut R) -> Result<(), MatchError> {
        let generated = level::generate(level, &self.screen, rng)?;
        self.level = level;
        self.terrain = generated.terrain;
        self.combatants = generated.combatants;
        self.wind = generated.wind;
        self.turns_taken = 0;
        self.reset_round();
        Ok(())
    }
}
