use crate::error::SimError;
use std::fmt;

/// A point in screen space. Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    /// Expresses this point in a frame whose origin is `origin`.
    pub fn relative_to(&self, origin: Position) -> Position {
        Position {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

/// One sample of a projectile's flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    pub position: Position,
    pub rotation: f64, // Visual heading in degrees
}

// Identifies a participant in the duel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    Human,    // Fires rightward from the left third
    Opponent, // Fires leftward from the right third
}

impl PlayerId {
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::Human => PlayerId::Opponent,
            PlayerId::Opponent => PlayerId::Human,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::Human => write!(f, "human"),
            PlayerId::Opponent => write!(f, "opponent"),
        }
    }
}

/// Positions of both combatants. Each stands on a rooftop; the hitbox is implicit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Combatants {
    pub human: Position,
    pub opponent: Position,
}

impl Combatants {
    pub fn position_of(&self, player: PlayerId) -> Position {
        match player {
            PlayerId::Human => self.human,
            PlayerId::Opponent => self.opponent,
        }
    }

    /// Position of whoever `shooter` is aiming at.
    pub fn target_of(&self, shooter: PlayerId) -> Position {
        self.position_of(shooter.other())
    }
}

/// Screen bounds shared by the generator and the integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    pub width: f64,
    pub height: f64,
}

impl Screen {
    pub fn new(width: f64, height: f64) -> Result<Self, SimError> {
        let screen = Screen { width, height };
        screen.validate()?;
        Ok(screen)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(SimError::InvalidScreen {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Inclusive bounds check: edges count as on screen.
    pub fn contains(&self, point: Position) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}
