// Error types: simulation configuration errors and match orchestration errors

use thiserror::Error;

/// Simulation Errors
#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum SimError {
    #[error("Level index must be 1 or greater")]
    InvalidLevel,
    #[error("Screen dimensions must be positive and finite (got {width}x{height})")]
    InvalidScreen { width: f64, height: f64 },
    #[error("Building index {index} out of range for terrain of {len} buildings")]
    BuildingOutOfRange { index: usize, len: usize },
}

/// Match Errors
#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum MatchError {
    #[error("A shot is already in flight")]
    ShotInFlight,
    #[error("No shot is in flight")]
    NoShotInFlight,
    #[error("The round is over")]
    RoundOver,
    #[error(transparent)]
    Sim(#[from] SimError),
}
