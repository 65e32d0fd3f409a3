//! Configuration constants for the artillery simulation.

// Physics
pub const GRAVITY: f64 = 0.2; // Added to vertical speed per unit of flight time
pub const WIND_DRIFT: f64 = 0.01; // Horizontal speed gained per step per unit of wind

// Trajectory sampling
pub const FLIGHT_TIME_STEP: f64 = 0.1;
pub const FLIGHT_MAX_POINTS: usize = 500;
pub const PREVIEW_TIME_STEP: f64 = 0.5; // Coarser step for the aiming preview
pub const PREVIEW_MAX_POINTS: usize = 20;
pub const ROTATION_OFFSET_DEG: f64 = 90.0; // Sprite nose points along the flight path

// Combatants
pub const HITBOX_HALF_EXTENT: f64 = 15.0;

// Level generation
pub const MIN_BUILDINGS: u32 = 5;
pub const MAX_BUILDINGS: u32 = 12;
pub const BASE_HEIGHT_RATIO: f64 = 0.3; // Max building height at level 0, as share of screen
pub const HEIGHT_RATIO_PER_LEVEL: f64 = 0.02;
pub const MAX_HEIGHT_RATIO: f64 = 0.7;
pub const MIN_HEIGHT_RATIO: f64 = 0.1;
pub const BASE_WIND_CAP: f64 = 0.5;
pub const WIND_CAP_PER_LEVEL: f64 = 0.1;
pub const MAX_WIND_CAP: f64 = 3.0;

pub const BUILDING_COLORS: [&str; 7] = [
    "#059669", // Emerald
    "#DC2626", // Red
    "#2563EB", // Blue
    "#D97706", // Amber
    "#4F46E5", // Indigo
    "#7C3AED", // Violet
    "#BE185D", // Pink
];

// Opponent heuristic
pub const AIM_BASE_ANGLE: f64 = 45.0;
pub const AIM_ELEVATION_GAIN: f64 = 30.0; // Degrees per unit of dy/dx
pub const AIM_WIND_GAIN: f64 = 5.0; // Degrees per unit of wind
pub const AIM_SPEED_GAIN: f64 = 7.0; // Speed per sqrt(distance)
pub const AIM_ANGLE_SPREAD: f64 = 50.0; // Full width of the angle noise band
pub const AIM_SPEED_SPREAD: f64 = 30.0;
pub const AIM_LEVEL_FOCUS: f64 = 0.1; // Noise divisor growth per level
pub const FALLBACK_ANGLE: f64 = 45.0;
pub const FALLBACK_SPEED: f64 = 60.0;
pub const FALLBACK_SPREAD: f64 = 40.0;

// Firing ranges
pub const MIN_ANGLE: f64 = 0.0;
pub const MAX_ANGLE: f64 = 90.0;
pub const MIN_INPUT_SPEED: f64 = 10.0; // Floor of the human input slider
pub const MIN_OPPONENT_SPEED: f64 = 20.0; // Floor of the heuristic's own output
pub const MAX_SPEED: f64 = 100.0;

// Difficulty ramp
pub const BASE_DIFFICULTY: f64 = 0.7;
pub const DIFFICULTY_PER_LEVEL: f64 = 0.03;
pub const MAX_DIFFICULTY: f64 = 0.95;

// Headless driver defaults
pub const DEFAULT_SCREEN_WIDTH: f64 = 400.0;
pub const DEFAULT_SCREEN_HEIGHT: f64 = 800.0;
pub const DEFAULT_ANGLE: f64 = 45.0;
pub const DEFAULT_SPEED: f64 = 50.0;
pub const MAX_TURNS: u32 = 40; // Turns before the driver calls the round a draw
