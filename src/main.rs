use clap::Parser;
use log::{LevelFilter, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use skyline_duel::config::{self, MAX_ANGLE, MAX_SPEED, MIN_ANGLE, MIN_INPUT_SPEED};
use skyline_duel::game::{Match, Phase};
use skyline_duel::types::{PlayerId, Screen};
use skyline_duel::{logging, opponent};

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Headless artillery duel against a scripted opponent",
    long_about = None
)]
struct Args {
    /// Screen width in simulation units.
    #[arg(long, default_value_t = config::DEFAULT_SCREEN_WIDTH)]
    width: f64,

    /// Screen height in simulation units.
    #[arg(long, default_value_t = config::DEFAULT_SCREEN_HEIGHT)]
    height: f64,

    /// Level to play (1-based).
    #[arg(long, default_value_t = 1)]
    level: u32,

    /// Seed for level layout and opponent aim. Omit for a fresh game every run.
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of shots before the round is called a draw.
    #[arg(long, default_value_t = config::MAX_TURNS)]
    max_turns: u32,

    /// Human launch angle in degrees (0-90).
    #[arg(long, default_value_t = config::DEFAULT_ANGLE)]
    angle: f64,

    /// Human launch speed (10-100).
    #[arg(long, default_value_t = config::DEFAULT_SPEED)]
    speed: f64,

    /// Let the human side aim with the same heuristic as the opponent.
    #[arg(long)]
    autopilot: bool,

    /// Log the aiming preview before each human shot.
    #[arg(long)]
    preview: bool,

    /// Debug filter to specify log topics (e.g., "trajectory,collision,shot")
    /// Available topics: trajectory, collision, terrain, level, opponent, shot, match
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = match args.log_level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    if let Err(e) = logging::init_logger(log_level, args.debug_filter.clone()) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    // The core trusts its callers with input ranges
    let angle = args.angle.clamp(MIN_ANGLE, MAX_ANGLE);
    let speed = args.speed.clamp(MIN_INPUT_SPEED, MAX_SPEED);
    if angle != args.angle || speed != args.speed {
        warn!("Human shot clamped to angle {:.1} speed {:.1}", angle, speed);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let screen = Screen::new(args.width, args.height)?;
    let mut game = Match::starting_at(screen, args.level, &mut rng)?;
    info!(
        "Level {} ready: {} buildings, wind {:.2}, human at ({:.1}, {:.1}), opponent at ({:.1}, {:.1})",
        game.level(),
        game.terrain().len(),
        game.wind(),
        game.combatants().human.x,
        game.combatants().human.y,
        game.combatants().opponent.x,
        game.combatants().opponent.y
    );

    let winner = loop {
        match game.phase() {
            Phase::RoundOver { winner } => break Some(winner),
            Phase::ShotInFlight => {
                game.tick()?;
            }
            Phase::AwaitingInput(_) if game.turns_taken() >= args.max_turns => break None,
            Phase::AwaitingInput(PlayerId::Human) => {
                let (angle, speed) = if args.autopilot {
                    let solution = opponent::aim_for(
                        PlayerId::Human,
                        game.combatants(),
                        game.wind(),
                        game.level(),
                        opponent::difficulty_for_level(game.level()),
                        &mut rng,
                    );
                    (solution.angle, solution.speed)
                } else {
                    (angle, speed)
                };
                if args.preview {
                    let preview = game.preview(angle, speed);
                    if let Some(end) = preview.last() {
                        let apex = preview
                            .iter()
                            .map(|point| point.position.y)
                            .fold(f64::INFINITY, f64::min);
                        info!(
                            "Preview: {} points, apex y {:.1}, ends at ({:.1}, {:.1})",
                            preview.len(),
                            apex,
                            end.position.x,
                            end.position.y
                        );
                    }
                }
                game.fire(angle, speed)?;
            }
            Phase::AwaitingInput(PlayerId::Opponent) => {
                let decision = game.opponent_decision(&mut rng);
                game.fire(decision.angle, decision.speed)?;
            }
        }
    };

    let score = game.score();
    match winner {
        Some(PlayerId::Human) => info!(
            "Level {} complete: you win! ({}-{})",
            game.level(),
            score.human,
            score.opponent
        ),
        Some(PlayerId::Opponent) => info!(
            "Level {}: the opponent wins ({}-{})",
            game.level(),
            score.human,
            score.opponent
        ),
        None => info!(
            "Level {}: draw after {} shots",
            game.level(),
            game.turns_taken()
        ),
    }
    Ok(())
}
