//! Stochastic stability of adaptive play.
//!
//! Two boundedly-rational players repeatedly play a stage game. Each period
//! they sample `k` of the last `m` joint plays and best-respond to what the
//! sample says about the opponent, occasionally experimenting instead
//! (Young, 1993). The play histories form a finite Markov chain; this crate
//! builds its transition matrices and extracts the long-run behaviour.
//!
//! # Module Structure
//!
//! - `game` - players, action profiles, payoff structures
//! - `history` - play histories, feasibility, state-space enumeration
//! - `response` - best-response oracles
//! - `dynamics` - unperturbed and perturbed transition models, matrix assembly
//! - `analysis` - recurrent classes, stationary distributions, stable states
//! - `simulation` - sample paths of a transition matrix
//! - `config` - parameters and payoff presets
//! - `pipeline` - end-to-end experiments and reports

pub mod analysis;
pub mod config;
pub mod dynamics;
pub mod error;
pub mod game;
pub mod history;
pub mod pipeline;
pub mod response;
pub mod simulation;

pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Transition probabilities, stationary masses, experimentation rates.
pub type Probability = f64;
/// Stage-game payoffs and expected payoffs against a sample.
pub type Utility = f64;
/// Index of an action in `[0, num_act)`.
pub type Action = usize;

// ============================================================================
// MODEL CONSTANTS
// ============================================================================
/// Number of players. Only two-player games are modelled.
pub const PLAYERS: usize = 2;
/// States with stationary mass strictly above this are stochastically stable.
pub const STABILITY_THRESHOLD: Probability = 0.01;
/// Row sums of a transition matrix may deviate from 1 by at most this much.
pub const TOLERANCE: Probability = 1e-9;
/// Expected payoffs closer than this are treated as a tie.
pub const TIE_TOLERANCE: Utility = 1e-12;
/// Seed used by the reference pipeline for random payoffs and simulation.
pub const SEED: u64 = 5324;
/// Longest memory whose sample subsets fit in a u64 mask.
pub const MAX_MEMORY: usize = 63;

// ============================================================================
// DEFAULT PARAMETERS
// ============================================================================
/// Memory length. State space grows like `(num_act²)^m`.
pub const DEFAULT_MEMORY: usize = 3;
/// Sample size. Should stay small relative to memory.
pub const DEFAULT_SAMPLE: usize = 1;
/// Per-player experimentation probability.
pub const DEFAULT_EPSILON: Probability = 0.01;
/// Actions per player.
pub const DEFAULT_ACTIONS: usize = 3;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// n choose r, saturating on overflow.
pub fn choose(n: usize, r: usize) -> usize {
    match r > n {
        true => 0,
        false => (0..r.min(n - r)).fold(1usize, |acc, i| {
            acc.saturating_mul(n - i) / (i + 1)
        }),
    }
}
