//! Simulator configuration from command-line arguments and environment.
use std::path::PathBuf;

use clap::Parser;

/// Default cap on duel rounds
pub const DEFAULT_MAX_ROUNDS: u32 = 100;

/// Pit two random starter decks against each other.
///
/// Environment variables (also read from a `.env` file):
/// - `TCG_CATALOG` - Path to the JSON card list
/// - `TCG_SEED` - RNG seed for deck dealing (default: random)
/// - `TCG_MAX_ROUNDS` - Rounds before the duel is called a draw (default: 100)
#[derive(Parser, Debug, Clone)]
#[command(name = "tcg-sim", version, about = "Trading card duel simulator", long_about = None)]
pub struct SimConfig {
    /// JSON card list (`name`, `hp`, `attack`, `type`, `pokedexNumber`)
    #[arg(value_name = "CATALOG", env = "TCG_CATALOG")]
    pub catalog: PathBuf,

    /// Seed for dealing the starter decks
    #[arg(short, long, env = "TCG_SEED")]
    pub seed: Option<u64>,

    /// Rounds before the duel is called a draw
    #[arg(short, long, env = "TCG_MAX_ROUNDS", default_value_t = DEFAULT_MAX_ROUNDS)]
    pub max_rounds: u32,
}
