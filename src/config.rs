use std::path::PathBuf;

use clap::Parser;
use cozy_chess::Color;
use thiserror::Error;

use crate::board::cozy::Position;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid starting position: {0}")]
    Fen(String),
    #[error("the starting position must have White to move")]
    BlackToMove,
    #[error("the starting position is already over: {0}")]
    Finished(String),
    #[error("square size must be between {min} and {max} pixels, got {got}")]
    SquareSize { got: u32, min: u32, max: u32 },
}

pub const MIN_SQUARE_SIZE: u32 = 16;
pub const MAX_SQUARE_SIZE: u32 = 256;

#[derive(Parser, Debug, Clone)]
#[command(name = "chesser", version, about = "Play White against a random-move opponent")]
pub struct Config {
    /// Directory holding the twelve piece images (r.png ... K.png)
    #[arg(long, default_value = "images")]
    pub assets: PathBuf,

    /// Side length of one board square in pixels
    #[arg(long, default_value_t = 60)]
    pub square_size: u32,

    /// Pause before the opponent replies, so the human move stays visible
    #[arg(long, default_value_t = 300)]
    pub ai_delay_ms: u64,

    /// Seed for the opponent's move choice (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Starting FEN position instead of the standard one
    #[arg(long)]
    pub fen: Option<String>,
}

impl Config {
    /// Checks the options and returns the starting position.
    pub fn validate(&self) -> Result<Position, ConfigError> {
        if !(MIN_SQUARE_SIZE..=MAX_SQUARE_SIZE).contains(&self.square_size) {
            return Err(ConfigError::SquareSize { got: self.square_size, min: MIN_SQUARE_SIZE, max: MAX_SQUARE_SIZE });
        }
        let start = match &self.fen {
            Some(fen) => Position::from_fen(fen.trim()).map_err(ConfigError::Fen)?,
            None => Position::startpos(),
        };
        if start.side_to_move() != Color::White { return Err(ConfigError::BlackToMove); }
        if let Some(outcome) = start.outcome() { return Err(ConfigError::Finished(outcome.message())); }
        Ok(start)
    }
}
