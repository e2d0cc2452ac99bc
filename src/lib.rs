//! An engine for playing generalized 'Tic-Tac-Toe' on square boards
//!
//! Boards range from 3x3 to 7x7 and a line has to span the whole side of the
//! board to win. The engine provides ray casting over a flat grid, win detection
//! anchored at the last placed mark and a bot opponent with three difficulties.
//!
//! # Basic Usage
//!
//! ```
//! use xo_engine::{board::*, bot::*, point::Point};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::new(3)?;
//! let mut rng = RngSource(StdRng::seed_from_u64(7));
//!
//! board.apply_move(Point::new(1, 1), Player::X)?;
//! let reply = bot_move(&mut board, Difficulty::Hard, Player::O, Some(Point::new(1, 1)), None, &mut rng)?;
//!
//! assert!(board.cell(reply) == Some(Cell::O));
//! assert!(board.check_state(reply)? == GameState::Playing);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;
pub use error::{Error, Result};

pub mod point;

pub mod ray;

pub mod board;

pub mod heuristics;

pub mod bot;

pub mod stats;

pub mod game;

pub mod lobby;

pub mod simulate;


/// The smallest board side offered to players
pub const MIN_SIDE: usize = 3;
/// The largest board side offered to players
pub const MAX_SIDE: usize = 7;
/// The board side used when none is given
pub const DEFAULT_SIDE: usize = 3;

// the application range must be a non-empty interval containing the default
const_assert!(MIN_SIDE >= 1);
const_assert!(MIN_SIDE <= DEFAULT_SIDE && DEFAULT_SIDE <= MAX_SIDE);

/// Restricts a requested board side to the supported range
pub fn clamp_side(side: usize) -> usize {
    side.max(MIN_SIDE).min(MAX_SIDE)
}
