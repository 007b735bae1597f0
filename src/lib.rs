//! A rules engine for 'Connect 4' and its connect-N generalisations
//!
//! The engine owns the grid, drops pieces under gravity, enforces the player
//! limit, and finds the line that ended the game.
//!
//! # Basic Usage
//!
//! ```
//! use connect_n::Game;
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut game = Game::default();
//! for _ in 0..3 {
//!     game.place("red", 1)?;
//!     game.place("yellow", 2)?;
//! }
//! game.place("red", 1)?;
//!
//! assert_eq!(game.win_coords(), vec![(2, 0), (3, 0), (4, 0), (5, 0)]);
//! assert_eq!(game.last_player(), Some(&"red"));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod board;

pub mod config;

pub mod error;

pub mod game;


pub use board::{Board, Coord};
pub use config::GameConfig;
pub use error::{ConfigError, PlaceError, ReplayError};
pub use game::{Game, GameStatus};

/// The default width of the game board in tiles
pub const DEFAULT_COLUMNS: usize = 7;

/// The default height of the game board in tiles
pub const DEFAULT_ROWS: usize = 6;

/// The default number of players allowed to join a game
pub const DEFAULT_PLAYER_LIMIT: usize = 2;

/// The default number of aligned pieces needed to win
pub const DEFAULT_WIN_LENGTH: usize = 4;

/// The most cells a single board may hold
pub const MAX_CELLS: usize = 1 << 20;

// ensure a default-length line fits on the default board
const_assert!(DEFAULT_WIN_LENGTH <= DEFAULT_COLUMNS || DEFAULT_WIN_LENGTH <= DEFAULT_ROWS);
const_assert!(DEFAULT_PLAYER_LIMIT >= 1);
const_assert!(DEFAULT_COLUMNS * DEFAULT_ROWS <= MAX_CELLS);
