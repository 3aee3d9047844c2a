//! Gobang (five-in-a-row) game engine
//!
//! Two players alternately place stones on a square grid; the first
//! unbroken run of five along a row, column, or either diagonal wins, and
//! a full board with no run is a draw.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: grid storage, bounds and occupancy queries, move legality
//! - [`rules`]: win detection across the four line orientations
//! - [`players`]: move sources (interactive, random, scripted)
//! - [`game`]: the turn state machine driving a match to its outcome
//! - [`render`]: text rendering of the grid
//! - [`error`]: the board and match error taxonomy
//!
//! Move sources are dependency-injected: the game consumes any
//! [`MoveSource`], so matches run against stdin, a seeded RNG, or a fixed
//! script without the core touching I/O.
//!
//! # Quick Start
//!
//! ```
//! use gobang::{Game, Pos, RandomSource, Status, Stone};
//!
//! let mut game = Game::new(15);
//!
//! // Black opens in the center
//! game.apply(Pos::new(7, 7)).unwrap();
//! assert_eq!(game.current_player(), Stone::White);
//!
//! // White answers with a random legal move
//! let mut computer = RandomSource::with_seed(42);
//! game.play_turn(&mut computer).unwrap();
//! assert_eq!(game.status(), Status::InProgress);
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod players;
pub mod render;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use error::{BoardError, PlayError};
pub use game::{Game, Status};
pub use players::{ConsoleSource, MoveSource, RandomSource, ScriptedSource};
