//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game: the board, piece
//! shapes and rotation, piece generation, scoring, leveling and the per-frame
//! update. It knows nothing about terminals, keyboards or sound. Frontends
//! feed it elapsed time plus the actions pressed this frame, read a
//! [`GameSnapshot`] back, and drain [`GameEvent`](types::GameEvent)s for audio.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of cell-kind ids with row removal
//! - [`game_state`]: active piece, next piece, gravity, scoring and game over
//! - [`pieces`]: tetromino shape matrices and clockwise matrix rotation
//! - [`rng`]: piece sources (seeded uniform draw, scripted sequences)
//! - [`scoring`]: line-clear points and level gravity intervals
//! - [`snapshot`]: read-only view handed to renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_core::types::{ActionSet, GameAction};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//! assert!(game.current().is_some());
//! assert!(game.next().is_some());
//!
//! // One frame with a hard drop pressed.
//! game.tick(16, ActionSet::only(GameAction::HardDrop));
//! assert_eq!(game.board().filled_count(), 4);
//! ```
//!
//! # Timing
//!
//! Gravity runs off an accumulator: every [`GameState::tick`] adds the frame's
//! elapsed milliseconds and the piece falls one row once the total passes the
//! level's drop interval (1000ms at level 1, 75ms faster per level, never
//! below 150ms).

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, EVENT_CAPACITY};
pub use pieces::{base_shape, spawn_x, Piece, Shape};
pub use rng::{PieceSource, ScriptedPieces, SimpleRng};
pub use scoring::{drop_interval_for_level, level_up_due, line_clear_score};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
