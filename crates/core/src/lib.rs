//! Bowling scoring core - pure, deterministic, and testable
//!
//! This crate contains the frame bookkeeping and score calculation for a
//! single ten-pin game. It has **zero dependencies** on I/O or presentation:
//!
//! - **Deterministic**: The same roll sequence always yields the same score
//! - **Allocation-free frames**: Rolls live in fixed-capacity buffers
//! - **Read-only scoring**: Bonuses are computed on demand, never cached
//!
//! # Module Structure
//!
//! - [`frame`]: Rolls of one frame, strike/spare/complete queries, rendering
//! - [`game`]: Ten frames, roll routing, game-over detection
//! - [`scoring`]: Strike and spare look-ahead bonuses as pure functions
//! - [`snapshot`]: Plain-data view of a game for reporting
//! - [`error`]: Invalid-roll and illegal-state failures
//!
//! # Example
//!
//! ```
//! use tenpin_core::Game;
//!
//! let mut game = Game::new();
//! for _ in 0..12 {
//!     game.roll(10).unwrap();
//! }
//!
//! assert!(game.is_game_over());
//! assert_eq!(game.score(), 300);
//! assert!(game.roll(0).is_err());
//! ```
//!
//! # Logging
//!
//! Rolls and frame advances are logged at `debug`, the end of a game at
//! `info`, through the `log` facade. Failures are returned, never logged.

pub mod error;
pub mod frame;
pub mod game;
pub mod scoring;
pub mod snapshot;

pub use tenpin_types as types;

pub use error::{validate_pins, BowlingError, ErrorKind};
pub use frame::Frame;
pub use game::Game;
pub use scoring::{frame_score, running_totals, total_score};
pub use snapshot::{FrameSnapshot, GameSnapshot};
