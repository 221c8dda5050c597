//! Core types module - shared constants and roll marks
//!
//! This module defines the fundamental values used throughout the workspace.
//! Everything here is plain data with no external dependencies, so it can be
//! used from the scoring core, the report layer, and the binary alike.
//!
//! # Game Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PIN_COUNT` | 10 | Pins in a full rack |
//! | `FRAME_COUNT` | 10 | Frames in a game |
//! | `LAST_FRAME_INDEX` | 9 | 0-based index of the tenth frame |
//! | `MAX_ROLLS_PER_FRAME` | 3 | Only the tenth frame can reach this |
//! | `MAX_ROLLS_PER_GAME` | 21 | Nine open frames plus a three-roll tenth |
//! | `PERFECT_SCORE` | 300 | Twelve consecutive strikes |
//!
//! # Examples
//!
//! ```
//! use tenpin_types::{Mark, PIN_COUNT};
//!
//! assert_eq!(Mark::for_roll(0, PIN_COUNT, PIN_COUNT), Mark::Strike);
//! assert_eq!(Mark::for_roll(1, 6, 4), Mark::Spare);
//! assert_eq!(Mark::for_roll(0, 7, 7).to_string(), "7");
//! ```

use std::fmt;

/// Pins standing in a full rack
pub const PIN_COUNT: u8 = 10;

/// Frames in a single game
pub const FRAME_COUNT: usize = 10;

/// Index of the tenth frame (0-based)
pub const LAST_FRAME_INDEX: usize = FRAME_COUNT - 1;

/// Maximum rolls a frame can hold (tenth frame with a strike or spare)
pub const MAX_ROLLS_PER_FRAME: usize = 3;

/// Maximum rolls in a complete game
pub const MAX_ROLLS_PER_GAME: usize = 2 * LAST_FRAME_INDEX + MAX_ROLLS_PER_FRAME;

/// Score of a perfect game
pub const PERFECT_SCORE: u32 = 300;

/// How a single roll is marked on a score sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// A full rack knocked down with one ball
    Strike,
    /// The remaining pins of a partially knocked rack
    Spare,
    /// No pins
    Miss,
    /// Some pins, rack still standing
    Pins(u8),
}

impl Mark {
    /// Mark for the roll at `index` within its frame, given the frame's
    /// `first` roll.
    ///
    /// Any 10 is a strike. A spare is only ever the second roll (index 1),
    /// completing 10 after a first roll that was not itself a strike.
    pub fn for_roll(index: usize, first: u8, pins: u8) -> Self {
        if pins == PIN_COUNT {
            Mark::Strike
        } else if index == 1 && first != PIN_COUNT && first + pins == PIN_COUNT {
            Mark::Spare
        } else if pins == 0 {
            Mark::Miss
        } else {
            Mark::Pins(pins)
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::Strike => 'X',
            Mark::Spare => '/',
            Mark::Miss => '0',
            // Pins(10) is never produced by `for_roll`.
            Mark::Pins(n) => char::from_digit(u32::from(n), 10).unwrap_or('X'),
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
