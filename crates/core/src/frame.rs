//! Frame module - the rolls of one of the ten frames
//!
//! A frame holds up to three rolls in a fixed-capacity buffer (no allocation).
//! Frames 1-9 finish after a strike or two rolls. The tenth frame is reopened
//! for bonus rolls after a strike or spare, and racks a fresh set of pins each
//! time one is cleared.

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::{validate_pins, BowlingError};
use crate::types::{Mark, MAX_ROLLS_PER_FRAME, PIN_COUNT};

/// Rolls recorded in a single frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Frame {
    /// Pins knocked down per roll, in chronological order
    rolls: ArrayVec<u8, MAX_ROLLS_PER_FRAME>,
    last: bool,
}

impl Frame {
    /// Create an empty frame for positions 1-9
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty tenth frame
    pub fn last() -> Self {
        Self {
            rolls: ArrayVec::new(),
            last: true,
        }
    }

    pub fn is_last_frame(&self) -> bool {
        self.last
    }

    pub fn set_last_frame(&mut self, last: bool) {
        self.last = last;
    }

    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Pins knocked down by the roll at `index` (0-based), if recorded.
    pub fn roll(&self, index: usize) -> Option<u8> {
        self.rolls.get(index).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// Record a roll.
    ///
    /// Fails if `pins` is outside `0..=10`, if it exceeds the pins still
    /// standing, or if the frame is already complete. A failed roll leaves the
    /// frame untouched.
    pub fn add_roll(&mut self, pins: i32) -> Result<(), BowlingError> {
        let pins = validate_pins(pins)?;

        if self.is_complete() {
            return Err(BowlingError::FrameComplete);
        }

        let remaining = self.pins_remaining();
        if pins > remaining {
            return Err(BowlingError::TooManyPins { pins, remaining });
        }

        self.rolls
            .try_push(pins)
            .map_err(|_| BowlingError::FrameComplete)
    }

    /// Pins standing for the next roll.
    ///
    /// Frames 1-9: `10 - sum(rolls)`. The tenth frame re-racks after every
    /// cleared rack, so a strike or spare there leaves a full 10 standing.
    pub fn pins_remaining(&self) -> u8 {
        let mut standing = PIN_COUNT;
        for &pins in &self.rolls {
            standing = standing.saturating_sub(pins);
            if standing == 0 && self.last {
                standing = PIN_COUNT;
            }
        }
        standing
    }

    pub fn is_strike(&self) -> bool {
        self.roll(0) == Some(PIN_COUNT)
    }

    pub fn is_spare(&self) -> bool {
        match (self.roll(0), self.roll(1)) {
            (Some(first), Some(second)) => !self.is_strike() && first + second == PIN_COUNT,
            _ => false,
        }
    }

    pub fn is_complete(&self) -> bool {
        if self.last {
            if self.is_strike() || self.is_spare() {
                self.rolls.len() >= 3
            } else {
                self.rolls.len() >= 2
            }
        } else {
            self.is_strike() || self.rolls.len() >= 2
        }
    }

    /// Raw pin count of all rolls (no bonus).
    pub fn score(&self) -> u32 {
        self.rolls.iter().map(|&p| u32::from(p)).sum()
    }

    /// Pins credited to the frame's own rack: 10 for a strike or spare,
    /// otherwise the raw pin count. Tenth-frame bonus rolls are excluded.
    pub fn base_pins(&self) -> u32 {
        if self.is_strike() || self.is_spare() {
            u32::from(PIN_COUNT)
        } else {
            self.score()
        }
    }

    /// Score-sheet marks for each recorded roll: `X` for every 10, `/` only
    /// for a second roll completing a spare.
    pub fn marks(&self) -> ArrayVec<Mark, MAX_ROLLS_PER_FRAME> {
        let first = self.roll(0).unwrap_or(0);
        self.rolls
            .iter()
            .enumerate()
            .map(|(i, &pins)| Mark::for_roll(i, first, pins))
            .collect()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, mark) in self.marks().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", mark)?;
        }
        f.write_str("]")
    }
}
