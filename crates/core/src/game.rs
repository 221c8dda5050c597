//! Game module - routes rolls to frames and reports the score
//!
//! A game owns exactly ten frames. Rolls go to the current frame; once that
//! frame completes the cursor advances, stopping at the tenth frame. The game
//! is over when the tenth frame completes, after which every roll is refused.

use std::fmt;

use crate::error::{validate_pins, BowlingError};
use crate::frame::Frame;
use crate::scoring;
use crate::snapshot::{FrameSnapshot, GameSnapshot};
use crate::types::{FRAME_COUNT, LAST_FRAME_INDEX};

/// A single-player game of ten frames
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    frames: [Frame; FRAME_COUNT],
    /// Frame receiving rolls (0-based, never above `LAST_FRAME_INDEX`)
    current_frame: usize,
    /// Rolls taken in the current frame (0-based)
    current_roll: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a game with ten empty frames
    pub fn new() -> Self {
        Self {
            frames: std::array::from_fn(|i| {
                if i == LAST_FRAME_INDEX {
                    Frame::last()
                } else {
                    Frame::new()
                }
            }),
            current_frame: 0,
            current_roll: 0,
        }
    }

    /// Create a game and record `rolls` in order, stopping at the first error.
    pub fn from_rolls<I>(rolls: I) -> Result<Self, BowlingError>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut game = Self::new();
        for pins in rolls {
            game.roll(pins)?;
        }
        Ok(game)
    }

    /// Record a roll of `pins`.
    ///
    /// Range is checked before game-over, so an out-of-range count is always
    /// reported as an invalid roll.
    pub fn roll(&mut self, pins: i32) -> Result<(), BowlingError> {
        validate_pins(pins)?;

        if self.is_game_over() {
            return Err(BowlingError::GameOver);
        }

        let frame = &mut self.frames[self.current_frame];
        frame.add_roll(pins)?;
        self.current_roll += 1;

        log::debug!(
            "frame {} roll {}: {} pins {}",
            self.current_frame + 1,
            self.current_roll,
            pins,
            frame
        );

        if frame.is_complete() && self.current_frame < LAST_FRAME_INDEX {
            self.current_frame += 1;
            self.current_roll = 0;
            log::debug!("advanced to frame {}", self.current_frame + 1);
        }

        if self.is_game_over() {
            log::info!("game over, final score {}", self.score());
        }

        Ok(())
    }

    pub fn is_game_over(&self) -> bool {
        if self.current_frame < LAST_FRAME_INDEX {
            return false;
        }

        let last = &self.frames[LAST_FRAME_INDEX];
        if last.is_strike() || last.is_spare() {
            last.rolls().len() >= 3
        } else {
            last.rolls().len() >= 2
        }
    }

    /// Current frame number (1-based)
    pub fn current_frame(&self) -> usize {
        self.current_frame + 1
    }

    /// Current roll within the frame (1-based)
    pub fn current_roll(&self) -> usize {
        self.current_roll + 1
    }

    pub fn frames(&self) -> &[Frame; FRAME_COUNT] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Total rolls recorded so far
    pub fn rolls_recorded(&self) -> usize {
        self.frames.iter().map(|f| f.rolls().len()).sum()
    }

    /// Total score including every bonus available so far.
    pub fn score(&self) -> u32 {
        scoring::total_score(&self.frames)
    }

    /// Score of frame `index` (0-based) including its bonus.
    pub fn frame_score(&self, index: usize) -> u32 {
        scoring::frame_score(&self.frames, index)
    }

    pub fn running_totals(&self) -> [u32; FRAME_COUNT] {
        scoring::running_totals(&self.frames)
    }

    /// Every frame as `Frame N: [..]`, joined with ` | `.
    pub fn game_state(&self) -> String {
        self.frames
            .iter()
            .enumerate()
            .map(|(i, frame)| format!("Frame {}: {}", i + 1, frame))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let totals = self.running_totals();
        let mut settled = true;

        let frames = std::array::from_fn(|i| {
            let frame = &self.frames[i];
            settled = settled && scoring::is_scored(&self.frames, i);
            FrameSnapshot {
                number: i + 1,
                rolls: frame.rolls().iter().copied().collect(),
                marks: frame.marks(),
                display: frame.to_string(),
                is_last: frame.is_last_frame(),
                complete: frame.is_complete(),
                score: self.frame_score(i),
                running_total: settled.then_some(totals[i]),
            }
        });

        GameSnapshot {
            frames,
            current_frame: self.current_frame(),
            current_roll: self.current_roll(),
            rolls_recorded: self.rolls_recorded(),
            game_over: self.is_game_over(),
            score: self.score(),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.game_state())
    }
}
