use arrayvec::ArrayVec;

use crate::types::{Mark, FRAME_COUNT, MAX_ROLLS_PER_FRAME, PERFECT_SCORE};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameSnapshot {
    /// Frame number (1-based)
    pub number: usize,
    pub rolls: ArrayVec<u8, MAX_ROLLS_PER_FRAME>,
    pub marks: ArrayVec<Mark, MAX_ROLLS_PER_FRAME>,
    pub display: String,
    pub is_last: bool,
    pub complete: bool,
    /// Frame score with whatever bonus rolls exist so far.
    pub score: u32,
    /// Cumulative score, present once this and every earlier frame is final.
    pub running_total: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub frames: [FrameSnapshot; FRAME_COUNT],
    pub current_frame: usize,
    pub current_roll: usize,
    pub rolls_recorded: usize,
    pub game_over: bool,
    pub score: u32,
}

impl GameSnapshot {
    pub fn is_perfect(&self) -> bool {
        self.game_over && self.score == PERFECT_SCORE
    }

    /// Frames that have received at least one roll.
    pub fn played_frames(&self) -> impl Iterator<Item = &FrameSnapshot> {
        self.frames.iter().filter(|f| !f.rolls.is_empty())
    }
}
