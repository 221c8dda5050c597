//! Scoring module - strike and spare look-ahead bonuses
//!
//! Everything here is a pure function over a read-only frame sequence, so
//! computing a score never mutates or caches anything on the frames.
//!
//! Rules:
//! - A strike in frames 1-9 earns the next two rolls, wherever they land
//!   (a following strike pushes the look-ahead into the frame after it).
//! - A spare in frames 1-9 earns the next single roll.
//! - The tenth frame holds its own bonus rolls: a strike there earns its 2nd
//!   and 3rd rolls, a spare its 3rd roll.
//! - Rolls not yet thrown contribute 0, so mid-game scores are lower bounds.

use crate::frame::Frame;
use crate::types::FRAME_COUNT;

/// Sum of the next `count` rolls recorded after frame `index`.
fn following_rolls(frames: &[Frame], index: usize, count: usize) -> u32 {
    frames
        .iter()
        .skip(index + 1)
        .flat_map(|frame| frame.rolls().iter())
        .take(count)
        .map(|&pins| u32::from(pins))
        .sum()
}

/// Number of rolls recorded after frame `index`.
fn rolls_after(frames: &[Frame], index: usize) -> usize {
    frames
        .iter()
        .skip(index + 1)
        .map(|frame| frame.rolls().len())
        .sum()
}

/// Bonus for a strike in frame `index` (0 if the frame is missing).
pub fn strike_bonus(frames: &[Frame], index: usize) -> u32 {
    match frames.get(index) {
        Some(frame) if frame.is_last_frame() => frame
            .rolls()
            .iter()
            .skip(1)
            .take(2)
            .map(|&pins| u32::from(pins))
            .sum(),
        Some(_) => following_rolls(frames, index, 2),
        None => 0,
    }
}

/// Bonus for a spare in frame `index` (0 if the frame is missing).
pub fn spare_bonus(frames: &[Frame], index: usize) -> u32 {
    match frames.get(index) {
        Some(frame) if frame.is_last_frame() => frame.roll(2).map(u32::from).unwrap_or(0),
        Some(_) => following_rolls(frames, index, 1),
        None => 0,
    }
}

/// Bonus earned by frame `index`. Strike takes precedence over spare.
pub fn bonus(frames: &[Frame], index: usize) -> u32 {
    match frames.get(index) {
        Some(frame) if frame.is_strike() => strike_bonus(frames, index),
        Some(frame) if frame.is_spare() => spare_bonus(frames, index),
        _ => 0,
    }
}

/// Score of a single frame: its own rack plus any bonus.
///
/// The tenth frame's bonus rolls are counted once, as its bonus.
pub fn frame_score(frames: &[Frame], index: usize) -> u32 {
    frames
        .get(index)
        .map(|frame| frame.base_pins() + bonus(frames, index))
        .unwrap_or(0)
}

/// Total score across every frame.
pub fn total_score(frames: &[Frame]) -> u32 {
    (0..frames.len()).map(|i| frame_score(frames, i)).sum()
}

/// Whether frame `index` is complete and every bonus roll it needs exists.
pub fn is_scored(frames: &[Frame], index: usize) -> bool {
    let Some(frame) = frames.get(index) else {
        return false;
    };
    if !frame.is_complete() {
        return false;
    }
    if frame.is_last_frame() {
        return true;
    }

    let needed = if frame.is_strike() {
        2
    } else if frame.is_spare() {
        1
    } else {
        0
    };
    rolls_after(frames, index) >= needed
}

/// Cumulative score after each frame, as on a score sheet.
pub fn running_totals(frames: &[Frame]) -> [u32; FRAME_COUNT] {
    let mut totals = [0u32; FRAME_COUNT];
    let mut total = 0u32;
    for (i, slot) in totals.iter_mut().enumerate() {
        total += frame_score(frames, i);
        *slot = total;
    }
    totals
}
