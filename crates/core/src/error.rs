//! Error taxonomy for recording rolls.

use tenpin_types::PIN_COUNT;

/// Broad category of a [`BowlingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The pin count itself is unacceptable for the active frame.
    InvalidRoll,
    /// The roll arrived when nothing can accept it.
    IllegalState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BowlingError {
    #[error("Pins must be between 0 and 10 (got {pins})")]
    PinsOutOfRange { pins: i32 },

    #[error("Cannot knock down more pins than available ({pins} rolled, {remaining} standing)")]
    TooManyPins { pins: u8, remaining: u8 },

    #[error("Frame is already complete")]
    FrameComplete,

    #[error("Cannot roll after game is over")]
    GameOver,
}

impl BowlingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BowlingError::PinsOutOfRange { .. } | BowlingError::TooManyPins { .. } => {
                ErrorKind::InvalidRoll
            }
            BowlingError::FrameComplete | BowlingError::GameOver => ErrorKind::IllegalState,
        }
    }
}

/// Check that a raw pin count lies in `0..=10` and narrow it.
pub fn validate_pins(pins: i32) -> Result<u8, BowlingError> {
    u8::try_from(pins)
        .ok()
        .filter(|&p| p <= PIN_COUNT)
        .ok_or(BowlingError::PinsOutOfRange { pins })
}
