//! Report module - score cards for display and export
//!
//! Turns a [`GameSnapshot`] into a [`ScoreCard`] that can be printed as text
//! or serialized as JSON.
//!
//! # Output Formats
//!
//! - **text**: the frame-by-frame game state line, the score, and progress
//! - **json**: the serialized [`ScoreCard`]
//!
//! # Environment Variables
//!
//! - `TENPIN_FORMAT`: default output format (`text` or `json`, default `text`)
//!
//! # Example JSON
//!
//! ```text
//! {"frames":[{"frame":1,"rolls":[10],"marks":"[X]","score":17,"running_total":17},...],
//!  "current_frame":3,"current_roll":1,"game_over":false,"score":24}
//! ```

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use tenpin_core::GameSnapshot;

pub use tenpin_core as core;

/// Environment variable holding the default output format.
pub const FORMAT_ENV: &str = "TENPIN_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Read `TENPIN_FORMAT`, falling back to text when unset or blank.
    pub fn from_env() -> Result<Self> {
        match std::env::var(FORMAT_ENV) {
            Ok(v) if !v.trim().is_empty() => v.trim().parse(),
            _ => Ok(Self::default()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("text") {
            Ok(Self::Text)
        } else if s.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(anyhow!("unknown output format: {}", s))
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OutputFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <&str>::deserialize(deserializer)?;
        s.parse::<Self>()
            .map_err(|_| serde::de::Error::custom("invalid output format"))
    }
}

impl Serialize for OutputFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// One frame row of a score card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameLine {
    pub frame: usize,
    pub rolls: Vec<u8>,
    pub marks: String,
    pub score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub running_total: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub frames: Vec<FrameLine>,
    pub current_frame: usize,
    pub current_roll: usize,
    pub game_over: bool,
    pub score: u32,
}

impl ScoreCard {
    pub fn from_snapshot(snap: &GameSnapshot) -> Self {
        let frames = snap
            .frames
            .iter()
            .map(|f| FrameLine {
                frame: f.number,
                rolls: f.rolls.to_vec(),
                marks: f.display.clone(),
                score: f.score,
                running_total: f.running_total,
            })
            .collect();

        Self {
            frames,
            current_frame: snap.current_frame,
            current_roll: snap.current_roll,
            game_over: snap.game_over,
            score: snap.score,
        }
    }

    /// Frames joined as `Frame N: [..] | ...`.
    pub fn game_state(&self) -> String {
        self.frames
            .iter()
            .map(|f| format!("Frame {}: {}", f.frame, f.marks))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    pub fn to_text(&self) -> String {
        let status = if self.game_over {
            "Game over".to_string()
        } else {
            format!(
                "Next: frame {}, roll {}",
                self.current_frame, self.current_roll
            )
        };
        format!("{}\nScore: {}\n{}", self.game_state(), self.score, status)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => self.to_json(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenpin_core::Game;

    fn card_for(rolls: &[i32]) -> ScoreCard {
        let game = Game::from_rolls(rolls.iter().copied()).unwrap();
        ScoreCard::from_snapshot(&game.snapshot())
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Json).unwrap();
        assert_eq!(json, "\"json\"");
        let back: OutputFormat = serde_json::from_str("\"Text\"").unwrap();
        assert_eq!(back, OutputFormat::Text);
    }

    #[test]
    fn test_text_in_progress() {
        let card = card_for(&[10, 3]);
        let text = card.to_text();
        assert!(text.starts_with("Frame 1: [X] | Frame 2: [3] | Frame 3: []"));
        assert!(text.contains("\nScore: 16\n"));
        assert!(text.ends_with("Next: frame 2, roll 2"));
    }

    #[test]
    fn test_text_game_over() {
        let card = card_for(&[0; 20]);
        assert!(card.to_text().ends_with("Score: 0\nGame over"));
    }

    #[test]
    fn test_json_fields() {
        let card = card_for(&[5, 5, 3]);
        let json = card.render(OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(v["score"], 16);
        assert_eq!(v["game_over"], false);
        assert_eq!(v["frames"].as_array().unwrap().len(), 10);
        assert_eq!(v["frames"][0]["marks"], "[5, /]");
        assert_eq!(v["frames"][0]["running_total"], 13);
        assert!(v["frames"][1].get("running_total").is_none());
    }

    #[test]
    fn test_json_roundtrip_preserves_card() {
        let card = card_for(&[10, 7, 3, 9, 0]);
        let back: ScoreCard = serde_json::from_str(&card.to_json().unwrap()).unwrap();
        assert_eq!(back, card);
    }
}
