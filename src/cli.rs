//! Command-line configuration and scoring run.
//!
//! `tenpin [--format text|json] <pins>...` scores the given rolls in order.
//! The default format comes from `TENPIN_FORMAT` (see [`OutputFormat::from_env`]).

use anyhow::{anyhow, Context, Result};

use crate::core::Game;
use crate::report::{OutputFormat, ScoreCard};

pub const USAGE: &str = "usage: tenpin [--format text|json] <pins>...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub format: OutputFormat,
    pub rolls: Vec<i32>,
    pub help: bool,
}

pub fn parse_args(args: &[String], default_format: OutputFormat) -> Result<CliConfig> {
    let mut format = default_format;
    let mut rolls = Vec::new();
    let mut help = false;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--format" | "-f" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --format"))?;
                format = v.parse()?;
            }
            "--help" | "-h" => {
                help = true;
            }
            other if other.starts_with("--") => {
                return Err(anyhow!("unknown argument: {}", other));
            }
            other => {
                let pins = other
                    .parse::<i32>()
                    .map_err(|_| anyhow!("invalid pin count: {}", other))?;
                rolls.push(pins);
            }
        }
        i += 1;
    }

    Ok(CliConfig {
        format,
        rolls,
        help,
    })
}

/// Record every roll and render the resulting score card.
pub fn run(config: &CliConfig) -> Result<String> {
    let mut game = Game::new();
    for (n, &pins) in config.rolls.iter().enumerate() {
        game.roll(pins)
            .with_context(|| format!("roll {} ({} pins) rejected", n + 1, pins))?;
    }

    ScoreCard::from_snapshot(&game.snapshot()).render(config.format)
}
