//! Bowling score tracker (default binary).
//!
//! Scores the pin counts given on the command line and prints the score card.
//! Set `RUST_LOG=debug` to trace each roll.

use anyhow::Result;

use tenpin::cli::{parse_args, run, USAGE};
use tenpin::report::OutputFormat;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args, OutputFormat::from_env()?)?;

    if config.help {
        println!("{}", USAGE);
        return Ok(());
    }

    log::debug!("scoring {} rolls as {}", config.rolls.len(), config.format);
    println!("{}", run(&config)?);
    Ok(())
}
