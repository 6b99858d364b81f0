use std::io::{self, Write};

use anyhow::Context;
use dp_drills::io::{format_sequence, read_collatz_start};
use dp_drills::math::collatz_sequence;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = read_collatz_start(io::stdin().lock()).context("failed to read collatz start")?;
    let sequence = collatz_sequence(start)?;
    log::info!("collatz {} visited {} values", start, sequence.len());

    let mut out = io::stdout().lock();
    writeln!(out, "{}", format_sequence(&sequence))?;
    Ok(())
}
