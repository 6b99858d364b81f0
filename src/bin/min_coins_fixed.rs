use std::io::{self, Write};

use dp_drills::cs::dynamic::min_coins;
use dp_drills::io::format_min_coins;

const DENOMINATIONS: [usize; 3] = [1, 2, 5];
const AMOUNT: usize = 11;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let result = min_coins(AMOUNT, &DENOMINATIONS)?;
    log::info!("amount {} -> {:?}", AMOUNT, result);

    let mut out = io::stdout().lock();
    writeln!(out, "{}", format_min_coins(result))?;
    Ok(())
}
