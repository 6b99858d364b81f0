use std::io::{self, Write};

use anyhow::Context;
use dp_drills::cs::dynamic::{MinCoinSolver, SolverConfig};
use dp_drills::io::{format_min_coins, read_coin_problem};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = SolverConfig::new();
    let problem = read_coin_problem(io::stdin().lock(), config.max_amount)
        .context("failed to read coin change problem")?;

    let result = MinCoinSolver::new(config).solve(problem.amount, &problem.denominations)?;
    log::info!("amount {} -> {:?}", problem.amount, result);

    let mut out = io::stdout().lock();
    writeln!(out, "{}", format_min_coins(result))?;
    Ok(())
}
