use std::io::Cursor;

use dp_drills::cs::dynamic::{min_coins, MinCoinSolver, SolverConfig, Sweep};
use dp_drills::io::{format_min_coins, read_coin_problem};
use dp_drills::Error;

fn run(input: &str) -> Result<String, Error> {
    let config = SolverConfig::new();
    let problem = read_coin_problem(Cursor::new(input), config.max_amount)?;
    let result = MinCoinSolver::new(config).solve(problem.amount, &problem.denominations)?;
    Ok(format_min_coins(result))
}

#[test]
fn test_stream_examples() {
    assert_eq!(run("3 11\n1 2 5\n").unwrap(), "3");
    assert_eq!(run("1 3\n2\n").unwrap(), "-1");
    assert_eq!(run("3 0\n1 2 5\n").unwrap(), "0");
    assert_eq!(run("4 6249\n186 419 83 408\n").unwrap(), "20");
}

#[test]
fn test_stream_rejects_invalid_input() {
    assert!(run("1 5\n0\n").unwrap_err().is_invalid_input());
    assert!(run("1 -5\n1\n").unwrap_err().is_invalid_input());
    assert!(run("1 1000001\n1\n").unwrap_err().is_invalid_input());
    assert!(run("2 5\n1\n").unwrap_err().is_invalid_input());
}

#[test]
fn test_fixed_input_answer() {
    assert_eq!(format_min_coins(min_coins(11, &[1, 2, 5]).unwrap()), "3");
}

#[test]
fn test_largest_default_amount() {
    let solver = MinCoinSolver::new(SolverConfig::new());
    let max = solver.config().max_amount;
    assert_eq!(solver.solve(max, &[1, 7, 10]).unwrap(), Some(max / 10));
    assert!(matches!(
        solver.solve(max + 1, &[1]).unwrap_err(),
        Error::AmountTooLarge { .. }
    ));
}

#[test]
fn test_sweeps_agree_on_reference_cases() {
    let cases: [(usize, &[usize], Option<usize>); 4] = [
        (11, &[1, 2, 5], Some(3)),
        (3, &[2], None),
        (0, &[1, 2, 5], Some(0)),
        (6249, &[186, 419, 83, 408], Some(20)),
    ];
    for sweep in [Sweep::Push, Sweep::Pull] {
        let solver = MinCoinSolver::new(SolverConfig::new().with_sweep(sweep));
        for (amount, coins, expected) in cases {
            assert_eq!(solver.solve(amount, coins).unwrap(), expected, "{:?}", sweep);
        }
    }
}
