pub mod coin_change;

// Re-export dynamic programming algorithms with descriptive names
pub use coin_change::{
    count_change_ways, min_coins, min_coins_with, CostTable, MinCoinSolver, SolverConfig, Sweep,
    DEFAULT_MAX_AMOUNT, MAX_TABLE_AMOUNT,
};
