//! # Minimum-coin change
//!
//! Bottom-up dynamic programming for the unbounded coin change problem: given
//! a target `amount` and a set of denominations (each usable any number of
//! times), find the fewest coins that sum exactly to the amount.
//!
//! The cost table holds one slot per sub-amount `0..=amount`. A slot is either
//! `None` (no combination reaches it) or `Some(n)` (reachable with `n` coins),
//! so there is no sentinel value that could overflow when incremented.
//!
//! Two fill orders are provided and always produce the same table:
//!
//! - [`Sweep::Push`] walks sub-amounts upwards and, from every reachable `i`,
//!   relaxes `i + c` for each coin `c`.
//! - [`Sweep::Pull`] computes each `i` from the best `i - c`.
//!
//! ## Example
//!
//! ```rust
//! use dp_drills::cs::dynamic::coin_change::{min_coins, MinCoinSolver, SolverConfig, Sweep};
//!
//! assert_eq!(min_coins(11, &[1, 2, 5]).unwrap(), Some(3));
//! assert_eq!(min_coins(3, &[2]).unwrap(), None);
//!
//! let solver = MinCoinSolver::new(SolverConfig::new().with_sweep(Sweep::Pull));
//! assert_eq!(solver.solve(6249, &[186, 419, 83, 408]).unwrap(), Some(20));
//! ```

use log::{debug, trace};

use crate::error::{Error, Result};

/// Largest amount accepted by [`SolverConfig::default`].
pub const DEFAULT_MAX_AMOUNT: usize = 1_000_000;

/// Largest amount any table can hold: one slot per sub-amount `0..=amount`
/// must stay addressable.
pub const MAX_TABLE_AMOUNT: usize = usize::MAX - 1;

/// Order in which the cost table is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sweep {
    /// Seed larger sub-amounts from each reachable one.
    #[default]
    Push,
    /// Look back from each sub-amount to the best smaller one.
    Pull,
}

/// Settings for [`MinCoinSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Requests for a larger amount are rejected before any allocation.
    pub max_amount: usize,
    /// Fill order of the cost table.
    pub sweep: Sweep,
}

impl SolverConfig {
    /// Create a config with `max_amount` of [`DEFAULT_MAX_AMOUNT`] and the push sweep.
    pub fn new() -> Self {
        Self {
            max_amount: DEFAULT_MAX_AMOUNT,
            sweep: Sweep::Push,
        }
    }

    /// Customize the largest accepted amount, clamped to [`MAX_TABLE_AMOUNT`].
    pub fn with_max_amount(mut self, max_amount: usize) -> Self {
        self.max_amount = max_amount.min(MAX_TABLE_AMOUNT);
        self
    }

    /// Customize the fill order.
    pub fn with_sweep(mut self, sweep: Sweep) -> Self {
        self.sweep = sweep;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimum coin counts for every sub-amount `0..=amount`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostTable {
    slots: Vec<Option<usize>>,
}

impl CostTable {
    fn new(amount: usize) -> Self {
        let mut slots = vec![None; amount + 1];
        slots[0] = Some(0);
        Self { slots }
    }

    /// The target amount this table was built for.
    pub fn amount(&self) -> usize {
        self.slots.len() - 1
    }

    /// Minimum coins for `sub_amount`, `None` if unreachable or out of range.
    pub fn get(&self, sub_amount: usize) -> Option<usize> {
        self.slots.get(sub_amount).copied().flatten()
    }

    /// Minimum coins for the full amount.
    pub fn answer(&self) -> Option<usize> {
        self.slots[self.amount()]
    }

    /// Iterate over all slots in sub-amount order.
    pub fn iter(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.slots.iter().copied()
    }

    fn relax(&mut self, target: usize, candidate: usize) {
        let slot = &mut self.slots[target];
        match *slot {
            Some(current) if current <= candidate => {}
            _ => *slot = Some(candidate),
        }
    }

    fn fill_push(&mut self, coins: &[usize]) {
        let amount = self.amount();
        for i in 0..=amount {
            let Some(count) = self.slots[i] else {
                continue;
            };
            let room = amount - i;
            // `coins` is sorted ascending
            for &coin in coins.iter().take_while(|&&c| c <= room) {
                self.relax(i + coin, count + 1);
            }
        }
    }

    fn fill_pull(&mut self, coins: &[usize]) {
        for i in 1..=self.amount() {
            let best = coins
                .iter()
                .take_while(|&&c| c <= i)
                .filter_map(|&c| self.slots[i - c])
                .min();
            self.slots[i] = best.map(|n| n + 1);
        }
    }

    /// Walk back from the full amount, picking at each step a coin whose
    /// remainder is exactly one coin cheaper.
    fn trace_back(&self, coins: &[usize]) -> Option<Vec<usize>> {
        let mut remaining = self.amount();
        let mut count = self.slots[remaining]?;
        let mut picked = Vec::with_capacity(count);

        while remaining > 0 {
            let coin = coins
                .iter()
                .rev()
                .copied()
                .find(|&c| c <= remaining && self.slots[remaining - c] == Some(count - 1))?;
            picked.push(coin);
            remaining -= coin;
            count -= 1;
        }

        picked.sort_unstable_by(|a, b| b.cmp(a));
        Some(picked)
    }
}

/// Dynamic-programming solver for the minimum-coin change problem.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinCoinSolver {
    config: SolverConfig,
}

impl MinCoinSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Computes the minimum number of coins summing to `amount`.
    ///
    /// # Returns
    /// * `Ok(Some(n))` - the fewest coins that reach `amount`
    /// * `Ok(None)` - no combination of `denominations` reaches `amount`
    /// * `Err(Error)` - a denomination is zero or `amount` exceeds `max_amount`
    ///
    /// # Complexity
    /// * Time: O(amount × |denominations|)
    /// * Space: O(amount)
    pub fn solve(&self, amount: usize, denominations: &[usize]) -> Result<Option<usize>> {
        Ok(self.cost_table(amount, denominations)?.answer())
    }

    /// Builds the full cost table for `amount`.
    pub fn cost_table(&self, amount: usize, denominations: &[usize]) -> Result<CostTable> {
        let coins = self.prepare(amount, denominations)?;
        Ok(self.fill(amount, &coins))
    }

    /// Like [`solve`](Self::solve) but returns one optimal set of coins,
    /// largest first.
    ///
    /// ```rust
    /// use dp_drills::cs::dynamic::coin_change::MinCoinSolver;
    ///
    /// let coins = MinCoinSolver::default().solve_with_coins(11, &[1, 2, 5]).unwrap();
    /// assert_eq!(coins, Some(vec![5, 5, 1]));
    /// ```
    pub fn solve_with_coins(
        &self,
        amount: usize,
        denominations: &[usize],
    ) -> Result<Option<Vec<usize>>> {
        let coins = self.prepare(amount, denominations)?;
        let table = self.fill(amount, &coins);
        let picked = table.trace_back(&coins);
        trace!("reconstructed coins for {}: {:?}", amount, picked);
        Ok(picked)
    }

    /// Computes the number of distinct ways to form `amount`, ignoring
    /// order.
    ///
    /// Each coin can be used any number of times. The count saturates at
    /// `u64::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dp_drills::cs::dynamic::coin_change::MinCoinSolver;
    ///
    /// // 1+1+1+1+1, 1+1+1+2, 1+2+2, 5
    /// assert_eq!(MinCoinSolver::default().count_ways(5, &[1, 2, 5]).unwrap(), 4);
    /// ```
    pub fn count_ways(&self, amount: usize, denominations: &[usize]) -> Result<u64> {
        let coins = self.prepare(amount, denominations)?;

        let mut ways = vec![0_u64; amount + 1];
        ways[0] = 1;

        // Coins outermost so each combination is counted once regardless of order.
        for &coin in &coins {
            for curr in coin..=amount {
                ways[curr] = ways[curr].saturating_add(ways[curr - coin]);
            }
        }

        Ok(ways[amount])
    }

    /// Validates the request and returns the distinct usable coins in
    /// ascending order.
    fn prepare(&self, amount: usize, denominations: &[usize]) -> Result<Vec<usize>> {
        if denominations.contains(&0) {
            return Err(Error::invalid_input("denominations must be positive"));
        }
        // `max_amount` is a public field, so clamp again here
        let max = self.config.max_amount.min(MAX_TABLE_AMOUNT);
        if amount > max {
            return Err(Error::AmountTooLarge { amount, max });
        }

        let mut coins: Vec<usize> = denominations
            .iter()
            .copied()
            .filter(|&c| c <= amount)
            .collect();
        coins.sort_unstable();
        coins.dedup();
        Ok(coins)
    }

    fn fill(&self, amount: usize, coins: &[usize]) -> CostTable {
        debug!(
            "filling cost table: amount={}, coins={}, sweep={:?}",
            amount,
            coins.len(),
            self.config.sweep
        );
        let mut table = CostTable::new(amount);
        match self.config.sweep {
            Sweep::Push => table.fill_push(coins),
            Sweep::Pull => table.fill_pull(coins),
        }
        table
    }
}

/// Minimum coins for `amount` using the default [`SolverConfig`].
pub fn min_coins(amount: usize, denominations: &[usize]) -> Result<Option<usize>> {
    MinCoinSolver::default().solve(amount, denominations)
}

/// Minimum coins for `amount` using `config`.
pub fn min_coins_with(
    config: SolverConfig,
    amount: usize,
    denominations: &[usize],
) -> Result<Option<usize>> {
    MinCoinSolver::new(config).solve(amount, denominations)
}

/// Number of unordered coin combinations summing to `amount`, using the
/// default [`SolverConfig`].
///
/// ```
/// use dp_drills::cs::dynamic::coin_change::count_change_ways;
///
/// assert_eq!(count_change_ways(8, &[2, 4]).unwrap(), 3);
/// ```
pub fn count_change_ways(amount: usize, denominations: &[usize]) -> Result<u64> {
    MinCoinSolver::default().count_ways(amount, denominations)
}
