//! Reading problems from whitespace-separated input and formatting answers.

use std::fmt::Display;
use std::io::BufRead;

use log::trace;

use crate::error::{Error, Result};

/// Pulls whitespace-separated tokens out of a buffered reader, one line at a
/// time, regardless of how values are spread across lines.
pub struct Scanner<R> {
    reader: R,
    pending: Vec<String>,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
        }
    }

    /// Next raw token; `what` names the value in error messages.
    pub fn token(&mut self, what: &'static str) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(Error::UnexpectedEof(what));
            }
            // stored reversed so `pop` yields tokens in order
            self.pending = line.split_whitespace().rev().map(String::from).collect();
        }
    }

    pub fn next_i64(&mut self, what: &'static str) -> Result<i64> {
        let token = self.token(what)?;
        token.parse().map_err(|_| {
            Error::invalid_input(format!("{} must be an integer, got {:?}", what, token))
        })
    }

    /// Next value, rejected if negative.
    pub fn next_non_negative(&mut self, what: &'static str) -> Result<usize> {
        let value = self.next_i64(what)?;
        usize::try_from(value).map_err(|_| {
            Error::invalid_input(format!("{} must not be negative, got {}", what, value))
        })
    }

    /// Next value, rejected unless strictly positive.
    pub fn next_positive(&mut self, what: &'static str) -> Result<usize> {
        let value = self.next_i64(what)?;
        match usize::try_from(value) {
            Ok(v) if v > 0 => Ok(v),
            _ => Err(Error::invalid_input(format!(
                "{} must be positive, got {}",
                what, value
            ))),
        }
    }
}

/// A minimum-coins request as read from input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinProblem {
    pub amount: usize,
    pub denominations: Vec<usize>,
}

/// Reads `n x` followed by `n` denominations.
///
/// The amount is checked against `max_amount` before the denominations are
/// read, so an oversized request fails without consuming the rest of the
/// input.
pub fn read_coin_problem<R: BufRead>(reader: R, max_amount: usize) -> Result<CoinProblem> {
    let mut scanner = Scanner::new(reader);
    let count = scanner.next_non_negative("denomination count")?;
    let amount = scanner.next_non_negative("amount")?;
    if amount > max_amount {
        return Err(Error::AmountTooLarge {
            amount,
            max: max_amount,
        });
    }

    let mut denominations = Vec::new();
    for _ in 0..count {
        denominations.push(scanner.next_positive("denomination")?);
    }
    trace!(
        "read coin problem: amount={}, denominations={:?}",
        amount,
        denominations
    );

    Ok(CoinProblem {
        amount,
        denominations,
    })
}

/// Reads the single positive starting value of a Collatz sequence.
pub fn read_collatz_start<R: BufRead>(reader: R) -> Result<u64> {
    let mut scanner = Scanner::new(reader);
    let start = scanner.next_positive("collatz start")?;
    Ok(start as u64)
}

/// `-1` for an infeasible request, the count otherwise.
pub fn format_min_coins(result: Option<usize>) -> String {
    match result {
        Some(count) => count.to_string(),
        None => "-1".to_string(),
    }
}

/// Space-separated values on one line.
pub fn format_sequence<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
