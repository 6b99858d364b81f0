//! # Collatz sequences
//!
//! Starting from a positive integer `n`, repeatedly halve it when even or map
//! it to `3n + 1` when odd, until the value reaches 1.
//!
//! ```rust
//! use dp_drills::math::collatz::collatz_sequence;
//!
//! assert_eq!(collatz_sequence(6u32).unwrap(), vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);
//! ```

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use log::debug;
use num_integer::Integer;
use num_traits::{PrimInt, Unsigned};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{Error, Result};

/// One Collatz step, failing if `3n + 1` does not fit in `T`.
fn step<T>(n: T) -> Result<T>
where
    T: PrimInt + Unsigned + Integer + Display,
{
    let two = T::one() + T::one();
    if n.is_even() {
        return Ok(n / two);
    }
    let three = two + T::one();
    n.checked_mul(&three)
        .and_then(|m| m.checked_add(&T::one()))
        .ok_or_else(|| Error::Overflow(format!("3 * {} + 1", n)))
}

fn require_positive<T>(start: T) -> Result<()>
where
    T: PrimInt + Unsigned + Integer + Display,
{
    if start.is_zero() {
        return Err(Error::invalid_input("collatz start must be positive"));
    }
    Ok(())
}

/// Returns every value visited from `start` down to and including 1.
///
/// A value is never emitted twice: the walk stops as soon as it would revisit
/// one, so the output is always a list of distinct values.
///
/// # Errors
/// * `Error::InvalidInput` if `start` is zero
/// * `Error::Overflow` if a `3n + 1` step does not fit in `T`
pub fn collatz_sequence<T>(start: T) -> Result<Vec<T>>
where
    T: PrimInt + Unsigned + Integer + Hash + Display,
{
    require_positive(start)?;

    let mut visited = HashSet::new();
    let mut sequence = Vec::new();
    let mut n = start;

    while visited.insert(n) {
        sequence.push(n);
        if n == T::one() {
            break;
        }
        n = step(n)?;
    }

    Ok(sequence)
}

/// Number of steps needed for `start` to reach 1.
///
/// ```rust
/// use dp_drills::math::collatz::stopping_time;
///
/// assert_eq!(stopping_time(27u64).unwrap(), 111);
/// ```
pub fn stopping_time<T>(start: T) -> Result<usize>
where
    T: PrimInt + Unsigned + Integer + Display,
{
    require_positive(start)?;

    let mut steps = 0;
    let mut n = start;
    while n != T::one() {
        n = step(n)?;
        steps += 1;
    }
    Ok(steps)
}

fn check_start(start: u64) -> Result<()> {
    let sequence = collatz_sequence(start)?;
    match sequence.last() {
        Some(&1) => Ok(()),
        _ => Err(Error::Unterminated(start)),
    }
}

/// Checks that every start in `lo..=hi` reaches 1 without revisiting a value.
///
/// Runs on the rayon pool when the `parallel` feature is enabled.
pub fn verify_range(lo: u64, hi: u64) -> Result<()> {
    if lo == 0 {
        return Err(Error::invalid_input("range must start at a positive value"));
    }
    if lo > hi {
        return Err(Error::invalid_input(format!(
            "empty range: {} > {}",
            lo, hi
        )));
    }
    debug!("verifying collatz starts {}..={}", lo, hi);
    check_all(lo, hi)
}

#[cfg(feature = "parallel")]
fn check_all(lo: u64, hi: u64) -> Result<()> {
    (lo..=hi).into_par_iter().try_for_each(check_start)
}

#[cfg(not(feature = "parallel"))]
fn check_all(lo: u64, hi: u64) -> Result<()> {
    (lo..=hi).try_for_each(check_start)
}

/// Compares two whitespace-separated lists of numbers as multisets.
///
/// Tokens are read as decimal floating-point numbers, so `1.0` equals `1`.
/// Blank text counts as the single value `0`. A token that is not a number
/// never equals anything, so any such token makes the lists unequal. Hex
/// literals such as `0x10` are not recognised.
pub fn same_values_unordered(output: &str, answer: &str) -> bool {
    fn sorted(text: &str) -> Vec<f64> {
        let text = text.trim();
        let mut values: Vec<f64> = if text.is_empty() {
            vec![0.0]
        } else {
            text.split_whitespace()
                .map(|token| token.parse::<f64>().unwrap_or(f64::NAN))
                .collect()
        };
        values.sort_unstable_by(f64::total_cmp);
        values
    }

    let (a, b) = (sorted(output), sorted(answer));
    a.len() == b.len() && a.iter().zip(&b).all(|(x, y)| x == y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_sequence() {
        assert_eq!(
            collatz_sequence(3u64).unwrap(),
            vec![3, 10, 5, 16, 8, 4, 2, 1]
        );
    }

    #[test]
    fn test_start_at_one() {
        assert_eq!(collatz_sequence(1u8).unwrap(), vec![1]);
        assert_eq!(stopping_time(1u8).unwrap(), 0);
    }

    #[test]
    fn test_zero_rejected() {
        assert!(matches!(
            collatz_sequence(0u32).unwrap_err(),
            Error::InvalidInput(_)
        ));
        assert!(matches!(
            stopping_time(0u32).unwrap_err(),
            Error::InvalidInput(_)
        ));
    }

    #[test]
    fn test_overflow_reported() {
        // 3 * 255 + 1 does not fit in a u8
        assert!(matches!(
            collatz_sequence(255u8).unwrap_err(),
            Error::Overflow(_)
        ));
        // 27 climbs to 9232
        assert!(matches!(stopping_time(27u8).unwrap_err(), Error::Overflow(_)));
        assert_eq!(stopping_time(27u16).unwrap(), 111);
    }

    #[test]
    fn test_distinct_and_terminates() {
        for start in 1u64..=2000 {
            let sequence = collatz_sequence(start).unwrap();
            assert_eq!(sequence.first(), Some(&start));
            assert_eq!(sequence.last(), Some(&1));
            let distinct: HashSet<_> = sequence.iter().collect();
            assert_eq!(distinct.len(), sequence.len());
            assert_eq!(stopping_time(start).unwrap(), sequence.len() - 1);
        }
    }

    #[test]
    fn test_long_stopping_time() {
        assert_eq!(stopping_time(837_799u64).unwrap(), 524);
    }

    #[test]
    fn test_verify_range() {
        assert!(verify_range(1, 10_000).is_ok());
        assert!(verify_range(42, 42).is_ok());
        assert!(matches!(verify_range(0, 10).unwrap_err(), Error::InvalidInput(_)));
        assert!(matches!(verify_range(10, 9).unwrap_err(), Error::InvalidInput(_)));
        assert!(matches!(
            verify_range(u64::MAX - 1, u64::MAX).unwrap_err(),
            Error::Overflow(_)
        ));
    }

    #[test]
    fn test_same_values_unordered() {
        assert!(same_values_unordered("3 10 5 16 8 4 2 1", "1 2 3 4 5 8 10 16"));
        assert!(same_values_unordered("1 2 ", "\n2\n1"));
        assert!(!same_values_unordered("1 2", "1 2 2"));
        assert!(!same_values_unordered("1 x", "1 x"));
        assert!(same_values_unordered("", "   "));
    }

    #[test]
    fn test_same_values_unordered_numeric_forms() {
        assert!(same_values_unordered("1.0 2", "2 1"));
        assert!(same_values_unordered("16 8e0", "8 16.00"));
        assert!(same_values_unordered("", "0"));
        assert!(!same_values_unordered("", "1"));
        assert!(!same_values_unordered("NaN", "NaN"));
    }
}
