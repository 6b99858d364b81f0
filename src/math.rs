//! Number-theoretic sequences.

pub mod collatz;

pub use collatz::{collatz_sequence, same_values_unordered, stopping_time, verify_range};
