use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while reading a problem or solving it.
///
/// An infeasible coin-change request is not an error; it is reported as
/// `Ok(None)` by the solver.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or out-of-range input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The requested amount does not fit the configured cost table.
    #[error("amount {amount} exceeds the supported maximum of {max}")]
    AmountTooLarge { amount: usize, max: usize },

    /// The input stream ended before a required value was read.
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    /// An intermediate value no longer fits the integer type in use.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),

    /// A sequence revisited a value without reaching its terminal value.
    #[error("sequence starting at {0} revisits a value before reaching 1")]
    Unterminated(u64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// True for every variant that stems from bad caller input rather than
    /// from the environment.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput(_) | Error::AmountTooLarge { .. } | Error::UnexpectedEof(_)
        )
    }
}
