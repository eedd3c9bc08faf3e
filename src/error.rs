use thiserror::Error;

/// Errors returned by the batch window functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The window size is outside `[1, len]`.
    ///
    /// Returned for a zero or negative window, and for a window longer than
    /// the input sequence. An empty input therefore always fails.
    #[error("invalid window {window}: expected a value in [1, {len}]")]
    InvalidWindow {
        /// The window size that was requested.
        window: i128,
        /// The length of the input sequence.
        len: usize,
    },
}

/// Result alias for the crate's fallible operations.
pub type Result<T> = core::result::Result<T, Error>;
