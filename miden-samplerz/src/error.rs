use thiserror::Error;

/// Errors reported by the fallible random sources in [crate::rand].
#[derive(Debug, Error)]
pub enum RandomSourceError {
    /// The source holds fewer bytes than were requested.
    #[error("random source exhausted: requested {requested} bytes but only {available} remain")]
    Exhausted {
        /// Number of bytes requested by the failed read.
        requested: usize,
        /// Number of bytes left in the source.
        available: usize,
    },

    /// The underlying reader failed.
    #[cfg(feature = "std")]
    #[error("failed to read from the underlying reader")]
    Io(#[from] std::io::Error),
}
