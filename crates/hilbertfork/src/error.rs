use thiserror::Error;

/// Errors reported by curve construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested order is negative, non‑integral, unparseable, or above
    /// [`MAX_ORDER`](crate::MAX_ORDER).
    #[error("invalid order: {0}")]
    InvalidOrder(String),
}

/// Convenience result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
