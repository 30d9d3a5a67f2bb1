//! Error types for the orders crate.

use crate::store::StoreError;
use foodshare_core::{Error, ErrorCode};
use thiserror::Error;

/// Result type alias for order and catalog operations.
pub type Result<T> = std::result::Result<T, OrderError>;

/// Failures that are not ordinary outcomes.
///
/// Not-found, wrong-state and bad-input answers are carried by
/// [`crate::Outcome`]; only the store itself failing ends up here.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The record store could not be read or written
    #[error("Storage failure: {0}")]
    Storage(#[from] StoreError),
}

impl From<OrderError> for Error {
    fn from(err: OrderError) -> Self {
        let OrderError::Storage(store) = err;
        let code = match &store {
            StoreError::Io { .. } => ErrorCode::StoreUnavailable,
            StoreError::Serialization(_) | StoreError::Corrupted(_) => ErrorCode::StoreCorrupted,
            StoreError::LockPoisoned => ErrorCode::LockPoisoned,
        };
        Error::new(code, store.to_string()).with_source(store)
    }
}
