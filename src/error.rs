//! Error types for skelly operations.
//!
//! This module defines custom error types that provide better error handling
//! than panicking, allowing applications to gracefully handle failures.

use std::fmt;

/// Errors that can occur during skelly operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkellyError {
    /// An executor was requested with a worker count that cannot run anything.
    InvalidWorkers {
        /// The worker count that was requested.
        requested: usize,
    },
    /// The underlying thread pool could not be constructed.
    ThreadPool {
        /// The worker count the pool was being built with.
        workers: usize,
        /// Human-readable error message.
        message: String,
    },
    /// A gather filter entry pointed outside the source slice.
    IndexOutOfBounds {
        /// Position in the filter slice holding the offending entry.
        position: usize,
        /// The offending source index.
        index: usize,
        /// Length of the source slice.
        len: usize,
    },
}

impl fmt::Display for SkellyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkellyError::InvalidWorkers { requested } => write!(
                f,
                "Invalid worker count: an executor needs at least one worker (requested {})",
                requested
            ),
            SkellyError::ThreadPool { workers, message } => write!(
                f,
                "Thread pool construction failed: {} (requested {} workers)",
                message, workers
            ),
            SkellyError::IndexOutOfBounds {
                position,
                index,
                len,
            } => write!(
                f,
                "Gather index out of bounds: filter[{}] = {} but the source has {} elements",
                position, index, len
            ),
        }
    }
}

impl std::error::Error for SkellyError {}

/// Result type alias for skelly operations.
pub type Result<T> = std::result::Result<T, SkellyError>;

/// Creates an invalid worker count error.
pub fn invalid_workers(requested: usize) -> SkellyError {
    SkellyError::InvalidWorkers { requested }
}

/// Creates a thread pool construction error.
pub fn thread_pool_error(workers: usize, message: impl Into<String>) -> SkellyError {
    SkellyError::ThreadPool {
        workers,
        message: message.into(),
    }
}

/// Creates a gather index error.
pub fn index_out_of_bounds(position: usize, index: usize, len: usize) -> SkellyError {
    SkellyError::IndexOutOfBounds {
        position,
        index,
        len,
    }
}
