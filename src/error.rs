//! Error type shared by every sorting entry point.

use crate::core::Tag;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    /// The input mixes element tags. `index` is the first element whose tag
    /// differs from the tag of the first element.
    #[error("expected {expected} element, found {found} at index {index}")]
    MixedOrUnsupportedType {
        expected: Tag,
        found: Tag,
        index: usize,
    },

    /// A concurrent merge task panicked. The whole sort is abandoned.
    #[error("merge worker failed in round {round}: {message}")]
    WorkerFailure { round: usize, message: String },

    #[error("failed to build merge worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("invalid sort configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SortError>;
