//! Tunable parameters for [`crate::Sorter`].

use crate::core::{MIN_RUN, PARALLEL_THRESHOLD};
use crate::error::{Result, SortError};

/// Sorting parameters.
///
/// ```
/// use runsort::{SortConfig, Sorter};
///
/// let config = SortConfig::default().with_min_run(16).with_max_workers(4);
/// let sorter = Sorter::with_config(config).unwrap();
/// assert_eq!(sorter.config().min_run, 16);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortConfig {
    /// Minimum run length before forced insertion-sort extension.
    pub min_run: usize,
    /// Input length at or above which the tournament merge is used.
    pub parallel_threshold: usize,
    /// Thread cap for the tournament merge. `None` uses the global rayon pool.
    pub max_workers: Option<usize>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            min_run: MIN_RUN,
            parallel_threshold: PARALLEL_THRESHOLD,
            max_workers: None,
        }
    }
}

impl SortConfig {
    pub fn with_min_run(mut self, min_run: usize) -> Self {
        self.min_run = min_run;
        self
    }

    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = Some(max_workers);
        self
    }

    /// Rejects parameters the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.min_run == 0 {
            return Err(SortError::InvalidConfig(
                "min_run must be at least 1".into(),
            ));
        }
        if self.max_workers == Some(0) {
            return Err(SortError::InvalidConfig(
                "max_workers must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
