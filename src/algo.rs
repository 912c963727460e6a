//! Sorting entry points.
//!
//! The engine is an adaptive natural merge sort:
//! - **Run detection**: one forward pass splits the input into ascending runs,
//!   reversing descending spans and padding short runs to `min_run` with an
//!   insertion sort.
//! - **Sequential fold**: below `parallel_threshold`, runs are merged left to right.
//! - **Tournament**: at or above it, runs are merged pairwise in concurrent rounds.
//!
//! The main entry points are [`sort`], [`try_sort`] and [`sort_values`].

use crate::config::SortConfig;
use crate::core::{Element, NaturalOrder};
use crate::dispatch::Homogeneous;
use crate::error::{Result, SortError};
use crate::merge::{merge_runs, merge_two};
use crate::parallel::tournament;
use crate::runs::find_runs;
use log::{debug, warn};

/// How a sort call merges its runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Sequential,
    Tournament,
}

/// A sorting engine bound to a [`SortConfig`].
///
/// Holds no state between calls; every call copies its input and owns all
/// intermediate runs.
#[derive(Clone, Debug, Default)]
pub struct Sorter {
    config: SortConfig,
}

impl Sorter {
    /// A sorter with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A sorter with `config`, rejected if [`SortConfig::validate`] fails.
    pub fn with_config(config: SortConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// The merge strategy used for an input of `len` elements.
    pub fn strategy_for(&self, len: usize) -> Strategy {
        if len >= self.config.parallel_threshold {
            Strategy::Tournament
        } else {
            Strategy::Sequential
        }
    }

    /// Sorts a tagged sequence ascending by its tag's natural order.
    ///
    /// If the input mixes tags, the input values are returned unchanged and no
    /// error is reported; use [`Sorter::try_sort`] to observe the mismatch.
    /// Only a merge worker failure is returned as `Err`.
    pub fn sort(&self, input: &[Element]) -> Result<Vec<Element>> {
        match self.try_sort(input) {
            Err(SortError::MixedOrUnsupportedType {
                expected,
                found,
                index,
            }) => {
                warn!(
                    "returning input unsorted: expected {} but found {} at index {}",
                    expected, found, index
                );
                Ok(input.to_vec())
            }
            other => other,
        }
    }

    /// Sorts a tagged sequence, failing with
    /// [`SortError::MixedOrUnsupportedType`] if the input mixes tags.
    pub fn try_sort(&self, input: &[Element]) -> Result<Vec<Element>> {
        let sorted = match Homogeneous::from_elements(input)? {
            Homogeneous::Empty => Homogeneous::Empty,
            Homogeneous::Texts(v) => Homogeneous::Texts(self.sort_owned(v)?),
            Homogeneous::Integers(v) => Homogeneous::Integers(self.sort_owned(v)?),
            Homogeneous::Floats(v) => Homogeneous::Floats(self.sort_owned(v)?),
        };
        Ok(sorted.into_elements())
    }

    /// Sorts a slice of any [`NaturalOrder`] type into a new vector.
    ///
    /// `input` is never modified.
    pub fn sort_values<T>(&self, input: &[T]) -> Result<Vec<T>>
    where
        T: NaturalOrder + Clone + Send,
    {
        self.sort_owned(input.to_vec())
    }

    fn sort_owned<T>(&self, data: Vec<T>) -> Result<Vec<T>>
    where
        T: NaturalOrder + Clone + Send,
    {
        let len = data.len();
        if len == 0 {
            return Ok(data);
        }

        let mut runs = find_runs(data, self.config.min_run);
        if runs.len() == 1 {
            return Ok(runs.pop().unwrap_or_default());
        }

        let strategy = self.strategy_for(len);
        debug!(
            "sorting {} elements: {} runs, {:?} merge",
            len,
            runs.len(),
            strategy
        );

        match strategy {
            Strategy::Sequential => Ok(merge_runs(runs)),
            Strategy::Tournament => match self.config.max_workers {
                Some(workers) => {
                    let pool = rayon::ThreadPoolBuilder::new()
                        .num_threads(workers)
                        .build()?;
                    tournament(runs, Some(&pool), merge_two)
                }
                None => tournament(runs, None, merge_two),
            },
        }
    }
}

/// Sorts a tagged sequence with the default configuration.
///
/// Mixed-tag input is returned unchanged. See [`Sorter::sort`].
///
/// # Examples
///
/// ```
/// use runsort::{Element, sort};
///
/// let input: Vec<Element> = vec!["banana".into(), "apple".into(), "cherry".into()];
/// let sorted = sort(&input).unwrap();
///
/// let expected: Vec<Element> = vec!["apple".into(), "banana".into(), "cherry".into()];
/// assert_eq!(sorted, expected);
/// ```
pub fn sort(input: &[Element]) -> Result<Vec<Element>> {
    Sorter::new().sort(input)
}

/// Sorts a tagged sequence with the default configuration, reporting mixed tags.
///
/// # Examples
///
/// ```
/// use runsort::{Element, SortError, try_sort};
///
/// let input: Vec<Element> = vec![1.into(), "a".into(), 2.into()];
/// assert!(matches!(
///     try_sort(&input),
///     Err(SortError::MixedOrUnsupportedType { index: 1, .. })
/// ));
/// ```
pub fn try_sort(input: &[Element]) -> Result<Vec<Element>> {
    Sorter::new().try_sort(input)
}

/// Sorts a slice of [`NaturalOrder`] values with the default configuration.
///
/// # Examples
///
/// ```
/// use runsort::sort_values;
///
/// let sorted = sort_values(&[5i64, 3, 8, 1]).unwrap();
/// assert_eq!(sorted, vec![1, 3, 5, 8]);
/// ```
pub fn sort_values<T>(input: &[T]) -> Result<Vec<T>>
where
    T: NaturalOrder + Clone + Send,
{
    Sorter::new().sort_values(input)
}
