//! # Runsort
//!
//! `runsort` is an adaptive hybrid sorting library for in-memory sequences of
//! homogeneous primitive values: text, integers, or floats.
//!
//! It detects ordered runs already present in the input so partially sorted data
//! costs fewer comparisons, and switches to a concurrent merge for large inputs.
//!
//! ## Key Features
//!
//! - **Run Detection**: A single forward pass finds ascending and descending runs.
//!   Descending runs are reversed rather than re-sorted; runs shorter than
//!   [`MIN_RUN`] are padded with a bounded insertion sort.
//! - **Adaptive Merge**: Below [`PARALLEL_THRESHOLD`] elements runs are folded left
//!   to right. At or above it they are merged in a round-based tournament on the
//!   rayon pool, one task per pair, with a join between rounds.
//! - **Non-destructive**: Every call returns a new vector; the input is never mutated.
//! - **Generic Core**: The three element tags are instantiations of one engine over
//!   the [`NaturalOrder`] trait, which other types can implement too.
//!
//! ## Usage
//!
//! ### Tagged Elements
//!
//! ```rust
//! use runsort::{Element, sort};
//!
//! let input: Vec<Element> = vec![5.into(), 3.into(), 8.into(), 1.into()];
//! let sorted = sort(&input).unwrap();
//!
//! let expected: Vec<Element> = vec![1.into(), 3.into(), 5.into(), 8.into()];
//! assert_eq!(sorted, expected);
//! ```
//!
//! A sequence that mixes tags is returned unchanged by [`sort`]. Use [`try_sort`]
//! to get a [`SortError::MixedOrUnsupportedType`] instead.
//!
//! ### Plain Values and Tuning
//!
//! ```rust
//! use runsort::{SortConfig, Sorter};
//!
//! let sorter = Sorter::with_config(
//!     SortConfig::default()
//!         .with_parallel_threshold(50_000)
//!         .with_max_workers(4),
//! )
//! .unwrap();
//!
//! let sorted = sorter.sort_values(&[1.5, -2.0, 0.0]).unwrap();
//! assert_eq!(sorted, vec![-2.0, 0.0, 1.5]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Best Case**: O(N) for input that is already sorted or reverse sorted.
//! - **Sequential Merge**: O(N * K) for K runs, where K is at most N / [`MIN_RUN`] + 1.
//! - **Tournament Merge**: O(N log K) work over about log2(K) rounds.
//! - **Memory Overhead**: Runs are materialized as owned copies; peak usage is a
//!   small multiple of the input size.
//!
//! Equal elements are not guaranteed to keep their input order.

pub mod algo;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod error;
mod merge;
mod parallel;
mod runs;

pub use crate::algo::{Sorter, Strategy, sort, sort_values, try_sort};
pub use crate::config::SortConfig;
pub use crate::core::{Element, MIN_RUN, NaturalOrder, PARALLEL_THRESHOLD, Tag};
pub use crate::error::{Result, SortError};

pub mod prelude {
    pub use crate::algo::{Sorter, sort, sort_values, try_sort};
    pub use crate::config::SortConfig;
    pub use crate::core::{Element, NaturalOrder, Tag};
    pub use crate::error::SortError;
}
