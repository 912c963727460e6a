//! Two-way merge and the sequential left fold over a run list.

use crate::core::NaturalOrder;

/// Merges two ascending runs into a new ascending vector.
///
/// The front of `left` is taken only when it is strictly less than the front
/// of `right`; ties go to `right`. Both runs are consumed, so elements are
/// moved rather than cloned.
///
/// Cost: `O(n + m)` comparisons and moves.
pub(crate) fn merge_two<T: NaturalOrder>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if l.less(r) {
            merged.extend(left.next());
        } else {
            merged.extend(right.next());
        }
    }

    merged.extend(left);
    merged.extend(right);
    merged
}

/// Folds `runs` left to right: `acc = merge_two(acc, run)`.
///
/// `O(n * k)` for `k` runs.
pub(crate) fn merge_runs<T: NaturalOrder>(runs: Vec<Vec<T>>) -> Vec<T> {
    let mut runs = runs.into_iter();
    let Some(first) = runs.next() else {
        return Vec::new();
    };
    runs.fold(first, merge_two)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_merge_two() {
        let merged = merge_two(vec![1i64, 4, 9], vec![2, 3, 10, 11]);
        assert_eq!(merged, vec![1, 2, 3, 4, 9, 10, 11]);
    }

    #[test]
    fn test_merge_two_with_empty_side() {
        assert_eq!(merge_two(vec![], vec![1i64, 2]), vec![1, 2]);
        assert_eq!(merge_two(vec![1i64, 2], vec![]), vec![1, 2]);
        assert!(merge_two::<i64>(vec![], vec![]).is_empty());
    }

    #[test]
    fn test_ties_favor_right() {
        #[derive(Debug, PartialEq)]
        struct Keyed(i64, &'static str);
        impl NaturalOrder for Keyed {
            fn less(&self, other: &Self) -> bool {
                self.0 < other.0
            }
        }

        let merged = merge_two(vec![Keyed(1, "left")], vec![Keyed(1, "right")]);
        assert_eq!(merged, vec![Keyed(1, "right"), Keyed(1, "left")]);
    }

    #[test]
    fn test_merging_moves_elements() {
        static CLONES: AtomicUsize = AtomicUsize::new(0);

        #[derive(Debug, PartialEq)]
        struct Tracked(i64);
        impl Clone for Tracked {
            fn clone(&self) -> Self {
                CLONES.fetch_add(1, Ordering::SeqCst);
                Tracked(self.0)
            }
        }
        impl NaturalOrder for Tracked {
            fn less(&self, other: &Self) -> bool {
                self.0 < other.0
            }
        }

        let runs: Vec<Vec<Tracked>> = (0..10)
            .map(|i| (0..20).map(|j| Tracked(j * 10 + i)).collect())
            .collect();
        let merged = merge_runs(runs);

        assert_eq!(merged.len(), 200);
        assert!(merged.windows(2).all(|w| w[0].0 <= w[1].0));
        assert_eq!(CLONES.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_merge_runs_fold() {
        let runs = vec![vec![5i64, 6], vec![1, 9], vec![0, 2, 3]];
        assert_eq!(merge_runs(runs), vec![0, 1, 2, 3, 5, 6, 9]);
    }

    #[test]
    fn test_merge_runs_edge_cases() {
        assert!(merge_runs::<i64>(vec![]).is_empty());
        assert_eq!(merge_runs(vec![vec![3i64, 4]]), vec![3, 4]);
    }
}
