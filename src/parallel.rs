//! Tournament merge of a run list on the rayon pool.
//!
//! Each round merges adjacent pairs `(0, 1), (2, 3), ...` concurrently, one
//! task per pair, and carries an odd trailing run over unmerged. A round is a
//! `rayon::scope`, so every task of round `r` finishes before round `r + 1`
//! reads its output. Rounds repeat until one run is left.

use crate::error::{Result, SortError};
use cuneiform::cuneiform;
use log::{error, trace};
use rayon::ThreadPool;
use std::any::Any;
use std::mem;
use std::panic::{self, AssertUnwindSafe};

// Output slot for one pair. Neighbouring slots are written by different
// workers, so each gets its own cache line.
#[cuneiform]
struct RoundSlot<T> {
    run: Vec<T>,
}

/// Reduces `runs` to a single run by rounds of concurrent pairwise `merge`.
///
/// Each task takes its pair by value. Runs inside `pool` when given,
/// otherwise on the global rayon pool. A panic in any task fails the whole
/// call with [`SortError::WorkerFailure`]; no partial result is returned.
pub(crate) fn tournament<T, M>(
    mut runs: Vec<Vec<T>>,
    pool: Option<&ThreadPool>,
    merge: M,
) -> Result<Vec<T>>
where
    T: Send,
    M: Fn(Vec<T>, Vec<T>) -> Vec<T> + Sync,
{
    let mut round = 0;

    while runs.len() > 1 {
        round += 1;
        let live = runs.len();
        let carry = if live % 2 == 1 { runs.pop() } else { None };
        let pairs = mem::take(&mut runs);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| match pool {
            Some(pool) => pool.install(|| merge_round(pairs, &merge)),
            None => merge_round(pairs, &merge),
        }));

        runs = outcome.map_err(|payload| {
            let message = panic_message(payload.as_ref());
            error!("merge worker failed in round {}: {}", round, message);
            SortError::WorkerFailure { round, message }
        })?;

        runs.extend(carry);
        trace!(
            "tournament round {}: {} -> {} runs",
            round,
            live,
            runs.len()
        );
    }

    Ok(runs.pop().unwrap_or_default())
}

/// Merges every adjacent pair of `runs` concurrently and joins.
///
/// `runs.len()` must be even.
fn merge_round<T, M>(runs: Vec<Vec<T>>, merge: &M) -> Vec<Vec<T>>
where
    T: Send,
    M: Fn(Vec<T>, Vec<T>) -> Vec<T> + Sync,
{
    let mut slots: Vec<RoundSlot<T>> = (0..runs.len() / 2)
        .map(|_| RoundSlot { run: Vec::new() })
        .collect();
    let mut pending = runs.into_iter();

    rayon::scope(|scope| {
        for slot in slots.iter_mut() {
            let (Some(left), Some(right)) = (pending.next(), pending.next()) else {
                break;
            };
            scope.spawn(move |_| slot.run = merge(left, right));
        }
    });

    slots.into_iter().map(|slot| slot.run).collect()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NaturalOrder;
    use crate::merge::{merge_runs, merge_two};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn concat(mut a: Vec<i64>, b: Vec<i64>) -> Vec<i64> {
        a.extend(b);
        a
    }

    #[test]
    fn test_pairs_stay_adjacent_and_tail_carries() {
        // With a concatenating "merge" the output order reveals the pairing.
        let runs: Vec<Vec<i64>> = (0..5).map(|i| vec![i]).collect();
        let out = tournament(runs, None, concat).unwrap();
        assert_eq!(out, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_single_and_empty_run_lists() {
        let single = tournament(vec![vec![1i64, 2]], None, concat).unwrap();
        assert_eq!(single, vec![1, 2]);

        let empty = tournament(Vec::<Vec<i64>>::new(), None, concat).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_matches_sequential_fold() {
        let mut rng = StdRng::seed_from_u64(7);
        let runs: Vec<Vec<i64>> = (0..37)
            .map(|_| {
                let len = rng.random_range(0..200);
                let mut run: Vec<i64> = (0..len).map(|_| rng.random_range(-500..500)).collect();
                run.sort();
                run
            })
            .collect();

        let folded = merge_runs(runs.clone());
        let merged = tournament(runs, None, merge_two).unwrap();
        assert_eq!(merged, folded);
    }

    #[test]
    fn test_bounded_pool() {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(2)
            .build()
            .unwrap();
        let runs: Vec<Vec<i64>> = (0..64).rev().map(|i| vec![i, i + 100]).collect();
        let merged = tournament(runs, Some(&pool), merge_two).unwrap();

        let mut expected: Vec<i64> = (0..64).chain(100..164).collect();
        expected.sort();
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_rounds_move_elements() {
        static CLONES: AtomicUsize = AtomicUsize::new(0);

        #[derive(Debug)]
        struct Tracked(String);
        impl Clone for Tracked {
            fn clone(&self) -> Self {
                CLONES.fetch_add(1, Ordering::SeqCst);
                Tracked(self.0.clone())
            }
        }
        impl NaturalOrder for Tracked {
            fn less(&self, other: &Self) -> bool {
                self.0 < other.0
            }
        }

        let runs: Vec<Vec<Tracked>> = (0..33)
            .map(|i| {
                let low = Tracked(format!("{:03}", i));
                let high = Tracked(format!("{:03}", i + 100));
                vec![low, high]
            })
            .collect();
        let merged = tournament(runs, None, merge_two).unwrap();

        assert_eq!(merged.len(), 66);
        assert!(merged.windows(2).all(|w| w[0].0 <= w[1].0));
        assert_eq!(CLONES.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_worker_panic_aborts_with_round() {
        // [4] is carried until round 3, where it is merged with [0, 1, 2, 3].
        let runs: Vec<Vec<i64>> = (0..5).map(|i| vec![i]).collect();
        let result = tournament(runs, None, |a: Vec<i64>, b: Vec<i64>| {
            if b.contains(&4) {
                panic!("poisoned run");
            }
            concat(a, b)
        });

        match result {
            Err(SortError::WorkerFailure { round, message }) => {
                assert_eq!(round, 3);
                assert_eq!(message, "poisoned run");
            }
            other => panic!("expected worker failure, got {:?}", other),
        }
    }

    #[test]
    fn test_formatted_panic_message() {
        let runs: Vec<Vec<i64>> = (0..4).map(|i| vec![i]).collect();
        let result = tournament(runs, None, |a: Vec<i64>, _: Vec<i64>| -> Vec<i64> {
            panic!("bad pair starting at {}", a[0])
        });
        match result {
            Err(SortError::WorkerFailure { round: 1, message }) => {
                assert!(message.starts_with("bad pair starting at "));
            }
            other => panic!("expected worker failure, got {:?}", other),
        }
    }
}
