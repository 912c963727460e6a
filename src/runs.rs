//! Run detection and the bounded insertion sort used to pad short runs.

use crate::core::NaturalOrder;

/// Sorts `run` in place by insertion.
///
/// `O(k^2)` for `k = run.len()`. Only called on spans of at most `min_run`
/// elements, so run detection stays linear overall.
pub(crate) fn insertion_sort<T: NaturalOrder>(run: &mut [T]) {
    for i in 1..run.len() {
        let mut j = i;
        while j > 0 && run[j].less(&run[j - 1]) {
            run.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Returns the exclusive end of the natural run starting at `lo`, reversing
/// it in place first if it is descending.
///
/// A run is descending when `data[lo + 1] < data[lo]`, and then extends only
/// while strictly descending so reversal never moves equal elements past one
/// another. Ascending runs extend while non-decreasing.
fn natural_run_end<T: NaturalOrder>(data: &mut [T], lo: usize) -> usize {
    let n = data.len();
    let mut hi = lo + 1;
    if hi >= n {
        return n;
    }

    if data[hi].less(&data[lo]) {
        while hi + 1 < n && data[hi + 1].less(&data[hi]) {
            hi += 1;
        }
        data[lo..=hi].reverse();
    } else {
        while hi + 1 < n && !data[hi + 1].less(&data[hi]) {
            hi += 1;
        }
    }

    hi + 1
}

/// Splits `data` into ascending runs covering it end to end.
///
/// Each run is a detected natural run, or, if that is shorter than `min_run`,
/// the span `lo..min(lo + min_run, n)` insertion sorted. Runs are emitted as
/// owned copies in input order.
pub(crate) fn find_runs<T: NaturalOrder + Clone>(
    mut data: Vec<T>,
    min_run: usize,
) -> Vec<Vec<T>> {
    let n = data.len();
    let min_run = min_run.max(1);
    let mut runs = Vec::with_capacity(n / min_run + 1);
    let mut lo = 0;

    while lo < n {
        let mut end = natural_run_end(&mut data, lo);

        if end - lo < min_run {
            end = (lo + min_run).min(n);
            insertion_sort(&mut data[lo..end]);
        }

        runs.push(data[lo..end].to_vec());
        lo = end;
    }

    runs
}
