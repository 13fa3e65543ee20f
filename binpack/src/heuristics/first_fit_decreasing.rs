use crate::PackResult;
use crate::entities::validate;
use crate::heuristics::first_fit::pack_first_fit;
use crate::util::assertions;
use itertools::Itertools;
use std::cmp::Reverse;

/// Sorts a copy of the weights in non-increasing order, then packs the copy with
/// first-fit placement. The caller's slice is left untouched.
///
/// Returns the number of bins opened.
pub fn first_fit_decreasing(weights: &[u64], capacity: u64) -> PackResult<usize> {
    validate(weights, capacity)?;
    let decreasing = weights
        .iter()
        .copied()
        .sorted_unstable_by_key(|&w| Reverse(w))
        .collect_vec();
    let n_bins = pack_first_fit(&decreasing, capacity);
    debug_assert!(assertions::bin_count_in_bounds(weights, capacity, n_bins));
    Ok(n_bins)
}
