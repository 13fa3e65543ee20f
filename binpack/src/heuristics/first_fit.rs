use crate::PackResult;
use crate::entities::{OpenBins, validate};
use crate::util::assertions;
use log::debug;

/// Packs each item, in input order, into the earliest opened bin it fits in.
/// A new bin is opened after all existing ones whenever no opened bin can take the item.
///
/// Returns the number of bins opened.
pub fn first_fit(weights: &[u64], capacity: u64) -> PackResult<usize> {
    validate(weights, capacity)?;
    let n_bins = pack_first_fit(weights, capacity);
    debug_assert!(assertions::bin_count_in_bounds(weights, capacity, n_bins));
    Ok(n_bins)
}

/// First-fit placement loop, shared with [`first_fit_decreasing`](crate::heuristics::first_fit_decreasing).
/// Assumes validated input.
pub(super) fn pack_first_fit(weights: &[u64], capacity: u64) -> usize {
    let mut bins = OpenBins::new(capacity);
    for &weight in weights {
        //lowest-index bin with enough room wins
        let fit = bins.remaining().position(|rem| rem >= weight);
        match fit {
            Some(index) => bins.place(index, weight),
            None => {
                let index = bins.open(weight);
                debug!("[FF] no open bin fits weight {weight}, opened bin {index}");
            }
        }
    }
    bins.len()
}
