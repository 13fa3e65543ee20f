use crate::PackResult;
use crate::entities::{OpenBins, validate};
use crate::util::assertions;
use log::debug;

/// Packs each item, in input order, into the opened bin that leaves the least room
/// after placement. Ties keep the earliest-scanned bin. A new bin is opened after all
/// existing ones whenever no opened bin can take the item.
///
/// Returns the number of bins opened.
pub fn best_fit(weights: &[u64], capacity: u64) -> PackResult<usize> {
    validate(weights, capacity)?;
    let mut bins = OpenBins::new(capacity);
    for &weight in weights {
        //min_by_key keeps the first of equally tight bins, so ties go to the earliest opened one
        let tightest = bins
            .remaining()
            .enumerate()
            .filter(|&(_, rem)| rem >= weight)
            .min_by_key(|&(_, rem)| rem - weight);
        match tightest {
            Some((index, _)) => bins.place(index, weight),
            None => {
                let index = bins.open(weight);
                debug!("[BF] no open bin fits weight {weight}, opened bin {index}");
            }
        }
    }
    let n_bins = bins.len();
    debug_assert!(assertions::bin_count_in_bounds(weights, capacity, n_bins));
    Ok(n_bins)
}
