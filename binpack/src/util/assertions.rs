/// Checks the invariant every packing must satisfy: the bin count can never beat
/// `ceil(total_weight / capacity)` and never exceeds the number of items.
pub fn bin_count_in_bounds(weights: &[u64], capacity: u64, n_bins: usize) -> bool {
    let lower_bound = weights.iter().sum::<u64>().div_ceil(capacity) as usize;
    lower_bound <= n_bins && n_bins <= weights.len()
}
