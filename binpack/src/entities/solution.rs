use crate::heuristics::Heuristic;
use serde::{Deserialize, Serialize};

/// Result of running a single heuristic on a single instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BPSolution {
    /// The heuristic that produced this solution
    pub heuristic: Heuristic,
    /// Number of bins the heuristic opened
    pub n_bins: usize,
}
