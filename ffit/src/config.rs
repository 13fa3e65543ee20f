use binpack::heuristics::Heuristic;
use serde::{Deserialize, Serialize};

/// Configuration for the ffit driver
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FFitConfig {
    /// The heuristics to run on every test case, in reporting order
    #[serde(default = "all_heuristics")]
    pub heuristics: Vec<Heuristic>,
    /// Solve test cases on the rayon thread pool instead of sequentially.
    /// Sound because every heuristic invocation is a pure function of its inputs.
    #[serde(default = "default_parallelize")]
    pub parallelize: bool,
}

impl Default for FFitConfig {
    fn default() -> Self {
        Self {
            heuristics: all_heuristics(),
            parallelize: true,
        }
    }
}

fn all_heuristics() -> Vec<Heuristic> {
    Heuristic::ALL.to_vec()
}

fn default_parallelize() -> bool {
    true
}
