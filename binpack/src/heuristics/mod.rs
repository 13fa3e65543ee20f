//! The three packing heuristics.
//!
//! All of them are pure functions of their inputs: each invocation operates on its own
//! bin state, never mutates the caller's weights and holds no state across calls.

mod best_fit;
mod first_fit;
mod first_fit_decreasing;

#[doc(inline)]
pub use best_fit::best_fit;
#[doc(inline)]
pub use first_fit::first_fit;
#[doc(inline)]
pub use first_fit_decreasing::first_fit_decreasing;

use crate::PackResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The heuristics available to solve an instance with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    FirstFit,
    FirstFitDecreasing,
    BestFit,
}

impl Heuristic {
    /// All heuristics, in the order they are conventionally reported.
    pub const ALL: [Heuristic; 3] = [
        Heuristic::FirstFit,
        Heuristic::FirstFitDecreasing,
        Heuristic::BestFit,
    ];

    /// Runs this heuristic on `weights` with bins of uniform `capacity`.
    pub fn solve(&self, weights: &[u64], capacity: u64) -> PackResult<usize> {
        match self {
            Heuristic::FirstFit => first_fit(weights, capacity),
            Heuristic::FirstFitDecreasing => first_fit_decreasing(weights, capacity),
            Heuristic::BestFit => best_fit(weights, capacity),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Heuristic::FirstFit => "first-fit",
            Heuristic::FirstFitDecreasing => "first-fit-decreasing",
            Heuristic::BestFit => "best-fit",
        })
    }
}
