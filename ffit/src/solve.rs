use anyhow::Result;
use binpack::entities::{BPInstance, BPSolution};
use log::info;
use rayon::prelude::*;

use crate::config::FFitConfig;

/// Bin counts produced by every configured heuristic for a single test case.
#[derive(Debug, Clone)]
pub struct CaseReport {
    pub instance: BPInstance,
    pub solutions: Vec<BPSolution>,
}

/// Runs every configured heuristic on one instance. Each heuristic sees the weights in
/// their original input order.
pub fn solve_case(instance: &BPInstance, config: &FFitConfig) -> Result<Vec<BPSolution>> {
    config
        .heuristics
        .iter()
        .map(|&heuristic| {
            let n_bins = heuristic.solve(&instance.weights, instance.capacity)?;
            info!(
                "[SOLVE] {heuristic} packed {} items into {n_bins} bins (lower bound {})",
                instance.n_items(),
                instance.lower_bound()
            );
            Ok(BPSolution { heuristic, n_bins })
        })
        .collect()
}

/// Solves all instances, on the rayon thread pool when configured.
/// Reports are returned in input order either way.
pub fn solve_all(instances: Vec<BPInstance>, config: &FFitConfig) -> Result<Vec<CaseReport>> {
    let to_report = |instance: BPInstance| -> Result<CaseReport> {
        let solutions = solve_case(&instance, config)?;
        Ok(CaseReport {
            instance,
            solutions,
        })
    };

    match config.parallelize {
        true => instances.into_par_iter().map(to_report).collect(),
        false => instances.into_iter().map(to_report).collect(),
    }
}
