use binpack::entities::BPSolution;
use serde::{Deserialize, Serialize};

use crate::config::FFitConfig;
use crate::solve::CaseReport;

/// Results of a full driver run, serializable to JSON.
#[derive(Serialize, Deserialize, Clone)]
pub struct FFitOutput {
    pub config: FFitConfig,
    pub cases: Vec<CaseOutput>,
}

/// Bin counts for a single test case.
#[derive(Serialize, Deserialize, Clone)]
pub struct CaseOutput {
    pub capacity: u64,
    pub n_items: usize,
    pub solutions: Vec<BPSolution>,
}

impl From<&CaseReport> for CaseOutput {
    fn from(report: &CaseReport) -> Self {
        Self {
            capacity: report.instance.capacity,
            n_items: report.instance.n_items(),
            solutions: report.solutions.clone(),
        }
    }
}
