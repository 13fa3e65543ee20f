use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use ffit::config::FFitConfig;
use ffit::io;
use ffit::io::cli::Cli;
use ffit::io::output::{CaseOutput, FFitOutput};
use ffit::solve::solve_all;
use itertools::Itertools;
use log::{info, warn};
use thousands::Separable;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FFitConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed FFitConfig: {config:?}");

    let instances = io::read_instances(args.input_file.as_path())?;
    info!(
        "[MAIN] loaded {} test cases from {:?}",
        instances.len(),
        args.input_file
    );

    let reports = solve_all(instances, &config)?;

    for (case, report) in reports.iter().enumerate() {
        let counts = report
            .solutions
            .iter()
            .map(|sol| format!("{} {}", sol.heuristic, sol.n_bins))
            .join(", ");
        println!("Test case {case}: {counts}");
    }

    let total_items: usize = reports.iter().map(|r| r.instance.n_items()).sum();
    info!(
        "[MAIN] solved {} test cases ({} items total)",
        reports.len(),
        total_items.separate_with_commas()
    );

    if let Some(solution_folder) = args.solution_folder {
        if !solution_folder.exists() {
            fs::create_dir_all(&solution_folder).with_context(|| {
                format!("could not create solution folder: {solution_folder:?}")
            })?;
        }

        let input_stem = args.input_file.file_stem().unwrap().to_str().unwrap();
        let output = FFitOutput {
            config,
            cases: reports.iter().map(CaseOutput::from).collect(),
        };
        let solution_path = solution_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, solution_path.as_path())?;
    }

    Ok(())
}
