use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::str::SplitWhitespace;

use anyhow::{Context, Result};
use binpack::entities::BPInstance;
use log::{LevelFilter, info, warn};

use crate::EPOCH;
use crate::io::output::FFitOutput;

pub mod cli;
pub mod output;

/// Reads test cases in the classic text format: a case count `t`, then per case a bin
/// capacity, an item count `n` and exactly `n` item weights, all whitespace separated.
pub fn read_instances(path: &Path) -> Result<Vec<BPInstance>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    parse_instances(&contents)
}

pub fn parse_instances(contents: &str) -> Result<Vec<BPInstance>> {
    let mut tokens = contents.split_whitespace();
    let n_cases = next_int(&mut tokens, "test case count")?;

    let mut instances = Vec::with_capacity(n_cases as usize);
    for case in 0..n_cases {
        let capacity = next_int(&mut tokens, "bin capacity")?;
        let n_items = next_int(&mut tokens, "item count")?;
        let weights = (0..n_items)
            .map(|_| next_int(&mut tokens, "item weight"))
            .collect::<Result<Vec<u64>>>()?;
        let instance = BPInstance::new(capacity, weights)
            .with_context(|| format!("invalid test case {case}"))?;
        instances.push(instance);
    }

    //exactly `n_cases` test cases are read, whatever follows is not silently re-run
    let n_trailing = tokens.count();
    if n_trailing > 0 {
        warn!("[IO] ignoring {n_trailing} trailing tokens after the last test case");
    }

    Ok(instances)
}

fn next_int(tokens: &mut SplitWhitespace<'_>, what: &str) -> Result<u64> {
    let token = tokens
        .next()
        .with_context(|| format!("unexpected end of input, expected {what}"))?;
    token
        .parse()
        .with_context(|| format!("expected {what}, got {token:?}"))
}

pub fn write_json(output: &FFitOutput, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create results file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, output)
        .with_context(|| format!("could not write results file: {}", path.display()))?;
    info!("[IO] results written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}
