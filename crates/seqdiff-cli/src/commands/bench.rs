use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;
use seqdiff_core::SearchStrategy;
use seqdiff_utils::streams::{SimilarStreams, DEFAULT_SEED};

use super::{FilePair, LoadedPair, MatchArgs, StrategyArg};
use crate::{Cli, OutputFormat};

#[derive(Args)]
pub struct BenchArgs {
    /// Old and new files; generated streams are used when omitted
    #[arg(num_args = 2, value_names = ["OLD", "NEW"])]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub matching: MatchArgs,

    /// Number of iterations
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub niter: u32,

    /// Lines to generate when no files are given
    #[arg(short = 'l', long, default_value_t = 20000)]
    pub lines: usize,

    /// Generated lines to change when no files are given
    #[arg(short = 'd', long, default_value_t = 200)]
    pub diffs: usize,

    /// Seed for generated streams
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Also run the other search strategy and check both agree
    #[arg(long)]
    pub compare: bool,
}

#[derive(Debug, Serialize)]
struct BenchRun {
    strategy: &'static str,
    changed_lines: usize,
    iterations: u32,
    total_ms: f64,
    per_iteration_ms: f64,
}

pub fn run(args: &BenchArgs, cli: &Cli) -> Result<i32> {
    let generated;
    let loaded;
    let (old, new): (Vec<&[u8]>, Vec<&[u8]>) = if let [old, new] = args.files.as_slice() {
        loaded = LoadedPair::read(&FilePair {
            old: old.clone(),
            new: new.clone(),
        })?;
        loaded.lines()
    } else {
        generated = SimilarStreams::generate(args.lines, args.diffs, args.seed)?;
        tracing::debug!(lines = args.lines, diffs = args.diffs, seed = args.seed, "generated similar streams");
        (
            generated.original.iter().map(|l| l.as_slice()).collect(),
            generated.modified.iter().map(|l| l.as_slice()).collect(),
        )
    };

    let mut strategies = vec![args.matching.strategy];
    if args.compare {
        strategies.push(match args.matching.strategy {
            StrategyArg::Arena => StrategyArg::HashMap,
            StrategyArg::HashMap => StrategyArg::Arena,
        });
    }

    let mut runs = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        let mut matching = args.matching.clone();
        matching.strategy = strategy;

        let mut changed = 0;
        let start = Instant::now();
        for _ in 0..args.niter {
            changed = matching.matcher(&old, &new).changed_count();
        }
        let elapsed = start.elapsed();

        let run = BenchRun {
            strategy: strategy_name(strategy.into()),
            changed_lines: changed,
            iterations: args.niter,
            total_ms: millis(elapsed),
            per_iteration_ms: millis(elapsed) / f64::from(args.niter),
        };
        tracing::debug!(strategy = run.strategy, changed, ?elapsed, "bench run finished");
        runs.push(run);
    }

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&runs)?),
        OutputFormat::Text => {
            for run in &runs {
                println!(
                    "Diff from {} is {} ({} iterations, {:.3} ms each)",
                    run.strategy, run.changed_lines, run.iterations, run.per_iteration_ms
                );
            }
        }
    }

    if let [first, second] = runs.as_slice() {
        if first.changed_lines != second.changed_lines {
            bail!(
                "strategies disagree: {} found {} changed lines, {} found {}",
                first.strategy,
                first.changed_lines,
                second.strategy,
                second.changed_lines
            );
        }
    }
    Ok(0)
}

fn strategy_name(strategy: SearchStrategy) -> &'static str {
    match strategy {
        SearchStrategy::Arena => "arena",
        SearchStrategy::HashMap => "hash-map",
    }
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
