pub mod bench;
pub mod diff;
pub mod opcodes;
pub mod ratio;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use seqdiff_core::{JunkPredicate, MatcherOptions, SearchStrategy, SequenceMatcher};
use seqdiff_utils::junk::is_line_junk;
use seqdiff_utils::lines::{read_file, split_lines};

use crate::Cli;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the exact, quick, and real-quick similarity ratios of two files
    Ratio(ratio::RatioArgs),
    /// Print the edit script turning the first file into the second
    Opcodes(opcodes::OpcodesArgs),
    /// Show a unified or context diff of two files
    Diff(diff::DiffArgs),
    /// Time the matcher on two files or on generated similar streams
    Bench(bench::BenchArgs),
}

pub fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Ratio(args) => ratio::run(args, &cli),
        Commands::Opcodes(args) => opcodes::run(args, &cli),
        Commands::Diff(args) => diff::run(args, &cli),
        Commands::Bench(args) => bench::run(args, &cli),
    }
}

/// Inner loop of the longest-match search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Flat arrays indexed by position (fastest)
    #[default]
    Arena,
    /// Sparse hash maps
    HashMap,
}

impl From<StrategyArg> for SearchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Arena => SearchStrategy::Arena,
            StrategyArg::HashMap => SearchStrategy::HashMap,
        }
    }
}

/// Matcher tuning shared by every subcommand.
#[derive(Args, Clone, Debug)]
pub struct MatchArgs {
    /// Disable the popular-element heuristic for long inputs
    #[arg(long)]
    pub no_autojunk: bool,

    /// Never anchor matches on blank lines or lines holding a lone '#'
    #[arg(long)]
    pub junk_lines: bool,

    /// Longest-match search implementation
    #[arg(long, value_enum, default_value_t = StrategyArg::Arena)]
    pub strategy: StrategyArg,
}

impl MatchArgs {
    pub fn options(&self) -> MatcherOptions {
        MatcherOptions::default()
            .autojunk(!self.no_autojunk)
            .strategy(self.strategy.into())
    }

    /// Build a matcher over two line sequences with these settings.
    pub fn matcher<'a>(&self, a: &[&'a [u8]], b: &[&'a [u8]]) -> SequenceMatcher<&'a [u8]> {
        let is_junk = if self.junk_lines {
            let predicate: JunkPredicate<&'a [u8]> = Box::new(|line| is_line_junk(line));
            Some(predicate)
        } else {
            None
        };
        SequenceMatcher::with_options(is_junk, a.iter().copied(), b.iter().copied(), self.options())
    }
}

/// Two input files.
#[derive(Args, Clone, Debug)]
pub struct FilePair {
    /// Old version
    pub old: PathBuf,

    /// New version
    pub new: PathBuf,
}

/// Raw contents of both files of a pair.
pub struct LoadedPair {
    pub old: Vec<u8>,
    pub new: Vec<u8>,
}

impl LoadedPair {
    pub fn read(pair: &FilePair) -> Result<Self> {
        Ok(Self {
            old: load(&pair.old)?,
            new: load(&pair.new)?,
        })
    }

    pub fn lines(&self) -> (Vec<&[u8]>, Vec<&[u8]>) {
        (split_lines(&self.old), split_lines(&self.new))
    }
}

fn load(path: &Path) -> Result<Vec<u8>> {
    let data = read_file(path)?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "read input");
    Ok(data)
}
