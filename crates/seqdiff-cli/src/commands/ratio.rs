use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::{FilePair, LoadedPair, MatchArgs};
use crate::{Cli, OutputFormat};

#[derive(Args)]
pub struct RatioArgs {
    #[command(flatten)]
    pub files: FilePair,

    #[command(flatten)]
    pub matching: MatchArgs,
}

#[derive(Debug, Serialize)]
struct Ratios {
    ratio: f64,
    quick_ratio: f64,
    real_quick_ratio: f64,
}

pub fn run(args: &RatioArgs, cli: &Cli) -> Result<i32> {
    let loaded = LoadedPair::read(&args.files)?;
    let (old, new) = loaded.lines();
    let mut matcher = args.matching.matcher(&old, &new);

    let ratios = Ratios {
        real_quick_ratio: matcher.real_quick_ratio(),
        quick_ratio: matcher.quick_ratio(),
        ratio: matcher.ratio(),
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ratios)?),
        OutputFormat::Text => {
            println!("ratio: {:.6}", ratios.ratio);
            println!("quick_ratio: {:.6}", ratios.quick_ratio);
            println!("real_quick_ratio: {:.6}", ratios.real_quick_ratio);
        }
    }
    Ok(0)
}
