use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use seqdiff_core::format::{render_context, render_unified, RenderOptions};

use super::{FilePair, LoadedPair, MatchArgs};
use crate::Cli;

#[derive(Args)]
pub struct DiffArgs {
    #[command(flatten)]
    pub files: FilePair,

    #[command(flatten)]
    pub matching: MatchArgs,

    /// Number of context lines around each hunk
    #[arg(short = 'U', long = "unified", default_value_t = 3)]
    pub context: usize,

    /// Produce a context diff instead of a unified diff
    #[arg(short = 'c', long = "context")]
    pub context_format: bool,

    /// Label for the old file in the header
    #[arg(long)]
    pub from_label: Option<String>,

    /// Label for the new file in the header
    #[arg(long)]
    pub to_label: Option<String>,

    /// Exit with 1 if the files differ, 0 otherwise
    #[arg(long)]
    pub exit_code: bool,
}

pub fn run(args: &DiffArgs, _cli: &Cli) -> Result<i32> {
    let loaded = LoadedPair::read(&args.files)?;
    let (old, new) = loaded.lines();
    let mut matcher = args.matching.matcher(&old, &new);
    let groups = matcher.get_grouped_opcodes(args.context);

    let options = RenderOptions {
        context: args.context,
        ..RenderOptions::with_labels(
            args.from_label
                .clone()
                .unwrap_or_else(|| args.files.old.display().to_string()),
            args.to_label
                .clone()
                .unwrap_or_else(|| args.files.new.display().to_string()),
        )
    };

    let text = if args.context_format {
        render_context(&old, &new, &groups, &options)
    } else {
        render_unified(&old, &new, &groups, &options)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(text.as_bytes())?;

    if args.exit_code && !groups.is_empty() {
        return Ok(1);
    }
    Ok(0)
}
