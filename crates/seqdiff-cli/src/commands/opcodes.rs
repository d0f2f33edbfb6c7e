use std::io::{self, Write};

use anyhow::Result;
use bstr::ByteSlice;
use clap::Args;

use super::{FilePair, LoadedPair, MatchArgs};
use crate::{Cli, OutputFormat};

#[derive(Args)]
pub struct OpcodesArgs {
    #[command(flatten)]
    pub files: FilePair,

    #[command(flatten)]
    pub matching: MatchArgs,

    /// Print matching blocks instead of opcodes
    #[arg(long)]
    pub blocks: bool,

    /// Print the affected lines under each opcode
    #[arg(long, conflicts_with = "blocks")]
    pub lines: bool,
}

pub fn run(args: &OpcodesArgs, cli: &Cli) -> Result<i32> {
    let loaded = LoadedPair::read(&args.files)?;
    let (old, new) = loaded.lines();
    let mut matcher = args.matching.matcher(&old, &new);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.blocks {
        let blocks = matcher.get_matching_blocks();
        match cli.format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(blocks)?)?,
            OutputFormat::Text => {
                for m in blocks {
                    writeln!(out, "{} {} {}", m.a, m.b, m.size)?;
                }
            }
        }
        return Ok(0);
    }

    let codes = matcher.get_opcodes();
    match cli.format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(codes)?)?,
        OutputFormat::Text => {
            for code in codes {
                writeln!(
                    out,
                    "{:>7} a[{}:{}] b[{}:{}]",
                    code.tag.as_str(),
                    code.a_start,
                    code.a_end,
                    code.b_start,
                    code.b_end
                )?;
                if args.lines {
                    for line in &old[code.a_start..code.a_end] {
                        writeln!(out, "  < {}", line.trim_end_with(|c| c == '\n').to_str_lossy())?;
                    }
                    for line in &new[code.b_start..code.b_end] {
                        writeln!(out, "  > {}", line.trim_end_with(|c| c == '\n').to_str_lossy())?;
                    }
                }
            }
        }
    }
    Ok(0)
}
