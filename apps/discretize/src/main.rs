//! Pre-partitions a fixed-size arena into free-list init lengths for the
//! array arena allocator and writes them out as a C header.
//!
//! ```bash
//! discretize 10000
//! discretize 10000 --output cfg/array_arena_cfg.h --no-color
//! discretize 10000 --strategy largest-first
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};
use partition::{BlockSizeSet, Strategy, split_arena_with};
use report::theme::paint;
use report::{HEADER_FILE_NAME, Theme, header_content, layout_lines, summary_lines, write_header};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "discretize")]
#[command(about = "Split an arena into per-size block counts for the array arena allocator")]
#[command(version)]
struct Args {
    /// Arena size in bytes
    arena_size: usize,

    /// Path of the generated header
    #[arg(long, default_value = "cfg/array_arena_cfg.h")]
    output: PathBuf,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Distribution strategy
    #[arg(long, value_enum, default_value = "alternating")]
    strategy: StrategyArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Widest distribution via the alternating walk
    Alternating,
    /// Greedy, largest size first
    LargestFirst,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Alternating => Strategy::AlternatingWalk,
            StrategyArg::LargestFirst => Strategy::LargestFirst,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let sizes = BlockSizeSet::default();
    let plan = split_arena_with(args.arena_size, &sizes, args.strategy.into())
        .context("failed to split the arena")?;
    debug!(
        arena_size = plan.arena_size(),
        allocated = plan.allocated_bytes(),
        gap = plan.gap(),
        "arena split"
    );

    let theme = if args.no_color {
        Theme::plain()
    } else {
        Theme::default()
    };
    for line in summary_lines(&plan, &theme) {
        println!("{line}");
    }
    println!();
    println!("Visual layout:");
    for line in layout_lines(&plan, &theme) {
        println!("{line}");
    }
    println!();

    let hdr_name = args
        .output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| HEADER_FILE_NAME.to_string());
    let content = header_content(&plan, &hdr_name, Local::now());
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    let mut file = fs::File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    write_header(&mut file, &content)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!(path = %args.output.display(), "header artifact written");

    println!(
        "File: {} has been generated.",
        paint(&args.output.display().to_string(), theme.path)
    );
    Ok(())
}
