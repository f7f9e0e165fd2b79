use clap::Args;
use serde::Serialize;
use std::io;
use std::path::PathBuf;

use rebrand::config;
use rebrand::replacer::{self, RunOptions};
use rebrand::{RebrandConfig, RunReport};

use crate::commands::{CmdResult, GlobalArgs};

#[derive(Args, Debug, Default)]
pub struct ReplaceArgs {
    /// Directory to process (default: current directory)
    pub path: Option<String>,

    /// JSON config file replacing the built-in replacement table and filters
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Report files that would change without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub print_config: bool,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum ReplaceOutput {
    #[serde(rename = "rebrand.run")]
    Run(RunReport),
    #[serde(rename = "rebrand.config")]
    Config { config: RebrandConfig },
}

pub fn run(args: ReplaceArgs, global: &GlobalArgs) -> CmdResult<ReplaceOutput> {
    let config = config::load_config(args.config.as_deref())?;

    if args.print_config {
        return Ok((ReplaceOutput::Config { config }, 0));
    }

    let root = resolve_root(args.path.as_deref())?;
    let options = RunOptions {
        dry_run: args.dry_run,
    };

    // In JSON mode the report is the only stdout output.
    let report = if global.json {
        replacer::run(&root, &config, &options)?
    } else {
        replacer::run_to(&root, &config, &options, &mut io::stdout().lock())?
    };

    // Per-file failures are reported, never escalated to the exit code.
    Ok((ReplaceOutput::Run(report), 0))
}

fn resolve_root(path: Option<&str>) -> rebrand::Result<PathBuf> {
    match path {
        Some(p) => Ok(config::expand_path(p)),
        None => std::env::current_dir().map_err(|e| {
            rebrand::Error::internal_io(e.to_string(), Some("resolve current directory".to_string()))
        }),
    }
}
