//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose, --quiet, -C, --config) are
//! inherited by all subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{ColorMode, Verbosity};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// Regen - rerun documentation asset generators whose inputs changed
#[derive(Parser, Debug)]
#[command(name = "regen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v shows skipped generators)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Project root (default: current directory)
    #[arg(short = 'C', long = "project", global = true, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Config file (default: <project>/regen.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Verbosity requested on the command line, if any
    pub fn verbosity(&self) -> Option<Verbosity> {
        if self.quiet {
            Some(Verbosity::Quiet)
        } else if self.verbose > 0 {
            Some(Verbosity::Verbose)
        } else {
            None
        }
    }
}

/// Options shared by `run` and `plan`
#[derive(Args, Debug, Clone, PartialEq, Eq, Default)]
pub struct RunArgs {
    /// Ignore recorded fingerprints and select every generator
    #[arg(short, long)]
    pub force: bool,

    /// Fingerprint state file (relative to the project root)
    #[arg(long, value_name = "FILE")]
    pub state: Option<PathBuf>,

    /// Tracked root to scan (relative to the project root)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run every generator whose inputs changed, then record fingerprints
    Run(RunArgs),

    /// Show which generators would run, without running anything
    Plan(RunArgs),
}

impl Commands {
    pub fn args(&self) -> &RunArgs {
        match self {
            Commands::Run(args) | Commands::Plan(args) => args,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Commands::Run(_) => "run",
            Commands::Plan(_) => "plan",
        }
    }

    pub fn is_dry_run(&self) -> bool {
        matches!(self, Commands::Plan(_))
    }
}
