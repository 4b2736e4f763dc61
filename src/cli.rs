use clap::Parser;
use std::path::PathBuf;

/// Inspect a yarn.lock: resolved versions, sources, integrity and dependency constraints
#[derive(Parser, Debug)]
#[command(name = "yarnlock-inspect")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Lockfile to read (default: yarn.lock in the current directory)
    pub path: Option<PathBuf>,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,

    /// Look for the lockfile in parent directories too
    #[arg(long, conflicts_with = "path")]
    pub find: bool,

    /// Only show entries for this package name (e.g. lodash, @types/node)
    #[arg(long, value_name = "NAME")]
    pub package: Option<String>,

    /// Only print package and dependency counts
    #[arg(long)]
    pub summary: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
