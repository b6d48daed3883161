use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "plsql-check",
    version,
    about = "Heuristic sanity checks for SQL and PL/SQL files"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Repository root (default: nearest directory containing src/, else the working directory)"
    )]
    pub root: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the candidate directories under the root (default command)
    Scan {
        #[arg(
            long = "dir",
            value_name = "NAME",
            help = "Directory to check relative to the root (repeatable, default: src data tests)"
        )]
        dirs: Vec<String>,
    },
    /// Scan a single directory tree
    Dir { path: PathBuf },
    /// Validate a single file
    File { path: PathBuf },
}
