use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cctrace")]
#[command(about = "Replay recorded compiler invocations as compilation databases", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Invocation store to read (defaults to $CCTRACE_DB)
    #[arg(long, global = true)]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a compile_commands.json under each root that has records
    Export {
        /// Root directories to export
        #[arg(required = true)]
        roots: Vec<PathBuf>,
    },

    /// Print records matching a glob pattern
    Query {
        /// Glob matched against recorded file paths
        #[arg(default_value = "*")]
        pattern: String,

        /// Match against recorded directories instead of files
        #[arg(long)]
        directories: bool,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,

        /// Stop after this many records
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}
