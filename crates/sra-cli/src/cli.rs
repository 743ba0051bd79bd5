//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// srasync - full-replace ETL for the SRA organisation register
#[derive(Parser, Debug)]
#[command(name = "srasync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the register and replace every destination table
    Run(RunArgs),

    /// List the destination tables and their column schemas
    Ls(LsArgs),
}

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Build the tables and report row counts without touching the store
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Print column lists as well as table names
    #[arg(short, long)]
    pub columns: bool,
}
