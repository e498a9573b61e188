use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gil",
    about = "Goods Inspection Ledger: shipment inspection records over a shared ledger",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP development host
    Serve(ServeArgs),
    /// Execute a JSON-lines invocation script against a fresh in-memory store
    Run(RunArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Override the bind address from the config
    #[arg(long)]
    pub bind: Option<String>,
    /// Reject re-registration and enforce status transitions
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct RunArgs {
    /// Script file, one invocation object per line
    pub script: PathBuf,
    /// Reject re-registration and enforce status transitions
    #[arg(long)]
    pub strict: bool,
}
