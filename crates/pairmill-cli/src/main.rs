mod commands;
mod input_output;
mod logging;

use clap::Parser;
use commands::Commands;

/// pairmill: train and apply word-level BPE merge tables.
#[derive(clap::Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}
