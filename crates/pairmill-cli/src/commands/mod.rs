use crate::commands::{decode::DecodeArgs, encode::EncodeArgs, train::TrainArgs};

pub mod decode;
pub mod encode;
pub mod train;

/// Lines per encode/decode batch.
pub const LINE_BATCH_SIZE: usize = 1024;

/// Subcommands for pairmill.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Train a model from text files.
    Train(TrainArgs),

    /// Encode text into subword tokens, one output line per input line.
    Encode(EncodeArgs),

    /// Decode subword tokens back into text.
    Decode(DecodeArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Train(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
        }
    }
}
