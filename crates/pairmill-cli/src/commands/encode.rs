use std::io::Write;

use pairmill::encoders::{MergeEncoder, SubwordEncoder};
use pairmill::model::io::load_model_json_path;
use pairmill::rayon::ParallelEncoder;

use crate::commands::LINE_BATCH_SIZE;
use crate::input_output::{InputArgs, OutputArgs, for_each_line_batch};
use crate::logging::LogArgs;

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    /// Path to a JSON model file.
    #[arg(long)]
    model: String,

    /// Write token ids instead of token strings; unknown characters are "?",
    /// and decode back as "?".
    #[arg(long)]
    ids: bool,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let model = load_model_json_path(&self.model)?;
        log::info!(
            "Loaded model {}: {} symbols, {} merges",
            self.model,
            model.vocab().len(),
            model.merges().len()
        );

        let encoder = ParallelEncoder::new(MergeEncoder::<u32>::try_new(&model)?);

        let reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        for_each_line_batch(reader, LINE_BATCH_SIZE, |batch| {
            if self.ids {
                for line in batch {
                    let ids: Vec<String> = encoder
                        .inner
                        .encode_ids(line)
                        .into_iter()
                        .map(|id| id.map_or_else(|| "?".to_string(), |id| id.to_string()))
                        .collect();
                    writeln!(writer, "{}", ids.join(" "))?;
                }
            } else {
                for tokens in encoder.encode_batch(batch) {
                    writeln!(writer, "{}", tokens.join(" "))?;
                }
            }
            Ok(())
        })?;

        writer.flush()?;
        Ok(())
    }
}
