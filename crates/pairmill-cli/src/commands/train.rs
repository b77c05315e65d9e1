use std::io::{BufRead, BufReader, Write};

use pairmill::END_OF_WORD;
use pairmill::model::io::write_model_json;
use pairmill::training::{BpeTrainer, BpeTrainerOptions};

use crate::input_output::OutputArgs;
use crate::logging::LogArgs;

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    /// Input text files; each line is one document.
    #[arg(required = true)]
    files: Vec<String>,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Target vocabulary size.
    #[arg(long, default_value = "1000")]
    vocab_size: usize,

    /// Bound on the number of merges.
    #[arg(long)]
    max_iterations: Option<usize>,

    /// End-of-word marker.
    #[arg(long, default_value = END_OF_WORD)]
    end_of_word: String,

    #[command(flatten)]
    output: OutputArgs,
}

impl TrainArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let options = BpeTrainerOptions::new(self.vocab_size)
            .with_max_iterations(self.max_iterations)
            .with_end_of_word(self.end_of_word.as_str());

        let mut trainer: BpeTrainer<String, u64> = options.init()?;

        log::info!("Reading files:");
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {path}");
            Self::read_text_file(&mut trainer, path)?;
        }

        log::info!("Training model...");
        let results = trainer.train::<u32>()?;
        let stats = &results.stats;

        log::info!(
            "Words: {} ({} distinct); alphabet: {}; merges: {}; retired pairs: {}",
            stats.word_count,
            stats.distinct_words,
            stats.alphabet_size,
            stats.merges,
            stats.retired_pairs
        );
        log::info!(
            "Vocabulary Size: {} ({:?})",
            stats.vocab_size(),
            stats.stop_reason
        );

        if let Some(path) = &self.output.output {
            log::info!("output: {}", path);
        }
        let mut writer = self.output.open_writer()?;
        write_model_json(&results.model, &mut writer)?;
        writer.flush()?;

        Ok(())
    }

    fn read_text_file(
        trainer: &mut BpeTrainer<String, u64>,
        path: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let reader = BufReader::new(std::fs::File::open(path)?);
        for line in reader.lines() {
            trainer.update_from_text(line?);
        }
        Ok(())
    }
}
