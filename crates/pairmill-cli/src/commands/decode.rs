use std::io::Write;

use pairmill::decoders::{decode_symbols, decode_tokens};
use pairmill::errors::PairmillError;
use pairmill::model::TrainedModel;
use pairmill::model::io::load_model_json_path;

use crate::commands::LINE_BATCH_SIZE;
use crate::input_output::{InputArgs, OutputArgs, for_each_line_batch};
use crate::logging::LogArgs;

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    /// Path to a JSON model file.
    #[arg(long)]
    model: String,

    /// Read token ids instead of token strings; "?" fields decode as "?",
    /// matching the unknown characters written by `encode --ids`.
    #[arg(long)]
    ids: bool,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl DecodeArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let model = load_model_json_path(&self.model)?;

        let reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        for_each_line_batch(reader, LINE_BATCH_SIZE, |batch| {
            for line in batch {
                let text = if self.ids {
                    decode_id_line(&model, line)?
                } else {
                    let tokens: Vec<&str> = line.split_whitespace().collect();
                    decode_tokens(&model, &tokens)
                };
                writeln!(writer, "{text}")?;
            }
            Ok(())
        })?;

        writer.flush()?;
        Ok(())
    }
}

/// The id field written for characters outside the alphabet.
const UNKNOWN_ID_FIELD: &str = "?";

/// Decode one line of whitespace separated token ids.
///
/// Unknown character fields (`"?"`) decode as the text `"?"`; the original
/// character is not recoverable from an id stream.
fn decode_id_line(
    model: &TrainedModel,
    line: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut symbols = Vec::new();
    for field in line.split_whitespace() {
        if field == UNKNOWN_ID_FIELD {
            symbols.push(UNKNOWN_ID_FIELD);
            continue;
        }
        let id: usize = field.parse()?;
        let symbol = model
            .id_to_token(id)
            .ok_or(PairmillError::UnknownTokenId { id })?;
        symbols.push(symbol);
    }
    Ok(decode_symbols(model.end_of_word(), &symbols))
}

#[cfg(test)]
mod tests {
    use pairmill::encoders::MergeEncoder;

    use super::*;

    #[test]
    fn test_decode_id_line() {
        let model = pairmill::train(["aa bb aa bb aa"], 4, None).unwrap();
        let encoder = MergeEncoder::<u32>::new(&model);

        let fields: Vec<String> = encoder
            .encode_ids("aab a5a")
            .into_iter()
            .map(|id| id.map_or_else(|| UNKNOWN_ID_FIELD.to_string(), |id| id.to_string()))
            .collect();
        assert!(fields.contains(&"?".to_string()));

        assert_eq!(decode_id_line(&model, &fields.join(" ")).unwrap(), "aab a?a");
        assert_eq!(decode_id_line(&model, "").unwrap(), "");
    }

    #[test]
    fn test_decode_id_line_errors() {
        let model = pairmill::train(["aa bb"], 4, None).unwrap();
        assert!(decode_id_line(&model, "1 x").is_err());

        let err = decode_id_line(&model, "1 99").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PairmillError>(),
            Some(PairmillError::UnknownTokenId { id: 99 })
        ));
    }
}
