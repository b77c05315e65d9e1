//! # JSON Model IO

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::{
    END_OF_WORD,
    errors::{PMResult, PairmillError},
    model::{MergeRule, TrainedModel},
    types::CommonHashSet,
};

fn default_end_of_word() -> CompactString {
    END_OF_WORD.into()
}

/// The serialized form of a [`TrainedModel`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRecord {
    /// The end-of-word marker; defaults to `</w>` when absent.
    #[serde(default = "default_end_of_word")]
    pub end_of_word: CompactString,

    /// The merge table, as ``(left, right)`` pairs in training order.
    pub merges: Vec<(CompactString, CompactString)>,

    /// The vocabulary, in token id order.
    pub vocab: Vec<CompactString>,
}

impl From<&TrainedModel> for ModelRecord {
    fn from(model: &TrainedModel) -> Self {
        Self {
            end_of_word: model.end_of_word().into(),
            merges: model
                .merges()
                .iter()
                .map(|rule| (rule.left.clone(), rule.right.clone()))
                .collect(),
            vocab: model.vocab().to_vec(),
        }
    }
}

/// Rebuild a vocabulary list in token id order.
///
/// Stored vocabularies may list their symbols in any order; the symbols
/// must be exactly the marker, single characters, and the merge results.
/// The result lists the marker, the other alphabet symbols sorted by code
/// point, then the merge results in rule order.
///
/// ## Returns
/// A `Result` containing the ordered list, or `ModelConflict` if `vocab`
/// has duplicates or lacks a merge result.
pub fn canonical_vocab_order(
    end_of_word: &str,
    merges: &[MergeRule],
    vocab: Vec<CompactString>,
) -> PMResult<Vec<CompactString>> {
    let mut symbols: CommonHashSet<CompactString> = CommonHashSet::with_capacity(vocab.len());
    for symbol in &vocab {
        if !symbols.insert(symbol.clone()) {
            return Err(PairmillError::ModelConflict(format!(
                "duplicate symbol {symbol:?}"
            )));
        }
    }

    let results: Vec<CompactString> = merges.iter().map(MergeRule::merged).collect();
    for merged in &results {
        if !symbols.contains(merged) {
            return Err(PairmillError::ModelConflict(format!(
                "merge result {merged:?} is not in the vocabulary"
            )));
        }
    }

    let result_set: CommonHashSet<&CompactString> = results.iter().collect();
    let mut alphabet: Vec<CompactString> = vocab
        .into_iter()
        .filter(|symbol| symbol != end_of_word && !result_set.contains(symbol))
        .collect();
    alphabet.sort_unstable();

    // A missing marker, or one that is also a merge result, fails validation.
    let marker: CompactString = end_of_word.into();
    let marker = (symbols.contains(&marker) && !result_set.contains(&marker)).then_some(marker);

    Ok(marker.into_iter().chain(alphabet).chain(results).collect())
}

impl TryFrom<ModelRecord> for TrainedModel {
    type Error = PairmillError;

    /// Convert a stored record, accepting its vocabulary in any order.
    fn try_from(record: ModelRecord) -> PMResult<Self> {
        let merges: Vec<MergeRule> = record.merges.into_iter().map(MergeRule::from).collect();
        let vocab = canonical_vocab_order(&record.end_of_word, &merges, record.vocab)?;
        TrainedModel::new(record.end_of_word, merges, vocab)
    }
}

/// Load a [`TrainedModel`] from a JSON model file.
///
/// # Arguments
/// * `path` - the path to the model file.
pub fn load_model_json_path<P: AsRef<Path>>(path: P) -> PMResult<TrainedModel> {
    let reader = BufReader::new(File::open(path)?);
    read_model_json(reader)
}

/// Read a [`TrainedModel`] from a JSON reader.
///
/// # Arguments
/// * `reader` - the JSON source.
pub fn read_model_json<R: Read>(reader: R) -> PMResult<TrainedModel> {
    let record: ModelRecord = serde_json::from_reader(reader)?;
    record.try_into()
}

/// Parse a [`TrainedModel`] from a JSON string.
pub fn model_from_json_str(json: &str) -> PMResult<TrainedModel> {
    let record: ModelRecord = serde_json::from_str(json)?;
    record.try_into()
}

/// Save a [`TrainedModel`] to a JSON model file.
///
/// # Arguments
/// * `model` - the model to save.
/// * `path` - the path to the model file.
pub fn save_model_json_path<P: AsRef<Path>>(
    model: &TrainedModel,
    path: P,
) -> PMResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_model_json(model, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`TrainedModel`] as pretty-printed JSON.
///
/// # Arguments
/// * `model` - the model to write.
/// * `writer` - the JSON sink.
pub fn write_model_json<W: Write>(
    model: &TrainedModel,
    writer: &mut W,
) -> PMResult<()> {
    serde_json::to_writer_pretty(&mut *writer, &ModelRecord::from(model))?;
    writeln!(writer)?;
    Ok(())
}

/// Render a [`TrainedModel`] as a compact JSON string.
pub fn model_to_json_string(model: &TrainedModel) -> PMResult<String> {
    Ok(serde_json::to_string(&ModelRecord::from(model))?)
}
