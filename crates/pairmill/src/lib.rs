//! # `pairmill` Word-Level BPE Tokenizer
//!
//! `pairmill` learns a table of symbol-merge rules from word frequencies
//! (Byte-Pair-Encoding over characters, with an end-of-word marker),
//! and replays those rules to segment arbitrary text into subword units.
//!
//! See:
//! * [`corpus`] to count words and build the initial alphabet.
//! * [`training`] to train a [`model::TrainedModel`].
//! * [`encoders`] to encode text with a trained model.
//! * [`model`] for the frozen model, token ids, and JSON model IO.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Training and Encoding
//!
//! ```rust
//! use pairmill::{encode, train};
//!
//! let corpus = ["low lower lowest", "newer wider newest"];
//!
//! // The alphabet has 11 symbols (10 characters and the marker).
//! let model = train(&corpus, 24, None).unwrap();
//! assert_eq!(model.alphabet_size(), 11);
//! assert_eq!(model.vocab().len(), 24);
//!
//! let tokens = encode(&model, "lowest newest");
//! assert_eq!(
//!     pairmill::decoders::decode_tokens(&model, &tokens),
//!     "lowest newest"
//! );
//! ```
//!
//! ## Options and Statistics
//!
//! ```rust
//! use pairmill::training::{BpeTrainerOptions, StopReason};
//!
//! let mut trainer = BpeTrainerOptions::new(1000)
//!     .with_max_iterations(Some(50))
//!     .init::<String, u32>()
//!     .unwrap();
//!
//! trainer.update_from_samples(["hug pug pun bun hugs"]);
//!
//! let results = trainer.train::<u32>().unwrap();
//! assert!(results.stats.stopped_early());
//! assert_eq!(results.stats.stop_reason, StopReason::PairsExhausted);
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod corpus;
pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod model;
pub mod training;
pub mod types;

#[doc(inline)]
pub use encoders::MergeEncoder;
#[doc(inline)]
pub use errors::{PMResult, PairmillError};
#[doc(inline)]
pub use model::TrainedModel;

/// The default end-of-word marker.
pub const END_OF_WORD: &str = "</w>";

/// Train a [`TrainedModel`] over a corpus of raw documents.
///
/// Training stops when the vocabulary reaches `target_vocab_size`,
/// when `max_iterations` merges have been accepted, or when no
/// mergeable pair remains; whichever comes first.
///
/// Use [`training::BpeTrainerOptions`] for the full trainer API,
/// including the [`training::TrainStats`] report.
///
/// ## Arguments
/// * `corpus` - the raw documents; split on whitespace into words.
/// * `target_vocab_size` - the vocabulary size to grow to.
/// * `max_iterations` - an optional bound on the number of merges.
///
/// ## Returns
/// A `Result` containing the `TrainedModel` or an error.
pub fn train<I>(
    corpus: I,
    target_vocab_size: usize,
    max_iterations: Option<usize>,
) -> PMResult<TrainedModel>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut trainer = training::BpeTrainerOptions::new(target_vocab_size)
        .with_max_iterations(max_iterations)
        .init::<compact_str::CompactString, u64>()?;

    trainer.update_from_samples(corpus);

    Ok(trainer.train::<u32>()?.model)
}

/// Encode `text` into subword tokens using `model`.
///
/// This builds a fresh [`MergeEncoder`]; build one encoder and reuse it
/// when encoding more than one text.
///
/// ## Arguments
/// * `model` - the trained model.
/// * `text` - the text to encode.
///
/// ## Returns
/// The ordered token sequence; each word ends with the model's end-of-word marker.
pub fn encode(
    model: &TrainedModel,
    text: &str,
) -> Vec<String> {
    use encoders::SubwordEncoder;

    // `usize` handles can index any in-memory vocabulary.
    MergeEncoder::<usize>::new(model).encode(text)
}
