//! # Vocabulary Training
//!
//! Learns an ordered merge table from word frequencies.
//!
//! Training runs in three phases:
//! 1. count words ([`crate::corpus::WordCounter`]) and build the
//!    [`crate::corpus::Alphabet`];
//! 2. split every distinct word into characters plus the end-of-word marker,
//!    and index the weighted counts of all adjacent pairs
//!    ([`utility::PairIndex`]);
//! 3. repeatedly merge the best pair, updating the index incrementally from
//!    the merge deltas, until a stopping condition holds.
//!
//! ## Pair Selection
//!
//! The best pair has the highest aggregate count. Ties compare the left
//! symbol, then the right symbol, by ``(ends_with_marker, text)``: symbols
//! whose text ends with the end-of-word marker text sort after all others,
//! and otherwise symbols sort by string.
//! A selected pair whose concatenation already names a vocabulary symbol
//! is retired without being recorded.
//!
//! ## Training Example
//!
//! ```rust
//! use compact_str::CompactString;
//! use pairmill::training::{BpeTrainer, BpeTrainerOptions};
//!
//! let options = BpeTrainerOptions::new(40).with_max_iterations(Some(100));
//!
//! let mut trainer: BpeTrainer<CompactString, u64> = options.init().unwrap();
//!
//! for batch in [["the quick brown fox"], ["jumps over the lazy dog"]] {
//!     trainer.update_from_samples(batch);
//! }
//!
//! let results = trainer.train::<u32>().unwrap();
//! let model = results.model;
//! assert!(model.vocab().len() <= 40);
//! ```

pub mod utility;

mod bpe_trainer;
mod train_results;

#[doc(inline)]
pub use bpe_trainer::{BpeTrainer, BpeTrainerOptions};
#[doc(inline)]
pub use train_results::{StopReason, TrainResults, TrainStats, WordSplit};
