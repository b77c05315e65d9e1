//! # Training Results

use compact_str::CompactString;

use crate::corpus::{CountType, WordKeyType};
use crate::model::TrainedModel;

/// Why the merge loop terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// The vocabulary reached the target size.
    TargetSizeReached,

    /// The configured iteration budget was used up.
    IterationLimit,

    /// No mergeable adjacent pair remained before the target size was reached.
    PairsExhausted,
}

/// Summary statistics of a training run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainStats {
    /// Number of alphabet symbols, including the end-of-word marker.
    pub alphabet_size: usize,

    /// Number of accepted merge rules.
    pub merges: usize,

    /// Number of selected pairs discarded because their concatenation
    /// already named a vocabulary symbol.
    pub retired_pairs: usize,

    /// Total word occurrences in the corpus.
    pub word_count: u64,

    /// Number of distinct words.
    pub distinct_words: usize,

    /// The requested vocabulary size.
    pub target_vocab_size: usize,

    /// Why training stopped.
    pub stop_reason: StopReason,
}

impl TrainStats {
    /// The final vocabulary size.
    pub fn vocab_size(&self) -> usize {
        self.alphabet_size + self.merges
    }

    /// Did training run out of pairs before reaching the target size?
    pub fn stopped_early(&self) -> bool {
        self.stop_reason == StopReason::PairsExhausted
    }

    /// Did training reach the target size?
    pub fn reached_target(&self) -> bool {
        self.stop_reason == StopReason::TargetSizeReached
    }
}

/// The final split of one distinct training word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSplit<K: WordKeyType, C: CountType> {
    /// The word.
    pub word: K,

    /// The word's corpus count.
    pub count: C,

    /// The word's final segmentation, ending with the end-of-word marker.
    pub symbols: Vec<CompactString>,
}

/// The output of [`crate::training::BpeTrainer::train`].
#[derive(Debug, Clone)]
pub struct TrainResults<K: WordKeyType, C: CountType> {
    /// The frozen model.
    pub model: TrainedModel,

    /// Run statistics.
    pub stats: TrainStats,

    /// The aggregate pair frequency of each merge rule when it was selected.
    pub merge_counts: Vec<C>,

    /// The final split table, sorted by word.
    pub word_splits: Vec<WordSplit<K, C>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_predicates() {
        let mut stats = TrainStats {
            alphabet_size: 5,
            merges: 3,
            retired_pairs: 0,
            word_count: 10,
            distinct_words: 4,
            target_vocab_size: 8,
            stop_reason: StopReason::TargetSizeReached,
        };
        assert_eq!(stats.vocab_size(), 8);
        assert!(stats.reached_target());
        assert!(!stats.stopped_early());

        stats.stop_reason = StopReason::PairsExhausted;
        assert!(stats.stopped_early());
        assert!(!stats.reached_target());

        stats.stop_reason = StopReason::IterationLimit;
        assert!(!stats.stopped_early());
        assert!(!stats.reached_target());
    }
}
