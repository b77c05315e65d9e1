//! # `PairIndex` Builder

use crate::corpus::CountType;
use crate::training::utility::split_buffer::SplitBuf;
use crate::types::{CommonHashMap, CommonHashSet, Pair, SymbolType};

/// A map from [`Pair`] to its occurrence count.
pub type PairCountMap<T, C> = CommonHashMap<Pair<T>, C>;

/// A map from [`Pair`] to indices over ``words``.
pub type PairIndexMap<T> = CommonHashMap<Pair<T>, CommonHashSet<usize>>;

/// An index of ``(T, T)`` pair information relative to a ``&[SplitBuf<T>]``.
#[derive(Debug, Clone)]
pub struct PairIndex<T: SymbolType, C: CountType> {
    /// A map from [`Pair`] to its occurrence count.
    ///
    /// ``sum(words[i].window_count(pair) * word_counts[i]) for all i``
    pub pair_counts: PairCountMap<T, C>,

    /// A map from [`Pair`] to the indices of the words containing it.
    pub pair_index: PairIndexMap<T>,
}

impl<T: SymbolType, C: CountType> Default for PairIndex<T, C> {
    fn default() -> Self {
        Self {
            pair_counts: PairCountMap::default(),
            pair_index: PairIndexMap::default(),
        }
    }
}

impl<T: SymbolType, C: CountType> PairIndex<T, C> {
    /// Build a [`PairIndex`] from a slice of [`SplitBuf`]s, using a count table.
    ///
    /// # Arguments
    /// * `splits` - the word splits; assumed to be unique.
    /// * `counts` - `counts[i]` is the count of `splits[i]`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(splits, counts)))]
    pub fn from_split_count_table(
        splits: &[SplitBuf<T>],
        counts: &[C],
    ) -> Self {
        let mut index = Self::default();
        for (word_idx, split) in splits.iter().enumerate() {
            index.add_split(word_idx, split, counts[word_idx]);
        }
        index
    }

    /// Build a [`PairIndex`] in parallel.
    ///
    /// Each ``rayon`` task indexes a shard of the words; the shards are then
    /// reduced by addition, so the result equals
    /// [`PairIndex::from_split_count_table`].
    #[cfg(feature = "rayon")]
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(splits, counts)))]
    pub fn par_from_split_count_table(
        splits: &[SplitBuf<T>],
        counts: &[C],
    ) -> Self {
        use rayon::prelude::*;

        splits
            .par_iter()
            .enumerate()
            .fold(Self::default, |mut index, (word_idx, split)| {
                index.add_split(word_idx, split, counts[word_idx]);
                index
            })
            .reduce(Self::default, Self::merge)
    }

    fn add_split(
        &mut self,
        word_idx: usize,
        split: &SplitBuf<T>,
        count: C,
    ) {
        if count == C::zero() || split.len() < 2 {
            return;
        }
        for p in split.pairs() {
            *self.pair_counts.entry(p).or_default() += count;
            self.pair_index.entry(p).or_default().insert(word_idx);
        }
    }

    /// Combine two partial indexes over disjoint word sets.
    pub fn merge(
        mut self,
        other: Self,
    ) -> Self {
        for (p, c) in other.pair_counts {
            *self.pair_counts.entry(p).or_default() += c;
        }
        for (p, words) in other.pair_index {
            self.pair_index.entry(p).or_default().extend(words);
        }
        self
    }
}
