//! # Word Counter

use crate::corpus::{CountType, WordKeyType};
use crate::types::CommonHashMap;

/// Options for [`WordCounter`].
#[derive(Debug, Clone)]
pub struct WordCounterOptions {
    /// Expected number of distinct words.
    /// Used when pre-allocating the count table.
    pub expected_distinct_words: usize,
}

impl Default for WordCounterOptions {
    fn default() -> Self {
        Self {
            expected_distinct_words: 10_000,
        }
    }
}

impl WordCounterOptions {
    /// Set the expected number of distinct words.
    /// Used when pre-allocating the count table.
    pub fn with_expected_distinct_words(
        self,
        expected_distinct_words: usize,
    ) -> Self {
        Self {
            expected_distinct_words,
        }
    }
}

/// Whitespace word counter.
///
/// Words are maximal runs of non-whitespace characters;
/// no case folding or punctuation stripping is applied.
#[derive(Debug, Clone)]
pub struct WordCounter<K, C>
where
    K: WordKeyType,
    C: CountType,
{
    /// The config options.
    pub options: WordCounterOptions,

    /// The word counts.
    word_counts: CommonHashMap<K, C>,
}

impl<K, C> Default for WordCounter<K, C>
where
    K: WordKeyType,
    C: CountType,
{
    fn default() -> Self {
        Self::new(WordCounterOptions::default())
    }
}

impl<K, C> WordCounter<K, C>
where
    K: WordKeyType,
    C: CountType,
{
    /// Create a new word counter.
    pub fn new(options: WordCounterOptions) -> Self {
        let word_counts = CommonHashMap::with_capacity(options.expected_distinct_words);
        Self {
            options,
            word_counts,
        }
    }

    /// The word counts.
    pub fn word_counts(&self) -> &CommonHashMap<K, C> {
        &self.word_counts
    }

    /// Release the word counts and return them.
    pub fn release(self) -> CommonHashMap<K, C> {
        self.word_counts
    }

    /// The number of distinct words.
    pub fn len(&self) -> usize {
        self.word_counts.len()
    }

    /// Have no words been counted?
    pub fn is_empty(&self) -> bool {
        self.word_counts.is_empty()
    }

    /// The total number of word occurrences.
    pub fn total_words(&self) -> C {
        self.word_counts
            .values()
            .fold(C::zero(), |acc, &count| acc + count)
    }

    /// Update word counts inplace from text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        let word_counts = &mut self.word_counts;
        for word in text.as_ref().split_whitespace() {
            // Avoid allocating a key for words we have already seen.
            if let Some(count) = word_counts.get_mut(word) {
                *count += C::one();
            } else {
                word_counts.insert(K::from(word), C::one());
            }
        }
    }

    /// Update word counts inplace from a sample iterator.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// Update word counts from the token stream of an external lexer.
    ///
    /// Each token counts as one word; tokens which contain whitespace
    /// (string literals, for instance) are split further, so that no
    /// counted word ever contains whitespace.
    pub fn update_from_token_stream<I>(
        &mut self,
        tokens: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for token in tokens {
            self.update_from_text(token);
        }
    }

    /// Fold the counts of another counter into this one.
    pub fn merge_counts(
        &mut self,
        other: Self,
    ) {
        if self.word_counts.len() < other.word_counts.len() {
            let mine = core::mem::replace(&mut self.word_counts, other.word_counts);
            self.merge_count_map(mine);
        } else {
            self.merge_count_map(other.word_counts);
        }
    }

    fn merge_count_map(
        &mut self,
        counts: CommonHashMap<K, C>,
    ) {
        for (word, count) in counts {
            *self.word_counts.entry(word).or_default() += count;
        }
    }

    /// Update word counts from a batch of samples, counting in parallel.
    ///
    /// Partial tables are built per ``rayon`` task and reduced by addition,
    /// so the result is identical to [`WordCounter::update_from_samples`].
    #[cfg(feature = "rayon")]
    pub fn par_update_from_samples<S>(
        &mut self,
        samples: &[S],
    ) where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        let options = self.options.clone();
        let partial = samples
            .par_iter()
            .fold(
                || Self::new(options.clone()),
                |mut counter, sample| {
                    counter.update_from_text(sample);
                    counter
                },
            )
            .reduce(
                || Self::new(options.clone()),
                |mut a, b| {
                    a.merge_counts(b);
                    a
                },
            );

        self.merge_counts(partial);
    }

    /// The counted words and their counts, sorted by word.
    pub fn sorted_counts(&self) -> Vec<(K, C)> {
        let mut counts: Vec<(K, C)> = self
            .word_counts
            .iter()
            .map(|(k, &c)| (k.clone(), c))
            .collect();
        counts.sort_unstable();
        counts
    }
}
