//! # BPE Trainer

use core::cmp::Ordering;

use compact_str::CompactString;
use dary_heap::OctonaryHeap;

use crate::END_OF_WORD;
use crate::corpus::{
    Alphabet, CountType, WordCounter, WordCounterOptions, WordKeyType, validate_marker,
};
use crate::errors::{PMResult, PairmillError};
use crate::model::{MergeRule, TrainedModel};
use crate::training::utility::{PairIndex, PairIndexMap, SplitBuf, SymbolTable};
use crate::training::{StopReason, TrainResults, TrainStats, WordSplit};
use crate::types::{CommonHashMap, CommonHashSet, Pair, SymbolType};

/// Options for [`BpeTrainer`].
#[derive(Debug, Clone)]
pub struct BpeTrainerOptions {
    /// The vocabulary size to grow to.
    pub target_vocab_size: usize,

    /// An optional bound on the number of accepted merges.
    pub max_iterations: Option<usize>,

    /// The end-of-word marker.
    pub end_of_word: CompactString,

    /// Build the initial pair index in parallel (needs the ``rayon`` feature).
    pub parallel: bool,

    /// Word counter options.
    pub counter: WordCounterOptions,
}

impl BpeTrainerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `target_vocab_size` - The target vocabulary size.
    ///
    /// ## Returns
    /// A new `BpeTrainerOptions` instance.
    pub fn new(target_vocab_size: usize) -> Self {
        Self {
            target_vocab_size,
            max_iterations: None,
            end_of_word: END_OF_WORD.into(),
            parallel: true,
            counter: WordCounterOptions::default(),
        }
    }

    /// Sets the target vocab size.
    pub fn with_target_vocab_size(
        self,
        target_vocab_size: usize,
    ) -> Self {
        Self {
            target_vocab_size,
            ..self
        }
    }

    /// Sets the merge iteration budget; `None` removes the bound.
    pub fn with_max_iterations(
        self,
        max_iterations: Option<usize>,
    ) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }

    /// Sets the end-of-word marker.
    pub fn with_end_of_word<S: Into<CompactString>>(
        self,
        end_of_word: S,
    ) -> Self {
        Self {
            end_of_word: end_of_word.into(),
            ..self
        }
    }

    /// Enables or disables the parallel pair index build.
    pub fn with_parallel(
        self,
        parallel: bool,
    ) -> Self {
        Self { parallel, ..self }
    }

    /// Sets the word counter options.
    pub fn with_counter_options(
        self,
        counter: WordCounterOptions,
    ) -> Self {
        Self { counter, ..self }
    }

    /// Check the options.
    ///
    /// ## Returns
    /// * `ZeroVocabSize` if `target_vocab_size == 0`;
    /// * `ZeroMaxIterations` if `max_iterations == Some(0)`;
    /// * `InvalidMarker` if the marker is empty or has whitespace.
    pub fn validate(&self) -> PMResult<()> {
        if self.target_vocab_size == 0 {
            return Err(PairmillError::ZeroVocabSize);
        }
        if self.max_iterations == Some(0) {
            return Err(PairmillError::ZeroMaxIterations);
        }
        validate_marker(&self.end_of_word)
    }

    /// Initializes a [`BpeTrainer`] from these options.
    ///
    /// ## Returns
    /// A `Result` containing the new `BpeTrainer`, or the validation error.
    pub fn init<K, C>(self) -> PMResult<BpeTrainer<K, C>>
    where
        K: WordKeyType,
        C: CountType,
    {
        BpeTrainer::new(self)
    }
}

/// Info about a [`Pair`] that could be merged.
#[derive(Debug, Eq)]
pub struct MergeJob<T: SymbolType, C: CountType> {
    /// The number of instances of this pair in the corpus.
    pub count: C,

    /// The pair to merge.
    pub pair: Pair<T>,

    /// The symbol strings of the pair.
    pub names: (CompactString, CompactString),

    /// Whether each symbol string of the pair ends with the marker text.
    ///
    /// With a multi-character marker, an interior symbol can end with the
    /// marker text too; this only affects tie ordering.
    pub ends_with_marker: (bool, bool),

    /// Word indices that may contain this pair.
    pub word_indices: CommonHashSet<usize>,
}

impl<T: SymbolType, C: CountType> MergeJob<T, C> {
    /// Create a job, looking up the symbol strings of `pair`.
    pub fn new(
        count: C,
        pair: Pair<T>,
        table: &SymbolTable<T>,
        marker: &str,
        word_indices: CommonHashSet<usize>,
    ) -> Self {
        let left = table.name(pair.0).clone();
        let right = table.name(pair.1).clone();
        Self {
            count,
            pair,
            ends_with_marker: (left.ends_with(marker), right.ends_with(marker)),
            names: (left, right),
            word_indices,
        }
    }

    /// The tie-break key; smaller keys win among equal counts.
    ///
    /// Symbols compare by ``(ends_with_marker, text)``: symbols whose text
    /// ends with the marker text sort after all others, and otherwise
    /// symbols sort by string.
    pub fn tie_key(&self) -> ((bool, &str), (bool, &str)) {
        (
            (self.ends_with_marker.0, self.names.0.as_str()),
            (self.ends_with_marker.1, self.names.1.as_str()),
        )
    }

    /// The job key.
    pub fn heap_key(&self) -> (C, ((bool, &str), (bool, &str))) {
        (self.count, self.tie_key())
    }
}

impl<T: SymbolType, C: CountType> PartialEq for MergeJob<T, C> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.heap_key() == other.heap_key()
    }
}

impl<T: SymbolType, C: CountType> PartialOrd for MergeJob<T, C> {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: SymbolType, C: CountType> Ord for MergeJob<T, C> {
    /// Max-heap by count; ties go to the smaller [`MergeJob::tie_key`].
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.tie_key().cmp(&self.tie_key()))
    }
}

/// Trainer for learning word-level BPE merge tables.
///
/// # Parameters
/// * `K` - the type used to store words in the word counts.
/// * `C` - the type used to store word and pair counts.
pub struct BpeTrainer<K = CompactString, C = u64>
where
    K: WordKeyType,
    C: CountType,
{
    /// Trainer options.
    pub options: BpeTrainerOptions,

    /// The corpus word counter.
    pub word_counter: WordCounter<K, C>,
}

impl<K, C> BpeTrainer<K, C>
where
    K: WordKeyType,
    C: CountType,
{
    /// Initializes a [`BpeTrainer`].
    ///
    /// ## Arguments
    /// * `options` - The trainer options.
    ///
    /// ## Returns
    /// A `Result` containing the new `BpeTrainer`, or the validation error.
    pub fn new(options: BpeTrainerOptions) -> PMResult<Self> {
        options.validate()?;
        let word_counter = WordCounter::new(options.counter.clone());
        Ok(Self {
            options,
            word_counter,
        })
    }

    /// Update word counts inplace from text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        self.word_counter.update_from_text(text);
    }

    /// Update word counts inplace from a sample iterator.
    ///
    /// ## Arguments
    /// * `samples` - An iterator over string-like samples.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, samples)))]
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.word_counter.update_from_samples(samples);
    }

    /// Update word counts from the token stream of an external lexer.
    pub fn update_from_token_stream<I>(
        &mut self,
        tokens: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.word_counter.update_from_token_stream(tokens);
    }

    /// Update word counts from a batch of samples, counting in parallel.
    #[cfg(feature = "rayon")]
    pub fn par_update_from_samples<S>(
        &mut self,
        samples: &[S],
    ) where
        S: AsRef<str> + Sync,
    {
        self.word_counter.par_update_from_samples(samples);
    }

    #[cfg(feature = "rayon")]
    fn build_pair_index<T: SymbolType>(
        &self,
        splits: &[SplitBuf<T>],
        counts: &[C],
    ) -> PairIndex<T, C> {
        if self.options.parallel {
            PairIndex::par_from_split_count_table(splits, counts)
        } else {
            PairIndex::from_split_count_table(splits, counts)
        }
    }

    #[cfg(not(feature = "rayon"))]
    fn build_pair_index<T: SymbolType>(
        &self,
        splits: &[SplitBuf<T>],
        counts: &[C],
    ) -> PairIndex<T, C> {
        PairIndex::from_split_count_table(splits, counts)
    }

    /// Train a [`TrainedModel`] from the counted words.
    ///
    /// ## Type Parameters
    /// * `T` - the symbol handle type used during training; the final
    ///   vocabulary must fit, or training fails with `VocabSizeOverflow`.
    ///
    /// ## Returns
    /// A `Result` containing the [`TrainResults`] or an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn train<T>(self) -> PMResult<TrainResults<K, C>>
    where
        T: SymbolType,
    {
        let options = self.options.clone();
        let zero = C::zero();

        let word_counts: Vec<(K, C)> = self.word_counter.sorted_counts();
        let word_count = self
            .word_counter
            .total_words()
            .to_u64()
            .unwrap_or(u64::MAX);

        let alphabet =
            Alphabet::from_words(word_counts.iter().map(|(k, _)| k), &options.end_of_word)?;
        let mut table: SymbolTable<T> = SymbolTable::from_alphabet(&alphabet)?;
        let marker = table.lookup(&options.end_of_word).ok_or_else(|| {
            PairmillError::ModelConflict("marker missing from symbol table".to_string())
        })?;

        let size_budget = options.target_vocab_size.saturating_sub(alphabet.len());
        let iteration_budget = options.max_iterations.unwrap_or(usize::MAX);
        let num_merges = size_budget.min(iteration_budget);

        log::info!(
            "Starting BPE training: {} distinct words, alphabet of {} symbols, up to {} merges",
            word_counts.len(),
            alphabet.len(),
            num_merges
        );

        let mut splits: Vec<SplitBuf<T>> = Vec::with_capacity(word_counts.len());
        for (word, _) in &word_counts {
            let split = SplitBuf::from_word(word.as_ref(), &table, marker).ok_or_else(|| {
                PairmillError::ModelConflict(format!(
                    "word {word:?} has a character outside the alphabet"
                ))
            })?;
            splits.push(split);
        }
        let counts: Vec<C> = word_counts.iter().map(|&(_, c)| c).collect();

        log::info!("Building pair index...");
        let PairIndex {
            mut pair_counts,
            pair_index,
        } = self.build_pair_index(&splits, &counts);

        // ---- Build heap ----
        log::info!("Building heap with {} unique pairs", pair_counts.len());
        let mut heap = OctonaryHeap::with_capacity(pair_counts.len());
        for (pair, word_indices) in pair_index.into_iter() {
            let count = *pair_counts.get(&pair).unwrap_or(&zero);
            if count > zero {
                heap.push(MergeJob::new(
                    count,
                    pair,
                    &table,
                    &options.end_of_word,
                    word_indices,
                ));
            }
        }

        // ---- Merge loop ----
        let mut merges: Vec<MergeRule> = Vec::with_capacity(num_merges.min(1 << 16));
        let mut merge_counts: Vec<C> = Vec::with_capacity(merges.capacity());
        let mut retired_pairs = 0;
        let mut last_log_percent = 0;

        let stop_reason = loop {
            if table.len() >= options.target_vocab_size {
                break StopReason::TargetSizeReached;
            }
            if merges.len() >= iteration_budget {
                break StopReason::IterationLimit;
            }

            let Some(mut job) = heap.pop() else {
                break StopReason::PairsExhausted;
            };

            {
                // Lazy refresh the job count.
                let current = *pair_counts.get(&job.pair).unwrap_or(&zero);
                if job.count != current {
                    job.count = current;
                    if job.count > zero {
                        heap.push(job);
                    }
                    continue;
                }
            }

            if job.count == zero {
                continue;
            }

            let rule = MergeRule::new(job.names.0.clone(), job.names.1.clone());
            let merged = rule.merged();
            if table.lookup(&merged).is_some() {
                log::debug!(
                    "Retiring pair {:?} + {:?}: {:?} is already a symbol",
                    rule.left,
                    rule.right,
                    merged
                );
                retired_pairs += 1;
                continue;
            }

            let new_symbol = table.insert(merged)?;

            let mut new_symbol_pair_map: PairIndexMap<T> = CommonHashMap::with_capacity(16);

            // Merge this pair in all words where it occurs.
            for &word_idx in &job.word_indices {
                let word_count = counts[word_idx];
                splits[word_idx].merge_pair_cb(job.pair, new_symbol, &mut |pair, delta| {
                    if delta < 0 {
                        *pair_counts.entry(pair).or_default() -= word_count;
                    }
                    if delta > 0 {
                        // Either side of this pair is the new symbol.
                        *pair_counts.entry(pair).or_default() += word_count;
                        new_symbol_pair_map.entry(pair).or_default().insert(word_idx);
                    }
                });
            }

            // Pairs with the new symbol are not yet in the heap.
            for (pair, word_indices) in new_symbol_pair_map {
                let count = *pair_counts.get(&pair).unwrap_or(&zero);
                if count > zero {
                    heap.push(MergeJob::new(
                        count,
                        pair,
                        &table,
                        &options.end_of_word,
                        word_indices,
                    ));
                }
            }

            merge_counts.push(job.count);
            merges.push(rule);

            // Log progress every 1%
            let merges_done = merges.len();
            let current_percent = (merges_done * 100) / num_merges.max(1);
            if current_percent > last_log_percent {
                log::info!(
                    "Progress: {}% ({}/{} merges) - Last merge: {:?} (frequency: {})",
                    current_percent,
                    merges_done,
                    num_merges,
                    merges[merges_done - 1],
                    job.count
                );
                last_log_percent = current_percent;
            }
        };

        if stop_reason == StopReason::PairsExhausted {
            log::warn!(
                "No mergeable pairs remain: stopped at vocab size {} of {}",
                table.len(),
                options.target_vocab_size
            );
        }
        log::info!(
            "Finished training: {} merges completed ({:?})",
            merges.len(),
            stop_reason
        );

        let stats = TrainStats {
            alphabet_size: alphabet.len(),
            merges: merges.len(),
            retired_pairs,
            word_count,
            distinct_words: word_counts.len(),
            target_vocab_size: options.target_vocab_size,
            stop_reason,
        };

        let word_splits = word_counts
            .into_iter()
            .zip(&splits)
            .map(|((word, count), split)| WordSplit {
                word,
                count,
                symbols: split
                    .symbols()
                    .iter()
                    .map(|&s| table.name(s).clone())
                    .collect(),
            })
            .collect();

        let model = TrainedModel::new(options.end_of_word, merges, table.into_names())?;

        Ok(TrainResults {
            model,
            stats,
            merge_counts,
            word_splits,
        })
    }
}

#[cfg(test)]
mod tests {
    use core::cmp::Ordering;

    use compact_str::CompactString;

    use super::*;
    use crate::types::check_is_send_sync;

    fn train_words(
        samples: &[&str],
        target_vocab_size: usize,
    ) -> TrainResults<String, u32> {
        let mut trainer = BpeTrainerOptions::new(target_vocab_size)
            .init::<String, u32>()
            .unwrap();
        trainer.update_from_samples(samples);
        trainer.train::<u32>().unwrap()
    }

    fn merge_pairs(model: &TrainedModel) -> Vec<(String, String)> {
        model
            .merges()
            .iter()
            .map(|r| (r.left.to_string(), r.right.to_string()))
            .collect()
    }

    #[test]
    fn test_trainer_options() {
        let options = BpeTrainerOptions::new(1000);

        assert_eq!(options.target_vocab_size, 1000);
        assert_eq!(options.max_iterations, None);
        assert_eq!(options.end_of_word, "</w>");
        assert!(options.parallel);

        let options = options
            .with_target_vocab_size(2000)
            .with_max_iterations(Some(10))
            .with_end_of_word("_")
            .with_parallel(false)
            .with_counter_options(WordCounterOptions::default().with_expected_distinct_words(5));

        assert_eq!(options.target_vocab_size, 2000);
        assert_eq!(options.max_iterations, Some(10));
        assert_eq!(options.end_of_word, "_");
        assert!(!options.parallel);
        assert_eq!(options.counter.expected_distinct_words, 5);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_bad_options() {
        assert!(matches!(
            BpeTrainerOptions::new(0).init::<String, u32>(),
            Err(PairmillError::ZeroVocabSize)
        ));
        assert!(matches!(
            BpeTrainerOptions::new(10)
                .with_max_iterations(Some(0))
                .init::<String, u32>(),
            Err(PairmillError::ZeroMaxIterations)
        ));
        assert!(matches!(
            BpeTrainerOptions::new(10)
                .with_end_of_word("a b")
                .init::<String, u32>(),
            Err(PairmillError::InvalidMarker { .. })
        ));
    }

    #[test]
    fn test_single_merge_scenario() {
        // alphabet: </w> a b
        let results = train_words(&["aa bb aa bb aa"], 4);

        assert_eq!(results.stats.alphabet_size, 3);
        assert_eq!(
            merge_pairs(&results.model),
            vec![("a".to_string(), "a".to_string())]
        );
        assert_eq!(results.merge_counts, vec![3]);
        assert_eq!(results.stats.stop_reason, StopReason::TargetSizeReached);
        assert_eq!(results.model.vocab().last().unwrap(), "aa");
    }

    #[test]
    fn test_tie_break_order() {
        // Every pair occurs once: (a,b) (b,</w>) (c,d) (d,</w>).
        // Left symbols decide first; symbols ending with the marker sort last.
        let results = train_words(&["cd ab"], 5 + 4);
        assert_eq!(
            merge_pairs(&results.model),
            vec![
                ("a".to_string(), "b".to_string()),
                ("ab".to_string(), "</w>".to_string()),
                ("c".to_string(), "d".to_string()),
                ("cd".to_string(), "</w>".to_string()),
            ]
        );
        assert_eq!(results.stats.stop_reason, StopReason::TargetSizeReached);
    }

    #[test]
    fn test_zero_merges_when_target_is_alphabet() {
        let results = train_words(&["highest higher"], 8);
        assert_eq!(results.stats.alphabet_size, 8);
        assert!(results.model.merges().is_empty());
        assert_eq!(results.stats.stop_reason, StopReason::TargetSizeReached);

        let results = train_words(&["highest higher"], 3);
        assert!(results.model.merges().is_empty());
        assert_eq!(results.model.vocab().len(), 8);
    }

    #[test]
    fn test_empty_corpus() {
        let results = train_words(&[], 100);
        assert_eq!(results.model.vocab(), &[CompactString::from("</w>")]);
        assert!(results.model.merges().is_empty());
        assert!(results.stats.stopped_early());
        assert_eq!(results.stats.word_count, 0);
        assert!(results.word_splits.is_empty());
    }

    #[test]
    fn test_pairs_exhausted() {
        let results = train_words(&["ab ab b"], 100);

        // (b,</w>) occurs in both words: 2 + 1.
        assert_eq!(
            merge_pairs(&results.model),
            vec![
                ("b".to_string(), "</w>".to_string()),
                ("a".to_string(), "b</w>".to_string()),
            ]
        );
        assert_eq!(results.merge_counts, vec![3, 2]);
        assert!(results.stats.stopped_early());
        assert_eq!(results.stats.vocab_size(), 5);

        for split in &results.word_splits {
            assert_eq!(split.symbols.len(), 1);
        }
    }

    #[test]
    fn test_iteration_limit() {
        let mut trainer = BpeTrainerOptions::new(100)
            .with_max_iterations(Some(2))
            .init::<String, u32>()
            .unwrap();
        trainer.update_from_text("low lower lowest");
        let results = trainer.train::<u16>().unwrap();

        assert_eq!(results.model.merges().len(), 2);
        assert_eq!(results.stats.stop_reason, StopReason::IterationLimit);
        assert!(!results.stats.stopped_early());
    }

    #[test]
    fn test_retired_pairs() {
        // (x, y) spells the marker "xy", which is already a symbol.
        let mut trainer = BpeTrainerOptions::new(100)
            .with_end_of_word("xy")
            .init::<String, u32>()
            .unwrap();
        trainer.update_from_text("xy xy xyz");
        let results = trainer.train::<u32>().unwrap();

        assert_eq!(results.stats.retired_pairs, 1);
        assert!(results.stats.stopped_early());

        let model = &results.model;
        assert_eq!(
            model.vocab().len(),
            model.alphabet_size() + model.merges().len()
        );
        assert_eq!(
            merge_pairs(model)[0],
            ("y".to_string(), "xy".to_string())
        );
        assert!(!model.merges().contains(&MergeRule::new("x", "y")));

        let merged: Vec<CompactString> = model.merges().iter().map(|r| r.merged()).collect();
        let unique: CommonHashSet<&CompactString> = merged.iter().collect();
        assert_eq!(unique.len(), merged.len());

        for split in &results.word_splits {
            assert_eq!(split.symbols.concat(), format!("{}xy", split.word));
        }
    }

    #[test]
    fn test_custom_marker() {
        let mut trainer = BpeTrainerOptions::new(6)
            .with_end_of_word("#")
            .init::<String, u32>()
            .unwrap();
        trainer.update_from_text("aa aa");
        let results = trainer.train::<u32>().unwrap();

        assert_eq!(results.model.end_of_word(), "#");
        assert_eq!(
            merge_pairs(&results.model),
            vec![
                ("a".to_string(), "a".to_string()),
                ("aa".to_string(), "#".to_string()),
            ]
        );
        assert_eq!(
            results.word_splits,
            vec![WordSplit {
                word: "aa".to_string(),
                count: 2,
                symbols: vec!["aa#".into()],
            }]
        );
    }

    #[test]
    fn test_symbol_overflow() {
        let mut trainer = BpeTrainerOptions::new(1000)
            .init::<String, u32>()
            .unwrap();
        let words: Vec<String> = (0..300u32)
            .map(|i| char::from_u32(0x4e00 + i).unwrap().to_string())
            .collect();
        trainer.update_from_samples(&words);

        assert!(matches!(
            trainer.train::<u8>(),
            Err(PairmillError::VocabSizeOverflow { .. })
        ));
    }

    #[test]
    fn test_serial_and_parallel_index_agree() {
        let samples = ["the cat sat on the mat", "the hat that sat", "a cat, a hat"];
        let train = |parallel: bool| {
            let mut trainer = BpeTrainerOptions::new(60)
                .with_parallel(parallel)
                .init::<CompactString, u64>()
                .unwrap();
            trainer.update_from_samples(samples);
            check_is_send_sync(&trainer.options);
            trainer.train::<u32>().unwrap().model
        };
        assert_eq!(train(true), train(false));
    }

    #[test]
    fn test_merge_job_marker_suffix() {
        // Interior symbols whose text ends with a multi-character marker
        // sort with the marker-suffixed symbols.
        let alphabet = Alphabet::from_words(["axyb"], "xy").unwrap();
        let mut table: SymbolTable<u32> = SymbolTable::from_alphabet(&alphabet).unwrap();
        let a = table.lookup("a").unwrap();
        let b = table.lookup("b").unwrap();
        table.insert("ax".into()).unwrap();
        let axy = table.insert("axy".into()).unwrap();

        let job = MergeJob::<u32, u32>::new(1, (axy, b), &table, "xy", Default::default());
        assert_eq!(job.ends_with_marker, (true, false));
        assert_eq!(job.tie_key(), ((true, "axy"), (false, "b")));

        let job = MergeJob::<u32, u32>::new(1, (a, b), &table, "xy", Default::default());
        assert_eq!(job.ends_with_marker, (false, false));
    }

    #[test]
    fn test_merge_job_heap_key() {
        type T = u32;
        type C = u32;

        let job = |count: C, a: &str, b: &str| MergeJob::<T, C> {
            count,
            pair: (0, 0),
            names: (a.into(), b.into()),
            ends_with_marker: (a.ends_with("</w>"), b.ends_with("</w>")),
            word_indices: Default::default(),
        };

        let job1 = job(2, "b", "a");
        let job2 = job(1, "a", "b");
        let job3 = job(1, "a", "c");
        let job4 = job(1, "ab", "a");
        let job5 = job(1, "a", "</w>");

        assert_eq!(&job1, &job1);
        assert_ne!(&job1, &job2);

        assert_eq!(job1.cmp(&job2), Ordering::Greater);
        assert_eq!(job2.cmp(&job1), Ordering::Less);

        // Equal counts: the smaller tie keys win.
        assert_eq!(job2.cmp(&job3), Ordering::Greater);
        assert_eq!(job2.cmp(&job4), Ordering::Greater);
        assert_eq!(job3.cmp(&job4), Ordering::Greater);
        // Right symbols ending with the marker lose the tie.
        assert_eq!(job3.cmp(&job5), Ordering::Greater);
        assert_eq!(job5.cmp(&job4), Ordering::Greater);
        assert_eq!(job2.partial_cmp(&job2), Some(Ordering::Equal));

        let mut heap = OctonaryHeap::new();
        heap.extend([job4, job5, job1, job3, job2]);
        let order: Vec<(C, String, String)> = core::iter::from_fn(|| heap.pop())
            .map(|j| (j.count, j.names.0.to_string(), j.names.1.to_string()))
            .collect();
        assert_eq!(
            order,
            vec![
                (2, "b".to_string(), "a".to_string()),
                (1, "a".to_string(), "b".to_string()),
                (1, "a".to_string(), "c".to_string()),
                (1, "a".to_string(), "</w>".to_string()),
                (1, "ab".to_string(), "a".to_string()),
            ]
        );
    }
}
