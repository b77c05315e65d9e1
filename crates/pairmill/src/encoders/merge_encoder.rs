//! # Merge Scan Encoder
//!
//! Incrementally re-scans each word for the best available merge,
//! iterates until no more merges remain.

use compact_str::CompactString;

use crate::decoders::decode_symbols;
use crate::encoders::SubwordEncoder;
use crate::errors::{PMResult, PairmillError};
use crate::model::TrainedModel;
use crate::types::{CommonHashMap, Pair, SymbolType, symbol_from_index, symbol_to_index};

/// One unit of a word being encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Piece<T> {
    /// A vocabulary symbol.
    Symbol(T),

    /// A character outside the model's alphabet; never merges.
    Unknown(char),
}

/// A [`SubwordEncoder`] replaying a [`TrainedModel`]'s merge table.
///
/// Each word is split into characters plus the end-of-word marker, then
/// the leftmost occurrence of the lowest-ranked mergeable pair is merged
/// until no rule applies. A merge only creates pairs ranked after its own
/// rule, so this is the same as applying every rule, in order, in one left
/// to right pass.
///
/// Characters outside the model's alphabet pass through as single-character
/// tokens, and never merge.
///
/// # Parameters
/// * `T` - the symbol handle type; must index the whole vocabulary.
#[derive(Debug, Clone)]
pub struct MergeEncoder<T: SymbolType = u32> {
    end_of_word: CompactString,
    marker: T,
    char_symbols: CommonHashMap<char, T>,

    /// Maps each mergeable pair to its result; results are ordered by rank.
    pair_merges: CommonHashMap<Pair<T>, T>,

    names: Vec<CompactString>,
}

impl<T: SymbolType> MergeEncoder<T> {
    /// Build an encoder for `model`.
    ///
    /// ## Returns
    /// A `Result` containing the encoder, or `VocabSizeOverflow` if the
    /// vocabulary does not fit in ``T``.
    pub fn try_new(model: &TrainedModel) -> PMResult<Self> {
        let size = model.vocab().len();
        let handle = |id: usize| {
            symbol_from_index::<T>(id).ok_or(PairmillError::VocabSizeOverflow { size })
        };
        if size > 0 {
            handle(size - 1)?;
        }

        let end_of_word: CompactString = model.end_of_word().into();
        let lookup = |symbol: &str| -> PMResult<T> {
            let id = model.token_to_id(symbol).ok_or_else(|| {
                PairmillError::ModelConflict(format!("symbol {symbol:?} is not in the vocabulary"))
            })?;
            handle(id)
        };

        let marker = lookup(end_of_word.as_str())?;

        let mut char_symbols = CommonHashMap::with_capacity(model.alphabet_size());
        for (id, symbol) in model.alphabet().iter().enumerate() {
            if *symbol == end_of_word {
                continue;
            }
            let mut chars = symbol.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                char_symbols.insert(c, handle(id)?);
            }
        }

        let mut pair_merges = CommonHashMap::with_capacity(model.merges().len());
        for (rank, rule) in model.merges().iter().enumerate() {
            let pair = (lookup(rule.left.as_str())?, lookup(rule.right.as_str())?);
            pair_merges.insert(pair, handle(model.alphabet_size() + rank)?);
        }

        Ok(Self {
            end_of_word,
            marker,
            char_symbols,
            pair_merges,
            names: model.vocab().to_vec(),
        })
    }

    /// Build an encoder for `model`.
    ///
    /// ## Panics
    /// Panics if the vocabulary does not fit in ``T``.
    pub fn new(model: &TrainedModel) -> Self {
        Self::try_new(model).expect("vocabulary must fit the symbol handle type")
    }

    /// The vocabulary size.
    pub fn vocab_size(&self) -> usize {
        self.names.len()
    }

    /// Split and fully merge one word.
    fn merge_word(
        &self,
        word: &str,
    ) -> Vec<Piece<T>> {
        let mut pieces: Vec<Piece<T>> = Vec::with_capacity(word.len() + 1);
        pieces.extend(word.chars().map(|c| match self.char_symbols.get(&c) {
            Some(&symbol) => Piece::Symbol(symbol),
            None => Piece::Unknown(c),
        }));
        pieces.push(Piece::Symbol(self.marker));

        while pieces.len() >= 2 {
            // Find the lowest ranked merge available.
            let Some((merged, idx)) = pieces
                .windows(2)
                .enumerate()
                .filter_map(|(idx, w)| match (w[0], w[1]) {
                    (Piece::Symbol(a), Piece::Symbol(b)) => {
                        self.pair_merges.get(&(a, b)).map(|&merged| (merged, idx))
                    }
                    _ => None,
                })
                .min()
            else {
                break;
            };

            // pieces[idx..=idx+1] (a, b) -> pieces[idx] merged
            pieces[idx] = Piece::Symbol(merged);
            pieces.remove(idx + 1);
        }

        pieces
    }

    /// Encode a single word into tokens.
    pub fn encode_word(
        &self,
        word: &str,
    ) -> Vec<String> {
        let mut tokens = Vec::new();
        self.encode_word_append(word, &mut tokens);
        tokens
    }

    /// Encode text into token ids.
    ///
    /// ## Returns
    /// One entry per token; characters outside the alphabet have no id
    /// and are reported as `None`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn encode_ids<S: AsRef<str>>(
        &self,
        text: S,
    ) -> Vec<Option<T>> {
        text.as_ref()
            .split_whitespace()
            .flat_map(|word| self.merge_word(word))
            .map(|piece| match piece {
                Piece::Symbol(symbol) => Some(symbol),
                Piece::Unknown(_) => None,
            })
            .collect()
    }

    /// Decode token ids back into text.
    ///
    /// ## Returns
    /// A `Result` containing the words, joined by single spaces,
    /// or `UnknownTokenId` for an id outside the vocabulary.
    pub fn decode_ids(
        &self,
        ids: &[T],
    ) -> PMResult<String> {
        let symbols = ids
            .iter()
            .map(|&id| {
                let id = symbol_to_index(id);
                self.names
                    .get(id)
                    .ok_or(PairmillError::UnknownTokenId { id })
            })
            .collect::<PMResult<Vec<_>>>()?;
        Ok(decode_symbols(&self.end_of_word, &symbols))
    }
}

impl<T: SymbolType> SubwordEncoder for MergeEncoder<T> {
    fn end_of_word(&self) -> &str {
        &self.end_of_word
    }

    fn encode_word_append(
        &self,
        word: &str,
        tokens: &mut Vec<String>,
    ) {
        tokens.extend(self.merge_word(word).into_iter().map(|piece| match piece {
            Piece::Symbol(symbol) => self.names[symbol_to_index(symbol)].to_string(),
            Piece::Unknown(c) => c.to_string(),
        }));
    }
}
