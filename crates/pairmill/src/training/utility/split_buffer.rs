//! # Word Split Buffer

use core::hash::Hash;

use crate::training::utility::SymbolTable;
use crate::types::{Pair, SymbolType};

/// The mutable segmentation of one distinct word.
///
/// Starts as one symbol per character followed by the end-of-word marker,
/// and is iteratively rewritten during BPE training.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SplitBuf<T: SymbolType> {
    symbols: Vec<T>,
}

impl<T: SymbolType, S: AsRef<[T]>> From<S> for SplitBuf<T> {
    fn from(symbols: S) -> Self {
        Self::from_symbols(symbols)
    }
}

impl<T: SymbolType> SplitBuf<T> {
    const DEC: i32 = -1;
    const INC: i32 = 1;

    /// Create a new split buffer from symbols.
    pub fn from_symbols<S>(symbols: S) -> Self
    where
        S: AsRef<[T]>,
    {
        Self {
            symbols: symbols.as_ref().to_vec(),
        }
    }

    /// Create the initial split of a word.
    ///
    /// # Arguments
    /// * `word` - the word text.
    /// * `table` - the symbol table; must hold every character of `word`.
    /// * `marker` - the end-of-word marker handle.
    ///
    /// # Returns
    /// `None` if a character of `word` has no symbol in `table`.
    pub fn from_word(
        word: &str,
        table: &SymbolTable<T>,
        marker: T,
    ) -> Option<Self> {
        let mut symbols = Vec::with_capacity(word.len() + 1);
        for c in word.chars() {
            symbols.push(table.lookup_char(c)?);
        }
        symbols.push(marker);
        Some(Self { symbols })
    }

    /// View the symbols as a slice.
    pub fn symbols(&self) -> &[T] {
        &self.symbols
    }

    /// Get the length of the split.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Is this split empty?
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get an iterator over adjacent [`Pair<T>`] windows of this split.
    pub fn pairs<'a>(&'a self) -> impl Iterator<Item = Pair<T>> + 'a {
        self.symbols.windows(2).map(|w| (w[0], w[1]))
    }

    /// Merge all non-overlapping occurrences of `pair -> replacement`, left to right.
    ///
    /// # Arguments
    /// * `pair` - the pair to merge.
    /// * `replacement` - the symbol to replace `pair` with.
    /// * `on_merge` - a callback function to invoke for each incremental pair delta.
    ///   The function is called with:
    ///   - `pair` - the adjacent pair whose count changed.
    ///   - `delta` - the pair count delta: `+1` for an added pair, `-1` for a removed pair.
    pub fn merge_pair_cb<F>(
        &mut self,
        pair: Pair<T>,
        replacement: T,
        on_merge: &mut F,
    ) where
        F: FnMut(Pair<T>, i32),
    {
        let (a, b) = pair;
        let n = self.symbols.len();

        if n < 2 {
            return;
        }

        let mut merged: Vec<T> = Vec::with_capacity(n);

        let mut i = 0;
        while i < n {
            let current = self.symbols[i];

            if i + 1 < n && pair == (current, self.symbols[i + 1]) {
                if let Some(&x) = merged.last() {
                    on_merge((x, a), Self::DEC);
                    on_merge((x, replacement), Self::INC);
                }

                on_merge(pair, Self::DEC);

                if i + 2 < n {
                    let y = self.symbols[i + 2];
                    on_merge((b, y), Self::DEC);
                    on_merge((replacement, y), Self::INC);
                };

                merged.push(replacement);

                // Skip 'a' and 'b'.
                i += 2;
            } else {
                merged.push(current);
                i += 1;
            }
        }

        self.symbols = merged;
    }

    /// Merge all non-overlapping occurrences of `pair -> replacement`.
    ///
    /// # Returns
    /// a delta list of pair count deltas for this split:
    /// * `(Pair, +1)` - for each instance of an added `Pair`.
    /// * `(Pair, -1)` - for each instance of a removed `Pair`.
    pub fn merge_pair(
        &mut self,
        pair: Pair<T>,
        replacement: T,
    ) -> Vec<(Pair<T>, i32)> {
        let mut deltas: Vec<(Pair<T>, i32)> = Vec::with_capacity(6);
        self.merge_pair_cb(pair, replacement, &mut |p, d| deltas.push((p, d)));
        deltas
    }
}
