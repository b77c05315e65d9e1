//! # Symbol Table

use compact_str::CompactString;

use crate::corpus::Alphabet;
use crate::errors::{PMResult, PairmillError};
use crate::types::{CommonHashMap, SymbolType, symbol_from_index, symbol_to_index};

/// Interning table between symbol strings and ``T`` handles.
///
/// Handles are dense: the handle of a symbol is its index in insertion order,
/// which is also its index in the trained vocabulary.
#[derive(Debug, Clone)]
pub struct SymbolTable<T: SymbolType> {
    names: Vec<CompactString>,
    index: CommonHashMap<CompactString, T>,
}

impl<T: SymbolType> SymbolTable<T> {
    /// Build a table holding the alphabet symbols, in alphabet order.
    pub fn from_alphabet(alphabet: &Alphabet) -> PMResult<Self> {
        let mut table = Self {
            names: Vec::with_capacity(alphabet.len()),
            index: CommonHashMap::with_capacity(alphabet.len()),
        };
        for symbol in alphabet.symbols() {
            table.insert(symbol)?;
        }
        Ok(table)
    }

    /// The number of symbols.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Look up the handle of a symbol string.
    pub fn lookup(
        &self,
        name: &str,
    ) -> Option<T> {
        self.index.get(name).copied()
    }

    /// Look up the handle of a single-character symbol.
    pub fn lookup_char(
        &self,
        c: char,
    ) -> Option<T> {
        let mut buf = [0u8; 4];
        self.lookup(c.encode_utf8(&mut buf))
    }

    /// The string of a symbol handle.
    ///
    /// ## Panics
    /// Panics if `symbol` was not issued by this table.
    pub fn name(
        &self,
        symbol: T,
    ) -> &CompactString {
        &self.names[symbol_to_index(symbol)]
    }

    /// Insert a new symbol and return its handle.
    ///
    /// ## Returns
    /// * `VocabSizeOverflow` if the next handle does not fit in ``T``;
    /// * `ModelConflict` if `name` is already in the table.
    pub fn insert(
        &mut self,
        name: CompactString,
    ) -> PMResult<T> {
        if self.index.contains_key(&name) {
            return Err(PairmillError::ModelConflict(format!(
                "duplicate symbol {name:?}"
            )));
        }
        let symbol = symbol_from_index::<T>(self.names.len()).ok_or(
            PairmillError::VocabSizeOverflow {
                size: self.names.len() + 1,
            },
        )?;
        self.index.insert(name.clone(), symbol);
        self.names.push(name);
        Ok(symbol)
    }

    /// Release the symbol strings, in handle order.
    pub fn into_names(self) -> Vec<CompactString> {
        self.names
    }
}
