//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as an interned symbol handle.
///
/// These are constrained to be unsigned primitive integers;
/// a vocabulary of `n` symbols needs `T::max_value() >= n - 1`.
pub trait SymbolType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> SymbolType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// A pair of adjacent symbols.
pub type Pair<T> = (T, T);

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type CommonHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type CommonHashSet<V> = ahash::AHashSet<V>;
    } else {
        /// Type Alias for hash maps in this crate.
        pub type CommonHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type CommonHashSet<V> = std::collections::HashSet<V>;
    }
}

/// Compile-time check that a value is `Send + Sync`.
pub fn check_is_send_sync<S: Send + Sync>(_: &S) {}

/// Convert a `usize` index to a symbol handle.
///
/// ## Returns
/// `None` if `index` does not fit in `T`.
pub fn symbol_from_index<T: SymbolType>(index: usize) -> Option<T> {
    T::from_usize(index)
}

/// Convert a symbol handle to a `usize` index.
///
/// Handles are created from in-memory indices, so they always fit.
pub fn symbol_to_index<T: SymbolType>(symbol: T) -> usize {
    symbol.to_usize().unwrap_or(usize::MAX)
}
