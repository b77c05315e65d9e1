//! # Trainer Implementation Utilities

mod pair_index;
mod split_buffer;
mod symbol_table;

#[doc(inline)]
pub use pair_index::{PairCountMap, PairIndex, PairIndexMap};
#[doc(inline)]
pub use split_buffer::SplitBuf;
#[doc(inline)]
pub use symbol_table::SymbolTable;
