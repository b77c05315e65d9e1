//! # Corpus Statistics
//!
//! The leaves of training:
//! * [`WordCounter`] - splits documents on whitespace into a ``{word -> count}`` table.
//! * [`Alphabet`] - the initial symbol set derived from the counted words.
//!
//! Corpus acquisition is left to callers; anything that yields strings,
//! including the token stream of an external source-code lexer, can be counted.

mod alphabet;
mod corpus_types;
mod word_counter;

#[doc(inline)]
pub use alphabet::{Alphabet, validate_marker};
#[doc(inline)]
pub use corpus_types::{CountType, WordKeyType};
#[doc(inline)]
pub use word_counter::{WordCounter, WordCounterOptions};
