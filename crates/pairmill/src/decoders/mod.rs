//! # Token Decoders
//!
//! Turns subword tokens back into text: a token ending with the end-of-word
//! marker closes a word, and words are joined with single spaces.
//!
//! Text that literally contains the marker string does not round-trip.
//!
//! ## Example
//!
//! ```rust
//! use pairmill::decoders::decode_tokens;
//!
//! let model = pairmill::train(["low lower"], 12, None).unwrap();
//! let tokens = pairmill::encode(&model, "lower  low");
//!
//! assert_eq!(decode_tokens(&model, &tokens), "lower low");
//! ```

mod word_decoder;

#[doc(inline)]
pub use word_decoder::*;
