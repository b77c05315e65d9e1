//! # Subword Encoders
//!
//! Encoders replay a [`crate::model::TrainedModel`]'s merge table over
//! new text.
//!
//! ## Example
//!
//! ```rust
//! use pairmill::encoders::{MergeEncoder, SubwordEncoder};
//!
//! let model = pairmill::train(["aa bb aa bb aa"], 4, None).unwrap();
//! let encoder = MergeEncoder::<u32>::new(&model);
//!
//! assert_eq!(encoder.encode("aab"), vec!["aa", "b", "</w>"]);
//! assert_eq!(
//!     encoder.encode_batch(&["aa", "ba"]),
//!     vec![vec!["aa", "</w>"], vec!["b", "a", "</w>"]],
//! );
//! ```

mod merge_encoder;
mod subword_encoder;

#[doc(inline)]
pub use merge_encoder::MergeEncoder;
#[doc(inline)]
pub use subword_encoder::SubwordEncoder;
