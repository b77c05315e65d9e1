//! # Model IO
//!
//! Models are stored as a plain JSON object:
//!
//! ```json
//! {
//!   "end_of_word": "</w>",
//!   "merges": [["a", "a"], ["aa", "</w>"]],
//!   "vocab": ["</w>", "a", "b", "aa", "aa</w>"]
//! }
//! ```
//!
//! * `merges` - the merge table, in training order.
//! * `vocab` - the vocabulary. Saved in token id order; loaded in any order.
//!
//! Loading puts the vocabulary back in token id order (the marker, the
//! other characters by code point, then merge results in rule order), and
//! then validates the model; see [`crate::model::TrainedModel::new`].

mod json_model;

#[doc(inline)]
pub use json_model::*;
