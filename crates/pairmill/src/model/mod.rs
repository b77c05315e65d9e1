//! # Trained Models
//!
//! A [`TrainedModel`] is the only state that survives training:
//! the ordered merge table and the vocabulary.
//!
//! ## Saving and Loading
//!
//! ```rust,no_run
//! use pairmill::model::io::{load_model_json_path, save_model_json_path};
//!
//! fn example() -> pairmill::PMResult<()> {
//!     let model = pairmill::train(["the cat sat on the mat"], 32, None)?;
//!     save_model_json_path(&model, "model.json")?;
//!
//!     let reloaded = load_model_json_path("model.json")?;
//!     assert_eq!(model, reloaded);
//!     Ok(())
//! }
//! ```

pub mod io;

mod trained_model;

#[doc(inline)]
pub use trained_model::{MergeRule, TrainedModel};
