//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel encoders.

mod parallel_encoder;

pub use parallel_encoder::ParallelEncoder;
