//! # Error Types

/// Errors from pairmill operations.
#[derive(Debug, thiserror::Error)]
pub enum PairmillError {
    /// The target vocab size must be at least 1.
    #[error("target vocab size must be positive")]
    ZeroVocabSize,

    /// The iteration budget, when given, must be at least 1.
    #[error("max iterations must be positive when set")]
    ZeroMaxIterations,

    /// The end-of-word marker is empty or contains whitespace.
    #[error("invalid end-of-word marker: {marker:?}")]
    InvalidMarker {
        /// The rejected marker.
        marker: String,
    },

    /// Vocab size exceeds the capacity of the symbol handle type.
    #[error("vocab size ({size}) exceeds symbol handle capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Model data is inconsistent.
    #[error("model conflict: {0}")]
    ModelConflict(String),

    /// A token id is not in the vocabulary.
    #[error("unknown token id: {id}")]
    UnknownTokenId {
        /// The unknown id.
        id: usize,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for pairmill operations.
pub type PMResult<T> = core::result::Result<T, PairmillError>;
