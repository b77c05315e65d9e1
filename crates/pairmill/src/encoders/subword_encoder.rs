//! # Subword Encoder Trait

/// Expected bytes of text per output token; used to size buffers.
const EXPECTED_BYTES_PER_TOKEN: usize = 2;

/// A trait for subword encoders.
pub trait SubwordEncoder: Send + Sync {
    /// The end-of-word marker closing each encoded word.
    fn end_of_word(&self) -> &str;

    /// Encode one word, appending to a target buffer.
    ///
    /// The appended tokens end with the end-of-word marker,
    /// possibly merged into the last symbol.
    ///
    /// ## Arguments
    /// * `word` - The word to encode; must not contain whitespace.
    /// * `tokens` - The target token buffer to append to.
    fn encode_word_append(
        &self,
        word: &str,
        tokens: &mut Vec<String>,
    );

    /// Encode text, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `text` - The text to encode; split on whitespace into words.
    /// * `tokens` - The target token buffer to append to.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text, tokens)))]
    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<String>,
    ) {
        for word in text.split_whitespace() {
            self.encode_word_append(word, tokens);
        }
    }

    /// Encode text into tokens.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// The tokens of every word, in word order.
    fn encode<S: AsRef<str>>(
        &self,
        text: S,
    ) -> Vec<String> {
        let text = text.as_ref();
        let mut tokens = Vec::with_capacity(text.len() / EXPECTED_BYTES_PER_TOKEN + 1);
        self.encode_append(text, &mut tokens);
        tokens
    }

    /// Encode a batch of text into tokens.
    ///
    /// ## Arguments
    /// * `batch` - A slice of texts to encode.
    ///
    /// ## Returns
    /// A vector of token vectors.
    fn encode_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<String>> {
        batch.iter().map(|text| self.encode(text)).collect()
    }
}
