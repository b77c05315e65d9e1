//! # Parallel Encoder

use crate::encoders::SubwordEncoder;

/// Batch-Level Parallel Encoder Wrapper.
///
/// Enables ``rayon`` encoding of batches; every text in a batch shares
/// the inner encoder (and its model) read-only.
#[derive(Debug, Clone)]
pub struct ParallelEncoder<E: SubwordEncoder> {
    /// Inner encoder.
    pub inner: E,
}

impl<E: SubwordEncoder> ParallelEncoder<E> {
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The subword encoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelEncoder` instance.
    pub fn new(inner: E) -> Self {
        Self { inner }
    }
}

impl<E: SubwordEncoder> SubwordEncoder for ParallelEncoder<E> {
    fn end_of_word(&self) -> &str {
        self.inner.end_of_word()
    }

    fn encode_word_append(
        &self,
        word: &str,
        tokens: &mut Vec<String>,
    ) {
        self.inner.encode_word_append(word, tokens)
    }

    fn encode_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<String>> {
        use rayon::prelude::*;
        batch.par_iter().map(|text| self.encode(text)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoders::decode_tokens;
    use crate::encoders::MergeEncoder;
    use crate::train;
    use crate::types::check_is_send_sync;

    #[test]
    fn test_parallel_encoder() {
        let samples = vec![
            "hello world".to_string(),
            "hello san francisco".to_string(),
            "it's not the heat, it's the salt".to_string(),
        ];
        let model = train(&samples, 60, None).unwrap();

        let encoder = MergeEncoder::<u16>::new(&model);
        check_is_send_sync(&encoder);

        let parallel = ParallelEncoder::new(encoder.clone());
        check_is_send_sync(&parallel);
        assert_eq!(parallel.end_of_word(), "</w>");

        let batch = parallel.encode_batch(&samples);
        assert_eq!(batch, encoder.encode_batch(&samples));

        for (tokens, sample) in batch.iter().zip(&samples) {
            assert_eq!(&decode_tokens(&model, tokens), sample);
        }
    }
}
