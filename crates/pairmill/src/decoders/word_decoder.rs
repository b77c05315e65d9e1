//! # Word Decoder

use crate::model::TrainedModel;

/// Group tokens into words.
///
/// Each token ending with `end_of_word` closes the current word; tokens after
/// the last marker form a final, unterminated word.
///
/// ## Arguments
/// * `end_of_word` - The end-of-word marker.
/// * `tokens` - The token sequence.
///
/// ## Returns
/// The words, in order.
pub fn split_words<S: AsRef<str>>(
    end_of_word: &str,
    tokens: &[S],
) -> Vec<String> {
    let mut words = Vec::new();
    let mut word = String::new();
    for token in tokens {
        let token = token.as_ref();
        match token.strip_suffix(end_of_word) {
            Some(stem) => {
                word.push_str(stem);
                words.push(core::mem::take(&mut word));
            }
            None => word.push_str(token),
        }
    }
    if !word.is_empty() {
        words.push(word);
    }
    words
}

/// Decode tokens into text, given the end-of-word marker.
///
/// ## Returns
/// The words joined by single spaces, with no trailing space.
pub fn decode_symbols<S: AsRef<str>>(
    end_of_word: &str,
    tokens: &[S],
) -> String {
    split_words(end_of_word, tokens).join(" ")
}

/// Decode tokens produced by encoding with `model` back into text.
///
/// Whitespace runs in the encoded text come back as single spaces.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(model, tokens)))]
pub fn decode_tokens<S: AsRef<str>>(
    model: &TrainedModel,
    tokens: &[S],
) -> String {
    decode_symbols(model.end_of_word(), tokens)
}
