//! # Alphabet Builder

use std::collections::BTreeSet;

use compact_str::CompactString;

use crate::errors::{PMResult, PairmillError};

/// Check that `marker` can serve as an end-of-word marker.
///
/// The marker must be non-empty and must not contain whitespace,
/// otherwise it could not survive whitespace word splitting.
pub fn validate_marker(marker: &str) -> PMResult<()> {
    if marker.is_empty() || marker.chars().any(char::is_whitespace) {
        return Err(PairmillError::InvalidMarker {
            marker: marker.to_string(),
        });
    }
    Ok(())
}

/// The initial symbol set of a training run.
///
/// Symbol order is fixed: the end-of-word marker first,
/// then every distinct character sorted by code point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    marker: CompactString,
    chars: Vec<char>,
}

impl Alphabet {
    /// Build the alphabet of a set of words.
    ///
    /// ## Arguments
    /// * `words` - the distinct words; order and repetition do not matter.
    /// * `marker` - the end-of-word marker.
    ///
    /// ## Returns
    /// A `Result` containing the `Alphabet`, or `InvalidMarker` if the
    /// marker is malformed or is itself one of the corpus characters.
    pub fn from_words<I>(
        words: I,
        marker: &str,
    ) -> PMResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        validate_marker(marker)?;

        let mut chars: BTreeSet<char> = BTreeSet::new();
        for word in words {
            chars.extend(word.as_ref().chars());
        }

        let mut marker_chars = marker.chars();
        if let (Some(c), None) = (marker_chars.next(), marker_chars.next())
            && chars.contains(&c)
        {
            return Err(PairmillError::InvalidMarker {
                marker: marker.to_string(),
            });
        }

        Ok(Self {
            marker: marker.into(),
            chars: chars.into_iter().collect(),
        })
    }

    /// The end-of-word marker.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// The distinct characters, sorted.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Is `c` one of the alphabet's characters?
    pub fn contains_char(
        &self,
        c: char,
    ) -> bool {
        self.chars.binary_search(&c).is_ok()
    }

    /// The number of symbols, including the marker.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.chars.len() + 1
    }

    /// The alphabet symbols as strings, in symbol order.
    pub fn symbols(&self) -> impl Iterator<Item = CompactString> + '_ {
        core::iter::once(self.marker.clone()).chain(self.chars.iter().map(|&c| {
            let mut buf = [0u8; 4];
            CompactString::from(&*c.encode_utf8(&mut buf))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::END_OF_WORD;

    #[test]
    fn test_alphabet_from_words() {
        let alphabet = Alphabet::from_words(["highest", "higher"], END_OF_WORD).unwrap();

        assert_eq!(alphabet.marker(), "</w>");
        assert_eq!(alphabet.chars(), &['e', 'g', 'h', 'i', 'r', 's', 't']);
        assert_eq!(alphabet.len(), 8);

        assert!(alphabet.contains_char('h'));
        assert!(!alphabet.contains_char('z'));

        let symbols: Vec<CompactString> = alphabet.symbols().collect();
        assert_eq!(symbols, vec!["</w>", "e", "g", "h", "i", "r", "s", "t"]);
    }

    #[test]
    fn test_empty_alphabet() {
        let alphabet = Alphabet::from_words(Vec::<String>::new(), END_OF_WORD).unwrap();
        assert_eq!(alphabet.len(), 1);
        assert_eq!(alphabet.symbols().collect::<Vec<_>>(), vec!["</w>"]);
    }

    #[test]
    fn test_multibyte_chars() {
        let alphabet = Alphabet::from_words(["☃é", "ée"], END_OF_WORD).unwrap();
        assert_eq!(alphabet.chars(), &['e', 'é', '☃']);
    }

    #[test]
    fn test_bad_markers() {
        for marker in ["", "</ w>", "\t"] {
            assert!(matches!(
                Alphabet::from_words(["ab"], marker),
                Err(PairmillError::InvalidMarker { .. })
            ));
        }

        // A single-character marker may not be a corpus character.
        assert!(Alphabet::from_words(["a_b"], "_").is_err());
        assert!(Alphabet::from_words(["ab"], "_").is_ok());
    }
}
