//! # Trained Model

use compact_str::CompactString;

use crate::corpus::validate_marker;
use crate::errors::{PMResult, PairmillError};
use crate::types::CommonHashMap;

/// A learned merge rule: ``(left, right) -> left ++ right``.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MergeRule {
    /// The left operand.
    pub left: CompactString,

    /// The right operand.
    pub right: CompactString,
}

impl MergeRule {
    /// Create a new rule.
    pub fn new<L, R>(
        left: L,
        right: R,
    ) -> Self
    where
        L: Into<CompactString>,
        R: Into<CompactString>,
    {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// The symbol this rule produces.
    pub fn merged(&self) -> CompactString {
        let mut merged = CompactString::with_capacity(self.left.len() + self.right.len());
        merged.push_str(&self.left);
        merged.push_str(&self.right);
        merged
    }
}

impl<L, R> From<(L, R)> for MergeRule
where
    L: Into<CompactString>,
    R: Into<CompactString>,
{
    fn from((left, right): (L, R)) -> Self {
        Self::new(left, right)
    }
}

/// A frozen BPE model: the ordered merge table and the vocabulary.
///
/// The vocabulary lists the alphabet (the end-of-word marker and the single
/// characters) followed by the result of each merge rule, in rule order;
/// a symbol's index in this list is its token id.
///
/// A `TrainedModel` is immutable once built, and holds no reference to the
/// training corpus; share it freely between encoders and threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainedModel {
    end_of_word: CompactString,
    merges: Vec<MergeRule>,
    vocab: Vec<CompactString>,
    token_ids: CommonHashMap<CompactString, usize>,
}

impl TrainedModel {
    /// Build and validate a model.
    ///
    /// Checks:
    /// * the marker is non-empty and has no whitespace;
    /// * vocabulary symbols are non-empty and unique;
    /// * the alphabet (the first ``vocab.len() - merges.len()`` symbols)
    ///   holds the marker and otherwise only single characters;
    /// * the ``i``-th merge result is ``vocab[alphabet_size + i]``,
    ///   and its operands precede it in the vocabulary.
    ///
    /// ## Returns
    /// A `Result` containing the model, or a `ModelConflict` error.
    pub fn new(
        end_of_word: impl Into<CompactString>,
        merges: Vec<MergeRule>,
        vocab: Vec<CompactString>,
    ) -> PMResult<Self> {
        let end_of_word = end_of_word.into();
        validate_marker(&end_of_word)?;

        let conflict = |msg: String| Err(PairmillError::ModelConflict(msg));

        if merges.len() >= vocab.len() {
            return conflict(format!(
                "{} merges need more than {} vocab entries",
                merges.len(),
                vocab.len()
            ));
        }
        let alphabet_size = vocab.len() - merges.len();

        let mut token_ids: CommonHashMap<CompactString, usize> =
            CommonHashMap::with_capacity(vocab.len());
        for (id, symbol) in vocab.iter().enumerate() {
            if symbol.is_empty() {
                return conflict(format!("empty symbol at id {id}"));
            }
            if token_ids.insert(symbol.clone(), id).is_some() {
                return conflict(format!("duplicate symbol {symbol:?}"));
            }
        }

        match token_ids.get(&end_of_word) {
            Some(&id) if id < alphabet_size => (),
            _ => {
                return conflict(format!(
                    "end-of-word marker {end_of_word:?} is not in the alphabet"
                ));
            }
        }
        for symbol in &vocab[..alphabet_size] {
            if *symbol != end_of_word && symbol.chars().count() != 1 {
                return conflict(format!(
                    "alphabet symbol {symbol:?} is not a single character"
                ));
            }
        }

        for (rank, rule) in merges.iter().enumerate() {
            let id = alphabet_size + rank;
            for operand in [&rule.left, &rule.right] {
                match token_ids.get(operand) {
                    Some(&op_id) if op_id < id => (),
                    _ => {
                        return conflict(format!(
                            "merge {rank} {rule:?}: operand {operand:?} is not defined before it"
                        ));
                    }
                }
            }
            if vocab[id] != rule.merged() {
                return conflict(format!(
                    "merge {rank} {rule:?}: produces {:?}, but vocab[{id}] is {:?}",
                    rule.merged(),
                    vocab[id]
                ));
            }
        }

        Ok(Self {
            end_of_word,
            merges,
            vocab,
            token_ids,
        })
    }

    /// The end-of-word marker.
    pub fn end_of_word(&self) -> &str {
        &self.end_of_word
    }

    /// The merge table, in training (priority) order.
    pub fn merges(&self) -> &[MergeRule] {
        &self.merges
    }

    /// The vocabulary, in token id order.
    pub fn vocab(&self) -> &[CompactString] {
        &self.vocab
    }

    /// The number of alphabet symbols (characters plus the marker).
    pub fn alphabet_size(&self) -> usize {
        self.vocab.len() - self.merges.len()
    }

    /// The alphabet symbols.
    pub fn alphabet(&self) -> &[CompactString] {
        &self.vocab[..self.alphabet_size()]
    }

    /// Is `symbol` in the vocabulary?
    pub fn contains(
        &self,
        symbol: &str,
    ) -> bool {
        self.token_ids.contains_key(symbol)
    }

    /// Look up the token id of a symbol.
    pub fn token_to_id(
        &self,
        symbol: &str,
    ) -> Option<usize> {
        self.token_ids.get(symbol).copied()
    }

    /// Look up the symbol of a token id.
    pub fn id_to_token(
        &self,
        id: usize,
    ) -> Option<&str> {
        self.vocab.get(id).map(|s| s.as_str())
    }
}
