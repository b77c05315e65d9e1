#![allow(missing_docs)]

use std::sync::Arc;

use pairmill::decoders::decode_tokens;
use pairmill::encoders::{MergeEncoder, SubwordEncoder};
use pairmill::model::io::{model_from_json_str, model_to_json_string};
use pairmill::training::{BpeTrainerOptions, StopReason};
use pairmill::{END_OF_WORD, encode, train};

const CORPUS: &[&str] = &[
    "the quick brown fox jumps over the lazy dog",
    "the lower the lowest, the newer the newest",
    "she sells sea shells by the sea shore",
];

#[test]
fn scenario_single_merge() {
    let model = train(["aa bb aa bb aa"], 4, None).unwrap();
    assert_eq!(model.alphabet_size(), 3);
    assert_eq!(model.merges().len(), 1);
    assert_eq!(model.merges()[0].left, "a");
    assert_eq!(model.merges()[0].right, "a");
}

#[test]
fn scenario_training_words_round_trip() {
    let model = train(["highest", "higher"], 100, None).unwrap();

    let mut alphabet: Vec<&str> = model.alphabet().iter().map(|s| s.as_str()).collect();
    alphabet.sort();
    assert_eq!(alphabet, vec!["</w>", "e", "g", "h", "i", "r", "s", "t"]);

    for word in ["highest", "higher"] {
        let tokens = encode(&model, word);
        assert_eq!(decode_tokens(&model, &tokens), word);
    }
}

#[test]
fn scenario_zero_merges() {
    let model = train(["highest", "higher"], 8, None).unwrap();
    assert!(model.merges().is_empty());
    assert_eq!(
        encode(&model, "highest"),
        vec!["h", "i", "g", "h", "e", "s", "t", "</w>"]
    );
}

#[test]
fn scenario_unseen_character() {
    let model = train(["highest", "higher"], 100, None).unwrap();
    let tokens = encode(&model, "high3r");
    assert!(tokens.contains(&"3".to_string()));
    assert_eq!(tokens.concat(), "high3r</w>");
    assert_eq!(decode_tokens(&model, &tokens), "high3r");
}

#[test]
fn round_trip_after_whitespace_normalization() {
    let model = train(CORPUS, 80, None).unwrap();
    for text in CORPUS
        .iter()
        .copied()
        .chain(["  the\tnewest   fox\n", "unseen words: xyz 42"])
    {
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let tokens = encode(&model, text);
        assert_eq!(decode_tokens(&model, &tokens), normalized);

        let word_count = tokens.iter().filter(|t| t.ends_with(END_OF_WORD)).count();
        assert_eq!(word_count, text.split_whitespace().count());
    }
}

#[test]
fn vocabulary_grows_one_symbol_per_merge() {
    let mut previous = train(CORPUS, 1, None).unwrap();
    for target in [10, 30, 50, 70, 90] {
        let model = train(CORPUS, target, None).unwrap();
        assert_eq!(
            model.vocab().len(),
            model.alphabet_size() + model.merges().len()
        );
        assert!(model.vocab().len() <= target.max(model.alphabet_size()));

        // A larger budget extends the same merge sequence.
        assert!(model.merges().starts_with(previous.merges()));
        previous = model;
    }
}

#[test]
fn merge_results_are_closed_and_unique() {
    let model = train(CORPUS, 120, None).unwrap();
    let mut seen = std::collections::BTreeSet::new();
    for rule in model.merges() {
        assert!(model.contains(&rule.left));
        assert!(model.contains(&rule.right));
        assert!(model.contains(&rule.merged()));
        assert!(seen.insert(rule.merged()));
    }
}

#[test]
fn stop_reasons() {
    let run = |target: usize, max_iterations: Option<usize>| {
        let mut trainer = BpeTrainerOptions::new(target)
            .with_max_iterations(max_iterations)
            .init::<String, u32>()
            .unwrap();
        trainer.update_from_samples(CORPUS);
        trainer.train::<u32>().unwrap().stats
    };

    let stats = run(40, None);
    assert_eq!(stats.stop_reason, StopReason::TargetSizeReached);
    assert_eq!(stats.vocab_size(), 40);

    let stats = run(40, Some(3));
    assert_eq!(stats.stop_reason, StopReason::IterationLimit);
    assert_eq!(stats.merges, 3);

    let stats = run(100_000, None);
    assert_eq!(stats.stop_reason, StopReason::PairsExhausted);
    assert!(stats.stopped_early());
    assert_eq!(stats.distinct_words, {
        let mut words: Vec<&str> = CORPUS.iter().flat_map(|s| s.split_whitespace()).collect();
        words.sort();
        words.dedup();
        words.len()
    });
}

#[test]
fn encoder_is_shareable_and_pure() {
    let model = Arc::new(train(CORPUS, 60, None).unwrap());
    let encoder = Arc::new(MergeEncoder::<u32>::new(&model));

    let expected = encoder.encode(CORPUS[1]);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let encoder = encoder.clone();
            std::thread::spawn(move || encoder.encode(CORPUS[1]))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }

    // Encoding does not touch the model.
    assert_eq!(*model, train(CORPUS, 60, None).unwrap());
}

#[test]
fn json_round_trip_preserves_encoding() {
    let model = train(CORPUS, 70, None).unwrap();
    let json = model_to_json_string(&model).unwrap();
    let loaded = model_from_json_str(&json).unwrap();
    assert_eq!(loaded, model);

    for text in CORPUS {
        assert_eq!(encode(&loaded, text), encode(&model, text));
    }
}

#[test]
fn token_ids_round_trip() {
    let model = train(CORPUS, 70, None).unwrap();
    let encoder = MergeEncoder::<u16>::new(&model);

    for text in CORPUS {
        let tokens = encoder.encode(text);
        let ids: Vec<u16> = encoder
            .encode_ids(text)
            .into_iter()
            .map(|id| id.unwrap())
            .collect();
        for (token, &id) in tokens.iter().zip(&ids) {
            assert_eq!(model.token_to_id(token), Some(id as usize));
            assert_eq!(model.id_to_token(id as usize), Some(token.as_str()));
        }
        assert_eq!(encoder.decode_ids(&ids).unwrap(), *text);
    }
}
