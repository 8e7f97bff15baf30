use proptest::prelude::*;
use readscore_core::Readability;
use readscore_core::counts::{lexicon_count, sentence_count};
use readscore_core::formulas::Formula;
use readscore_core::text::remove_punctuation;

/// Sentences built from a small vocabulary, so texts look like prose.
fn prose() -> impl Strategy<Value = String> {
    let word = prop::sample::select(vec![
        "the", "cat", "Readability", "sat", "comprehension", "on", "a", "mat",
        "difficulty", "walked", "beautiful", "elephants", "quickly", "ran",
    ]);
    let sentence = prop::collection::vec(word, 1..12).prop_map(|words| {
        let mut sentence = words.join(" ");
        let first = sentence[..1].to_uppercase();
        sentence.replace_range(..1, &first);
        sentence
    });
    let end = prop::sample::select(vec![".", "!", "?", "\"."]);
    prop::collection::vec((sentence, end), 0..8).prop_map(|sentences| {
        sentences
            .into_iter()
            .map(|(sentence, end)| format!("{sentence}{end}"))
            .collect::<Vec<_>>()
            .join(" ")
    })
}

#[test]
fn empty_text_has_no_words() {
    assert_eq!(lexicon_count("", true), 0);
}

proptest! {
    #[test]
    fn lexicon_count_never_panics(text in "\\PC{0,200}") {
        let _ = lexicon_count(&text, true);
        let _ = lexicon_count(&text, false);
    }

    #[test]
    fn sentence_count_is_at_least_one(text in "\\PC{0,200}") {
        prop_assert!(sentence_count(&text) >= 1);
    }

    #[test]
    fn remove_punctuation_is_idempotent(text in "\\PC{0,200}") {
        let once = remove_punctuation(&text);
        prop_assert_eq!(remove_punctuation(&once), once);
    }

    #[test]
    fn median_lies_within_components(text in prose()) {
        let engine = Readability::default();
        let components = engine.median_components(&text);
        let min = components.iter().copied().fold(f64::INFINITY, f64::min);
        let max = components.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let median = engine.text_median(&text);
        prop_assert!(median >= min && median <= max, "{median} outside [{min}, {max}]");
    }

    #[test]
    fn formulas_are_always_finite(text in "\\PC{0,120}") {
        let engine = Readability::default();
        for formula in Formula::ALL {
            prop_assert!(engine.score(formula, &text).is_finite(), "{}", formula);
        }
    }

    #[test]
    fn label_matches_grade_shape(text in prose()) {
        let engine = Readability::default();
        let grade = engine.consensus(&text).grade;
        prop_assume!(grade >= 1.0);
        let label = engine.text_standard(&text, false).to_string();
        let re = regex::Regex::new(r"^\d+(st|nd|rd|th) and \d+(st|nd|rd|th) grade$").unwrap();
        prop_assert!(re.is_match(&label), "{}", label);
    }
}
