//! Dictionary-backed syllable estimation.
//!
//! Known words come from a table of common English words whose syllable
//! counts the vowel-group heuristic gets wrong or only gets right by luck.
//! Everything else falls back to [`estimate_word`].

use std::collections::HashMap;
use std::sync::LazyLock;

use super::SyllableOracle;

const ONE: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "it", "for", "not", "on", "with",
    "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we", "say", "her",
    "she", "or", "an", "will", "my", "one", "all", "would", "there", "their", "what", "so", "up",
    "out", "if", "who", "get", "which", "go", "me", "when", "make", "can", "like", "time", "no",
    "just", "him", "know", "take", "see", "use", "good", "think", "way", "could", "first", "than",
    "some", "come", "made", "came", "done", "gone", "none", "once", "where", "whose", "these",
    "those", "here", "were", "are", "more", "give", "live", "love", "move", "lose",
    "house", "horse", "course", "force", "voice", "choice", "piece", "juice", "sauce", "since",
    "prince", "fire", "hire", "tire", "wire", "sure", "pure", "cure", "age", "page", "stage",
    "change", "range", "large", "huge", "edge", "judge", "bridge", "eyes", "does", "goes",
    "used", "loved", "lived", "moved", "changed", "named", "liked", "asked", "worked", "helped",
    "looked", "jumped", "walked", "talked", "played", "stayed", "called", "filled", "rained",
    "through", "though", "thought", "brought", "caught", "taught", "laugh", "yes", "year",
    "world", "school", "friend", "great", "break", "steak", "heart", "earth", "learn", "search",
];

const TWO: &[&str] = &[
    "people", "into", "other", "because", "over", "after", "never", "under", "also", "only",
    "being", "before", "many", "even", "against", "woman", "little", "should", "problem",
    "number", "become", "during", "water", "often", "issue", "system", "program", "question",
    "really", "father", "mother", "future", "doctor", "major", "always", "public", "maybe",
    "follow", "moment", "between", "able", "table", "simple", "uncle", "handle", "sample",
    "battle", "couple", "double", "trouble", "purple", "circle", "about", "poem", "poet",
    "going", "doing", "seeing", "skiing", "giant", "quiet", "diet", "science", "lion", "every",
    "evening", "police", "orange", "wanted", "needed", "started", "added", "ended", "landed",
    "waited", "visited", "business", "chocolate", "camera", "different", "several", "favorite",
    "interest", "vegetable", "comfortable", "family", "finally", "basically", "average",
    "create", "react", "apple", "middle", "single",
    "noble", "gentle", "title", "castle", "whistle", "buses", "boxes", "horses", "places",
    "pages", "changes", "wishes", "watches", "answer", "village", "machine",
];

const THREE: &[&str] = &[
    "together", "however", "another", "important", "company", "example", "already", "possible",
    "everything", "beautiful", "policy", "difficult", "everyone", "physical", "continue",
    "general", "natural", "remember", "national", "develop", "personal", "probably", "actually",
    "suddenly", "library", "yesterday", "banana", "potato", "tomato", "violet", "separate",
    "diamond", "radio", "video", "animal", "hospital", "excited", "elephant", "hamburger",
    "understand", "computer", "president", "quietly", "happiness", "position", "decision",
    "creative", "reaction", "museum", "piano", "period", "serious", "various", "curious",
    "area", "idea",
];

const FOUR: &[&str] = &[
    "necessary", "particular", "especially", "everybody", "information", "available",
    "experience", "reality", "ability", "education", "technology", "community", "environment",
    "generation", "economy", "society", "political", "relationship", "apparently", "obviously",
    "definitely", "situation", "ridiculous", "material", "original", "category", "dictionary",
    "biology", "television", "ingredient", "memorial", "variety", "anxiety",
];

const FIVE: &[&str] = &[
    "organization", "responsibility", "opportunity", "unfortunately", "possibility",
    "communication", "international", "necessarily", "administration", "immediately",
    "individual", "university", "vocabulary", "imagination", "laboratory", "curiosity",
    "association", "personality", "electricity",
];

/// Common words with known syllable counts.
pub static SYLLABLE_TABLE: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    [(1, ONE), (2, TWO), (3, THREE), (4, FOUR), (5, FIVE)]
        .into_iter()
        .flat_map(|(count, words)| words.iter().map(move |w| (*w, count)))
        .collect()
});

/// Look up a lowercase word in the syllable table.
pub fn lookup(word: &str) -> Option<usize> {
    SYLLABLE_TABLE.get(word).copied()
}

const fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}

/// Estimate syllables in one lowercase word by counting vowel groups.
///
/// A leading `y` is a consonant. Adjustments: a final silent `e` (but not a
/// consonant + `le` ending or `ee`), a silent `-ed` (except after `t`/`d`),
/// and a silent `-es` (except after sibilants). Any non-empty word has at
/// least one syllable; the empty string has none.
pub fn estimate_word(word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }
    let bytes = word.as_bytes();
    let len = bytes.len();

    let mut groups: usize = 0;
    let mut previous_was_vowel = false;
    for (i, &b) in bytes.iter().enumerate() {
        let vowel = is_vowel(b) && !(i == 0 && b == b'y');
        if vowel && !previous_was_vowel {
            groups += 1;
        }
        previous_was_vowel = vowel;
    }

    let before = |n: usize| len.checked_sub(n).map(|i| bytes[i]);

    if groups > 1 && word.ends_with('e') && !word.ends_with("ee") {
        let consonant_le = word.ends_with("le") && before(3).is_some_and(|b| !is_vowel(b));
        if !consonant_le {
            groups -= 1;
        }
    } else if groups > 1 && word.ends_with("ed") {
        if !before(3).is_some_and(|b| matches!(b, b't' | b'd')) {
            groups -= 1;
        }
    } else if groups > 1 && word.ends_with("es") {
        let sibilant = before(3).is_some_and(|b| matches!(b, b's' | b'x' | b'z' | b'c' | b'g'))
            || word.ends_with("ches")
            || word.ends_with("shes");
        if !sibilant {
            groups -= 1;
        }
    }

    groups.max(1)
}

/// Syllables for one word: table first, heuristic second.
pub fn count_word(word: &str) -> usize {
    lookup(word).unwrap_or_else(|| estimate_word(word))
}

/// The bundled [`SyllableOracle`]: table lookup with heuristic fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct DictionarySyllables;

impl SyllableOracle for DictionarySyllables {
    fn estimate(&self, text: &str) -> usize {
        text.split_whitespace().map(count_word).sum()
    }
}
