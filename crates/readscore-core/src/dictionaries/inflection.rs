//! Rule-based English singularization.
//!
//! Resolution order for a lowercase word:
//!
//! 1. Irregular singulars (`is`, `this`, `person`, ...) are kept as-is.
//! 2. Irregular plurals (`people`, `teeth`, `those`, ...) map to their singular.
//! 3. Uncountable nouns are kept as-is.
//! 4. Suffix rules, most specific first; the first match wins.
//!
//! Words that match no rule are returned unchanged.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use super::Singularize;

/// `(singular, plural)` pairs. When two singulars share a plural, the later
/// pair decides the singular the plural maps back to.
const IRREGULAR: &[(&str, &str)] = &[
    ("i", "we"),
    ("me", "us"),
    ("he", "they"),
    ("she", "they"),
    ("them", "them"),
    ("myself", "ourselves"),
    ("yourself", "yourselves"),
    ("itself", "themselves"),
    ("herself", "themselves"),
    ("himself", "themselves"),
    ("themself", "themselves"),
    ("is", "are"),
    ("was", "were"),
    ("has", "have"),
    ("this", "these"),
    ("that", "those"),
    ("my", "our"),
    ("its", "their"),
    ("his", "their"),
    ("her", "their"),
    ("echo", "echoes"),
    ("dingo", "dingoes"),
    ("volcano", "volcanoes"),
    ("tornado", "tornadoes"),
    ("torpedo", "torpedoes"),
    ("genus", "genera"),
    ("viscus", "viscera"),
    ("stigma", "stigmata"),
    ("stoma", "stomata"),
    ("dogma", "dogmata"),
    ("lemma", "lemmata"),
    ("schema", "schemata"),
    ("anathema", "anathemata"),
    ("ox", "oxen"),
    ("axe", "axes"),
    ("die", "dice"),
    ("yes", "yeses"),
    ("foot", "feet"),
    ("eave", "eaves"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("quiz", "quizzes"),
    ("human", "humans"),
    ("proof", "proofs"),
    ("carve", "carves"),
    ("valve", "valves"),
    ("looey", "looies"),
    ("thief", "thieves"),
    ("groove", "grooves"),
    ("pickaxe", "pickaxes"),
    ("passerby", "passersby"),
    ("canvas", "canvases"),
];

static IRREGULAR_SINGULARS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| IRREGULAR.iter().map(|(singular, _)| *singular).collect());

static IRREGULAR_PLURALS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    IRREGULAR
        .iter()
        .map(|(singular, plural)| (*plural, *singular))
        .collect()
});

/// Nouns with no distinct plural form.
static UNCOUNTABLE: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "adulthood", "advice", "agenda", "aid", "aircraft", "alcohol", "ammo", "analytics",
        "anime", "athletics", "audio", "bison", "blood", "bream", "buffalo", "butter", "carp",
        "cash", "chassis", "chess", "clothing", "cod", "commerce", "cooperation", "corps",
        "debris", "diabetes", "digestion", "elk", "energy", "equipment", "excretion",
        "expertise", "firmware", "flounder", "fun", "gallows", "garbage", "graffiti", "hardware",
        "headquarters", "health", "herpes", "highjinks", "homework", "housework", "information",
        "jeans", "justice", "kudos", "labour", "literature", "machinery", "mackerel", "mail",
        "media", "mews", "moose", "music", "mud", "manga", "news", "only", "personnel", "pike",
        "plankton", "pliers", "police", "pollution", "premises", "rain", "research", "rice",
        "salmon", "scissors", "series", "sewage", "shambles", "shrimp", "software", "staff",
        "species", "swine", "tennis", "traffic", "transportation", "trout", "tuna", "wealth",
        "welfare", "whiting", "wildebeest", "wildlife", "you",
    ]
    .into_iter()
    .collect()
});

/// Uncountable word shapes (Chinese, deer, famous, ...).
static UNCOUNTABLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"pok[eé]mon$",
        r"[^aeiou]ese$",
        r"deer$",
        r"fish$",
        r"measles$",
        r"o[iu]s$",
        r"pox$",
        r"sheep$",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// Suffix rules as `(pattern, replacement)`, most specific first.
static SUFFIX_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"men$", "man"),
        (r"(eau)x?$", "${1}"),
        (r"(child)ren$", "${1}"),
        (r"(pe)(rson|ople)$", "${1}rson"),
        (r"(matr|append)ices$", "${1}ix"),
        (r"(cod|mur|sil|vert|ind)ices$", "${1}ex"),
        (r"(alumn|alg|vertebr)ae$", "${1}a"),
        (
            r"(apheli|hyperbat|periheli|asyndet|noumen|phenomen|criteri|organ|prolegomen|hedr|automat)a$",
            "${1}on",
        ),
        (
            r"(agend|addend|millenni|dat|extrem|bacteri|desiderat|strat|candelabr|errat|ov|symposi|curricul|quor)a$",
            "${1}um",
        ),
        (
            r"(alumn|syllab|vir|radi|nucle|fung|cact|stimul|termin|bacill|foc|uter|loc|strat)(?:us|i)$",
            "${1}us",
        ),
        (r"(test)(?:is|es)$", "${1}is"),
        (r"(movie|twelve|abuse|e[mn]u)s$", "${1}"),
        (
            r"(analy|diagno|parenthe|progno|synop|the|empha|cri|ne)(?:sis|ses)$",
            "${1}sis",
        ),
        (
            r"(x|ch|ss|sh|zz|tto|go|cho|alias|[^aou]us|t[lm]as|gas|(?:her|at|gr)o|[aeiou]ris)(?:es)?$",
            "${1}",
        ),
        (r"(seraph|cherub)im$", "${1}"),
        (r"\b((?:tit)?m|l)ice$", "${1}ouse"),
        (r"\b(mon|smil)ies$", "${1}ey"),
        (
            r"\b(l|(?:neck|cross|hog|aun)?t|coll|faer|food|gen|goon|group|hipp|junk|vegg|(?:pork)?p|charl|calor|cut)ies$",
            "${1}ie",
        ),
        (
            r"(dg|ss|ois|lk|ok|wn|mb|th|ch|ec|oal|is|ck|ix|sser|ts|wb)ies$",
            "${1}ie",
        ),
        (r"ies$", "y"),
        (r"(ar|(?:wo|[ae])l|[eo][ao])ves$", "${1}f"),
        (
            r"(wi|kni|(?:after|half|high|low|mid|non|night|[^\w]|^)li)ves$",
            "${1}fe",
        ),
        (r"(ss)$", "${1}"),
        (r"s$", ""),
    ]
    .into_iter()
    .map(|(p, r)| (Regex::new(p).expect("valid regex"), r))
    .collect()
});

/// The bundled [`Singularize`] implementation for English.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishInflector;

impl EnglishInflector {
    /// Singularize a lowercase word.
    pub fn singular(word: &str) -> String {
        if word.is_empty() || IRREGULAR_SINGULARS.contains(word) {
            return word.to_string();
        }
        if let Some(singular) = IRREGULAR_PLURALS.get(word) {
            return (*singular).to_string();
        }
        if UNCOUNTABLE.contains(word) || UNCOUNTABLE_PATTERNS.iter().any(|re| re.is_match(word)) {
            return word.to_string();
        }
        SUFFIX_RULES
            .iter()
            .find(|(re, _)| re.is_match(word))
            .map_or_else(
                || word.to_string(),
                |(re, replacement)| re.replace(word, *replacement).into_owned(),
            )
    }
}

impl Singularize for EnglishInflector {
    fn to_singular(&self, word: &str) -> String {
        Self::singular(&word.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_plurals() {
        assert_eq!(EnglishInflector::singular("cats"), "cat");
        assert_eq!(EnglishInflector::singular("boxes"), "box");
        assert_eq!(EnglishInflector::singular("churches"), "church");
        assert_eq!(EnglishInflector::singular("stories"), "story");
        assert_eq!(EnglishInflector::singular("wolves"), "wolf");
        assert_eq!(EnglishInflector::singular("knives"), "knife");
        assert_eq!(EnglishInflector::singular("classes"), "class");
    }

    #[test]
    fn irregular_forms() {
        assert_eq!(EnglishInflector::singular("people"), "person");
        assert_eq!(EnglishInflector::singular("children"), "child");
        assert_eq!(EnglishInflector::singular("women"), "woman");
        assert_eq!(EnglishInflector::singular("teeth"), "tooth");
        assert_eq!(EnglishInflector::singular("mice"), "mouse");
        assert_eq!(EnglishInflector::singular("those"), "that");
        assert_eq!(EnglishInflector::singular("criteria"), "criterion");
    }

    #[test]
    fn singulars_stay_put() {
        for word in ["is", "was", "this", "his", "bus", "class", "cat", "person"] {
            assert_eq!(EnglishInflector::singular(word), word, "{word}");
        }
    }

    #[test]
    fn uncountables_stay_put() {
        for word in ["sheep", "news", "series", "famous", "various", "chinese", "information"] {
            assert_eq!(EnglishInflector::singular(word), word, "{word}");
        }
    }

    #[test]
    fn trait_lowercases_input() {
        assert_eq!(EnglishInflector.to_singular("Dogs"), "dog");
        assert_eq!(EnglishInflector.to_singular(""), "");
    }
}
