//! Text normalization: punctuation stripping, lowercasing and tokenization.
//!
//! Every counter and formula sees words and sentences through these functions,
//! so they must stay consistent with each other:
//!
//! - [`split`] is the canonical word boundary (comma, space, newline, CR).
//! - [`word_tokens`] extracts word-like runs for difficulty scans.
//! - [`split_sentences`] cuts at terminal punctuation followed by a capital.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::Locale;

/// Terminal punctuation, optional closing quotes/brackets, one separator, then
/// the capital letter that opens the next sentence.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#" *[.?!]['")\]]*[ |\n][A-Z]"#).expect("valid regex"));

/// Word-like runs: ASCII word characters, `=`, and curly single quotes.
static WORD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_=\x{2018}\x{2019}]+").expect("valid regex"));

/// Whether `c` is stripped by [`remove_punctuation`].
///
/// ASCII punctuation plus the General Punctuation (U+2000..U+206F) and
/// Supplemental Punctuation (U+2E00..U+2E7F) blocks.
pub const fn is_punctuation(c: char) -> bool {
    matches!(
        c,
        '\\' | '\''
            | '!'
            | '"'
            | '#'
            | '$'
            | '%'
            | '&'
            | '('
            | ')'
            | '*'
            | '+'
            | ','
            | '-'
            | '.'
            | '/'
            | ':'
            | ';'
            | '<'
            | '='
            | '>'
            | '?'
            | '@'
            | '['
            | ']'
            | '^'
            | '_'
            | '`'
            | '{'
            | '|'
            | '}'
            | '~'
            | '\u{2000}'..='\u{206F}'
            | '\u{2E00}'..='\u{2E7F}'
    )
}

/// Delete every punctuation character. Idempotent.
pub fn remove_punctuation(text: &str) -> String {
    text.chars().filter(|&c| !is_punctuation(c)).collect()
}

/// Split on comma, space, newline and carriage return, dropping empty pieces.
///
/// Tabs and other whitespace are not delimiters.
pub fn split(text: &str) -> Vec<&str> {
    text.split([',', ' ', '\n', '\r'])
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Lowercase `text` using the rules of `locale`.
///
/// Turkic locales map `I` to dotless `ı` and `İ` to `i`; everything else uses
/// Unicode default case mapping.
pub fn lowercase(text: &str, locale: Locale) -> String {
    if !locale.is_turkic() {
        return text.to_lowercase();
    }
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            other => out.extend(other.to_lowercase()),
        }
    }
    out
}

/// Word-like tokens in order of appearance.
pub fn word_tokens(text: &str) -> Vec<&str> {
    WORD_TOKEN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Split text into raw sentences.
///
/// The break consumes the terminal punctuation and its trailing separator;
/// the capital letter that follows stays with the next sentence. Degenerate
/// pieces are kept here; [`crate::counts::sentence_count`] filters them.
/// Empty input yields a single empty sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_BREAK.find_iter(text) {
        sentences.push(&text[start..m.start()]);
        // The match ends with a single ASCII capital.
        start = m.end() - 1;
    }
    sentences.push(&text[start..]);
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_set() {
        for c in ['.', ',', '!', '?', '\'', '"', '-', '_', '=', '\\', '\u{2014}', '\u{2019}', '\u{2E3A}'] {
            assert!(is_punctuation(c), "{c:?}");
        }
        for c in ['a', 'Z', '0', ' ', '\n', '\t', 'é', '\u{00A0}'] {
            assert!(!is_punctuation(c), "{c:?}");
        }
    }

    #[test]
    fn remove_punctuation_keeps_letters_digits_whitespace() {
        assert_eq!(
            remove_punctuation("Hello, world! It's 3:45 \u{2014} ok?"),
            "Hello world Its 345  ok"
        );
        assert_eq!(remove_punctuation(""), "");
    }

    #[test]
    fn split_drops_empty_pieces() {
        assert_eq!(split("a, b,,c\r\nd  e"), vec!["a", "b", "c", "d", "e"]);
        assert!(split("").is_empty());
        assert!(split(" ,\n\r").is_empty());
    }

    #[test]
    fn split_ignores_tabs() {
        assert_eq!(split("one\ttwo three"), vec!["one\ttwo", "three"]);
    }

    #[test]
    fn lowercase_default_locale() {
        assert_eq!(lowercase("Istanbul ÉCOLE", Locale::EnUs), "istanbul école");
    }

    #[test]
    fn lowercase_turkic_dotless_i() {
        assert_eq!(lowercase("ISTANBUL", Locale::Tr), "ıstanbul");
        assert_eq!(lowercase("İzmir", Locale::Az), "izmir");
    }

    #[test]
    fn word_tokens_match_word_characters() {
        assert_eq!(
            word_tokens("Don\u{2019}t stop: a=b, snake_case 42!"),
            vec!["Don\u{2019}t", "stop", "a=b", "snake_case", "42"]
        );
        assert!(word_tokens("... !!").is_empty());
    }

    #[test]
    fn sentences_break_before_capitals() {
        let text = "The cat sat on the mat. The dog ran fast.";
        assert_eq!(
            split_sentences(text),
            vec!["The cat sat on the mat", "The dog ran fast."]
        );
    }

    #[test]
    fn sentences_need_a_capital_after_the_break() {
        assert_eq!(split_sentences("It cost 3.5 dollars. then more"), vec![
            "It cost 3.5 dollars. then more"
        ]);
    }

    #[test]
    fn sentences_swallow_closing_quotes() {
        let text = "He said \"stop.\" Then he left! Why? Because.";
        assert_eq!(
            split_sentences(text),
            vec!["He said \"stop", "Then he left", "Why", "Because."]
        );
    }

    #[test]
    fn empty_text_is_one_empty_sentence() {
        assert_eq!(split_sentences(""), vec![""]);
    }
}
