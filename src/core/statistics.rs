//! Text statistics (pure logic)
//!
//! Every function here is a total, no-throw function over an arbitrary
//! string: empty, whitespace-only, and unusual Unicode inputs all degrade
//! to zero/empty results. The request handler computes these locally and
//! merges them with whatever the model returned.
//!
//! CPU-bound but fast enough for typical input sizes (the handler caps
//! input at 50,000 characters). For very large text, run in
//! `spawn_blocking`.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::shared::types::{TextStatistics, WordFrequency};

pub mod stop_words;

use self::stop_words::is_stop_word;

/// Average silent-reading speed, words per minute
pub const READING_WPM: usize = 200;

/// Average spoken-delivery speed, words per minute
pub const SPEAKING_WPM: usize = 150;

/// How many frequency entries `analyze` keeps
pub const TOP_WORDS_LIMIT: usize = 15;

/// Tokens this short carry no frequency signal
const MIN_FREQUENCY_WORD_LEN: usize = 3;

fn sentence_terminators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("sentence terminator pattern is valid"))
}

fn non_word_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s]").expect("non-word pattern is valid"))
}

/// Count whitespace-separated words
///
/// Note: unlike the frequency/unique-word path, this does NOT strip
/// punctuation, so "hello," is one word here but normalizes to "hello"
/// below. The two tokenizers are intentionally kept separate; see the
/// divergence test at the bottom of this file.
pub fn count_words(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }
    text.split_whitespace().count()
}

/// Estimated minutes to read the text silently, minimum 1
///
/// The floor is a deliberate UX choice: even an empty result card shows
/// "1 min read".
pub fn calculate_reading_time(text: &str) -> u32 {
    minutes_at(count_words(text), READING_WPM)
}

/// Estimated minutes to read the text aloud, minimum 1
pub fn calculate_speaking_time(text: &str) -> u32 {
    minutes_at(count_words(text), SPEAKING_WPM)
}

fn minutes_at(words: usize, words_per_minute: usize) -> u32 {
    let minutes = words.div_ceil(words_per_minute);
    minutes.max(1) as u32
}

/// Lowercase, strip characters that are neither word characters nor
/// whitespace, split on whitespace, drop empty tokens
fn normalized_tokens(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = non_word_chars().replace_all(&lowered, "");
    stripped
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Count distinct normalized tokens
pub fn count_unique_words(text: &str) -> usize {
    normalized_tokens(text)
        .into_iter()
        .collect::<HashSet<_>>()
        .len()
}

/// Average words per sentence, rounded to the nearest whole word
///
/// Sentences are maximal runs between `.`, `!`, `?`. Text with content
/// but no terminal punctuation counts as a single sentence.
pub fn calculate_average_sentence_length(text: &str) -> u32 {
    let sentences: Vec<&str> = sentence_terminators()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if sentences.is_empty() {
        return 0;
    }

    let total_words: usize = sentences.iter().map(|s| s.split_whitespace().count()).sum();
    (total_words as f64 / sentences.len() as f64).round() as u32
}

/// Top `limit` normalized tokens by occurrence count
///
/// Tokens of length <= 2 and stop words are excluded before counting.
/// Ordering is descending count; ties keep first-occurrence order (the
/// counts vec is built in encounter order and `sort_by` is stable), so
/// output is deterministic. A `limit` of 0 yields an empty vec.
pub fn most_frequent_words(text: &str, limit: usize) -> Vec<WordFrequency> {
    let mut entries: Vec<WordFrequency> = Vec::new();
    let mut positions: std::collections::HashMap<String, usize> = std::collections::HashMap::new();

    for token in normalized_tokens(text) {
        if token.chars().count() < MIN_FREQUENCY_WORD_LEN || is_stop_word(&token) {
            continue;
        }
        match positions.get(&token) {
            Some(&i) => entries[i].count += 1,
            None => {
                positions.insert(token.clone(), entries.len());
                entries.push(WordFrequency {
                    word: token,
                    count: 1,
                });
            }
        }
    }

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(limit);
    entries
}

/// Compute the full statistics block for one input text
pub fn analyze(text: &str) -> TextStatistics {
    TextStatistics {
        word_count: count_words(text),
        reading_time: calculate_reading_time(text),
        speaking_time: calculate_speaking_time(text),
        unique_words: count_unique_words(text),
        average_sentence_length: calculate_average_sentence_length(text),
        top_words: most_frequent_words(text, TOP_WORDS_LIMIT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words_empty() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \t\n  "), 0);
    }

    #[test]
    fn test_count_words_basic() {
        assert_eq!(count_words("hello world"), 2);
        assert_eq!(count_words("  spaced   out   tokens  "), 3);
        assert_eq!(count_words("one"), 1);
    }

    #[test]
    fn test_count_words_keeps_punctuation() {
        // whitespace tokenizer only; "hello," stays one word
        assert_eq!(count_words("hello, world!"), 2);
    }

    #[test]
    fn test_reading_time_floor() {
        assert_eq!(calculate_reading_time(""), 1);
        assert_eq!(calculate_reading_time("short text"), 1);
        assert_eq!(calculate_speaking_time(""), 1);
    }

    #[test]
    fn test_reading_time_ceil() {
        let exactly_200 = "word ".repeat(200);
        assert_eq!(calculate_reading_time(&exactly_200), 1);

        let two_hundred_one = "word ".repeat(201);
        assert_eq!(calculate_reading_time(&two_hundred_one), 2);
    }

    #[test]
    fn test_speaking_time_rate() {
        let words_300 = "word ".repeat(300);
        assert_eq!(calculate_speaking_time(&words_300), 2);
        assert_eq!(calculate_reading_time(&words_300), 2);

        let words_150 = "word ".repeat(150);
        assert_eq!(calculate_speaking_time(&words_150), 1);
    }

    #[test]
    fn test_unique_words_case_insensitive() {
        assert_eq!(count_unique_words(""), 0);
        assert_eq!(count_unique_words("the the THE"), 1);
        assert_eq!(count_unique_words("cat dog cat"), 2);
    }

    #[test]
    fn test_unique_words_strips_punctuation() {
        assert_eq!(count_unique_words("hello, hello! HELLO"), 1);
    }

    #[test]
    fn test_tokenizer_divergence() {
        // count_words splits on whitespace without stripping punctuation,
        // the unique-word path normalizes first. The orphaned "!" token
        // below counts as a word but normalizes away entirely.
        let text = "wow ! wow";
        assert_eq!(count_words(text), 3);
        assert_eq!(count_unique_words(text), 1);
    }

    #[test]
    fn test_unique_never_exceeds_word_count() {
        // stripping characters can only merge or remove tokens, never
        // create new ones
        for text in ["a b c a", "Hello hello HELLO world", "", "one two three", "wow ! wow"] {
            assert!(count_unique_words(text) <= count_words(text));
        }
    }

    #[test]
    fn test_average_sentence_length() {
        assert_eq!(calculate_average_sentence_length(""), 0);
        assert_eq!(calculate_average_sentence_length("Hi there."), 2);
        assert_eq!(
            calculate_average_sentence_length("One two three. One two three four five."),
            4
        );
    }

    #[test]
    fn test_average_sentence_length_unterminated() {
        // no terminal punctuation: the whole text is one sentence
        assert_eq!(calculate_average_sentence_length("three words here"), 3);
    }

    #[test]
    fn test_average_sentence_length_repeated_terminators() {
        // "!?" and "..." collapse into single boundaries, empty segments drop
        assert_eq!(calculate_average_sentence_length("Really?! Yes... sure."), 1);
    }

    #[test]
    fn test_most_frequent_words_ranking() {
        let result = most_frequent_words("cat dog cat bird cat dog", 2);
        assert_eq!(
            result,
            vec![
                WordFrequency {
                    word: "cat".to_string(),
                    count: 3
                },
                WordFrequency {
                    word: "dog".to_string(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn test_most_frequent_words_tie_break_is_first_occurrence() {
        let result = most_frequent_words("zebra apple zebra apple mango", 3);
        assert_eq!(result[0].word, "zebra");
        assert_eq!(result[1].word, "apple");
        assert_eq!(result[2].word, "mango");
    }

    #[test]
    fn test_most_frequent_words_filters() {
        // "the" is a stop word, "an" and "a" fail the length rule
        assert!(most_frequent_words("the a an", 5).is_empty());

        // mixed list: only the length-3+, non-stop tokens survive
        let result = most_frequent_words("the cat sat on an old mat", 10);
        let words: Vec<&str> = result.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["cat", "sat", "old", "mat"]);
    }

    #[test]
    fn test_most_frequent_words_degenerate_inputs() {
        assert!(most_frequent_words("", 5).is_empty());
        assert!(most_frequent_words("   ", 5).is_empty());
        assert!(most_frequent_words("cat dog", 0).is_empty());
    }

    #[test]
    fn test_most_frequent_words_normalizes_case_and_punctuation() {
        let result = most_frequent_words("Cat! cat? CAT.", 5);
        assert_eq!(
            result,
            vec![WordFrequency {
                word: "cat".to_string(),
                count: 3
            }]
        );
    }

    #[test]
    fn test_analyze_aggregates() {
        let stats = analyze("The quick brown fox jumps. The lazy dog sleeps.");
        assert_eq!(stats.word_count, 9);
        assert_eq!(stats.reading_time, 1);
        assert_eq!(stats.speaking_time, 1);
        assert_eq!(stats.average_sentence_length, 5); // round(9 / 2)
        assert!(stats.top_words.iter().all(|e| e.count >= 1));
        assert!(stats.top_words.len() <= TOP_WORDS_LIMIT);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let text = "Repeatable input. Same result every time!";
        assert_eq!(analyze(text), analyze(text));
        assert_eq!(
            most_frequent_words(text, 5),
            most_frequent_words(text, 5)
        );
    }

    #[test]
    fn test_unicode_input_does_not_panic() {
        let text = "héllo wörld héllo — naïve café. 日本語のテキスト!";
        let stats = analyze(text);
        assert!(stats.word_count > 0);
        assert!(stats.unique_words > 0);
    }
}
