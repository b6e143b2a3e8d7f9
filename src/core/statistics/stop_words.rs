//! Fixed English stop-word set for frequency analysis
//!
//! Hand-curated list of functional/grammatical words: articles,
//! conjunctions, common pronouns, common auxiliary verbs. Normalization
//! is English-centric; no language detection is attempted for other
//! scripts.

pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "can", "this", "that", "these",
    "those", "i", "you", "he", "she", "it", "we", "they", "what", "which", "who", "when", "where",
    "why", "how", "not", "no", "yes",
];

/// Check a normalized (lowercased) token against the stop-word set
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}
