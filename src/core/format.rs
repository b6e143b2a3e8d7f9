//! Display formatting helpers for statistics values

/// Thousands-grouping convention for `format_count`
///
/// A small built-in set rather than a full locale dependency; the
/// frontend picks the variant matching the active UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberLocale {
    /// Comma grouping: 1,234,567
    #[default]
    Us,
    /// Period grouping: 1.234.567
    Eu,
    /// No grouping: 1234567
    Plain,
}

impl NumberLocale {
    fn separator(self) -> Option<char> {
        match self {
            NumberLocale::Us => Some(','),
            NumberLocale::Eu => Some('.'),
            NumberLocale::Plain => None,
        }
    }
}

/// Cut text to at most `max_length` characters
///
/// Unchanged input comes back as-is; over-length input is sliced at
/// exactly `max_length` characters, right-trimmed, with "..." appended.
/// The cut is NOT word-aware and may land mid-word; the preview contract
/// depends on this exact behavior.
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_length).collect();
    format!("{}...", cut.trim_end())
}

/// Format a count with thousands separators
pub fn format_count(count: u64, locale: NumberLocale) -> String {
    let digits = count.to_string();
    match locale.separator() {
        Some(sep) => group_digits(&digits, sep),
        None => digits,
    }
}

// Helper to add thousands separators to a digit string
fn group_digits(digits: &str, separator: char) -> String {
    let chars: Vec<char> = digits.chars().rev().collect();
    let mut result = String::new();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(*ch);
    }
    result.chars().rev().collect()
}
