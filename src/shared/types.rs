use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One entry of the word-frequency ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// Descriptive statistics computed locally from the input text
///
/// Times are whole minutes. Serialized camelCase to match the frontend
/// result-card contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct TextStatistics {
    pub word_count: usize,
    pub reading_time: u32,
    pub speaking_time: u32,
    pub unique_words: usize,
    pub average_sentence_length: u32,
    pub top_words: Vec<WordFrequency>,
}

/// Combined analysis result: model-generated fields merged with the
/// locally computed statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct AnalysisResult {
    pub summary: String,
    pub key_points: Vec<String>,
    pub explanation: String,
    pub reading_time: u32,
    pub word_count: usize,
    pub reading_level: String,
    pub speaking_time: u32,
    pub unique_words: usize,
    pub average_sentence_length: u32,
    pub top_words: Vec<WordFrequency>,
}
