//! Model-reply parsing and result assembly
//!
//! The model is instructed to answer with a fixed JSON object (summary,
//! key_points, explanation, reading_time_minutes, reading_level). Every
//! field is optional on the way in; assembly fills gaps with fallbacks
//! and always recomputes the statistics block locally, so a sparse or
//! sloppy model reply still produces a complete result card.

use serde::Deserialize;

use crate::core::statistics;
use crate::shared::error::{AppError, AppResult};
use crate::shared::errors;
use crate::shared::types::AnalysisResult;

pub const FALLBACK_SUMMARY: &str = "No summary available";
pub const FALLBACK_EXPLANATION: &str = "No explanation available";
pub const FALLBACK_READING_LEVEL: &str = "General audience";

/// What the model actually sent back, every field optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelReply {
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_string_vec")]
    pub key_points: Option<Vec<String>>,
    pub explanation: Option<String>,
    pub reading_time_minutes: Option<u32>,
    pub reading_level: Option<String>,
}

/// Accept `key_points` only when it is actually an array
///
/// Models sometimes answer with a prose string or null here; a
/// wrong-typed field degrades to `None` (and so to an empty list on
/// assembly) instead of failing the whole reply. Non-string elements
/// inside an array are skipped.
fn lenient_string_vec<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

/// Parse the raw model output as a `ModelReply`
///
/// Unknown fields are ignored and wrong-typed optional fields degrade
/// per-field; only a reply that is not valid JSON at all is an analysis
/// failure the caller reports to the user.
pub fn parse_model_reply(raw: &str) -> AppResult<ModelReply> {
    serde_json::from_str(raw).map_err(|err| {
        log::warn!("model reply was not valid JSON: {}", err);
        AppError::Analysis(errors::ERR_INVALID_MODEL_JSON.to_string())
    })
}

/// Merge the model reply with locally computed statistics
pub fn build_analysis_result(text: &str, reply: ModelReply) -> AnalysisResult {
    let stats = statistics::analyze(text);

    AnalysisResult {
        summary: reply
            .summary
            .unwrap_or_else(|| FALLBACK_SUMMARY.to_string()),
        key_points: reply.key_points.unwrap_or_default(),
        explanation: reply
            .explanation
            .unwrap_or_else(|| FALLBACK_EXPLANATION.to_string()),
        reading_time: reply.reading_time_minutes.unwrap_or(stats.reading_time),
        word_count: stats.word_count,
        reading_level: reply
            .reading_level
            .unwrap_or_else(|| FALLBACK_READING_LEVEL.to_string()),
        speaking_time: stats.speaking_time,
        unique_words: stats.unique_words,
        average_sentence_length: stats.average_sentence_length,
        top_words: stats.top_words,
    }
}
