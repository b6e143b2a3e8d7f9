pub mod core;
pub mod shared;

// Re-export the analysis surface the request handler calls into
pub use crate::core::analysis::{build_analysis_result, parse_model_reply, ModelReply};
pub use crate::core::format::{format_count, truncate_text, NumberLocale};
pub use crate::core::statistics;
pub use crate::core::validation::validate_input;
pub use crate::shared::error::{AppError, AppResult};
pub use crate::shared::types::{AnalysisResult, TextStatistics, WordFrequency};
