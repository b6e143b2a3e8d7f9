//! Input-length policy checks
//!
//! Run by the request handler after text extraction and before any
//! statistics or model calls. The statistics functions themselves accept
//! any string; these bounds exist to keep model cost and latency sane.

use crate::core::format::{format_count, NumberLocale};
use crate::shared::error::{AppError, AppResult};
use crate::shared::errors;

/// Shortest text worth analyzing (trimmed characters)
pub const MIN_CHARS: usize = 10;

/// Longest text accepted for analysis (characters)
pub const MAX_CHARS: usize = 50_000;

/// Validate extracted text against the analysis length policy
pub fn validate_input(text: &str) -> AppResult<()> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        log::warn!("rejected analysis input: empty text");
        return Err(AppError::Validation(errors::ERR_REQUIRED_INPUT.to_string()));
    }

    if text.chars().count() > MAX_CHARS {
        log::warn!("rejected analysis input: over {} characters", MAX_CHARS);
        return Err(AppError::Validation(errors::err_text_too_long(
            &format_count(MAX_CHARS as u64, NumberLocale::Us),
        )));
    }

    if trimmed.chars().count() < MIN_CHARS {
        log::warn!("rejected analysis input: under {} characters", MIN_CHARS);
        return Err(AppError::Validation(errors::ERR_TEXT_TOO_SHORT.to_string()));
    }

    Ok(())
}
