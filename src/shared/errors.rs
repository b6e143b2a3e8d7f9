//! Centralized user-facing error messages
//!
//! Keeps wording consistent between the validation layer and whatever
//! surface reports the failure to the user.

/// No usable input was supplied
pub const ERR_REQUIRED_INPUT: &str =
    "Invalid input: text or a valid media source is required";

/// Input shorter than the minimum analyzable length
pub const ERR_TEXT_TOO_SHORT: &str =
    "Text is too short. Please provide at least 10 characters.";

/// Model reply could not be parsed as JSON
pub const ERR_INVALID_MODEL_JSON: &str =
    "The analysis service returned invalid JSON. Please try again.";

/// Input longer than the maximum analyzable length
pub fn err_text_too_long(max_chars_formatted: &str) -> String {
    format!(
        "Text exceeds maximum length of {} characters",
        max_chars_formatted
    )
}
