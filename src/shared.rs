pub mod error;
pub mod errors;
pub mod types;


// Re-export for convenience
pub use error::{AppError, AppResult};
