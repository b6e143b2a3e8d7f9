pub mod analysis;
pub mod format;
pub mod statistics;
pub mod validation;
