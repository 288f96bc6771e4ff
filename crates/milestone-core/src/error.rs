//! Error types for milestone-core parsing surfaces.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MilestoneError {
    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}

pub type Result<T> = std::result::Result<T, MilestoneError>;
