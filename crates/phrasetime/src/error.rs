//! Error types for phrase interpretation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhraseError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Unknown duration unit: {0}")]
    UnknownUnit(String),

    #[error("No recognized connector keyword in: {0}")]
    UnrecognizedMode(String),

    #[error("Failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, PhraseError>;
