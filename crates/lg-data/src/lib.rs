//! Feedback persistence and configuration for the LLM guide

pub mod config;
pub mod sources;

use lg_core::ValidationError;
use thiserror::Error;

// Re-exports
pub use config::{ConfigError, GuideConfig, Secret};
pub use sources::{FeedbackRow, FeedbackStore, DISPLAY_COLUMNS};

/// Errors that can occur while submitting or loading feedback
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Feedback store is full")]
    SequenceExhausted,
}

impl StoreError {
    /// True for failures of the durable file rather than of the input
    pub fn is_persistence(&self) -> bool {
        matches!(self, StoreError::Io(_) | StoreError::Csv(_))
    }
}

impl From<csv::Error> for StoreError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => {
                StoreError::Io(std::io::Error::new(io_err.kind(), error.to_string()))
            }
            _ => StoreError::Csv(error.to_string()),
        }
    }
}

/// Errors from the administrative bulk delete
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("No admin passphrase is configured")]
    NotConfigured,

    #[error("Incorrect admin passphrase")]
    Unauthorized,

    #[error("Please confirm that all feedback should be deleted")]
    NotConfirmed,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AdminError {
    /// True when the request was refused rather than failing on disk
    pub fn is_authorization(&self) -> bool {
        !matches!(self, AdminError::Store(_))
    }
}
