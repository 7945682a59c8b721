// Module exports for models

use chrono::NaiveDateTime;
use thiserror::Error;

pub mod calendar_block;
pub mod settings;
pub mod task;

/// Validation failures for model values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("identifier cannot be empty")]
    EmptyId,
    #[error("title cannot be empty")]
    EmptyTitle,
    #[error("end time {end} must be after start time {start}")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}
