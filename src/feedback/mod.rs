//! # Feedback Module
//!
//! Customer feedback records tagged with a sentiment label on submission,
//! plus the queries an admin dashboard runs over them.

mod book;
mod stats;
mod types;

pub use book::FeedbackBook;
pub use stats::FeedbackStats;
pub use types::{
    AdminResponse, FeedbackPage, FeedbackQuery, FeedbackRecord, FeedbackStatus,
    FeedbackSubmission,
};

use uuid::Uuid;

/// Error types for feedback operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Please enter a valid email: {0}")]
    InvalidEmail(String),

    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i32),

    #[error("Unknown status filter: {0}")]
    UnknownStatus(String),

    #[error("Feedback not found: {0}")]
    NotFound(Uuid),
}
