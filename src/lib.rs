//! # Feedback Sentiment
//!
//! Rule-based sentiment tagging for storefront customer feedback.
//!
//! ## Modules
//!
//! - `sentiment` - Keyword and emoji lexicon, three-way classifier
//! - `feedback` - Feedback submissions, admin replies and dashboard stats
//! - `utils` - Configuration loading
//!
//! ## Example Usage
//!
//! ```
//! use feedback_sentiment::{SentimentClassifier, SentimentLabel};
//!
//! let classifier = SentimentClassifier::default();
//!
//! assert_eq!(classifier.classify(Some("good"), 5), SentimentLabel::Positive);
//! assert_eq!(classifier.classify(Some("good bad"), 3), SentimentLabel::Neutral);
//! assert_eq!(classifier.classify(None, 1), SentimentLabel::Neutral);
//! ```

pub mod feedback;
pub mod sentiment;
pub mod utils;

// Re-exports for convenience
pub use feedback::{
    AdminResponse, FeedbackBook, FeedbackError, FeedbackPage, FeedbackQuery, FeedbackRecord,
    FeedbackStats, FeedbackStatus, FeedbackSubmission,
};
pub use sentiment::{
    Classification, ClassificationInput, DecisionStage, Lexicon, LexiconError, SentimentClassifier,
    SentimentLabel,
};
pub use utils::{load_config, save_config, AppConfig, ConfigError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration values
pub mod defaults {
    /// Ratings at or above this add +1 to the weighted score
    pub const HIGH_RATING: i32 = 4;

    /// Ratings at or below this add -1 to the weighted score
    pub const LOW_RATING: i32 = 2;

    /// Weighted scores above this are positive
    pub const POSITIVE_SCORE_THRESHOLD: i64 = 1;

    /// Weighted scores below this are negative
    pub const NEGATIVE_SCORE_THRESHOLD: i64 = -1;

    /// Lowest rating a submission may carry
    pub const MIN_RATING: i32 = 1;

    /// Highest rating a submission may carry
    pub const MAX_RATING: i32 = 5;

    /// Texts up to this many UTF-16 code units get a neutral preview
    pub const PREVIEW_MIN_LENGTH: usize = 10;

    /// Admin listing page size
    pub const PAGE_LIMIT: usize = 10;
}
