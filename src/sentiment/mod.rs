//! # Sentiment Module
//!
//! Lexicon tables and the rule-based classifier used to tag feedback.

mod classifier;
mod lexicon;

pub use classifier::{
    rating_bias, Classification, ClassificationInput, DecisionStage, ParseLabelError,
    SentimentClassifier, SentimentLabel, WeightedScore,
};
pub use lexicon::{Lexicon, LexiconError};
