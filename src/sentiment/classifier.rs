//! # Sentiment Classifier
//!
//! Maps a feedback comment and its star rating to a three-way sentiment label.
//!
//! Classification runs in stages and the first stage that decides wins:
//!
//! 1. Emoji (optional): any positive emoji, then any negative emoji
//! 2. Absent text: `neutral`
//! 3. Strong words: any strong-positive word, then any strong-negative word
//! 4. Weighted path: `(positive entries - negative entries) + rating bias`,
//!    `positive` above 1, `negative` below -1, `neutral` otherwise
//!
//! All lookups are case-insensitive substring containment, so `"badge"`
//! counts as a match for `"bad"`.

use super::lexicon::{contains_any, matching, Lexicon, LexiconError};
use crate::defaults;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentiment label stored alongside a feedback record
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// All labels, positive first
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown sentiment label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sentiment label: {0}")]
pub struct ParseLabelError(pub String);

impl FromStr for SentimentLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(SentimentLabel::Positive),
            "neutral" => Ok(SentimentLabel::Neutral),
            "negative" => Ok(SentimentLabel::Negative),
            _ => Err(ParseLabelError(s.to_string())),
        }
    }
}

/// Text and rating as received from a feedback form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationInput {
    /// Free-text comment, absent when the form left it out
    #[serde(default)]
    pub text: Option<String>,
    /// Satisfaction rating, nominally 1 to 5
    pub rating: i32,
}

impl ClassificationInput {
    pub fn new(text: impl Into<String>, rating: i32) -> Self {
        Self {
            text: Some(text.into()),
            rating,
        }
    }
}

/// Stage that decided a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStage {
    /// No text to look at
    Absent,
    PositiveEmoji,
    NegativeEmoji,
    StrongPositive,
    StrongNegative,
    /// Entry counts combined with the rating bias
    Weighted,
}

/// Evidence gathered on the weighted path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedScore {
    /// Positive entries found in the text
    pub positive_matches: Vec<String>,
    /// Negative entries found in the text
    pub negative_matches: Vec<String>,
    /// Rating adjustment (+1, 0 or -1)
    pub rating_bias: i64,
    /// `positive - negative + rating_bias`
    pub score: i64,
}

/// Classification result with the evidence behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub label: SentimentLabel,
    pub stage: DecisionStage,
    /// Present only when the weighted path ran
    pub weighted: Option<WeightedScore>,
}

impl Classification {
    fn decided(label: SentimentLabel, stage: DecisionStage) -> Self {
        Self {
            label,
            stage,
            weighted: None,
        }
    }
}

/// Rating adjustment applied on the weighted path
pub fn rating_bias(rating: i32) -> i64 {
    if rating >= defaults::HIGH_RATING {
        1
    } else if rating <= defaults::LOW_RATING {
        -1
    } else {
        0
    }
}

/// Rule-based feedback sentiment classifier
///
/// Holds an immutable lexicon; classification is a pure function of its
/// arguments, so one instance can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    lexicon: Lexicon,
    emoji_aware: bool,
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self {
            lexicon: Lexicon::new(),
            emoji_aware: true,
        }
    }
}

impl SentimentClassifier {
    /// Create a classifier from a custom lexicon
    pub fn new(lexicon: Lexicon) -> Result<Self, LexiconError> {
        lexicon.validate()?;
        Ok(Self {
            lexicon: lexicon.normalized(),
            emoji_aware: true,
        })
    }

    /// Enable or disable the emoji stage for [`classify`](Self::classify)
    pub fn with_emoji(mut self, emoji_aware: bool) -> Self {
        self.emoji_aware = emoji_aware;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn is_emoji_aware(&self) -> bool {
        self.emoji_aware
    }

    /// Classify a comment and rating
    pub fn classify(&self, text: Option<&str>, rating: i32) -> SentimentLabel {
        self.explain(text, rating).label
    }

    /// Classify without the emoji stage
    pub fn classify_text(&self, text: Option<&str>, rating: i32) -> SentimentLabel {
        self.run(text, rating, false).label
    }

    /// Classify with the emoji stage
    pub fn classify_with_emoji(&self, text: Option<&str>, rating: i32) -> SentimentLabel {
        self.run(text, rating, true).label
    }

    pub fn classify_input(&self, input: &ClassificationInput) -> SentimentLabel {
        self.classify(input.text.as_deref(), input.rating)
    }

    /// Classify and report which stage decided
    pub fn explain(&self, text: Option<&str>, rating: i32) -> Classification {
        self.run(text, rating, self.emoji_aware)
    }

    fn run(&self, text: Option<&str>, rating: i32, emoji: bool) -> Classification {
        let result = self.decide(text, rating, emoji);
        tracing::trace!(stage = ?result.stage, label = %result.label, "classified feedback");
        result
    }

    fn decide(&self, text: Option<&str>, rating: i32, emoji: bool) -> Classification {
        let text = match text {
            Some(t) if !t.is_empty() => t.to_lowercase(),
            _ => return Classification::decided(SentimentLabel::Neutral, DecisionStage::Absent),
        };
        let lexicon = &self.lexicon;

        if emoji {
            if contains_any(&text, &lexicon.positive_emojis) {
                return Classification::decided(
                    SentimentLabel::Positive,
                    DecisionStage::PositiveEmoji,
                );
            }
            if contains_any(&text, &lexicon.negative_emojis) {
                return Classification::decided(
                    SentimentLabel::Negative,
                    DecisionStage::NegativeEmoji,
                );
            }
        }

        if contains_any(&text, &lexicon.strong_positive) {
            return Classification::decided(SentimentLabel::Positive, DecisionStage::StrongPositive);
        }
        if contains_any(&text, &lexicon.strong_negative) {
            return Classification::decided(SentimentLabel::Negative, DecisionStage::StrongNegative);
        }

        let positive_matches = matching(&text, &lexicon.positive);
        let negative_matches = matching(&text, &lexicon.negative);
        let bias = rating_bias(rating);
        let score = positive_matches.len() as i64 - negative_matches.len() as i64 + bias;

        let label = if score > defaults::POSITIVE_SCORE_THRESHOLD {
            SentimentLabel::Positive
        } else if score < defaults::NEGATIVE_SCORE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };

        Classification {
            label,
            stage: DecisionStage::Weighted,
            weighted: Some(WeightedScore {
                positive_matches,
                negative_matches,
                rating_bias: bias,
                score,
            }),
        }
    }

    /// Quick label shown while a comment is still being typed
    ///
    /// Compares how many preview entries of each side the text contains.
    /// Length is measured in UTF-16 code units, the way browser form fields
    /// report it, and short texts stay `neutral`.
    pub fn preview(&self, text: &str) -> SentimentLabel {
        if text.encode_utf16().count() <= defaults::PREVIEW_MIN_LENGTH {
            return SentimentLabel::Neutral;
        }
        let text = text.to_lowercase();
        let positive = matching(&text, &self.lexicon.preview_positive).len();
        let negative = matching(&text, &self.lexicon.preview_negative).len();

        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => SentimentLabel::Positive,
            std::cmp::Ordering::Less => SentimentLabel::Negative,
            std::cmp::Ordering::Equal => SentimentLabel::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> SentimentClassifier {
        SentimentClassifier::default()
    }

    #[test]
    fn test_absent_text_is_neutral() {
        let c = classifier();
        for rating in [-3, 1, 3, 5, 42] {
            assert_eq!(c.classify(None, rating), SentimentLabel::Neutral);
            assert_eq!(c.classify(Some(""), rating), SentimentLabel::Neutral);
        }
        assert_eq!(c.explain(None, 5).stage, DecisionStage::Absent);
    }

    #[test]
    fn test_strong_positive_checked_first() {
        let c = classifier();
        assert_eq!(c.classify(Some("terrible but amazing"), 1), SentimentLabel::Positive);
        assert_eq!(
            c.explain(Some("terrible but amazing"), 1).stage,
            DecisionStage::StrongPositive
        );
    }

    #[test]
    fn test_strong_word_overrides_weak_words() {
        let c = classifier();
        let text = "good great nice awesome but broken";
        assert_eq!(c.classify(Some(text), 5), SentimentLabel::Negative);
    }

    #[test]
    fn test_weighted_path() {
        let c = classifier();
        assert_eq!(c.classify(Some("it was okay I guess"), 3), SentimentLabel::Neutral);
        assert_eq!(c.classify(Some("good"), 5), SentimentLabel::Positive);
        assert_eq!(c.classify(Some("bad"), 1), SentimentLabel::Negative);
        assert_eq!(c.classify(Some("good bad"), 3), SentimentLabel::Neutral);
    }

    #[test]
    fn test_neutral_band_is_closed() {
        let c = classifier();
        // score 1
        assert_eq!(c.classify(Some("good"), 3), SentimentLabel::Neutral);
        // score -1
        assert_eq!(c.classify(Some("bad"), 3), SentimentLabel::Neutral);
        // score 2
        assert_eq!(c.classify(Some("good and nice"), 3), SentimentLabel::Positive);
    }

    #[test]
    fn test_weighted_evidence() {
        let c = classifier();
        let result = c.explain(Some("Good shoes, nice laces, one issue"), 4);
        let weighted = result.weighted.expect("weighted path");

        assert_eq!(weighted.positive_matches, vec!["good", "nice"]);
        assert_eq!(weighted.negative_matches, vec!["issue"]);
        assert_eq!(weighted.rating_bias, 1);
        assert_eq!(weighted.score, 2);
        assert_eq!(result.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_substring_containment() {
        let c = classifier();
        let weighted = c.explain(Some("nice badge"), 3).weighted.unwrap();
        assert_eq!(weighted.negative_matches, vec!["bad"]);
        assert_eq!(weighted.score, 0);
    }

    #[test]
    fn test_repeated_word_counts_once() {
        let c = classifier();
        assert_eq!(c.classify(Some("good good good"), 3), SentimentLabel::Neutral);
    }

    #[test]
    fn test_case_insensitive() {
        let c = classifier();
        assert_eq!(c.classify(Some("AMAZING"), 1), SentimentLabel::Positive);
        assert_eq!(c.classify(Some("Horrible"), 5), SentimentLabel::Negative);
    }

    #[test]
    fn test_emoji_stage() {
        let c = classifier();
        assert_eq!(c.classify(Some("\u{1F60A} terrible"), 1), SentimentLabel::Positive);
        assert_eq!(c.classify(Some("amazing \u{1F621}"), 5), SentimentLabel::Negative);
        assert_eq!(
            c.classify(Some("\u{1F44E} then \u{1F44D}"), 3),
            SentimentLabel::Positive
        );
    }

    #[test]
    fn test_plain_variant_ignores_emoji() {
        let c = classifier();
        assert_eq!(c.classify_text(Some("\u{1F60A} terrible"), 1), SentimentLabel::Negative);

        let plain = classifier().with_emoji(false);
        assert_eq!(plain.classify(Some("\u{1F60A} terrible"), 1), SentimentLabel::Negative);
        assert_eq!(
            plain.classify_with_emoji(Some("\u{1F60A} terrible"), 1),
            SentimentLabel::Positive
        );
    }

    #[test]
    fn test_rating_bias_thresholds() {
        assert_eq!(rating_bias(5), 1);
        assert_eq!(rating_bias(4), 1);
        assert_eq!(rating_bias(3), 0);
        assert_eq!(rating_bias(2), -1);
        assert_eq!(rating_bias(1), -1);
        assert_eq!(rating_bias(0), -1);
        assert_eq!(rating_bias(99), 1);
    }

    #[test]
    fn test_degenerate_text_is_neutral() {
        let c = classifier();
        for text in ["   ", "!!!", "...?", "\n\t"] {
            for rating in 1..=5 {
                assert_eq!(c.classify(Some(text), rating), SentimentLabel::Neutral);
            }
        }
    }

    #[test]
    fn test_custom_lexicon_is_normalized() {
        let mut lexicon = Lexicon::empty();
        lexicon.strong_positive.push("Comfy".to_string());
        let c = SentimentClassifier::new(lexicon).unwrap();
        assert_eq!(c.classify(Some("so COMFY"), 1), SentimentLabel::Positive);
    }

    #[test]
    fn test_custom_lexicon_rejects_empty_entry() {
        let mut lexicon = Lexicon::new();
        lexicon.positive_emojis.push(String::new());
        assert!(SentimentClassifier::new(lexicon).is_err());
    }

    #[test]
    fn test_preview() {
        let c = classifier();
        assert_eq!(c.preview("great!"), SentimentLabel::Neutral);
        assert_eq!(c.preview("great fit, love the colour"), SentimentLabel::Positive);
        assert_eq!(c.preview("terrible stitching, bad"), SentimentLabel::Negative);
        assert_eq!(c.preview("good shoes, bad laces"), SentimentLabel::Neutral);
    }

    #[test]
    fn test_preview_uses_its_own_word_lists() {
        let c = classifier();
        // words only in the classification lexicon do not move the preview
        assert_eq!(c.preview("nice and satisfied customer"), SentimentLabel::Neutral);
        assert_eq!(c.preview("worst purchase, useless"), SentimentLabel::Neutral);
        assert_eq!(c.preview("outstanding, superb kit"), SentimentLabel::Neutral);
        assert_eq!(c.preview("great but worst zip"), SentimentLabel::Positive);
    }

    #[test]
    fn test_preview_length_counts_utf16_units() {
        let c = classifier();
        // 4 emoji are 8 UTF-16 units, plus "good" makes 12
        let text = "good\u{1F600}\u{1F600}\u{1F600}\u{1F600}";
        assert_eq!(text.chars().count(), 8);
        assert_eq!(c.preview(text), SentimentLabel::Positive);

        // 10 units exactly stays neutral
        assert_eq!(c.preview("good shoes"), SentimentLabel::Neutral);
        assert_eq!(c.preview("good shoes!"), SentimentLabel::Positive);
    }

    #[test]
    fn test_label_strings() {
        assert_eq!(SentimentLabel::Positive.to_string(), "positive");
        assert_eq!("NEGATIVE".parse::<SentimentLabel>(), Ok(SentimentLabel::Negative));
        assert!("meh".parse::<SentimentLabel>().is_err());
        assert_eq!(
            serde_json::to_string(&SentimentLabel::Neutral).unwrap(),
            "\"neutral\""
        );
        assert_eq!(SentimentLabel::default(), SentimentLabel::Neutral);
    }

    #[test]
    fn test_input_deserializes_without_text() {
        let input: ClassificationInput = serde_json::from_str(r#"{"rating": 5}"#).unwrap();
        assert_eq!(input.text, None);
        assert_eq!(classifier().classify_input(&input), SentimentLabel::Neutral);
    }
}
