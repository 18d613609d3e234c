//! Feedback dashboard statistics

use super::types::{FeedbackRecord, FeedbackStatus};
use crate::sentiment::SentimentLabel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counts shown on the feedback dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackStats {
    pub total: usize,
    pub pending: usize,
    pub reviewed: usize,
    pub replied: usize,
    pub resolved: usize,
    /// Records per rating, ascending
    pub rating_stats: BTreeMap<i32, usize>,
    /// Records per sentiment label
    pub sentiment_stats: BTreeMap<SentimentLabel, usize>,
}

impl FeedbackStats {
    /// Aggregate in a single pass
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a FeedbackRecord>) -> Self {
        let mut stats = Self::default();

        for record in records {
            stats.total += 1;
            match record.status {
                FeedbackStatus::Pending => stats.pending += 1,
                FeedbackStatus::Reviewed => stats.reviewed += 1,
                FeedbackStatus::Replied => stats.replied += 1,
                FeedbackStatus::Resolved => stats.resolved += 1,
            }
            *stats.rating_stats.entry(record.rating).or_insert(0) += 1;
            *stats.sentiment_stats.entry(record.sentiment).or_insert(0) += 1;
        }

        stats
    }

    /// Count for a sentiment label
    pub fn sentiment_count(&self, label: SentimentLabel) -> usize {
        self.sentiment_stats.get(&label).copied().unwrap_or(0)
    }

    /// Share of records tagged `label`, 0 when there are none
    pub fn sentiment_share(&self, label: SentimentLabel) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.sentiment_count(label) as f64 / self.total as f64
        }
    }

    /// Mean star rating
    pub fn average_rating(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        let sum: i64 = self
            .rating_stats
            .iter()
            .map(|(rating, count)| *rating as i64 * *count as i64)
            .sum();
        Some(sum as f64 / self.total as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::FeedbackSubmission;

    fn record(rating: i32, sentiment: SentimentLabel, status: FeedbackStatus) -> FeedbackRecord {
        let submission = FeedbackSubmission {
            name: "Alex".to_string(),
            email: "alex@example.com".to_string(),
            subject: "Order".to_string(),
            message: "Arrived".to_string(),
            rating,
            user: None,
        };
        let mut record = FeedbackRecord::from_submission(submission, sentiment);
        record.status = status;
        record
    }

    #[test]
    fn test_empty_stats() {
        let stats = FeedbackStats::from_records(std::iter::empty());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_rating(), None);
        assert_eq!(stats.sentiment_share(SentimentLabel::Positive), 0.0);
    }

    #[test]
    fn test_counts() {
        let records = vec![
            record(5, SentimentLabel::Positive, FeedbackStatus::Pending),
            record(4, SentimentLabel::Positive, FeedbackStatus::Replied),
            record(1, SentimentLabel::Negative, FeedbackStatus::Pending),
            record(3, SentimentLabel::Neutral, FeedbackStatus::Resolved),
        ];
        let stats = FeedbackStats::from_records(&records);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.replied, 1);
        assert_eq!(stats.resolved, 1);
        assert_eq!(stats.reviewed, 0);
        assert_eq!(
            stats.rating_stats.keys().copied().collect::<Vec<_>>(),
            vec![1, 3, 4, 5]
        );
        assert_eq!(stats.sentiment_count(SentimentLabel::Positive), 2);
        assert!((stats.sentiment_share(SentimentLabel::Negative) - 0.25).abs() < 1e-9);
        assert!((stats.average_rating().unwrap() - 3.25).abs() < 1e-9);
    }
}
