//! In-memory feedback book

use super::stats::FeedbackStats;
use super::types::{
    AdminResponse, FeedbackPage, FeedbackQuery, FeedbackRecord, FeedbackStatus,
    FeedbackSubmission,
};
use super::FeedbackError;
use crate::sentiment::SentimentClassifier;
use chrono::Utc;
use uuid::Uuid;

/// Feedback records in submission order, tagged with a sentiment label
#[derive(Debug, Clone, Default)]
pub struct FeedbackBook {
    classifier: SentimentClassifier,
    records: Vec<FeedbackRecord>,
}

impl FeedbackBook {
    pub fn new(classifier: SentimentClassifier) -> Self {
        Self {
            classifier,
            records: Vec::new(),
        }
    }

    pub fn classifier(&self) -> &SentimentClassifier {
        &self.classifier
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in submission order
    pub fn records(&self) -> &[FeedbackRecord] {
        &self.records
    }

    /// Validate, tag and store a submission
    pub fn submit(&mut self, submission: FeedbackSubmission) -> Result<FeedbackRecord, FeedbackError> {
        let submission = submission.validate()?;
        let sentiment = self
            .classifier
            .classify(Some(submission.message.as_str()), submission.rating);

        let record = FeedbackRecord::from_submission(submission, sentiment);
        tracing::debug!(id = %record.id, rating = record.rating, sentiment = %sentiment, "feedback submitted");

        self.records.push(record.clone());
        Ok(record)
    }

    pub fn get(&self, id: Uuid) -> Option<&FeedbackRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    fn get_mut(&mut self, id: Uuid) -> Result<&mut FeedbackRecord, FeedbackError> {
        self.records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(FeedbackError::NotFound(id))
    }

    /// Filter, sort newest first and paginate
    pub fn list(&self, query: &FeedbackQuery) -> FeedbackPage {
        let page = query.page.max(1);
        let limit = query.limit.max(1);
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let mut matching: Vec<&FeedbackRecord> = self
            .records
            .iter()
            .rev()
            .filter(|r| query.status.map_or(true, |status| r.status == status))
            .filter(|r| search.map_or(true, |needle| r.matches_search(needle)))
            .collect();
        // stable: equal timestamps keep newest-submitted first
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matching.len();
        let feedback = matching
            .into_iter()
            .skip((page - 1).saturating_mul(limit))
            .take(limit)
            .cloned()
            .collect();

        FeedbackPage {
            feedback,
            total_pages: total.div_ceil(limit),
            current_page: page,
            total,
        }
    }

    /// Attach an admin reply and mark the record replied
    pub fn respond(
        &mut self,
        id: Uuid,
        message: &str,
        responder: &str,
    ) -> Result<&FeedbackRecord, FeedbackError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(FeedbackError::MissingField("message"));
        }

        let record = self.get_mut(id)?;
        let now = Utc::now();
        record.admin_response = Some(AdminResponse {
            message: message.to_string(),
            responded_at: now,
            responded_by: responder.to_string(),
        });
        record.status = FeedbackStatus::Replied;
        record.updated_at = now;

        tracing::debug!(%id, responder, "feedback replied");
        Ok(&*record)
    }

    pub fn set_status(
        &mut self,
        id: Uuid,
        status: FeedbackStatus,
    ) -> Result<&FeedbackRecord, FeedbackError> {
        let record = self.get_mut(id)?;
        record.status = status;
        record.updated_at = Utc::now();
        Ok(&*record)
    }

    /// Flip the highlighted flag
    pub fn toggle_highlight(&mut self, id: Uuid) -> Result<&FeedbackRecord, FeedbackError> {
        let record = self.get_mut(id)?;
        record.highlighted = !record.highlighted;
        record.updated_at = Utc::now();
        Ok(&*record)
    }

    pub fn delete(&mut self, id: Uuid) -> Result<FeedbackRecord, FeedbackError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(FeedbackError::NotFound(id))?;

        tracing::debug!(%id, "feedback deleted");
        Ok(self.records.remove(index))
    }

    pub fn stats(&self) -> FeedbackStats {
        FeedbackStats::from_records(&self.records)
    }
}
