//! Feedback data types

use super::FeedbackError;
use crate::defaults;
use crate::sentiment::SentimentLabel;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use uuid::Uuid;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

/// Review state of a feedback record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    #[default]
    Pending,
    Reviewed,
    Replied,
    Resolved,
}

impl FeedbackStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackStatus::Pending => "pending",
            FeedbackStatus::Reviewed => "reviewed",
            FeedbackStatus::Replied => "replied",
            FeedbackStatus::Resolved => "resolved",
        }
    }

    /// Parse a status filter
    ///
    /// `"all"` or a blank value means no filter. Any other value must name a
    /// status.
    pub fn parse_filter(s: &str) -> Result<Option<Self>, FeedbackError> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(None),
            "pending" => Ok(Some(FeedbackStatus::Pending)),
            "reviewed" => Ok(Some(FeedbackStatus::Reviewed)),
            "replied" => Ok(Some(FeedbackStatus::Replied)),
            "resolved" => Ok(Some(FeedbackStatus::Resolved)),
            _ => Err(FeedbackError::UnknownStatus(s.to_string())),
        }
    }
}

/// Feedback as submitted through the public form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub rating: i32,
    /// Account id when the customer was signed in
    #[serde(default)]
    pub user: Option<String>,
}

impl FeedbackSubmission {
    /// Trim text fields and check them
    pub fn validate(self) -> Result<Self, FeedbackError> {
        let name = required(self.name, "name")?;
        let email = required(self.email, "email")?;
        let subject = required(self.subject, "subject")?;
        let message = required(self.message, "message")?;

        if !email_regex().is_match(&email) {
            return Err(FeedbackError::InvalidEmail(email));
        }
        if !(defaults::MIN_RATING..=defaults::MAX_RATING).contains(&self.rating) {
            return Err(FeedbackError::RatingOutOfRange(self.rating));
        }

        Ok(Self {
            name,
            email,
            subject,
            message,
            rating: self.rating,
            user: self.user,
        })
    }
}

fn required(value: String, field: &'static str) -> Result<String, FeedbackError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FeedbackError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Reply written by an administrator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminResponse {
    pub message: String,
    pub responded_at: DateTime<Utc>,
    /// Administrator who replied
    pub responded_by: String,
}

/// Stored feedback record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub rating: i32,
    pub sentiment: SentimentLabel,
    pub status: FeedbackStatus,
    pub highlighted: bool,
    pub admin_response: Option<AdminResponse>,
    pub user: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Build a pending record from a validated submission
    pub(crate) fn from_submission(submission: FeedbackSubmission, sentiment: SentimentLabel) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: submission.name,
            email: submission.email,
            subject: submission.subject,
            message: submission.message,
            rating: submission.rating,
            sentiment,
            status: FeedbackStatus::Pending,
            highlighted: false,
            admin_response: None,
            user: submission.user,
            created_at: now,
            updated_at: now,
        }
    }

    /// Case-insensitive match against name, email, subject and message
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Admin listing query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackQuery {
    /// 1-based page number
    pub page: usize,
    /// Records per page
    pub limit: usize,
    /// Only records in this state
    pub status: Option<FeedbackStatus>,
    /// Free-text search
    pub search: Option<String>,
}

impl Default for FeedbackQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: defaults::PAGE_LIMIT,
            status: None,
            search: None,
        }
    }
}

impl FeedbackQuery {
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_status(mut self, status: FeedbackStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// One page of the admin listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackPage {
    pub feedback: Vec<FeedbackRecord>,
    pub total_pages: usize,
    pub current_page: usize,
    /// Matching records across all pages
    pub total: usize,
}
