//! Feedback domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackType {
    General,
    Complaint,
    Suggestion,
}

impl Default for FeedbackType {
    fn default() -> Self {
        Self::General
    }
}

impl FeedbackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Complaint => "complaint",
            Self::Suggestion => "suggestion",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "general" => Some(Self::General),
            "complaint" => Some(Self::Complaint),
            "suggestion" => Some(Self::Suggestion),
            _ => None,
        }
    }
}

/// Review state of a feedback item.
///
/// Ordered: a feedback only ever moves forward, `Pending -> Reviewed ->
/// Resolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStatus {
    Pending,
    Reviewed,
    Resolved,
}

impl Default for FeedbackStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl FeedbackStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
            Self::Resolved => "resolved",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "reviewed" => Some(Self::Reviewed),
            "resolved" => Some(Self::Resolved),
            _ => None,
        }
    }

    /// Whether moving from `self` to `next` is allowed.
    pub fn can_transition_to(&self, next: FeedbackStatus) -> bool {
        next > *self
    }
}

/// Message submitted by a user, optionally about a container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub user_id: String,
    /// Display name of the author at submission time
    pub user_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,
    pub message: String,
    #[serde(rename = "type")]
    pub feedback_type: FeedbackType,
    pub status: FeedbackStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responded_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responded_at: Option<DateTime<Utc>>,
}

impl Feedback {
    pub fn is_resolved(&self) -> bool {
        self.status == FeedbackStatus::Resolved
    }
}
