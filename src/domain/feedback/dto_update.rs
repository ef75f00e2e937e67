use serde::Deserialize;
use validator::Validate;

use super::FeedbackStatus;

/// Partial update for a feedback item.
///
/// `response` and `responded_by` only take effect together with a
/// transition to [`FeedbackStatus::Resolved`].
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFeedbackDto {
    pub status: Option<FeedbackStatus>,
    #[validate(length(min = 1, max = 2000))]
    pub response: Option<String>,
    pub responded_by: Option<String>,
}

impl UpdateFeedbackDto {
    pub fn reviewed() -> Self {
        Self {
            status: Some(FeedbackStatus::Reviewed),
            ..Self::default()
        }
    }

    pub fn resolved(response: impl Into<String>) -> Self {
        Self {
            status: Some(FeedbackStatus::Resolved),
            response: Some(response.into()),
            responded_by: None,
        }
    }
}
