use serde::Deserialize;
use validator::Validate;

use super::FeedbackType;

/// New feedback. Always starts out pending.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFeedbackDto {
    pub user_id: String,
    pub user_name: String,
    pub container_id: Option<String>,
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
    pub feedback_type: FeedbackType,
}
