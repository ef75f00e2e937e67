//! Feedback aggregate

pub mod model;

mod dto_create;
mod dto_update;

pub use model::{Feedback, FeedbackStatus, FeedbackType};

pub use dto_create::CreateFeedbackDto;
pub use dto_update::UpdateFeedbackDto;
