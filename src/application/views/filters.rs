//! Search and filter queries for the list screens
//!
//! Each query combines a case-insensitive substring search over a few text
//! fields with optional equality filters, joined with AND. Nothing is
//! indexed; queries run over the current collection every time.

use serde::Deserialize;

use crate::domain::{
    Container, ContainerStatus, Feedback, FeedbackStatus, FeedbackType, User, UserRole,
};

/// A filter over one record type
pub trait ListQuery<T> {
    fn matches(&self, item: &T) -> bool;

    /// Matching items in their original order
    fn apply<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// `true` if any field contains `needle`, ignoring case. An empty or
/// whitespace-only needle matches everything.
pub fn matches_search(needle: &str, fields: &[&str]) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

fn matches_eq<T: PartialEq>(filter: Option<T>, value: T) -> bool {
    filter.map_or(true, |f| f == value)
}

/// User management list: name, username, email; role filter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserQuery {
    pub search: String,
    pub role: Option<UserRole>,
}

impl ListQuery<User> for UserQuery {
    fn matches(&self, user: &User) -> bool {
        matches_search(&self.search, &[user.name.as_str(), user.username.as_str(), user.email.as_str()])
            && matches_eq(self.role, user.role)
    }
}

/// Container list: code, type, location; status filter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContainerQuery {
    pub search: String,
    pub status: Option<ContainerStatus>,
}

impl ListQuery<Container> for ContainerQuery {
    fn matches(&self, container: &Container) -> bool {
        matches_search(
            &self.search,
            &[
                container.code.as_str(),
                container.container_type.as_str(),
                container.location.as_str(),
            ],
        ) && matches_eq(self.status, container.status)
    }
}

/// Feedback list: status and type filters; search over message and author
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackQuery {
    pub search: String,
    pub status: Option<FeedbackStatus>,
    pub feedback_type: Option<FeedbackType>,
}

impl ListQuery<Feedback> for FeedbackQuery {
    fn matches(&self, feedback: &Feedback) -> bool {
        matches_search(&self.search, &[feedback.message.as_str(), feedback.user_name.as_str()])
            && matches_eq(self.status, feedback.status)
            && matches_eq(self.feedback_type, feedback.feedback_type)
    }
}
